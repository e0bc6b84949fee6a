//! The resize workflow: one request in, one file out.
//!
//! A run reads the source, resamples it on the blocking pool, writes
//! `resized_<name>` into the fixed output directory and then tells the
//! requesting window it is done. Failures never propagate out of
//! [`ResizeWorkflow::handle`]; they are logged and, depending on the
//! configured [`FailureMode`], reported to the window.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::core::{FailureMode, ResizeOutcome, ResizeRequest, ResizerConfig};
use crate::processing::dimensions;
use crate::processing::Resampler;
use crate::utils::{self, Axis, ResizeError, ResizeResult};

/// Receives the outcome of a run. Implemented by the window that submitted it.
pub trait ResizeNotifier: Send + Sync {
    /// Called exactly once after a successful run.
    fn resize_complete(&self);

    /// Called after a failed run, only in [`FailureMode::Notify`].
    fn resize_failed(&self, error: &ResizeError);
}

/// Opens a directory in the platform file browser.
pub trait FolderRevealer: Send + Sync {
    fn reveal(&self, dir: &Path) -> ResizeResult<()>;
}

/// Orchestrates coercion, resampling and persistence for resize requests.
pub struct ResizeWorkflow {
    config: ResizerConfig,
    resampler: Arc<dyn Resampler>,
    revealer: Arc<dyn FolderRevealer>,
}

impl ResizeWorkflow {
    pub fn new(
        config: ResizerConfig,
        resampler: Arc<dyn Resampler>,
        revealer: Arc<dyn FolderRevealer>,
    ) -> Self {
        Self {
            config,
            resampler,
            revealer,
        }
    }

    /// Directory every output is written to.
    pub fn destination_dir(&self) -> PathBuf {
        self.config.destination_dir()
    }

    /// Runs `request` and reports to `notifier`. Never fails.
    pub async fn handle(&self, request: ResizeRequest, notifier: &dyn ResizeNotifier) {
        match self.execute(&request).await {
            Ok(outcome) => {
                info!(
                    "Resized {} to {}x{} -> {} ({} bytes)",
                    request.img_path.display(),
                    outcome.width,
                    outcome.height,
                    outcome.output_path.display(),
                    outcome.bytes_written
                );
                notifier.resize_complete();

                if let Err(e) = self.revealer.reveal(&outcome.destination_dir) {
                    warn!("{e}");
                }
            }
            Err(error) => {
                warn!("Resize of {} failed: {}", request.img_path.display(), error);
                if self.config.failure_mode == FailureMode::Notify {
                    notifier.resize_failed(&error);
                }
            }
        }
    }

    /// Runs `request` and returns its outcome without notifying anyone.
    pub async fn execute(&self, request: &ResizeRequest) -> ResizeResult<ResizeOutcome> {
        let width = dimensions::coerce(&request.width);
        let height = dimensions::coerce(&request.height);
        debug!(
            "Resize request for {}: {:?}x{:?} coerced to {}x{}",
            request.img_path.display(),
            request.width,
            request.height,
            width,
            height
        );

        let bytes = utils::read_source(&request.img_path).await?;

        let target_width = dimensions::to_pixels(Axis::Width, width)?;
        let target_height = dimensions::to_pixels(Axis::Height, height)?;
        dimensions::check_area(target_width, target_height)?;
        let resampler = Arc::clone(&self.resampler);
        let resized = tokio::task::spawn_blocking(move || {
            resampler.resample(&bytes, target_width, target_height)
        })
        .await??;

        let file_name = utils::output_file_name(&request.img_path, &self.config.file_prefix)?;
        let destination_dir = utils::ensure_dir(self.destination_dir()).await?;
        let output_path = destination_dir.join(file_name);
        utils::write_output(&output_path, &resized).await?;

        Ok(ResizeOutcome {
            output_path,
            destination_dir,
            width: target_width,
            height: target_height,
            bytes_written: resized.len(),
        })
    }
}
