//! Application state management for Tauri.

use std::sync::Arc;
use tracing::debug;
use crate::core::ResizerConfig;
use crate::processing::{FolderRevealer, ImageResampler, ResizeWorkflow};

/// Application state managed by Tauri.
///
/// Holds the single resize workflow shared by every `resize_image` call.
#[derive(Clone)]
pub struct AppState {
    workflow: Arc<ResizeWorkflow>,
}

impl AppState {
    /// Creates the state with the default `image`-crate resampler.
    pub fn new(config: ResizerConfig, revealer: Arc<dyn FolderRevealer>) -> Self {
        debug!(
            "Resize output goes to {} (failure mode: {:?})",
            config.destination_dir().display(),
            config.failure_mode
        );
        let workflow = ResizeWorkflow::new(config, Arc::new(ImageResampler::default()), revealer);
        Self {
            workflow: Arc::new(workflow),
        }
    }

    /// Returns a handle to the workflow that can move into a background task.
    pub fn workflow(&self) -> Arc<ResizeWorkflow> {
        Arc::clone(&self.workflow)
    }
}
