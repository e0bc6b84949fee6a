//! Process-level configuration for the resize workflow.

use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;
use crate::utils::{ResizeError, ResizeResult};

/// Environment variable selecting the [`FailureMode`] (`silent` or `notify`).
pub const ENV_FAILURE_MODE: &str = "IMAGE_RESIZER_FAILURE_MODE";

const OUTPUT_DIR_NAME: &str = "imageresizer";
const FILE_PREFIX: &str = "resized_";

/// What the workflow does with a failed run besides logging it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Log and drop. The frontend never hears about the failure.
    #[default]
    SilentDiscard,
    /// Log and emit a failure event to the requesting window.
    Notify,
}

impl FromStr for FailureMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "silent" | "silent-discard" => Ok(Self::SilentDiscard),
            "notify" => Ok(Self::Notify),
            other => Err(format!("Unknown failure mode: {other}")),
        }
    }
}

impl FailureMode {
    /// Parses an optional setting, falling back to silent-discard.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("{e}; falling back to silent-discard");
                Self::default()
            }),
        }
    }
}

/// Configuration of the resize workflow.
#[derive(Debug, Clone)]
pub struct ResizerConfig {
    /// User home directory; the output directory lives directly under it
    pub home_dir: PathBuf,
    /// Name of the output directory under `home_dir`
    pub output_dir_name: String,
    /// Prefix prepended to the source file name
    pub file_prefix: String,
    /// How failed runs are reported
    pub failure_mode: FailureMode,
}

impl ResizerConfig {
    /// Builds a configuration rooted at `home_dir` with default naming.
    pub fn with_home(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
            file_prefix: FILE_PREFIX.to_string(),
            failure_mode: FailureMode::default(),
        }
    }

    /// Resolves the configuration for the running process.
    ///
    /// The home directory comes from the platform (`dirs`), the failure mode
    /// from [`ENV_FAILURE_MODE`].
    pub fn from_env() -> ResizeResult<Self> {
        let home = dirs::home_dir().ok_or(ResizeError::NoHomeDir)?;
        let mode = std::env::var(ENV_FAILURE_MODE).ok();
        Ok(Self::with_home(home).with_failure_mode(FailureMode::from_setting(mode.as_deref())))
    }

    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// `<home>/imageresizer`
    pub fn destination_dir(&self) -> PathBuf {
        self.home_dir.join(&self.output_dir_name)
    }
}
