//! Error types for the image resizer.
//!
//! Every failure of a resize run ends up as a [`ResizeError`]. The workflow
//! catches them at its top level, so most of these never cross IPC; they are
//! still `Serialize` for the opt-in failure notification.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error;

/// Which target dimension a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Main error type for a resize run.
#[derive(Error, Debug, Serialize)]
pub enum ResizeError {
    /// Source image missing, unreadable, or without a file name
    #[error("Source error for {}: {message}", .path.display())]
    Source { path: PathBuf, message: String },

    /// Coerced dimension rejected before resampling
    #[error("Invalid {axis}: {value}")]
    InvalidDimension { axis: Axis, value: f64 },

    /// Target size would need more memory than a resize may use
    #[error("Target size {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },

    /// Decode, resize or encode failed
    #[error("Resample error: {0}")]
    Resample(String),

    /// Output directory could not be created
    #[error("Cannot create output directory {}: {message}", .path.display())]
    Destination { path: PathBuf, message: String },

    /// Output file could not be written
    #[error("Cannot write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Output directory could not be opened in the file browser
    #[error("Cannot reveal {}: {message}", .path.display())]
    Reveal { path: PathBuf, message: String },

    /// Home directory could not be resolved
    #[error("Home directory could not be determined")]
    NoHomeDir,

    /// Background task failed to complete
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Convenience result type for resize operations.
pub type ResizeResult<T> = Result<T, ResizeError>;

impl ResizeError {
    pub fn unreadable(path: impl AsRef<Path>, err: impl fmt::Display) -> Self {
        Self::Source {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn resample<T: Into<String>>(msg: T) -> Self {
        Self::Resample(msg.into())
    }

    pub fn destination(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Destination {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn write(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn reveal(path: impl AsRef<Path>, err: impl fmt::Display) -> Self {
        Self::Reveal {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl From<image::ImageError> for ResizeError {
    fn from(err: image::ImageError) -> Self {
        Self::Resample(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ResizeError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Runtime(format!("Resample task panicked: {err}"))
    }
}
