//! Core types for resize requests and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// A dimension as typed into the form: the frontend may send a number or the
/// raw text of the input field.
///
/// A field left out of the payload becomes [`RawDimension::Missing`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDimension {
    Number(f64),
    Text(String),
    Null,
    #[default]
    #[serde(skip)]
    Missing,
}

impl From<f64> for RawDimension {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawDimension {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A single resize action.
///
/// The output directory is deliberately absent: it is derived by the workflow
/// from [`crate::core::ResizerConfig`], and any `dest` field sent by the
/// frontend is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    /// Path to the source image file
    pub img_path: PathBuf,
    /// Requested width, before coercion
    #[serde(default)]
    pub width: RawDimension,
    /// Requested height, before coercion
    #[serde(default)]
    pub height: RawDimension,
}

impl ResizeRequest {
    pub fn new(
        img_path: impl Into<PathBuf>,
        width: impl Into<RawDimension>,
        height: impl Into<RawDimension>,
    ) -> Self {
        Self {
            img_path: img_path.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Result of a successful resize run.
#[derive(Debug, Clone)]
pub struct ResizeOutcome {
    /// Where the resized image was written
    pub output_path: PathBuf,
    /// Directory holding the output, revealed after success
    pub destination_dir: PathBuf,
    /// Final width in pixels
    pub width: u32,
    /// Final height in pixels
    pub height: u32,
    /// Size of the written file
    pub bytes_written: usize,
}
