//! Resize processing: dimension coercion, resampling and the request workflow.
//!
//! # Architecture
//!
//! - [`ResizeWorkflow`]: Runs one request end to end and reports the outcome.
//! - [`dimensions`]: Turns raw form input into pixel sizes.
//! - [`Resampler`]: The opaque `bytes -> bytes` resize capability; [`ImageResampler`]
//!   is the `image`-crate implementation.

pub mod dimensions;
mod resample;
mod workflow;

pub use resample::{ImageResampler, Resampler};
pub use workflow::{FolderRevealer, ResizeNotifier, ResizeWorkflow};
