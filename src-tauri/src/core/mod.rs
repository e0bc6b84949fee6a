//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`ResizeRequest`]: One resize action submitted by the frontend
//! - [`ResizerConfig`]: Where output goes and how failures are reported
//! - [`ResizeOutcome`]: Result of a successful resize run

mod config;
mod state;
mod types;

pub use config::{FailureMode, ResizerConfig, ENV_FAILURE_MODE};
pub use state::AppState;
pub use types::{RawDimension, ResizeOutcome, ResizeRequest};
