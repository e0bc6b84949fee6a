//! Tauri command handlers for the frontend.
//!
//! This module exposes commands that can be invoked from the renderer:
//! - [`resize_image`]: Start a resize in the background
//! - [`supported_extensions`]: Extensions for the file picker filter

mod image;

pub use image::*;
