pub mod error;
pub mod formats;
pub mod fs;

pub use error::{Axis, ResizeError, ResizeResult};
pub use formats::{SUPPORTED_EXTENSIONS, is_supported_extension};
pub use fs::{ensure_dir, output_file_name, read_source, write_output};
