use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::{ResizeError, ResizeResult};

/// Reads the whole source image into memory
pub async fn read_source(path: impl AsRef<Path>) -> ResizeResult<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .await
        .map_err(|e| ResizeError::unreadable(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Derives the output file name: `prefix` followed by the source's base name.
pub fn output_file_name(source: impl AsRef<Path>, prefix: &str) -> ResizeResult<String> {
    let source = source.as_ref();
    let base = source
        .file_name()
        .ok_or_else(|| ResizeError::unreadable(source, "path has no file name"))?;
    Ok(format!("{prefix}{}", base.to_string_lossy()))
}

/// Creates `dir` and any missing parents. An existing directory is not an error.
pub async fn ensure_dir(dir: impl AsRef<Path>) -> ResizeResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .await
        .map_err(|e| ResizeError::destination(dir, e))?;
    Ok(dir.to_path_buf())
}

/// Writes `bytes` to `path`, replacing any existing file.
pub async fn write_output(path: impl AsRef<Path>, bytes: &[u8]) -> ResizeResult<()> {
    let path = path.as_ref();
    fs::write(path, bytes)
        .await
        .map_err(|e| ResizeError::write(path, e))
}
