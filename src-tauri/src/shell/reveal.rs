use std::path::Path;
use tauri::{AppHandle, Runtime};
use tauri_plugin_opener::OpenerExt;
use tracing::debug;
use crate::processing::FolderRevealer;
use crate::utils::{ResizeError, ResizeResult};

/// Opens directories with the platform's default file browser.
pub struct OpenerRevealer<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> OpenerRevealer<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> FolderRevealer for OpenerRevealer<R> {
    fn reveal(&self, dir: &Path) -> ResizeResult<()> {
        debug!("Opening {}", dir.display());
        self.app
            .opener()
            .open_path(dir.to_string_lossy(), None::<&str>)
            .map_err(|e| ResizeError::reveal(dir, e))
    }
}
