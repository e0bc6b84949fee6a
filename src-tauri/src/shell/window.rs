//! Main and About windows, and the notifier bound to the main window.

use tauri::{AppHandle, Emitter, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::{debug, warn};
use crate::processing::ResizeNotifier;
use crate::utils::ResizeError;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const ABOUT_WINDOW_LABEL: &str = "about";
const WINDOW_TITLE: &str = "Image Resizer";

/// Emitted to the requesting window after a successful resize.
pub const EVENT_DONE: &str = "image:done";
/// Emitted to the requesting window after a failed resize, in notify mode.
pub const EVENT_FAILED: &str = "image:failed";

/// Main window size; debug builds get room for the devtools pane.
pub fn main_window_size(dev: bool) -> (f64, f64) {
    if dev { (1200.0, 600.0) } else { (800.0, 600.0) }
}

pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<WebviewWindow<R>> {
    let (width, height) = main_window_size(cfg!(debug_assertions));
    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::App("index.html".into()))
        .title(WINDOW_TITLE)
        .inner_size(width, height)
        .build()?;

    #[cfg(debug_assertions)]
    window.open_devtools();

    debug!("Main window created ({width}x{height})");
    Ok(window)
}

/// Opens the About window, or focuses it if it is already open.
pub fn open_about_window<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<()> {
    if let Some(existing) = app.get_webview_window(ABOUT_WINDOW_LABEL) {
        return existing.set_focus();
    }

    WebviewWindowBuilder::new(app, ABOUT_WINDOW_LABEL, WebviewUrl::App("about.html".into()))
        .title(WINDOW_TITLE)
        .inner_size(800.0, 600.0)
        .build()?;
    Ok(())
}

/// [`ResizeNotifier`] that emits events to one window only.
pub struct WindowNotifier<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> WindowNotifier<R> {
    pub fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> ResizeNotifier for WindowNotifier<R> {
    fn resize_complete(&self) {
        if let Err(e) = self.window.emit_to(self.window.label(), EVENT_DONE, ()) {
            warn!("Failed to emit {EVENT_DONE}: {e}");
        }
    }

    fn resize_failed(&self, error: &ResizeError) {
        let payload = serde_json::json!({ "error": error.to_string() });
        if let Err(e) = self.window.emit_to(self.window.label(), EVENT_FAILED, payload) {
            warn!("Failed to emit {EVENT_FAILED}: {e}");
        }
    }
}
