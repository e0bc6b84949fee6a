//! Tauri command handlers for image resizing.

use tauri::{State, WebviewWindow};
use tracing::{debug, warn};
use crate::core::{AppState, ResizeRequest};
use crate::shell::WindowNotifier;
use crate::utils::{SUPPORTED_EXTENSIONS, is_supported_extension};

/// Starts resizing one image and returns immediately.
///
/// The run happens on the async runtime; the invoking window later receives
/// `image:done` on success. Failures are only logged unless the failure mode
/// is `notify`, in which case `image:failed` is emitted instead.
///
/// # Arguments
/// * `window` - The window that submitted the request; it receives the events
/// * `state` - Application state holding the workflow
/// * `options` - Source path and raw width/height from the form
#[tauri::command]
pub fn resize_image(window: WebviewWindow, state: State<'_, AppState>, options: ResizeRequest) {
    debug!(
        "Received resize_image command for {} from window '{}'",
        options.img_path.display(),
        window.label()
    );

    // The picker filters by extension, but a typed path can still slip through.
    if !is_supported_extension(&options.img_path) {
        warn!("{} does not have a supported image extension", options.img_path.display());
    }

    let workflow = state.workflow();
    let notifier = WindowNotifier::new(window);
    tauri::async_runtime::spawn(async move {
        workflow.handle(options, &notifier).await;
    });
}

/// Returns the extensions the file picker should offer.
#[tauri::command]
pub fn supported_extensions() -> Vec<String> {
    SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
