// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod shell;
pub mod utils;

use std::sync::Arc;
use anyhow::Context;
use tauri::{Manager, RunEvent};
use tracing::{debug, info};

// Public exports for external consumers
pub use core::{AppState, FailureMode, RawDimension, ResizeOutcome, ResizeRequest, ResizerConfig};
pub use processing::{FolderRevealer, ImageResampler, Resampler, ResizeNotifier, ResizeWorkflow};
pub use utils::{ResizeError, ResizeResult};

use crate::shell::{OpenerRevealer, Platform};

/// Builds the Tauri application and runs its event loop until exit.
///
/// Command registration lives here rather than in `main.rs` because
/// `generate_handler!` needs the commands' hidden helper macros in scope.
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            commands::resize_image,
            commands::supported_extensions,
        ])
        .setup(|app| {
            setup(app)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    info!("Starting application event loop...");
    app.run(|_app_handle, event| match event {
        RunEvent::ExitRequested { code, api, .. } => {
            // `code` is None when the last window closed rather than on an explicit quit.
            if code.is_none() && Platform::current().keeps_running_without_windows() {
                debug!("Last window closed; staying alive");
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { has_visible_windows, .. } => {
            if !has_visible_windows {
                if let Err(e) = shell::create_main_window(_app_handle) {
                    tracing::warn!("Failed to recreate main window: {e}");
                }
            }
        }
        RunEvent::Exit => info!("Application exiting"),
        _ => {}
    });
}

fn setup(app: &mut tauri::App) -> anyhow::Result<()> {
    let config = ResizerConfig::from_env().context("failed to resolve resizer configuration")?;
    let revealer = Arc::new(OpenerRevealer::new(app.handle().clone()));
    app.manage(AppState::new(config, revealer));
    debug!("✓ AppState initialized");

    let menu = shell::build_menu(app.handle()).context("failed to build menu")?;
    app.set_menu(menu).context("failed to install menu")?;
    app.on_menu_event(|app, event| shell::handle_menu_event(app, &event));
    debug!("✓ Menu installed");

    shell::create_main_window(app.handle()).context("failed to create main window")?;
    Ok(())
}
