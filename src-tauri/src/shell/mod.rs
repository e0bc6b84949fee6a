//! Tauri shell around the resize workflow: windows, menu, notifications and
//! the folder revealer.

pub mod menu;
mod reveal;
pub mod window;

pub use menu::{Platform, build_menu, handle_menu_event};
pub use reveal::OpenerRevealer;
pub use window::{WindowNotifier, create_main_window, open_about_window};
