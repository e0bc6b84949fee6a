//! Application menu.
//!
//! The layout is a pure function of the [`Platform`]; [`build_menu`] turns it
//! into a native Tauri menu.

use tauri::menu::{Menu, MenuBuilder, MenuEvent, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Runtime};
use tracing::{debug, warn};
use crate::shell::window::open_about_window;

/// Platform distinctions the shell cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// macOS apps stay alive with no windows open.
    pub fn keeps_running_without_windows(self) -> bool {
        self == Self::MacOs
    }
}

/// Something a menu item does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    About,
    Quit,
}

impl MenuAction {
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Quit => "quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "about" => Some(Self::About),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    pub accelerator: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

const ABOUT: MenuEntry = MenuEntry {
    action: MenuAction::About,
    label: "About",
    accelerator: None,
};

const QUIT: MenuEntry = MenuEntry {
    action: MenuAction::Quit,
    label: "Quit",
    accelerator: Some("CmdOrCtrl+W"),
};

/// On macOS "About" lives in the app-name menu; elsewhere in "Help".
pub fn menu_layout(platform: Platform, app_name: &str) -> Vec<MenuSection> {
    let file = MenuSection {
        label: "File".to_string(),
        entries: vec![QUIT],
    };

    match platform {
        Platform::MacOs => vec![
            MenuSection {
                label: app_name.to_string(),
                entries: vec![ABOUT],
            },
            file,
        ],
        Platform::Other => vec![
            file,
            MenuSection {
                label: "Help".to_string(),
                entries: vec![ABOUT],
            },
        ],
    }
}

/// Builds the native menu for the current platform.
pub fn build_menu<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let app_name = app.package_info().name.clone();
    let mut menu = MenuBuilder::new(app);

    for section in menu_layout(Platform::current(), &app_name) {
        let mut submenu = SubmenuBuilder::new(app, &section.label);
        for entry in &section.entries {
            let mut item = MenuItemBuilder::with_id(entry.action.id(), entry.label);
            if let Some(accelerator) = entry.accelerator {
                item = item.accelerator(accelerator);
            }
            submenu = submenu.item(&item.build(app)?);
        }
        menu = menu.item(&submenu.build()?);
    }

    menu.build()
}

/// Dispatches a click on one of our menu items.
pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: &MenuEvent) {
    match MenuAction::from_id(event.id().as_ref()) {
        Some(MenuAction::About) => {
            if let Err(e) = open_about_window(app) {
                warn!("Failed to open About window: {e}");
            }
        }
        Some(MenuAction::Quit) => {
            debug!("Quit requested from menu");
            app.exit(0);
        }
        None => debug!("Ignoring menu event {:?}", event.id()),
    }
}
