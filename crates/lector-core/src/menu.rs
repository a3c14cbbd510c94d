//! Native application menu
//!
//! ```text
//! File   Open... | Print... | Properties... | Close | Exit
//! View   Toggle Full Screen
//! Help   About
//! ```
//!
//! Document actions start disabled and follow whether any tab is open.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Open,
    Print,
    Properties,
    Close,
    Exit,
    Fullscreen,
    About,
}

impl MenuAction {
    /// Actions that only make sense with a document open
    pub fn needs_document(&self) -> bool {
        matches!(
            self,
            MenuAction::Print | MenuAction::Properties | MenuAction::Close | MenuAction::Fullscreen
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub menu: &'static str,
    pub label: &'static str,
    pub accelerator: Option<&'static str>,
    pub action: MenuAction,
    pub enabled: bool,
}

impl MenuItem {
    fn new(
        menu: &'static str,
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
        action: MenuAction,
    ) -> Self {
        Self {
            id,
            menu,
            label,
            accelerator,
            action,
            enabled: !action.needs_document(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationMenu {
    items: Vec<MenuItem>,
}

impl ApplicationMenu {
    pub fn new() -> Self {
        Self {
            items: vec![
                MenuItem::new(
                    "File",
                    "file-open",
                    "Open...",
                    Some("CmdOrCtrl+O"),
                    MenuAction::Open,
                ),
                MenuItem::new(
                    "File",
                    "file-print",
                    "Print...",
                    Some("CmdOrCtrl+P"),
                    MenuAction::Print,
                ),
                MenuItem::new(
                    "File",
                    "file-properties",
                    "Properties...",
                    None,
                    MenuAction::Properties,
                ),
                MenuItem::new("File", "file-close", "Close", None, MenuAction::Close),
                MenuItem::new("File", "exit", "Exit", None, MenuAction::Exit),
                MenuItem::new(
                    "View",
                    "view-fullscreen",
                    "Toggle Full Screen",
                    Some("F11"),
                    MenuAction::Fullscreen,
                ),
                MenuItem::new("Help", "about", "About", None, MenuAction::About),
            ],
        }
    }

    /// Enable or disable print, properties, close and fullscreen
    pub fn set_document_actions_enabled(&mut self, enabled: bool) {
        for item in self.items.iter_mut().filter(|i| i.action.needs_document()) {
            item.enabled = enabled;
        }
        tracing::debug!(enabled, "Document menu actions toggled");
    }

    /// Resolve a clicked item to its action
    pub fn activate(&self, id: &str) -> Result<MenuAction> {
        let item = self.item(id)?;
        if !item.enabled {
            return Err(CoreError::MenuItemDisabled(id.to_string()));
        }
        Ok(item.action)
    }

    pub fn item(&self, id: &str) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::UnknownMenuItem(id.to_string()))
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.item(id).map(|i| i.enabled).unwrap_or(false)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for ApplicationMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_actions_start_disabled() {
        let menu = ApplicationMenu::new();
        assert!(menu.is_enabled("file-open"));
        assert!(menu.is_enabled("exit"));
        assert!(menu.is_enabled("about"));
        assert!(!menu.is_enabled("file-print"));
        assert!(!menu.is_enabled("file-properties"));
        assert!(!menu.is_enabled("file-close"));
        assert!(!menu.is_enabled("view-fullscreen"));
    }

    #[test]
    fn test_toggle_document_actions() {
        let mut menu = ApplicationMenu::new();
        menu.set_document_actions_enabled(true);
        assert_eq!(menu.activate("file-print").unwrap(), MenuAction::Print);
        assert_eq!(
            menu.activate("view-fullscreen").unwrap(),
            MenuAction::Fullscreen
        );

        menu.set_document_actions_enabled(false);
        assert!(matches!(
            menu.activate("file-close"),
            Err(CoreError::MenuItemDisabled(_))
        ));
        // Always-available items are untouched
        assert!(menu.is_enabled("file-open"));
    }

    #[test]
    fn test_unknown_item() {
        let menu = ApplicationMenu::new();
        assert!(matches!(
            menu.activate("file-save"),
            Err(CoreError::UnknownMenuItem(_))
        ));
        assert!(!menu.is_enabled("file-save"));
    }

    #[test]
    fn test_accelerators() {
        let menu = ApplicationMenu::new();
        assert_eq!(menu.item("file-open").unwrap().accelerator, Some("CmdOrCtrl+O"));
        assert_eq!(menu.item("view-fullscreen").unwrap().accelerator, Some("F11"));
    }
}
