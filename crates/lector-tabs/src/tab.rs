//! Tab widget and document handle
//!
//! A tab shows:
//! - The document's file name
//! - A close affordance (visible on the current tab, and on hover)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::state::TabState;
use crate::Result;

/// Path of an open document. Unique among the open tabs of a window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentHandle(String);

impl DocumentHandle {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(TabError::InvalidPath(
                "Document path cannot be empty".to_string(),
            ));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without its directory, for both `/` and `\` separators
    pub fn display_name(&self) -> &str {
        match self.0.rfind(['/', '\\']) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a tab widget, independent of the document it shows
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// File name shown in the strip
    pub label: String,
    /// Whether this tab's document is the one in the viewer
    pub state: TabState,
    /// Whether the close affordance is shown
    pub close_visible: bool,
}

impl Tab {
    pub fn new(handle: &DocumentHandle) -> Self {
        Self {
            id: TabId::generate(),
            label: handle.display_name().to_string(),
            state: TabState::Inactive,
            close_visible: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Mark as the current tab
    pub fn focus(&mut self) {
        self.state = TabState::Active;
        self.close_visible = true;
    }

    /// Mark as a background tab
    pub fn blur(&mut self) {
        self.state = TabState::Inactive;
        self.close_visible = false;
    }

    /// Pointer entered or left the tab. The current tab always keeps its
    /// close affordance.
    pub fn hover(&mut self, hovering: bool) {
        if !self.is_active() {
            self.close_visible = hovering;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_directories() {
        let unix = DocumentHandle::new("/home/user/docs/report.pdf").unwrap();
        assert_eq!(unix.display_name(), "report.pdf");

        let windows = DocumentHandle::new("C:\\Users\\me\\paper.pdf").unwrap();
        assert_eq!(windows.display_name(), "paper.pdf");

        let bare = DocumentHandle::new("notes.pdf").unwrap();
        assert_eq!(bare.display_name(), "notes.pdf");
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(DocumentHandle::new("").is_err());
        assert!(DocumentHandle::new("   ").is_err());
    }

    #[test]
    fn test_new_tab() {
        let handle = DocumentHandle::new("/tmp/a.pdf").unwrap();
        let tab = Tab::new(&handle);
        assert_eq!(tab.label, "a.pdf");
        assert_eq!(tab.state, TabState::Inactive);
        assert!(!tab.close_visible);
        assert_ne!(tab.id, Tab::new(&handle).id);
    }

    #[test]
    fn test_hover_only_affects_background_tabs() {
        let handle = DocumentHandle::new("/tmp/a.pdf").unwrap();
        let mut tab = Tab::new(&handle);

        tab.hover(true);
        assert!(tab.close_visible);
        tab.hover(false);
        assert!(!tab.close_visible);

        tab.focus();
        tab.hover(false);
        assert!(tab.close_visible);

        tab.blur();
        assert!(!tab.close_visible);
        assert_eq!(tab.state, TabState::Inactive);
    }
}
