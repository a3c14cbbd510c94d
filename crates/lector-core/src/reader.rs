//! Window state container
//!
//! One `Reader` exists per open window. It owns the tab strip, the viewer
//! surface and the menu; the host only forwards events and delivers the
//! messages collected here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lector_tabs::{ControllerEvent, DocumentHandle, SeekControls, TabController, TabId};

use crate::config::Config;
use crate::error::CoreError;
use crate::launch::document_from_args;
use crate::menu::{ApplicationMenu, MenuAction};
use crate::viewer::{Viewer, ViewerCommand};
use crate::Result;

/// Message for the host shell, delivered in the order produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Point the embedded renderer at this URL
    LoadViewer { url: String },
    /// Blank the embedded renderer
    ClearViewer,
    /// Trigger an action in the renderer's toolbar
    ViewerCommand { command: ViewerCommand },
    /// Document menu actions were enabled or disabled
    MenuActionsAvailable { enabled: bool },
    /// Restore and focus the window
    FocusWindow,
    /// Open the modal about window
    ShowAbout,
    /// Quit the application
    Quit,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub id: TabId,
    pub label: String,
    pub path: String,
    pub active: bool,
    pub close_visible: bool,
}

/// Everything the host needs to draw the window
#[derive(Debug, Clone, Serialize)]
pub struct ReaderView {
    pub title: String,
    pub strip_visible: bool,
    pub placeholder_visible: bool,
    /// Tabs of the bucket being shown
    pub tabs: Vec<TabView>,
    pub open_documents: usize,
    pub seek: SeekControls,
    pub current_bucket: usize,
    pub buckets: usize,
    pub step_tabs: usize,
    pub viewer_url: Option<String>,
    pub input_forwarding: bool,
    pub menu: BTreeMap<&'static str, bool>,
}

pub struct Reader {
    config: Config,
    tabs: TabController,
    viewer: Viewer,
    menu: ApplicationMenu,
    about_open: bool,
    outbox: Vec<HostMessage>,
}

impl Reader {
    pub fn new(config: Config) -> Result<Self> {
        let viewer = Viewer::new(&config.viewer_entry)?;
        let tabs = TabController::new(
            config.app_name.clone(),
            config.tab_width_px,
            config.window.width,
        );

        tracing::info!(
            width = config.window.width,
            step_tabs = tabs.step_tabs(),
            "Reader window created"
        );

        Ok(Self {
            config,
            tabs,
            viewer,
            menu: ApplicationMenu::new(),
            about_open: false,
            outbox: Vec::new(),
        })
    }

    // === Tab operations ===

    pub fn open_file(&mut self, path: &str) -> Result<TabId> {
        let handle = DocumentHandle::new(path)?;
        let id = self.tabs.open_file(handle)?;
        self.pump_events();
        Ok(id)
    }

    pub fn close_tab(&mut self, tab_id: &TabId) -> Result<()> {
        self.tabs.close_tab(tab_id)?;
        self.pump_events();
        Ok(())
    }

    pub fn switch_tab(&mut self, tab_id: &TabId) -> Result<()> {
        self.tabs.switch_tab(tab_id)?;
        self.pump_events();
        Ok(())
    }

    pub fn hover_tab(&mut self, tab_id: &TabId, hovering: bool) -> Result<()> {
        Ok(self.tabs.hover_tab(tab_id, hovering)?)
    }

    pub fn seek_left(&mut self) -> bool {
        self.tabs.seek_left()
    }

    pub fn seek_right(&mut self) -> bool {
        self.tabs.seek_right()
    }

    pub fn resize(&mut self, width: u32) {
        self.tabs.handle_resize(width);
    }

    // === Viewer callbacks ===

    /// The renderer finished loading a document
    pub fn document_loaded(&mut self, path: &str) -> Result<bool> {
        let handle = DocumentHandle::new(path)?;
        Ok(self.viewer.document_loaded(&handle))
    }

    // === Menu ===

    /// Run a menu item. `path` is the file picked by the host's open dialog.
    pub fn menu_command(&mut self, id: &str, path: Option<String>) -> Result<MenuAction> {
        let action = self.menu.activate(id)?;

        tracing::debug!(item = id, ?action, "Menu command");

        match action {
            MenuAction::Open => {
                let path = path.ok_or_else(|| CoreError::MissingPath(id.to_string()))?;
                self.open_file(&path)?;
            }
            MenuAction::Print => self.forward_to_viewer(ViewerCommand::Print),
            MenuAction::Properties => self.forward_to_viewer(ViewerCommand::Properties),
            MenuAction::Fullscreen => self.forward_to_viewer(ViewerCommand::Presentation),
            MenuAction::Close => {
                self.tabs.close_current_tab()?;
                self.pump_events();
            }
            MenuAction::Exit => self.outbox.push(HostMessage::Quit),
            MenuAction::About => {
                if !self.about_open {
                    self.about_open = true;
                    self.outbox.push(HostMessage::ShowAbout);
                }
            }
        }

        Ok(action)
    }

    /// The about window was dismissed
    pub fn about_closed(&mut self) {
        self.about_open = false;
    }

    // === Process-level events ===

    /// Another instance was launched with `argv`. Focus this window and open
    /// the document it named, if any.
    pub fn second_instance<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<Option<TabId>> {
        self.outbox.push(HostMessage::FocusWindow);

        match document_from_args(argv, &self.config.document_extension) {
            Some(path) => {
                tracing::info!(path = %path, "Opening file from second instance");
                Ok(Some(self.open_file(&path)?))
            }
            None => Ok(None),
        }
    }

    // === Output ===

    /// Take the messages produced since the last call
    pub fn take_messages(&mut self) -> Vec<HostMessage> {
        std::mem::take(&mut self.outbox)
    }

    pub fn view(&self) -> ReaderView {
        let strip = self.tabs.strip();
        let tabs = self
            .tabs
            .tabs()
            .iter()
            .zip(self.tabs.paths())
            .filter(|(tab, _)| strip.contains(&tab.id))
            .map(|(tab, path)| TabView {
                id: tab.id.clone(),
                label: tab.label.clone(),
                path: path.to_string(),
                active: tab.is_active(),
                close_visible: tab.close_visible,
            })
            .collect();

        ReaderView {
            title: self.tabs.title().to_string(),
            strip_visible: self.tabs.strip_visible(),
            placeholder_visible: self.tabs.placeholder_visible(),
            tabs,
            open_documents: self.tabs.len(),
            seek: self.tabs.seek_controls(),
            current_bucket: self.tabs.current_bucket(),
            buckets: self.tabs.buckets(),
            step_tabs: self.tabs.step_tabs(),
            viewer_url: self.viewer.url().map(|u| u.to_string()),
            input_forwarding: self.viewer.input_forwarding(),
            menu: self
                .menu
                .items()
                .iter()
                .map(|item| (item.id, item.enabled))
                .collect(),
        }
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn menu(&self) -> &ApplicationMenu {
        &self.menu
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn forward_to_viewer(&mut self, command: ViewerCommand) {
        if let Some(command) = self.viewer.command(command) {
            self.outbox.push(HostMessage::ViewerCommand { command });
        }
    }

    /// Deliver controller notifications to the viewer and the menu
    fn pump_events(&mut self) {
        for event in self.tabs.drain_events() {
            match event {
                ControllerEvent::MenuActionsAvailable(enabled) => {
                    self.menu.set_document_actions_enabled(enabled);
                    self.outbox
                        .push(HostMessage::MenuActionsAvailable { enabled });
                }
                ControllerEvent::LoadDocument(handle) => {
                    let url = self.viewer.load(&handle).to_string();
                    self.outbox.push(HostMessage::LoadViewer { url });
                }
                ControllerEvent::ClearViewer => {
                    self.viewer.clear();
                    self.outbox.push(HostMessage::ClearViewer);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_reader(step: u32) -> Reader {
        let mut config = Config::default();
        config.window.width = step * config.tab_width_px;
        Reader::new(config).unwrap()
    }

    #[test]
    fn test_open_enables_menu_and_loads_viewer() {
        let mut reader = test_reader(3);
        assert!(matches!(
            reader.menu_command("file-print", None),
            Err(CoreError::MenuItemDisabled(_))
        ));

        reader.open_file("/docs/a.pdf").unwrap();

        let messages = reader.take_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            HostMessage::MenuActionsAvailable { enabled: true }
        );
        assert!(matches!(&messages[1], HostMessage::LoadViewer { url } if url.contains("a.pdf")));

        assert!(reader.menu().is_enabled("file-print"));
        assert_eq!(
            reader.viewer().source().map(|h| h.as_str()),
            Some("/docs/a.pdf")
        );

        let view = reader.view();
        assert_eq!(view.title, "a.pdf - Lector");
        assert_eq!(view.tabs.len(), 1);
        assert!(view.tabs[0].active);
        assert!(!view.placeholder_visible);
        assert_eq!(view.menu.get("file-close"), Some(&true));
    }

    #[test]
    fn test_viewer_commands_from_menu() {
        let mut reader = test_reader(3);
        reader.open_file("/docs/a.pdf").unwrap();
        reader.take_messages();

        assert_eq!(
            reader.menu_command("file-print", None).unwrap(),
            MenuAction::Print
        );
        reader.menu_command("file-properties", None).unwrap();
        reader.menu_command("view-fullscreen", None).unwrap();

        assert_eq!(
            reader.take_messages(),
            vec![
                HostMessage::ViewerCommand { command: ViewerCommand::Print },
                HostMessage::ViewerCommand { command: ViewerCommand::Properties },
                HostMessage::ViewerCommand { command: ViewerCommand::Presentation },
            ]
        );
    }

    #[test]
    fn test_menu_open_requires_path() {
        let mut reader = test_reader(3);
        assert!(matches!(
            reader.menu_command("file-open", None),
            Err(CoreError::MissingPath(_))
        ));

        reader
            .menu_command("file-open", Some("/docs/b.pdf".to_string()))
            .unwrap();
        assert_eq!(reader.tabs().len(), 1);
    }

    #[test]
    fn test_menu_close_last_tab_disables_actions() {
        let mut reader = test_reader(3);
        reader.open_file("/docs/a.pdf").unwrap();
        reader.take_messages();

        reader.menu_command("file-close", None).unwrap();

        assert_eq!(
            reader.take_messages(),
            vec![
                HostMessage::ClearViewer,
                HostMessage::MenuActionsAvailable { enabled: false },
            ]
        );
        assert!(!reader.menu().is_enabled("file-close"));
        assert!(reader.viewer().source().is_none());

        let view = reader.view();
        assert_eq!(view.title, "Lector");
        assert!(view.placeholder_visible);
        assert!(!view.strip_visible);
        assert!(view.viewer_url.is_none());
    }

    #[test]
    fn test_about_opens_once() {
        let mut reader = test_reader(3);
        reader.menu_command("about", None).unwrap();
        reader.menu_command("about", None).unwrap();
        assert_eq!(reader.take_messages(), vec![HostMessage::ShowAbout]);

        reader.about_closed();
        reader.menu_command("about", None).unwrap();
        assert_eq!(reader.take_messages(), vec![HostMessage::ShowAbout]);
    }

    #[test]
    fn test_exit_requests_quit() {
        let mut reader = test_reader(3);
        reader.menu_command("exit", None).unwrap();
        assert_eq!(reader.take_messages(), vec![HostMessage::Quit]);
    }

    #[test]
    fn test_second_instance_focuses_and_opens() {
        let mut reader = test_reader(3);

        let opened = reader.second_instance(&["lector", "/docs/a.pdf"]).unwrap();
        assert!(opened.is_some());
        let messages = reader.take_messages();
        assert_eq!(messages[0], HostMessage::FocusWindow);
        assert_eq!(reader.tabs().len(), 1);

        let opened = reader.second_instance(&["lector"]).unwrap();
        assert!(opened.is_none());
        assert_eq!(reader.take_messages(), vec![HostMessage::FocusWindow]);
    }

    #[test]
    fn test_document_loaded_only_for_current_source() {
        let mut reader = test_reader(3);
        reader.open_file("/docs/a.pdf").unwrap();
        reader.open_file("/docs/b.pdf").unwrap();

        assert!(!reader.document_loaded("/docs/a.pdf").unwrap());
        assert!(reader.document_loaded("/docs/b.pdf").unwrap());
        assert!(reader.view().input_forwarding);
    }

    #[test]
    fn test_view_shows_current_bucket_only() {
        let mut reader = test_reader(2);
        for path in ["/d/a.pdf", "/d/b.pdf", "/d/c.pdf"] {
            reader.open_file(path).unwrap();
        }

        let view = reader.view();
        assert_eq!(view.open_documents, 3);
        assert_eq!(view.buckets, 2);
        assert_eq!(view.current_bucket, 1);
        let labels: Vec<_> = view.tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["c.pdf"]);
        assert!(view.seek.left.is_active());
        assert!(!view.seek.right.is_active());

        assert!(reader.seek_left());
        let labels: Vec<_> = reader
            .view()
            .tabs
            .iter()
            .map(|t| t.path.clone())
            .collect();
        assert_eq!(labels, vec!["/d/a.pdf", "/d/b.pdf"]);
    }

    #[test]
    fn test_resize_and_hover_pass_through() {
        let mut reader = test_reader(1);
        let a = reader.open_file("/d/a.pdf").unwrap();
        reader.open_file("/d/b.pdf").unwrap();
        assert_eq!(reader.view().buckets, 2);

        reader.resize(400);
        assert_eq!(reader.view().buckets, 1);

        reader.hover_tab(&a, true).unwrap();
        assert!(reader.view().tabs[0].close_visible);
        reader.switch_tab(&a).unwrap();
        reader.close_tab(&a).unwrap();
        assert_eq!(reader.view().title, "b.pdf - Lector");
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let mut reader = test_reader(3);
        assert!(matches!(reader.open_file(""), Err(CoreError::Tab(_))));
        assert!(reader.take_messages().is_empty());
    }
}
