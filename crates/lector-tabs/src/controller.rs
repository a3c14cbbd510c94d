//! Tab Controller
//!
//! Owns the open tabs of one window and decides which bucket of them the
//! strip shows. `paths[i]` and `tabs[i]` always describe the same document.

use crate::bucket::{self, SeekControls};
use crate::error::TabError;
use crate::event::ControllerEvent;
use crate::tab::{DocumentHandle, Tab, TabId};
use crate::Result;

pub struct TabController {
    /// Open documents, in tab order
    paths: Vec<DocumentHandle>,
    /// Tab widgets, parallel to `paths`
    tabs: Vec<Tab>,
    /// Widgets currently rendered in the strip
    strip: Vec<TabId>,
    /// Bucket capacity
    step_tabs: usize,
    /// Total number of buckets
    buckets: usize,
    current_tab: Option<TabId>,
    /// Bucket being shown
    current_bucket: usize,
    seek: SeekControls,
    tab_width_px: u32,
    available_width: u32,
    app_name: String,
    title: String,
    strip_visible: bool,
    placeholder_visible: bool,
    events: Vec<ControllerEvent>,
}

impl TabController {
    pub fn new(app_name: impl Into<String>, tab_width_px: u32, available_width: u32) -> Self {
        let app_name = app_name.into();
        let mut controller = Self {
            paths: Vec::new(),
            tabs: Vec::new(),
            strip: Vec::new(),
            step_tabs: 1,
            buckets: 1,
            current_tab: None,
            current_bucket: 0,
            seek: SeekControls::default(),
            tab_width_px,
            available_width,
            title: app_name.clone(),
            app_name,
            strip_visible: false,
            placeholder_visible: true,
            events: Vec::new(),
        };
        controller.compute_step_tabs();
        controller
    }

    // === Tab lifecycle ===

    /// Open a document, or switch to its tab if it is already open
    pub fn open_file(&mut self, handle: DocumentHandle) -> Result<TabId> {
        if self.tabs.is_empty() {
            self.strip_visible = true;
            self.placeholder_visible = false;
            self.events.push(ControllerEvent::MenuActionsAvailable(true));
        }

        self.update_title(Some(&handle));

        if let Some(position) = self.paths.iter().position(|p| p == &handle) {
            let id = self.tabs[position].id.clone();
            tracing::debug!(tab_id = %id, path = %handle, "Document already open");
            self.switch_tab(&id)?;
            return Ok(id);
        }

        let tab = Tab::new(&handle);
        let id = tab.id.clone();

        tracing::info!(tab_id = %id, path = %handle, "Opened tab");

        self.current_tab = Some(id.clone());
        self.tabs.push(tab);
        self.paths.push(handle);
        self.strip.push(id.clone());
        self.adjust_tabs();
        self.focus_current_tab();

        Ok(id)
    }

    /// Close a tab through its close affordance
    pub fn close_tab(&mut self, tab_id: &TabId) -> Result<()> {
        let position = self.position_of(tab_id)?;

        if self.tabs.len() == 1 {
            self.clear();
            tracing::info!(tab_id = %tab_id, "Closed last tab");
            return Ok(());
        }

        if self.current_tab.as_ref() == Some(tab_id) {
            let replacement = if position == 0 { 1 } else { position - 1 };
            let replacement_id = self.tabs[replacement].id.clone();
            self.switch_tab(&replacement_id)?;
        }

        let held_only_closed = self.strip.len() == 1;

        self.paths.remove(position);
        self.tabs.remove(position);
        self.strip.retain(|id| id != tab_id);
        self.update_buckets();

        if held_only_closed {
            self.adjust_tabs();
        } else {
            self.render_bucket(self.current_bucket);
        }
        self.refresh_seek_state();

        tracing::info!(tab_id = %tab_id, remaining = self.tabs.len(), "Closed tab");

        Ok(())
    }

    /// Close the current tab. Returns false when nothing is open.
    pub fn close_current_tab(&mut self) -> Result<bool> {
        match self.current_tab.clone() {
            Some(id) => {
                self.close_tab(&id)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Make a tab current and show its document
    pub fn switch_tab(&mut self, tab_id: &TabId) -> Result<()> {
        let position = self.position_of(tab_id)?;
        if self.current_tab.as_ref() == Some(tab_id) {
            return Ok(());
        }

        tracing::debug!(tab_id = %tab_id, "Switching tab");

        self.current_tab = Some(tab_id.clone());
        let handle = self.paths[position].clone();
        self.update_title(Some(&handle));
        self.adjust_tabs();
        self.focus_current_tab();

        Ok(())
    }

    /// Pointer entered (`true`) or left (`false`) a tab
    pub fn hover_tab(&mut self, tab_id: &TabId, hovering: bool) -> Result<()> {
        let position = self.position_of(tab_id)?;
        self.tabs[position].hover(hovering);
        Ok(())
    }

    // === Bucket layout ===

    /// Re-derive the shown bucket from the current tab's position
    pub fn adjust_tabs(&mut self) {
        self.update_buckets();

        if let Some(position) = self.current_position() {
            let new_bucket = bucket::bucket_of(position, self.step_tabs);
            if new_bucket != self.current_bucket || self.strip.len() != self.step_tabs {
                self.render_bucket(new_bucket);
                self.current_bucket = new_bucket;
            }
        }

        self.refresh_seek_state();
    }

    /// Show the previous bucket without changing the current tab
    pub fn seek_left(&mut self) -> bool {
        if self.current_bucket == 0 {
            return false;
        }

        self.current_bucket -= 1;
        self.render_bucket(self.current_bucket);
        self.refresh_seek_state();
        tracing::debug!(bucket = self.current_bucket, "Seek left");
        true
    }

    /// Show the next bucket without changing the current tab
    pub fn seek_right(&mut self) -> bool {
        if self.current_bucket + 1 >= self.buckets {
            return false;
        }

        self.current_bucket += 1;
        self.render_bucket(self.current_bucket);
        self.refresh_seek_state();
        tracing::debug!(bucket = self.current_bucket, "Seek right");
        true
    }

    /// Window width changed
    pub fn handle_resize(&mut self, available_width: u32) {
        self.available_width = available_width;
        self.compute_step_tabs();

        tracing::debug!(
            width = available_width,
            step_tabs = self.step_tabs,
            "Resized tab strip"
        );

        if !self.tabs.is_empty() {
            self.adjust_tabs();
        }
    }

    pub fn refresh_seek_state(&mut self) {
        self.seek = bucket::seek_controls(self.buckets, self.current_bucket);
    }

    fn compute_step_tabs(&mut self) {
        self.step_tabs = bucket::step_tabs(self.available_width, self.tab_width_px);
    }

    fn update_buckets(&mut self) {
        self.buckets = bucket::bucket_count(self.tabs.len(), self.step_tabs);
    }

    fn render_bucket(&mut self, bucket: usize) {
        let range = bucket::bucket_range(bucket, self.step_tabs, self.tabs.len());
        self.strip = self.tabs[range].iter().map(|tab| tab.id.clone()).collect();
    }

    fn focus_current_tab(&mut self) {
        let Some(position) = self.current_position() else {
            return;
        };

        for tab in &mut self.tabs {
            tab.blur();
        }
        self.tabs[position].focus();

        self.events
            .push(ControllerEvent::LoadDocument(self.paths[position].clone()));
    }

    fn clear(&mut self) {
        self.current_tab = None;
        self.paths.clear();
        self.tabs.clear();
        self.strip.clear();
        self.buckets = 1;
        self.current_bucket = 0;
        self.strip_visible = false;
        self.placeholder_visible = true;
        self.events.push(ControllerEvent::ClearViewer);
        self.events.push(ControllerEvent::MenuActionsAvailable(false));
        self.update_title(None);
        self.refresh_seek_state();
    }

    fn update_title(&mut self, handle: Option<&DocumentHandle>) {
        self.title = match handle {
            Some(handle) => format!("{} - {}", handle.display_name(), self.app_name),
            None => self.app_name.clone(),
        };
    }

    fn position_of(&self, tab_id: &TabId) -> Result<usize> {
        self.tabs
            .iter()
            .position(|tab| &tab.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    fn current_position(&self) -> Option<usize> {
        let current = self.current_tab.as_ref()?;
        self.tabs.iter().position(|tab| &tab.id == current)
    }

    // === Accessors ===

    /// Take the notifications produced since the last drain
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn paths(&self) -> &[DocumentHandle] {
        &self.paths
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, tab_id: &TabId) -> Result<&Tab> {
        let position = self.position_of(tab_id)?;
        Ok(&self.tabs[position])
    }

    pub fn strip(&self) -> &[TabId] {
        &self.strip
    }

    /// Tabs rendered in the strip, in order
    pub fn visible_tabs(&self) -> Vec<&Tab> {
        self.strip
            .iter()
            .filter_map(|id| self.tabs.iter().find(|tab| &tab.id == id))
            .collect()
    }

    pub fn current_tab(&self) -> Option<&TabId> {
        self.current_tab.as_ref()
    }

    pub fn current_path(&self) -> Option<&DocumentHandle> {
        self.current_position().map(|position| &self.paths[position])
    }

    pub fn current_bucket(&self) -> usize {
        self.current_bucket
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }

    pub fn step_tabs(&self) -> usize {
        self.step_tabs
    }

    pub fn seek_controls(&self) -> SeekControls {
        self.seek
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn strip_visible(&self) -> bool {
        self.strip_visible
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }
}
