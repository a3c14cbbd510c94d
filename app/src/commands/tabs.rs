//! Tab management commands
use serde::{Deserialize, Serialize};

use lector_core::{TabId, TabView};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub label: String,
    pub path: String,
    pub state: String,
    pub close_visible: bool,
}

impl From<TabView> for TabInfo {
    fn from(tab: TabView) -> Self {
        let state = if tab.active { "active" } else { "inactive" };
        Self {
            id: tab.id.to_string(),
            label: tab.label,
            path: tab.path,
            state: state.to_string(),
            close_visible: tab.close_visible,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> CommandResult<T> {
    /// Erase the payload type for the wire
    pub fn into_value(self) -> CommandResult<serde_json::Value> {
        match self.data.map(serde_json::to_value).transpose() {
            Ok(data) => CommandResult {
                success: self.success,
                data,
                error: self.error,
            },
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

pub fn open_file(state: &AppState, path: String) -> CommandResult<String> {
    match state.with_reader(|reader| reader.open_file(&path)) {
        Ok(id) => CommandResult::ok(id.to_string()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn close_tab(state: &AppState, tab_id: String) -> CommandResult<()> {
    let tab_id = TabId::from(tab_id);
    match state.with_reader(|reader| reader.close_tab(&tab_id)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn switch_tab(state: &AppState, tab_id: String) -> CommandResult<()> {
    let tab_id = TabId::from(tab_id);
    match state.with_reader(|reader| reader.switch_tab(&tab_id)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn hover_tab(state: &AppState, tab_id: String, hovering: bool) -> CommandResult<()> {
    let tab_id = TabId::from(tab_id);
    match state.with_reader(|reader| reader.hover_tab(&tab_id, hovering)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn seek_left(state: &AppState) -> CommandResult<bool> {
    match state.with_reader(|reader| Ok(reader.seek_left())) {
        Ok(moved) => CommandResult::ok(moved),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn seek_right(state: &AppState) -> CommandResult<bool> {
    match state.with_reader(|reader| Ok(reader.seek_right())) {
        Ok(moved) => CommandResult::ok(moved),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Tabs of the bucket currently shown
pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    match state.read_reader(|reader| Ok(reader.view().tabs)) {
        Ok(tabs) => CommandResult::ok(tabs.into_iter().map(TabInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
