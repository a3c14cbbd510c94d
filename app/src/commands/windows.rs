use super::tabs::CommandResult;
use crate::state::AppState;

pub fn resize(state: &AppState, width: u32) -> CommandResult<usize> {
    match state.with_reader(|reader| {
        reader.resize(width);
        Ok(reader.tabs().step_tabs())
    }) {
        Ok(step) => CommandResult::ok(step),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn close_window(state: &AppState) -> CommandResult<bool> {
    CommandResult::ok(state.close_window())
}

/// Dock icon clicked (macOS): rebuild the window if it was closed
pub fn activate(state: &AppState) -> CommandResult<bool> {
    match state.activate() {
        Ok(created) => CommandResult::ok(created),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Whether closing the last window should end the process
pub fn quit_on_last_window_closed() -> bool {
    !cfg!(target_os = "macos")
}
