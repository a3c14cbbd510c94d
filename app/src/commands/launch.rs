//! File-open requests from outside the window
use super::tabs::CommandResult;
use crate::state::AppState;

/// File association / dock drop. Queued until the frontend is ready.
pub fn os_open_file(state: &AppState, path: String) -> CommandResult<Option<String>> {
    match state.file_opened(path) {
        Ok(id) => CommandResult::ok(id.map(|id| id.to_string())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// A second instance was started with `argv`
pub fn second_instance(state: &AppState, argv: Vec<String>) -> CommandResult<Option<String>> {
    if !state.has_window() {
        tracing::debug!("Second instance ignored, no window");
        return CommandResult::ok(None);
    }

    match state.with_reader(|reader| reader.second_instance(&argv)) {
        Ok(id) => CommandResult::ok(id.map(|id| id.to_string())),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
