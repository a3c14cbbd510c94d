use super::tabs::CommandResult;
use crate::state::AppState;

/// The embedded renderer finished loading `path`
pub fn document_loaded(state: &AppState, path: String) -> CommandResult<bool> {
    match state.with_reader(|reader| reader.document_loaded(&path)) {
        Ok(registered) => CommandResult::ok(registered),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
