use super::tabs::CommandResult;
use crate::state::AppState;

pub fn frontend_ready(state: &AppState) -> CommandResult<Vec<String>> {
    tracing::info!("Frontend ready");
    match state.frontend_ready() {
        Ok(ids) => CommandResult::ok(ids.into_iter().map(|id| id.to_string()).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
