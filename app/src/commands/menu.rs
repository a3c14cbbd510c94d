use lector_core::{MenuAction, MenuItem};

use super::tabs::CommandResult;
use crate::state::AppState;

pub fn menu(state: &AppState, id: String, path: Option<String>) -> CommandResult<MenuAction> {
    match state.with_reader(|reader| reader.menu_command(&id, path)) {
        Ok(action) => CommandResult::ok(action),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Menu layout for building the native menu bar
pub fn get_menu(state: &AppState) -> CommandResult<Vec<MenuItem>> {
    match state.read_reader(|reader| Ok(reader.menu().items().to_vec())) {
        Ok(items) => CommandResult::ok(items),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn about_closed(state: &AppState) -> CommandResult<()> {
    match state.with_reader(|reader| {
        reader.about_closed();
        Ok(())
    }) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
