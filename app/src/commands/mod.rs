//! Host commands
//!
//! Each line the host receives is one JSON `Request`. Requests are applied
//! one at a time, in arrival order, and answered with one `Response`.

pub mod diagnostics;
pub mod launch;
pub mod menu;
pub mod tabs;
pub mod viewer;
pub mod windows;

use serde::{Deserialize, Serialize};

use lector_core::{HostMessage, ReaderView};

use crate::state::AppState;
use tabs::CommandResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    OpenFile { path: String },
    OsOpenFile { path: String },
    SecondInstance { argv: Vec<String> },
    FrontendReady,
    CloseTab { tab_id: String },
    SwitchTab { tab_id: String },
    HoverTab { tab_id: String, hovering: bool },
    SeekLeft,
    SeekRight,
    Resize { width: u32 },
    Menu { id: String, path: Option<String> },
    DocumentLoaded { path: String },
    AboutClosed,
    CloseWindow,
    Activate,
    GetTabs,
    GetMenu,
    Snapshot,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub result: CommandResult<serde_json::Value>,
    /// Messages for the window, in the order they were produced
    pub messages: Vec<HostMessage>,
    /// Window state after the request; absent when no window is open
    pub view: Option<ReaderView>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub quit: bool,
}

impl Response {
    pub fn invalid(error: String) -> Self {
        Self {
            result: CommandResult::err(error),
            messages: Vec::new(),
            view: None,
            quit: false,
        }
    }
}

/// Apply one request and collect everything the host has to act on
pub fn dispatch(state: &AppState, request: Request) -> Response {
    tracing::debug!(?request, "Dispatching request");

    let mut quit = false;
    let result = match request {
        Request::OpenFile { path } => tabs::open_file(state, path).into_value(),
        Request::OsOpenFile { path } => launch::os_open_file(state, path).into_value(),
        Request::SecondInstance { argv } => launch::second_instance(state, argv).into_value(),
        Request::FrontendReady => diagnostics::frontend_ready(state).into_value(),
        Request::CloseTab { tab_id } => tabs::close_tab(state, tab_id).into_value(),
        Request::SwitchTab { tab_id } => tabs::switch_tab(state, tab_id).into_value(),
        Request::HoverTab { tab_id, hovering } => {
            tabs::hover_tab(state, tab_id, hovering).into_value()
        }
        Request::SeekLeft => tabs::seek_left(state).into_value(),
        Request::SeekRight => tabs::seek_right(state).into_value(),
        Request::Resize { width } => windows::resize(state, width).into_value(),
        Request::Menu { id, path } => menu::menu(state, id, path).into_value(),
        Request::DocumentLoaded { path } => viewer::document_loaded(state, path).into_value(),
        Request::AboutClosed => menu::about_closed(state).into_value(),
        Request::CloseWindow => {
            let result = windows::close_window(state);
            quit = windows::quit_on_last_window_closed();
            result.into_value()
        }
        Request::Activate => windows::activate(state).into_value(),
        Request::GetTabs => tabs::get_tabs(state).into_value(),
        Request::GetMenu => menu::get_menu(state).into_value(),
        Request::Snapshot => CommandResult::ok(()).into_value(),
    };

    let messages = state
        .with_reader(|reader| Ok(reader.take_messages()))
        .unwrap_or_default();
    quit |= messages.contains(&HostMessage::Quit);
    let view = state.read_reader(|reader| Ok(reader.view())).ok();

    Response {
        result,
        messages,
        view,
        quit,
    }
}

/// Parse and apply one protocol line
pub fn handle_line(state: &AppState, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed request");
            Response::invalid(format!("Malformed request: {e}"))
        }
    }
}
