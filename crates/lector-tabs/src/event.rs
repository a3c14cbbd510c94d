//! Notifications the controller sends to the outside world

use serde::{Deserialize, Serialize};

use crate::tab::DocumentHandle;

/// Outbound message produced by a controller operation.
///
/// The controller never talks to the viewer or the native menu directly; the
/// owner drains these after every operation and delivers them in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// Enable or disable the print, properties, close and fullscreen actions
    MenuActionsAvailable(bool),
    /// Ask the rendering surface to show this document (fire-and-forget)
    LoadDocument(DocumentHandle),
    /// The last document was closed; the rendering surface should go blank
    ClearViewer,
}
