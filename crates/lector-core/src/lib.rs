//! Lector Core
//!
//! Window-scoped state for the Lector document viewer: the tab strip, the
//! embedded viewer surface and the native application menu. The host shell
//! only delivers events and renders what this crate decides.

mod config;
mod error;
mod launch;
mod menu;
mod reader;
mod viewer;

pub use config::{Config, WindowConfig};
pub use error::CoreError;
pub use launch::{document_from_args, LaunchQueue};
pub use menu::{ApplicationMenu, MenuAction, MenuItem};
pub use reader::{HostMessage, Reader, ReaderView, TabView};
pub use viewer::{Viewer, ViewerCommand};

// Re-export tab strip components
pub use lector_tabs::{
    ControllerEvent, DocumentHandle, SeekControls, SeekState, Tab, TabController, TabError,
    TabId, TabState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr; stdout belongs to the host protocol.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
