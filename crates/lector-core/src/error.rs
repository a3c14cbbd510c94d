//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] lector_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid viewer URL: {0}")]
    ViewerUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("Menu item disabled: {0}")]
    MenuItemDisabled(String),

    #[error("Menu item {0} requires a document path")]
    MissingPath(String),

    #[error("Window is closed")]
    WindowClosed,
}

// Implement std::io::Error conversion for fs operations
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
