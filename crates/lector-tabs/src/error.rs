//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Invalid document path: {0}")]
    InvalidPath(String),
}
