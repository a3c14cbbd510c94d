//! Lector Tab Strip
//!
//! Owns the open-document tabs of one window and pages them through a narrow
//! title strip. Tabs are grouped into fixed-size buckets sized by the window
//! width; only the bucket being shown is rendered.

pub mod bucket;
mod controller;
mod error;
mod event;
mod state;
mod tab;

pub use bucket::{SeekControls, SeekState};
pub use controller::TabController;
pub use error::TabError;
pub use event::ControllerEvent;
pub use state::TabState;
pub use tab::{DocumentHandle, Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
