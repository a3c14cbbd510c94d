//! Embedded viewer surface
//!
//! The PDF renderer is opaque: it is pointed at a URL and later reports that
//! the document finished loading. Whether the file could actually be read is
//! the renderer's business.

use serde::{Deserialize, Serialize};
use url::Url;

use lector_tabs::DocumentHandle;

use crate::Result;

/// Actions forwarded into the renderer's own toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerCommand {
    Print,
    Properties,
    Presentation,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    entry: Url,
    source: Option<DocumentHandle>,
    url: Option<Url>,
    input_forwarding: bool,
}

impl Viewer {
    pub fn new(entry: &str) -> Result<Self> {
        Ok(Self {
            entry: Url::parse(entry)?,
            source: None,
            url: None,
            input_forwarding: false,
        })
    }

    /// Point the renderer at a document. Returns the URL to load.
    pub fn load(&mut self, handle: &DocumentHandle) -> &Url {
        let mut url = self.entry.clone();
        url.query_pairs_mut().append_pair("file", handle.as_str());

        tracing::debug!(path = %handle, url = %url, "Loading document in viewer");

        self.source = Some(handle.clone());
        self.input_forwarding = false;
        self.url.insert(url)
    }

    /// The renderer finished loading `handle`; hook its input back up
    pub fn document_loaded(&mut self, handle: &DocumentHandle) -> bool {
        if self.source.as_ref() != Some(handle) {
            tracing::debug!(path = %handle, "Ignoring load notification for stale document");
            return false;
        }

        self.input_forwarding = true;
        tracing::debug!(path = %handle, "Viewer input forwarding registered");
        true
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.url = None;
        self.input_forwarding = false;
    }

    /// Forward a toolbar action. Dropped when nothing is loaded.
    pub fn command(&self, command: ViewerCommand) -> Option<ViewerCommand> {
        if self.source.is_none() {
            tracing::debug!(?command, "No document loaded, dropping viewer command");
            return None;
        }
        Some(command)
    }

    pub fn source(&self) -> Option<&DocumentHandle> {
        self.source.as_ref()
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn input_forwarding(&self) -> bool {
        self.input_forwarding
    }
}
