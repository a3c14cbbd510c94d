//! Launch-time file routing
//!
//! Documents can arrive before the window is ready to show them (file
//! associations on macOS, command-line arguments). They wait in a queue
//! until the UI reports readiness.

use crate::Result;
use lector_tabs::DocumentHandle;

/// Document named by a command line, if any.
///
/// Only the last argument is considered, and only when something besides
/// the program name was passed.
pub fn document_from_args<S: AsRef<str>>(args: &[S], extension: &str) -> Option<String> {
    if args.len() <= 1 {
        return None;
    }

    let last = args.last()?.as_ref();
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    if last.ends_with(&suffix) {
        Some(last.to_string())
    } else {
        None
    }
}

#[derive(Debug, Default)]
pub struct LaunchQueue {
    ready: bool,
    pending: Vec<String>,
}

impl LaunchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file-open request arrived. Returns the path if it can be opened now.
    ///
    /// Paths that can never name a document are rejected here and never
    /// reach the queue.
    pub fn file_opened(&mut self, path: String) -> Result<Option<String>> {
        DocumentHandle::new(path.as_str())?;

        if self.ready {
            return Ok(Some(path));
        }

        tracing::debug!(path = %path, "UI not ready, queueing file");
        self.pending.push(path);
        Ok(None)
    }

    /// The UI is ready. Returns queued paths in arrival order.
    pub fn mark_ready(&mut self) -> Vec<String> {
        self.ready = true;
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            tracing::info!(count = pending.len(), "Replaying queued files");
        }
        pending
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}
