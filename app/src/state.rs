//! Application state management
use lector_core::{Config, CoreError, LaunchQueue, Reader, Result, TabId};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
///
/// Holds the window's `Reader` while the window exists. Closing the window
/// drops it; activating the app builds a fresh one.
pub struct AppState {
    config: Config,
    reader: Arc<RwLock<Option<Reader>>>,
    launch: Arc<RwLock<LaunchQueue>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load_or_default()?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let reader = Reader::new(config.clone())?;

        Ok(Self {
            config,
            reader: Arc::new(RwLock::new(Some(reader))),
            launch: Arc::new(RwLock::new(LaunchQueue::new())),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `f` against the open window
    pub fn with_reader<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Reader) -> Result<T>,
    {
        let mut guard = self.reader.write();
        match guard.as_mut() {
            Some(reader) => f(reader),
            None => Err(CoreError::WindowClosed),
        }
    }

    pub fn read_reader<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Reader) -> Result<T>,
    {
        let guard = self.reader.read();
        match guard.as_ref() {
            Some(reader) => f(reader),
            None => Err(CoreError::WindowClosed),
        }
    }

    pub fn has_window(&self) -> bool {
        self.reader.read().is_some()
    }

    /// Tear down the window. Returns false if it was already closed.
    pub fn close_window(&self) -> bool {
        let closed = self.reader.write().take().is_some();
        if closed {
            tracing::info!("Window closed");
        }
        closed
    }

    /// Recreate the window if none is open. Returns true if one was built.
    pub fn activate(&self) -> Result<bool> {
        let mut guard = self.reader.write();
        if guard.is_some() {
            return Ok(false);
        }

        *guard = Some(Reader::new(self.config.clone())?);
        tracing::info!("Window recreated");
        Ok(true)
    }

    /// A file-open request from the OS. Opened now if the UI is ready,
    /// otherwise queued.
    pub fn file_opened(&self, path: String) -> Result<Option<TabId>> {
        let ready = self.launch.write().file_opened(path)?;
        match ready {
            Some(path) => Ok(Some(self.with_reader(|reader| reader.open_file(&path))?)),
            None => Ok(None),
        }
    }

    /// The UI finished loading; open everything that was waiting.
    ///
    /// Without a window the queue is left untouched. A queued file that
    /// fails to open is skipped and the rest still open.
    pub fn frontend_ready(&self) -> Result<Vec<TabId>> {
        let mut guard = self.reader.write();
        let reader = guard.as_mut().ok_or(CoreError::WindowClosed)?;

        let pending = self.launch.write().mark_ready();
        let mut opened = Vec::with_capacity(pending.len());
        for path in pending {
            match reader.open_file(&path) {
                Ok(id) => opened.push(id),
                Err(e) => tracing::warn!(path = %path, error = %e, "Skipping queued file"),
            }
        }

        Ok(opened)
    }

    pub fn pending_files(&self) -> Vec<String> {
        self.launch.read().pending().to_vec()
    }
}
