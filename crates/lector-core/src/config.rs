//! Viewer configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in the window title
    pub app_name: String,
    /// Width reserved for one tab in the strip, in pixels
    pub tab_width_px: u32,
    /// File extension accepted from the command line
    pub document_extension: String,
    /// Entry page of the embedded PDF viewer
    pub viewer_entry: String,
    /// Initial window geometry
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            min_width: 300,
            min_height: 300,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Lector".to_string(),
            tab_width_px: 100,
            document_extension: "pdf".to_string(),
            viewer_entry: "lector://app/lib/pdfjs/web/viewer.html".to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing keys take their default value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.json` from the user config directory, or use defaults if absent
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_dir().join("config.json");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        tracing::info!(path = %path.display(), "Loading config");
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(crate::CoreError::Config(
                "app_name cannot be empty".to_string(),
            ));
        }
        if self.tab_width_px == 0 {
            return Err(crate::CoreError::Config(
                "tab_width_px must be positive".to_string(),
            ));
        }
        url::Url::parse(&self.viewer_entry)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        user_config_home()
            .map(|dir| dir.join("Lector"))
            .unwrap_or_else(|| PathBuf::from(".lector"))
    }
}

/// Per-user settings root: `%APPDATA%` on Windows, `Application Support`
/// on macOS, `$XDG_CONFIG_HOME` or `~/.config` elsewhere
fn user_config_home() -> Option<PathBuf> {
    let env = |key: &str| std::env::var_os(key).map(PathBuf::from);

    if cfg!(target_os = "windows") {
        env("APPDATA")
    } else if cfg!(target_os = "macos") {
        env("HOME").map(|home| home.join("Library/Application Support"))
    } else {
        env("XDG_CONFIG_HOME").or_else(|| env("HOME").map(|home| home.join(".config")))
    }
}
