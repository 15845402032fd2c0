//! Configuration system
//!
//! Serde-backed settings structs loadable from TOML, so demo binaries and
//! applications can pick a backend kind, window attributes, and log level
//! without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BackendKind;
use crate::types::WindowFlags;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),

    /// The `backend` field names no known backend kind.
    #[error("unknown backend kind: {0}")]
    UnknownBackend(String),
}

/// Window attributes as independent named options.
///
/// The boolean fields mirror the [`WindowFlags`] bits one-for-one so config
/// files stay flat and diffable; [`Self::to_flags`] folds them back into the
/// bitmask the window contract takes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Title bar text
    pub title: String,
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Cover the whole display
    pub fullscreen: bool,
    /// Drop the window decorations
    pub borderless: bool,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Synchronize presentation with the display refresh
    pub vsync: bool,
    /// Create the window without showing it
    pub hidden: bool,
    /// Keep the window above all others
    pub always_on_top: bool,
    /// Frame-rate cap enforced by the event pump; `None` uncapped
    pub target_fps: Option<u32>,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "unigfx".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            borderless: false,
            resizable: true,
            vsync: false,
            hidden: false,
            always_on_top: false,
            target_fps: Some(60),
        }
    }
}

impl WindowSettings {
    /// Fold the boolean options into a [`WindowFlags`] bitmask.
    #[must_use]
    pub fn to_flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::FULLSCREEN, self.fullscreen);
        flags.set(WindowFlags::BORDERLESS, self.borderless);
        flags.set(WindowFlags::RESIZABLE, self.resizable);
        flags.set(WindowFlags::VSYNC, self.vsync);
        flags.set(WindowFlags::HIDDEN, self.hidden);
        flags.set(WindowFlags::ALWAYS_ON_TOP, self.always_on_top);
        flags
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Backend kind name (`"software"` or `"headless"`)
    pub backend: String,
    /// `env_logger` filter string used when `RUST_LOG` is unset
    pub log_level: String,
    /// Window attributes (last: tables serialize after plain values)
    pub window: WindowSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend: "software".to_string(),
            window: WindowSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save settings to a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when serialization or the write fails.
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the configured backend kind.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownBackend`] for names outside the closed
    /// kind set.
    pub fn backend_kind(&self) -> Result<BackendKind, ConfigError> {
        match self.backend.to_ascii_lowercase().as_str() {
            "software" | "soft" => Ok(BackendKind::Software),
            "headless" => Ok(BackendKind::Headless),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}
