//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_CAPACITY, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::Result;
use crate::registry::document::DocumentSource;

/// Main application configuration (`gallery.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Registry document on disk; the embedded one is used when unset
    pub registry_path: Option<PathBuf>,
    /// UI language tag (`en` or `zh`); follows the system when unset
    pub locale: Option<String>,
    /// Diagnostic entries kept in memory
    pub log_capacity: usize,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            registry_path: None,
            locale: None,
            log_capacity: DEFAULT_LOG_CAPACITY,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl GalleryConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pick the registry document source.
    ///
    /// `env_override` (the `REGISTRY_GUI_REGISTRY` variable) wins over
    /// `registry_path`; otherwise the embedded document is used.
    pub fn document_source(&self, env_override: Option<PathBuf>) -> DocumentSource {
        env_override
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| self.registry_path.clone())
            .map(DocumentSource::File)
            .unwrap_or_default()
    }
}
