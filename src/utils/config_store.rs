//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::constants::CONFIG_FILE;
use crate::domain::config::GalleryConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "registry-gui", "registry-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// - **Linux**: `~/.config/registry-gui/`
/// - **macOS**: `~/Library/Application Support/dev.registry-gui.registry-gui/`
/// - **Windows**: `%APPDATA%\registry-gui\registry-gui\config\`
pub fn config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the directory holding log files
pub fn log_dir() -> Result<PathBuf> {
    ensure_dir(&project_dirs()?.data_local_dir().join("logs"))
}

/// Load a config file, returning defaults when it does not exist
pub fn load_config_from(path: &Path) -> Result<GalleryConfig> {
    if !path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(path)?;
    GalleryConfig::from_toml_str(&content)
}

/// Save a config file
pub fn save_config_to(path: &Path, config: &GalleryConfig) -> Result<()> {
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

/// Store the UI language in the config file at `path`, keeping other settings
pub fn save_locale_to(path: &Path, tag: &str) -> Result<()> {
    let mut config = load_config_from(path)?;
    config.locale = Some(tag.to_string());
    save_config_to(path, &config)
}

/// Store the UI language in `gallery.toml`
pub fn save_locale(tag: &str) -> Result<()> {
    save_locale_to(&config_dir()?.join(CONFIG_FILE), tag)
}

/// Load `gallery.toml` from the config directory.
///
/// Never fails: problems are logged and defaults are used.
pub fn load_config() -> GalleryConfig {
    let path = match config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE),
        Err(e) => {
            warn!("Config directory unavailable, using defaults: {}", e);
            return GalleryConfig::default();
        }
    };

    match load_config_from(&path) {
        Ok(config) => {
            info!("Config file: {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}, using defaults: {}", path.display(), e);
            GalleryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("registry-gui-missing-config.toml");
        let _ = fs::remove_file(&path);
        assert_eq!(load_config_from(&path).expect("load failed"), GalleryConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("registry-gui-config-{}.toml", std::process::id()));
        let config = GalleryConfig {
            locale: Some("zh".to_string()),
            log_capacity: 10,
            ..Default::default()
        };

        save_config_to(&path, &config).expect("save failed");
        let loaded = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.expect("load failed"), config);
    }

    #[test]
    fn test_save_locale_keeps_other_settings() {
        let path = std::env::temp_dir().join(format!("registry-gui-locale-{}.toml", std::process::id()));
        let config = GalleryConfig {
            log_capacity: 42,
            ..Default::default()
        };
        save_config_to(&path, &config).expect("save failed");

        save_locale_to(&path, "zh").expect("save locale failed");
        let loaded = load_config_from(&path);
        let _ = fs::remove_file(&path);

        let loaded = loaded.expect("load failed");
        assert_eq!(loaded.locale.as_deref(), Some("zh"));
        assert_eq!(loaded.log_capacity, 42);
    }
}
