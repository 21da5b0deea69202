//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Log panel heights
pub const LOG_PANEL_HEIGHT: f32 = 160.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;
/// Entries rendered by the log panel
pub const LOG_PANEL_VISIBLE_ENTRIES: usize = 50;

/// Diagnostic ring buffer capacity
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Registry grid layout
pub const GRID_MAX_WIDTH: f32 = 1152.0;
pub const GRID_CARD_WIDTH: f32 = 352.0;
pub const PREVIEW_MIN_HEIGHT: f32 = 120.0;

/// Environment variable overriding the registry document path
pub const REGISTRY_PATH_ENV: &str = "REGISTRY_GUI_REGISTRY";

/// Config and log file names
pub const CONFIG_FILE: &str = "gallery.toml";
pub const LOG_FILE_PREFIX: &str = "registry-gui.log";
