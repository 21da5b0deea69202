//! Error types for Registry-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, directories, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// The registry document could not be read from disk
    #[snafu(display("Failed to read registry document {}: {source}", path.display()))]
    RegistryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The embedded registry document is missing from the binary
    #[snafu(display("Registry document not found: {name}"))]
    RegistryMissing { name: String },

    /// The registry document is not valid UTF-8
    #[snafu(display("Registry document is not valid UTF-8: {source}"))]
    RegistryEncoding { source: std::str::Utf8Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// No module is registered under the requested path
    #[snafu(display("Module not found: {path}"))]
    ModuleNotFound { path: String },

    /// A registered module failed while being instantiated
    #[snafu(display("Failed to load module {path}: {message}"))]
    ModuleLoad { path: String, message: String },

    /// The descriptor lists no files to load
    #[snafu(display("Component {name} lists no files"))]
    NoFiles { name: String },

    /// None of the export-name conventions matched
    #[snafu(display("Could not find component export in module for: {name}"))]
    ExportNotFound { name: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
