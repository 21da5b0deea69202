//! Embedded assets for Registry-GUI
//!
//! Uses rust-embed to bundle the default registry document at compile time.

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embedded files from the registry directory
#[derive(RustEmbed)]
#[folder = "registry/"]
pub struct RegistryAssets;

/// File name of the bundled registry document
pub const REGISTRY_DOCUMENT: &str = "registry.json";

/// Get the raw bytes of an embedded registry file
pub fn embedded_file(name: &str) -> Option<Cow<'static, [u8]>> {
    RegistryAssets::get(name).map(|file| file.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_document_is_embedded() {
        assert!(embedded_file(REGISTRY_DOCUMENT).is_some());
        assert!(embedded_file("nope.json").is_none());
    }
}
