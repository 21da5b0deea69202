//! Registry Document Source
//!
//! The registry document is an explicit input: either the copy embedded in the
//! binary or a JSON file on disk. Failing to obtain it is the only batch-fatal
//! error in the load pipeline.

use std::fmt;
use std::path::PathBuf;

use snafu::{OptionExt, ResultExt};

use crate::assets::{REGISTRY_DOCUMENT, embedded_file};
use crate::domain::RegistryDocument;
use crate::error::{RegistryEncodingSnafu, RegistryMissingSnafu, RegistryReadSnafu, Result};

/// Where the registry document is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentSource {
    /// The `registry.json` bundled at build time
    #[default]
    Embedded,
    /// A registry document on disk
    File(PathBuf),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Embedded => write!(f, "embedded {REGISTRY_DOCUMENT}"),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and parse the registry document
pub async fn load_document(source: &DocumentSource) -> Result<RegistryDocument> {
    match source {
        DocumentSource::Embedded => {
            let data = embedded_file(REGISTRY_DOCUMENT).context(RegistryMissingSnafu {
                name: REGISTRY_DOCUMENT,
            })?;
            let text = std::str::from_utf8(&data).context(RegistryEncodingSnafu)?;
            RegistryDocument::from_json(text)
        }
        DocumentSource::File(path) => {
            let text = smol::fs::read_to_string(path)
                .await
                .context(RegistryReadSnafu { path: path.clone() })?;
            RegistryDocument::from_json(&text)
        }
    }
}
