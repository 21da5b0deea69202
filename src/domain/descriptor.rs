//! Descriptor - Registry Document and Component Descriptors

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A file entry belonging to a registry item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Module path used to look up the implementation
    pub path: String,
    /// File kind (e.g. `registry:component`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl RegistryFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: None,
        }
    }
}

/// A declarative record naming a component and where to find it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Unique lowercase key
    pub name: String,
    /// Display name
    #[serde(default)]
    pub title: String,
    /// Short description shown under the title
    #[serde(default)]
    pub description: String,
    /// Files of the component; only the first one is loaded.
    /// Missing `files` is tolerated here and fails at resolution time.
    #[serde(default)]
    pub files: Vec<RegistryFile>,
    /// Item kind (e.g. `registry:component`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Package dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Other registry items this one builds on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
}

impl ComponentDescriptor {
    /// Create a descriptor with a single file entry
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            description: String::new(),
            files: vec![RegistryFile::new(path)],
            kind: None,
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        }
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Path of the module implementing this component
    pub fn entry_path(&self) -> Option<&str> {
        self.files.first().map(|file| file.path.as_str())
    }
}

/// The registry document enumerating all showcased components
///
/// Items are converted one by one: an item that does not describe a
/// component is kept out of `items` and recorded in `rejected`, so one bad
/// entry never costs the rest of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct RegistryDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub items: Vec<ComponentDescriptor>,
    /// Items that could not be read as a component descriptor
    #[serde(skip_serializing)]
    pub rejected: Vec<RejectedItem>,
}

/// A registry item that failed to convert into a [`ComponentDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedItem {
    /// Position in the document's `items` array
    pub index: usize,
    /// The item's `name`, when it has a string one
    pub name: Option<String>,
    pub message: String,
}

impl RejectedItem {
    /// Name for diagnostics: the item name or its position
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.index),
        }
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "$schema", default)]
    schema: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    items: Vec<serde_json::Value>,
}

impl From<RawDocument> for RegistryDocument {
    fn from(raw: RawDocument) -> Self {
        let mut items = Vec::with_capacity(raw.items.len());
        let mut rejected = Vec::new();

        for (index, value) in raw.items.into_iter().enumerate() {
            let name = value
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string);
            match serde_json::from_value::<ComponentDescriptor>(value) {
                Ok(descriptor) => items.push(descriptor),
                Err(e) => rejected.push(RejectedItem {
                    index,
                    name,
                    message: e.to_string(),
                }),
            }
        }

        Self {
            schema: raw.schema,
            name: raw.name,
            homepage: raw.homepage,
            items,
            rejected,
        }
    }
}

impl RegistryDocument {
    /// Parse a registry document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry_document() {
        let json = r#"{
            "$schema": "https://ui.shadcn.com/schema/registry.json",
            "name": "demo",
            "items": [
                {
                    "name": "card",
                    "type": "registry:component",
                    "title": "Card",
                    "description": "A card",
                    "registryDependencies": ["button"],
                    "files": [
                        { "path": "registry/card/card.rs", "type": "registry:component" },
                        { "path": "registry/card/extra.rs" }
                    ]
                }
            ]
        }"#;

        let doc = RegistryDocument::from_json(json).expect("parse failed");
        assert_eq!(doc.name.as_deref(), Some("demo"));
        assert_eq!(doc.items.len(), 1);

        let card = &doc.items[0];
        assert_eq!(card.name, "card");
        assert_eq!(card.kind.as_deref(), Some("registry:component"));
        assert_eq!(card.registry_dependencies, vec!["button".to_string()]);
        assert_eq!(card.entry_path(), Some("registry/card/card.rs"));
    }

    #[test]
    fn test_missing_files_is_not_a_parse_error() {
        let json = r#"{ "items": [ { "name": "ghost", "title": "Ghost" } ] }"#;
        let doc = RegistryDocument::from_json(json).expect("parse failed");
        assert!(doc.items[0].files.is_empty());
        assert_eq!(doc.items[0].entry_path(), None);
        assert_eq!(doc.items[0].description, "");
    }

    #[test]
    fn test_malformed_items_are_rejected_individually() {
        let json = r#"{
            "items": [
                { "name": "card", "files": [ { "path": "registry/card/card.rs" } ] },
                { "name": "nopath", "files": [ { "type": "registry:component" } ] },
                { "title": "Nameless", "files": [ { "path": "registry/x.rs" } ] },
                { "name": "nullfiles", "files": null },
                "not an object"
            ]
        }"#;

        let doc = RegistryDocument::from_json(json).expect("parse failed");
        let names: Vec<_> = doc.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["card"]);

        let labels: Vec<_> = doc.rejected.iter().map(RejectedItem::label).collect();
        assert_eq!(labels, vec!["nopath", "#2", "nullfiles", "#4"]);
        assert!(doc.rejected[0].message.contains("path"));
    }

    #[test]
    fn test_missing_items_is_a_parse_error() {
        assert!(RegistryDocument::from_json(r#"{ "name": "empty" }"#).is_err());
        assert!(RegistryDocument::from_json("not json").is_err());
    }
}
