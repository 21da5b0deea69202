//! Module Table - Startup Registration of Component Modules
//!
//! Maps a module path (as written in the registry document) to a factory
//! producing the module. Lookups are asynchronous and fallible through the
//! [`ModuleSource`] seam so the loader does not care where modules come from.

use std::sync::Arc;

use ahash::AHashMap;
use futures::future::{self, LocalBoxFuture};

use crate::error::{Error, Result};
use crate::registry::module::ComponentModule;

/// Produces a module on demand; an `Err` models a load-time failure
pub type ModuleFactory<T> = Arc<dyn Fn() -> Result<ComponentModule<T>> + Send + Sync>;

/// Something that can load a component module by path
pub trait ModuleSource {
    /// Rendered output of the modules this source provides
    type Output: 'static;

    /// Load the module registered under `path`
    fn load<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<ComponentModule<Self::Output>>>;
}

/// Normalize a module path for lookup: trims whitespace, uses `/` separators
/// and drops leading `./` segments.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = path.trim().replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized
}

/// Registration table of component modules keyed by normalized path
pub struct ModuleTable<T> {
    modules: AHashMap<String, ModuleFactory<T>>,
}

impl<T> ModuleTable<T> {
    pub fn new() -> Self {
        Self {
            modules: AHashMap::new(),
        }
    }

    /// Register a factory under `path`, replacing any previous registration
    pub fn register(
        &mut self,
        path: &str,
        factory: impl Fn() -> Result<ComponentModule<T>> + Send + Sync + 'static,
    ) -> &mut Self {
        let key = normalize_path(path);
        if self.modules.insert(key.clone(), Arc::new(factory)).is_some() {
            tracing::warn!(path = %key, "Module registration replaced");
        }
        self
    }

    /// Register an already built module under `path`
    pub fn register_module(&mut self, path: &str, module: ComponentModule<T>) -> &mut Self
    where
        T: 'static,
    {
        self.register(path, move || Ok(module.clone()))
    }

    /// Whether a module is registered under `path`
    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(&normalize_path(path))
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Instantiate the module registered under `path`
    pub fn instantiate(&self, path: &str) -> Result<ComponentModule<T>> {
        let key = normalize_path(path);
        let factory = self
            .modules
            .get(&key)
            .ok_or_else(|| Error::ModuleNotFound { path: key.clone() })?;
        factory()
    }
}

impl<T> Default for ModuleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ModuleTable<T> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
        }
    }
}

impl<T: 'static> ModuleSource for ModuleTable<T> {
    type Output = T;

    fn load<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<ComponentModule<T>>> {
        Box::pin(future::ready(self.instantiate(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("registry/card/card.rs"), "registry/card/card.rs");
        assert_eq!(normalize_path("./registry/card/card.rs"), "registry/card/card.rs");
        assert_eq!(normalize_path(" ././registry\\card\\card.rs "), "registry/card/card.rs");
    }

    #[test]
    fn test_lookup_uses_normalized_path() {
        let mut table: ModuleTable<String> = ModuleTable::new();
        table.register_module("./registry/card/card.rs", ComponentModule::new());

        assert!(table.contains("registry/card/card.rs"));
        assert!(table.instantiate("registry\\card\\card.rs").is_ok());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_module() {
        let table: ModuleTable<String> = ModuleTable::new();
        let err = smol::block_on(table.load("registry/nope.rs")).expect_err("should fail");
        assert!(matches!(err, Error::ModuleNotFound { ref path } if path == "registry/nope.rs"));
    }

    #[test]
    fn test_factory_failure_is_reported() {
        let mut table: ModuleTable<String> = ModuleTable::new();
        table.register("broken.rs", || {
            Err(Error::ModuleLoad {
                path: "broken.rs".to_string(),
                message: "boom".to_string(),
            })
        });

        let err = smol::block_on(table.load("broken.rs")).expect_err("should fail");
        assert!(err.to_string().contains("boom"));
    }
}
