//! Registry Loader - Resolves Descriptors to Render Targets
//!
//! Every descriptor is resolved independently. A descriptor that cannot be
//! resolved is logged and left out of the resulting [`ComponentMap`]; it never
//! aborts the batch.

use hashlink::LinkedHashMap;
use smol::channel::Sender;
use snafu::OptionExt;
use tracing::{debug, error, info, warn};

use crate::domain::{ComponentDescriptor, RejectedItem};
use crate::error::{ExportNotFoundSnafu, NoFilesSnafu, Result};
use crate::eventing::app_event::AppEvent;
use crate::registry::module::{ExportMatch, RenderTarget};
use crate::registry::table::ModuleSource;

/// A descriptor together with its resolved implementation
#[derive(Debug)]
pub struct ResolvedComponent<T> {
    pub descriptor: ComponentDescriptor,
    pub target: RenderTarget<T>,
    /// Convention that located the export
    pub matched: ExportMatch,
}

impl<T> ResolvedComponent<T> {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

impl<T> Clone for ResolvedComponent<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            target: self.target.clone(),
            matched: self.matched.clone(),
        }
    }
}

/// Component name -> resolved component, iterated in resolution order
#[derive(Debug)]
pub struct ComponentMap<T> {
    entries: LinkedHashMap<String, ResolvedComponent<T>>,
}

impl<T> ComponentMap<T> {
    pub fn new() -> Self {
        Self {
            entries: LinkedHashMap::new(),
        }
    }

    /// Insert a resolved component. Entries are write-once: returns `false`
    /// and keeps the existing entry when the name is already present.
    fn insert(&mut self, component: ResolvedComponent<T>) -> bool {
        if self.entries.contains_key(component.name()) {
            return false;
        }
        self.entries.insert(component.name().to_string(), component);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedComponent<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedComponent<T>> {
        self.entries.values()
    }
}

impl<T> Default for ComponentMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves component descriptors against a [`ModuleSource`]
pub struct RegistryLoader<S> {
    source: S,
    events: Option<Sender<AppEvent>>,
}

impl<S: ModuleSource> RegistryLoader<S> {
    /// Create a loader over a module source
    pub fn new(source: S) -> Self {
        Self {
            source,
            events: None,
        }
    }

    /// Forward diagnostics to the UI event channel
    pub fn with_events(mut self, events: Sender<AppEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve every descriptor, skipping the ones that fail
    pub async fn resolve(&self, descriptors: &[ComponentDescriptor]) -> ComponentMap<S::Output> {
        let mut map = ComponentMap::new();

        for descriptor in descriptors {
            if map.contains(&descriptor.name) {
                warn!(name = %descriptor.name, "Duplicate component name, keeping the first entry");
                self.emit(AppEvent::warn(format!(
                    "Duplicate component {} skipped",
                    descriptor.name
                )));
                continue;
            }

            match self.resolve_one(descriptor).await {
                Ok(resolved) => {
                    info!(name = %descriptor.name, "Found component with {}", resolved.matched);
                    self.emit(AppEvent::info(format!(
                        "Found component {} with {}",
                        descriptor.name, resolved.matched
                    )));
                    map.insert(resolved);
                }
                Err(e) => {
                    error!(name = %descriptor.name, "Error loading component: {}", e);
                    self.emit(AppEvent::error(format!(
                        "Error loading component {}: {}",
                        descriptor.name, e
                    )));
                }
            }
        }

        debug!(
            resolved = map.len(),
            total = descriptors.len(),
            "Component resolution finished"
        );
        map
    }

    /// Resolve a single descriptor
    pub async fn resolve_one(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> Result<ResolvedComponent<S::Output>> {
        let path = descriptor.entry_path().context(NoFilesSnafu {
            name: descriptor.name.as_str(),
        })?;

        let module = self.source.load(path).await?;

        let (matched, target) = module.find_export(&descriptor.name).context(ExportNotFoundSnafu {
            name: descriptor.name.as_str(),
        })?;

        Ok(ResolvedComponent {
            descriptor: descriptor.clone(),
            target,
            matched,
        })
    }

    /// Report a registry item that never became a descriptor.
    ///
    /// Logged like any other per-item failure; the batch goes on.
    pub fn reject(&self, item: &RejectedItem) {
        error!(item = %item.label(), "Error loading component: {}", item.message);
        self.emit(AppEvent::error(format!(
            "Error loading component {}: {}",
            item.label(),
            item.message
        )));
    }

    fn emit(&self, event: AppEvent) {
        if let Some(events) = &self.events {
            let _ = events.try_send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::domain::{Props, RegistryFile};
    use crate::error::Error;
    use crate::registry::module::ComponentModule;
    use crate::registry::table::ModuleTable;

    fn table() -> ModuleTable<String> {
        let mut table = ModuleTable::new();
        table
            .register_module(
                "registry/card/card.rs",
                ComponentModule::new().export("Card", |props: &Props| {
                    format!("Card[{}]", props.get_or("content", ""))
                }),
            )
            .register_module(
                "registry/button/button.rs",
                ComponentModule::new().export("Button", |props: &Props| {
                    format!("Button[{}]", props.get_or("title", ""))
                }),
            )
            .register_module(
                "registry/badge/badge.rs",
                ComponentModule::new().export("badge", |_: &Props| "badge".to_string()),
            )
            .register_module(
                "registry/alert/alert.rs",
                ComponentModule::new().default_export(|_: &Props| "alert".to_string()),
            )
            .register_module(
                "registry/empty/empty.rs",
                ComponentModule::new().export("Unrelated", |_: &Props| String::new()),
            )
            .register("registry/broken/broken.rs", || {
                Err(Error::ModuleLoad {
                    path: "registry/broken/broken.rs".to_string(),
                    message: "initializer panicked".to_string(),
                })
            });
        table
    }

    fn descriptor(name: &str, path: &str) -> ComponentDescriptor {
        ComponentDescriptor::new(name, path)
    }

    #[test]
    fn test_resolves_every_valid_descriptor() {
        let loader = RegistryLoader::new(table());
        let descriptors = vec![
            descriptor("card", "registry/card/card.rs"),
            descriptor("button", "registry/button/button.rs"),
            descriptor("badge", "registry/badge/badge.rs"),
            descriptor("alert", "registry/alert/alert.rs"),
        ];

        let map = smol::block_on(loader.resolve(&descriptors));

        assert_eq!(map.len(), 4);
        assert_eq!(
            map.names().collect::<Vec<_>>(),
            vec!["card", "button", "badge", "alert"]
        );
        assert_eq!(
            map.get("card").map(|c| c.matched.clone()),
            Some(ExportMatch::PascalCase("Card".to_string()))
        );
        assert_eq!(
            map.get("badge").map(|c| c.matched.clone()),
            Some(ExportMatch::ExactName("badge".to_string()))
        );
        assert_eq!(
            map.get("alert").map(|c| c.matched.clone()),
            Some(ExportMatch::Default)
        );
    }

    #[test]
    fn test_empty_files_is_skipped() {
        let loader = RegistryLoader::new(table());
        let mut no_files = descriptor("card", "unused");
        no_files.files.clear();
        let descriptors = vec![no_files, descriptor("button", "registry/button/button.rs")];

        let map = smol::block_on(loader.resolve(&descriptors));
        assert!(!map.contains("card"));
        assert!(map.contains("button"));

        let err = smol::block_on(loader.resolve_one(&descriptors[0])).expect_err("should fail");
        assert!(matches!(err, Error::NoFiles { .. }));
    }

    #[test]
    fn test_load_failures_are_isolated() {
        let loader = RegistryLoader::new(table());
        let descriptors = vec![
            descriptor("missing", "registry/missing/missing.rs"),
            descriptor("card", "registry/card/card.rs"),
            descriptor("broken", "registry/broken/broken.rs"),
            descriptor("empty", "registry/empty/empty.rs"),
            descriptor("button", "registry/button/button.rs"),
        ];

        let map = smol::block_on(loader.resolve(&descriptors));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["card", "button"]);
    }

    #[test]
    fn test_only_first_file_is_used() {
        let loader = RegistryLoader::new(table());
        let mut card = descriptor("card", "registry/card/card.rs");
        card.files.push(RegistryFile::new("registry/missing/missing.rs"));

        let map = smol::block_on(loader.resolve(&[card]));
        assert!(map.contains("card"));
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let loader = RegistryLoader::new(table());
        let descriptors = vec![
            descriptor("card", "registry/card/card.rs").title("First"),
            descriptor("card", "registry/card/card.rs").title("Second"),
        ];

        let map = smol::block_on(loader.resolve(&descriptors));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("card").map(|c| c.descriptor.title.as_str()), Some("First"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let loader = RegistryLoader::new(table());
        let descriptors = vec![
            descriptor("card", "registry/card/card.rs"),
            descriptor("button", "registry/button/button.rs"),
            descriptor("missing", "registry/missing/missing.rs"),
        ];

        let first = smol::block_on(loader.resolve(&descriptors));
        let second = smol::block_on(loader.resolve(&descriptors));

        assert_eq!(
            first.names().collect::<Vec<_>>(),
            second.names().collect::<Vec<_>>()
        );
        for component in first.iter() {
            let again = second.get(component.name()).expect("missing on second pass");
            assert!(component.target.same_target(&again.target));
        }
    }

    #[test]
    fn test_diagnostics_are_forwarded() {
        let (tx, rx) = smol::channel::unbounded();
        let loader = RegistryLoader::new(table()).with_events(tx);
        let descriptors = vec![
            descriptor("card", "registry/card/card.rs"),
            descriptor("missing", "registry/missing/missing.rs"),
        ];

        smol::block_on(loader.resolve(&descriptors));

        let messages: Vec<String> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter_map(|event| match event {
                AppEvent::Log { message, .. } => Some(message),
            })
            .collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("capitalized name Card"));
        assert!(messages[1].contains("Module not found"));
    }

    /// A source that suspends before every load and counts calls
    struct DeferredSource {
        inner: ModuleTable<String>,
        loads: Cell<usize>,
    }

    impl ModuleSource for DeferredSource {
        type Output = String;

        fn load<'a>(
            &'a self,
            path: &'a str,
        ) -> LocalBoxFuture<'a, crate::error::Result<ComponentModule<String>>> {
            Box::pin(async move {
                smol::future::yield_now().await;
                self.loads.set(self.loads.get() + 1);
                self.inner.instantiate(path)
            })
        }
    }

    #[test]
    fn test_asynchronous_source() {
        let loader = RegistryLoader::new(DeferredSource {
            inner: table(),
            loads: Cell::new(0),
        });
        let descriptors = vec![
            descriptor("card", "registry/card/card.rs"),
            descriptor("broken", "registry/broken/broken.rs"),
            descriptor("button", "registry/button/button.rs"),
        ];

        let map = smol::block_on(loader.resolve(&descriptors));
        assert_eq!(map.len(), 2);
        assert_eq!(loader.source().loads.get(), 3);
    }
}
