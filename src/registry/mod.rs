//! Registry - Component Resolution
//!
//! Turns the declarative registry document into renderable components:
//! the document lists descriptors, the module table provides implementations,
//! and the loader matches one to the other.

pub mod builtin;
pub mod document;
pub mod loader;
pub mod module;
pub mod table;

pub use document::DocumentSource;
pub use loader::{ComponentMap, RegistryLoader, ResolvedComponent};
pub use module::{ComponentModule, ExportMatch, RenderTarget};
pub use table::{ModuleSource, ModuleTable};

use tracing::info;

use crate::error::Result;

/// Read the registry document and resolve every component it lists.
///
/// Fails only when the document itself cannot be obtained. Malformed items
/// and per-component failures are logged by the loader and left out of the map.
pub async fn load_components<S: ModuleSource>(
    source: &DocumentSource,
    loader: &RegistryLoader<S>,
) -> Result<ComponentMap<S::Output>> {
    let document = document::load_document(source).await?;
    info!(
        source = %source,
        items = document.items.len(),
        rejected = document.rejected.len(),
        "Registry document loaded"
    );
    for item in &document.rejected {
        loader.reject(item);
    }
    Ok(loader.resolve(&document.items).await)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::Props;
    use crate::eventing::app_event::AppEvent;
    use crate::features::registry::sample_props::SampleProps;
    use crate::state::log_state::LogLevel;
    use crate::state::registry_state::LoadState;

    fn recording_table() -> ModuleTable<String> {
        fn describe(component: &str, props: &Props) -> String {
            let args: Vec<String> = props.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("{component}({})", args.join(", "))
        }

        let mut table = ModuleTable::new();
        table
            .register_module(
                builtin::CARD_MODULE,
                ComponentModule::new().export("Card", |props: &Props| describe("Card", props)),
            )
            .register_module(
                builtin::BUTTON_MODULE,
                ComponentModule::new().export("Button", |props: &Props| describe("Button", props)),
            );
        table
    }

    #[test]
    fn test_embedded_registry_renders_with_sample_props() {
        let loader = RegistryLoader::new(recording_table());
        let map = smol::block_on(load_components(&DocumentSource::Embedded, &loader))
            .expect("embedded registry should load");

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["card", "button"]);

        let rendered: Vec<String> = map
            .iter()
            .map(|c| c.target.render(&SampleProps::for_descriptor(&c.descriptor).to_props()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Card(buttonText=Click Me, content=This is sample content for the card component.)",
                "Button(title=Sample Button)",
            ]
        );
    }

    #[test]
    fn test_malformed_item_does_not_fail_the_batch() {
        let path = std::env::temp_dir().join(format!(
            "registry-gui-partial-{}.json",
            std::process::id()
        ));
        let json = format!(
            r#"{{ "items": [
                {{ "name": "card", "files": [ {{ "path": "{card}" }} ] }},
                {{ "name": "button", "files": [ {{ "type": "registry:component" }} ] }},
                {{ "files": [ {{ "path": "{button}" }} ] }},
                {{ "name": "badge", "files": null }}
            ] }}"#,
            card = builtin::CARD_MODULE,
            button = builtin::BUTTON_MODULE,
        );
        std::fs::write(&path, json).expect("write failed");

        let (tx, rx) = smol::channel::unbounded();
        let loader = RegistryLoader::new(recording_table()).with_events(tx);
        let result = smol::block_on(load_components(&DocumentSource::File(path.clone()), &loader));
        let _ = std::fs::remove_file(&path);

        let map = result.expect("malformed items must not fail the document");
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["card"]);

        let errors = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|event| matches!(event, AppEvent::Log { level: LogLevel::Error, .. }))
            .count();
        assert_eq!(errors, 3);

        let mut state = LoadState::Loading;
        state.settle(Ok(map));
        assert_eq!(state.component_count(), 1);
    }

    #[test]
    fn test_unreadable_document_ends_in_error_state() {
        let loader = RegistryLoader::new(recording_table());
        let source = DocumentSource::File(PathBuf::from("/nonexistent/registry-gui/registry.json"));

        let mut state = LoadState::Loading;
        state.settle(smol::block_on(load_components(&source, &loader)));

        assert!(!state.is_ready());
        assert!(state.error_message().is_some_and(|m| !m.is_empty()));
    }
}
