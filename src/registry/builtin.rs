//! Built-in Component Modules
//!
//! Registers the widgets shipped with the gallery under the paths used by the
//! bundled `registry.json`.

use gpui::{AnyElement, IntoElement};

use crate::components::composite::card::Card;
use crate::components::primitives::button::Button;
use crate::domain::Props;
use crate::registry::module::ComponentModule;
use crate::registry::table::ModuleTable;

pub const CARD_MODULE: &str = "registry/card/card.rs";
pub const BUTTON_MODULE: &str = "registry/button/button.rs";

/// Module exporting `Card`
pub fn card_module() -> ComponentModule<AnyElement> {
    ComponentModule::new().export("Card", |props: &Props| {
        Card::from_props("showcase-card", props).into_any_element()
    })
}

/// Module exporting `Button`
pub fn button_module() -> ComponentModule<AnyElement> {
    ComponentModule::new().export("Button", |props: &Props| {
        Button::from_props("showcase-button", props)
            .on_click(|_, _, _| tracing::info!("Showcase button clicked"))
            .into_any_element()
    })
}

/// The module table of all built-in components
pub fn module_table() -> ModuleTable<AnyElement> {
    let mut table = ModuleTable::new();
    table
        .register_module(CARD_MODULE, card_module())
        .register_module(BUTTON_MODULE, button_module());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::document::{DocumentSource, load_document};

    #[test]
    fn test_builtin_table_covers_embedded_registry() {
        let table = module_table();
        let doc = smol::block_on(load_document(&DocumentSource::Embedded)).expect("load failed");

        for item in &doc.items {
            let path = item.entry_path().expect("embedded item without files");
            assert!(table.contains(path), "no module registered for {path}");
        }
        assert_eq!(table.len(), doc.items.len());
    }

    #[test]
    fn test_builtin_modules_follow_pascal_case() {
        let card = card_module();
        let button = button_module();
        assert!(card.get("Card").is_some());
        assert!(button.get("Button").is_some());
        assert!(card.default_target().is_none());
    }
}
