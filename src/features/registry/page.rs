//! Registry Page
//!
//! Shows a loading indicator, the terminal error, or the grid of resolved
//! components with their title, description and a rendered sample.

use gpui::{
    div, prelude::*, px, AnyElement, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{GRID_CARD_WIDTH, GRID_MAX_WIDTH, PREVIEW_MIN_HEIGHT};
use crate::features::registry::controller::RegistryController;
use crate::features::registry::sample_props::SampleProps;
use crate::i18n::{t, Locale};
use crate::registry::{ComponentMap, DocumentSource, ResolvedComponent};
use crate::state::registry_state::LoadState;
use crate::theme::colors::RegistryColors;

/// Text of the error view: the translated error prefix and the message
pub fn error_text(locale: Locale, message: &str) -> String {
    format!("{}: {}", t(locale, "registry-error"), message)
}

/// Text naming where the registry document came from
pub fn source_text(locale: Locale, source: &DocumentSource) -> String {
    format!("{}: {}", t(locale, "app-source"), source)
}

/// Registry page component
pub struct RegistryPage {
    entities: AppEntities,
    controller: RegistryController,
}

impl RegistryPage {
    /// Create the page and start resolving the registry
    pub fn new(entities: AppEntities, controller: RegistryController, cx: &mut Context<Self>) -> Self {
        // Observe registry state changes
        cx.observe(&entities.registry, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        controller.load(cx);

        Self {
            entities,
            controller,
        }
    }

    fn render_centered(&self, child: impl IntoElement) -> AnyElement {
        div()
            .size_full()
            .min_h(px(320.0))
            .flex()
            .items_center()
            .justify_center()
            .child(child)
            .into_any_element()
    }

    fn render_loading(&self, locale: Locale) -> AnyElement {
        self.render_centered(
            div()
                .text_color(RegistryColors::text_primary())
                .child(t(locale, "registry-loading")),
        )
    }

    fn render_error(&self, locale: Locale, message: &str) -> AnyElement {
        self.render_centered(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_color(RegistryColors::danger())
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(error_text(locale, message)),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(RegistryColors::text_muted())
                        .child(source_text(locale, self.controller.source())),
                ),
        )
    }

    fn render_entry(&self, index: usize, component: &ResolvedComponent<AnyElement>) -> impl IntoElement {
        let descriptor = &component.descriptor;
        let preview = component
            .target
            .render(&SampleProps::for_descriptor(descriptor).to_props());

        div()
            .id(("registry-entry", index))
            .w(px(GRID_CARD_WIDTH))
            .p_6()
            .rounded_xl()
            .border_1()
            .border_color(RegistryColors::border())
            .bg(RegistryColors::card_bg())
            .hover(|s| s.border_color(RegistryColors::border_hover()).shadow_lg())
            .child(
                div()
                    .mb_2()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(RegistryColors::text_primary())
                    .child(SharedString::from(descriptor.title.clone())),
            )
            .child(
                div()
                    .mb_6()
                    .text_sm()
                    .text_color(RegistryColors::text_secondary())
                    .child(SharedString::from(descriptor.description.clone())),
            )
            .child(
                div()
                    .p_5()
                    .border_1()
                    .border_color(RegistryColors::border())
                    .rounded_lg()
                    .bg(RegistryColors::preview_bg())
                    .child(
                        div()
                            .min_h(px(PREVIEW_MIN_HEIGHT))
                            .p_4()
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(preview),
                    ),
            )
    }

    fn render_grid(&self, locale: Locale, components: &ComponentMap<AnyElement>) -> AnyElement {
        let body = if components.is_empty() {
            div()
                .text_color(RegistryColors::text_muted())
                .child(t(locale, "registry-empty"))
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_wrap()
                .gap_8()
                .children(
                    components
                        .iter()
                        .enumerate()
                        .map(|(index, component)| self.render_entry(index, component)),
                )
                .into_any_element()
        };

        div()
            .w_full()
            .max_w(px(GRID_MAX_WIDTH))
            .mx_auto()
            .px_4()
            .py_12()
            .child(
                div()
                    .mb_2()
                    .text_3xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(RegistryColors::heading_accent())
                    .child(t(locale, "app-title")),
            )
            .child(
                div()
                    .mb_12()
                    .text_lg()
                    .text_color(RegistryColors::text_secondary())
                    .child(t(locale, "registry-subtitle")),
            )
            .child(body)
            .into_any_element()
    }
}

impl Render for RegistryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let registry = self.entities.registry.read(cx);

        let content = match registry {
            LoadState::Loading => self.render_loading(locale),
            LoadState::Error(message) => self.render_error(locale, message),
            LoadState::Ready(components) => self.render_grid(locale, components),
        };

        div()
            .id("registry-page")
            .size_full()
            .overflow_y_scroll()
            .bg(RegistryColors::background())
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(
            error_text(Locale::EnUS, "registry unavailable"),
            "Error: registry unavailable"
        );
        assert!(error_text(Locale::ZhCN, "boom").ends_with(": boom"));
    }

    #[test]
    fn test_source_text() {
        let source = DocumentSource::File(PathBuf::from("/tmp/registry.json"));
        assert!(source_text(Locale::EnUS, &source).ends_with(": /tmp/registry.json"));
        assert!(source_text(Locale::EnUS, &DocumentSource::Embedded).contains("embedded registry.json"));
    }
}
