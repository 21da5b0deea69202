//! Header Component
//!
//! The application header with title, registry status and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::state::registry_state::LoadState;
use crate::theme::colors::RegistryColors;
use crate::utils::config_store::save_locale;
use crate::utils::format::truncate;

/// Header component
pub struct Header {
    entities: AppEntities,
    source_label: SharedString,
}

impl Header {
    pub fn new(entities: AppEntities, source_label: impl Into<String>, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe registry changes
        cx.observe(&entities.registry, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            source_label: truncate(&source_label.into(), 48).into(),
        }
    }

    fn render_status(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let registry = self.entities.registry.read(cx);

        let (color, status, label) = match registry {
            LoadState::Loading => (RegistryColors::text_muted(), "○", t(locale, "registry-loading")),
            LoadState::Error(_) => (RegistryColors::danger(), "●", t(locale, "registry-error")),
            LoadState::Ready(map) => (
                RegistryColors::success(),
                "●",
                format!("{} {}", map.len(), t(locale, "app-components")).into(),
            ),
        };

        div()
            .flex()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_color(color)
                    .text_size(px(10.0))
                    .child(status),
            )
            .child(
                div()
                    .text_color(RegistryColors::text_primary())
                    .text_size(px(12.0))
                    .child(label),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(RegistryColors::header_bg())
            .border_b_1()
            .border_color(RegistryColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(RegistryColors::heading_accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(RegistryColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("R"),
                    )
                    .child(
                        div()
                            .text_color(RegistryColors::text_primary())
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    )
                    .child(
                        div()
                            .text_color(RegistryColors::text_muted())
                            .text_size(px(12.0))
                            .child(self.source_label.clone()),
                    ),
            )
            // Right side: status and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_status(cx))
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(RegistryColors::text_primary())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                let locale = entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                    i18n.locale
                                });
                                if let Err(e) = save_locale(locale.tag()) {
                                    tracing::warn!("Failed to save language setting: {}", e);
                                }
                            })
                            .child(lang_label),
                    ),
            )
    }
}
