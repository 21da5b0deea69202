//! Log Panel Component
//!
//! Displays resolution diagnostics at the bottom of the screen.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{LOG_PANEL_COLLAPSED_HEIGHT, LOG_PANEL_HEIGHT, LOG_PANEL_VISIBLE_ENTRIES};
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::RegistryColors;
use crate::utils::format::format_time_ms;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe log changes
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(RegistryColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(RegistryColors::text_primary())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let logs = self.entities.logs.read(cx);

        let height = if self.expanded {
            px(LOG_PANEL_HEIGHT)
        } else {
            px(LOG_PANEL_COLLAPSED_HEIGHT)
        };

        let entities = self.entities.clone();

        div()
            .h(height)
            .w_full()
            .bg(RegistryColors::log_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(LOG_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(RegistryColors::text_primary())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(t(locale, "log-title")),
                            )
                            .child(
                                div()
                                    .text_color(RegistryColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({})", logs.len())),
                            )
                            .when(logs.error_count() > 0, |el| {
                                el.child(
                                    div()
                                        .text_color(RegistryColors::danger())
                                        .text_size(px(11.0))
                                        .child(format!("✕ {}", logs.error_count())),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            // Clear button
                            .child(
                                div()
                                    .id("clear-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(RegistryColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child(t(locale, "log-clear")),
                            )
                            // Toggle button
                            .child(
                                div()
                                    .id("toggle-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(RegistryColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    }))
                                    .child(if self.expanded { "▼" } else { "▲" }),
                            ),
                    ),
            )
            // Entries, newest first (only when expanded)
            .when(self.expanded, |panel| {
                let body = if logs.is_empty() {
                    div()
                        .px_4()
                        .py_1()
                        .text_color(RegistryColors::text_muted())
                        .text_size(px(12.0))
                        .child(t(locale, "log-empty"))
                        .into_any_element()
                } else {
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(
                            logs.latest(LOG_PANEL_VISIBLE_ENTRIES)
                                .map(|entry| self.render_log_entry(entry)),
                        )
                        .into_any_element()
                };
                panel.child(body)
            })
    }
}
