//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, the registry page and the log panel.
//! It also runs the event pump that moves loader diagnostics into the log state.

use gpui::{div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use smol::channel::{Receiver, Sender};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::registry::controller::RegistryController;
use crate::features::registry::page::RegistryPage;
use crate::registry::DocumentSource;
use crate::theme::colors::RegistryColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    page: Entity<RegistryPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        source: DocumentSource,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Start event pump before the page kicks off loading
        Self::start_event_pump(event_rx, entities.clone(), cx);

        let source_label = source.to_string();
        let header = cx.new(|cx| Header::new(entities.clone(), source_label, cx));
        let controller = RegistryController::new(entities.clone(), source, event_tx);
        let page = cx.new(|cx| RegistryPage::new(entities.clone(), controller, cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self {
            header,
            page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches loader events to UI
    fn start_event_pump(event_rx: Receiver<AppEvent>, entities: AppEntities, cx: &mut Context<Self>) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(RegistryColors::background())
            .child(self.header.clone())
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.page.clone()),
            )
            .child(self.log_panel.clone())
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
    }
}
