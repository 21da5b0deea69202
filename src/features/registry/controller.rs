//! Registry Controller
//!
//! Runs the one-shot load pipeline and settles the registry state.

use gpui::App;
use smol::channel::Sender;
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::registry::{DocumentSource, RegistryLoader, builtin, load_components};

/// Registry page controller
pub struct RegistryController {
    entities: AppEntities,
    source: DocumentSource,
    events: Sender<AppEvent>,
}

impl RegistryController {
    /// Create a new controller
    pub fn new(entities: AppEntities, source: DocumentSource, events: Sender<AppEvent>) -> Self {
        Self {
            entities,
            source,
            events,
        }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Resolve the registry in the background.
    ///
    /// Does nothing once the state has settled: there is no re-resolution.
    pub fn load(&self, cx: &mut App) {
        let registry = self.entities.registry.clone();
        if !registry.read(cx).is_loading() {
            warn!("Registry already settled, not loading again");
            return;
        }

        let source = self.source.clone();
        let loader = RegistryLoader::new(builtin::module_table()).with_events(self.events.clone());

        info!("Loading registry from {}", source);
        let _ = self
            .events
            .try_send(AppEvent::info(format!("Loading registry from {source}")));

        let events = self.events.clone();
        cx.spawn(async move |cx| {
            let result = load_components(&source, &loader).await;

            match &result {
                Ok(map) => {
                    let _ = events.try_send(AppEvent::info(format!(
                        "{} component(s) ready",
                        map.len()
                    )));
                }
                Err(e) => {
                    error!("Error loading components: {}", e);
                    let _ = events.try_send(AppEvent::error(format!("Error loading components: {e}")));
                }
            }

            let settled = registry.update(cx, |state, cx| {
                let changed = state.settle(result);
                cx.notify();
                changed
            });
            if let Err(e) = settled {
                warn!("Registry state dropped before loading finished: {}", e);
            }
        })
        .detach();
    }
}
