//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{AnyElement, App, AppContext, Entity, Global};

use crate::domain::config::GalleryConfig;
use crate::i18n::Locale;
use crate::state::{i18n_state::I18nState, log_state::LogState, registry_state::LoadState};

/// Load state of the registry rendered as GPUI elements
pub type RegistryState = LoadState<AnyElement>;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Registry resolution state
    pub registry: Entity<RegistryState>,
    /// Diagnostic messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: &GalleryConfig, cx: &mut App) -> Self {
        let locale = config
            .locale
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_else(Locale::system);

        Self {
            registry: cx.new(|_| RegistryState::default()),
            logs: cx.new(|_| LogState::new(config.log_capacity)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
