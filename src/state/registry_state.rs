//! RegistryState - Load State of the Component Registry
//!
//! `Loading` moves to either `Error` or `Ready` exactly once; both are terminal.

use crate::error::Result;
use crate::registry::loader::ComponentMap;

/// Observable state of the registry view
#[derive(Debug)]
pub enum LoadState<T> {
    /// Resolution in progress
    Loading,
    /// The registry document could not be obtained
    Error(String),
    /// Resolution finished
    Ready(ComponentMap<T>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    /// Resolved components, when ready
    pub fn components(&self) -> Option<&ComponentMap<T>> {
        match self {
            LoadState::Ready(map) => Some(map),
            _ => None,
        }
    }

    /// Error message, when failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Number of resolved components (0 unless ready)
    pub fn component_count(&self) -> usize {
        self.components().map_or(0, ComponentMap::len)
    }

    /// Move to `Ready`. Ignored (returns `false`) unless currently loading.
    pub fn ready(&mut self, map: ComponentMap<T>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Ignoring registry result: state already settled");
            return false;
        }
        *self = LoadState::Ready(map);
        true
    }

    /// Move to `Error`. Ignored (returns `false`) unless currently loading.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Ignoring registry error: state already settled");
            return false;
        }
        let mut message = message.into();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        *self = LoadState::Error(message);
        true
    }

    /// Settle from the outcome of the load pipeline
    pub fn settle(&mut self, result: Result<ComponentMap<T>>) -> bool {
        match result {
            Ok(map) => self.ready(map),
            Err(e) => self.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_loading_to_ready() {
        let mut state: LoadState<String> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.ready(ComponentMap::new()));
        assert!(state.is_ready());
        assert_eq!(state.component_count(), 0);
    }

    #[test]
    fn test_loading_to_error() {
        let mut state: LoadState<String> = LoadState::Loading;
        assert!(state.fail("registry unavailable"));
        assert_eq!(state.error_message(), Some("registry unavailable"));
        assert!(state.components().is_none());
    }

    #[test]
    fn test_terminal_states_do_not_move() {
        let mut state: LoadState<String> = LoadState::Loading;
        state.fail("first");
        assert!(!state.ready(ComponentMap::new()));
        assert!(!state.fail("second"));
        assert_eq!(state.error_message(), Some("first"));

        let mut state: LoadState<String> = LoadState::Loading;
        state.ready(ComponentMap::new());
        assert!(!state.fail("late"));
        assert!(state.is_ready());
    }

    #[test]
    fn test_error_message_is_never_empty() {
        let mut state: LoadState<String> = LoadState::Loading;
        state.settle(Err(Error::Invalid {
            message: String::new(),
        }));
        assert!(state.error_message().is_some_and(|m| !m.is_empty()));

        let mut state: LoadState<String> = LoadState::Loading;
        state.fail("");
        assert_eq!(state.error_message(), Some("Unknown error"));
    }
}
