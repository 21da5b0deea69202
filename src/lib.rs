//! Registry GUI Library
//!
//! This crate provides the application logic for the Registry GUI, a native
//! gallery that resolves the components listed in a component registry and
//! renders each one with sample props.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod registry;
pub mod state;
pub mod theme;
pub mod utils;
