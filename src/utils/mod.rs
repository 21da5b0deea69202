//! Utilities - Config storage and formatting helpers

pub mod config_store;
pub mod format;
