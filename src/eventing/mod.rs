//! Eventing - Background -> UI Events

pub mod app_event;
