//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local helpers.

pub mod registry;
