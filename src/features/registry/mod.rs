//! Registry Feature
//!
//! The gallery page listing every resolved component.

pub mod controller;
pub mod page;
pub mod sample_props;
