//! Composite Components
//!
//! Components assembled from primitives.

pub mod card;
