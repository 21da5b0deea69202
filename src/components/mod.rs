//! Components - Widgets of the Gallery
//!
//! Showcased widgets (button, card) and the layout pieces framing the page.
//! None of them perform I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
