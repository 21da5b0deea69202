//! Layout Components
//!
//! Header and log panel framing the registry page.

pub mod header;
pub mod log_panel;
