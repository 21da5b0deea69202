//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe the registry contents.

pub mod config;
pub mod descriptor;
pub mod props;

pub use descriptor::{ComponentDescriptor, RegistryDocument, RegistryFile, RejectedItem};
pub use props::Props;
