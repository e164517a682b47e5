//! raypick - entity picking host
//!
//! Configuration and selection tracking around the `raypick_core` picking query.

pub mod config;
pub mod inspector;

pub use inspector::{EntityInspector, PickedEntity};
