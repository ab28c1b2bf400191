//! Shared dataset model for Wayfare worlds.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
