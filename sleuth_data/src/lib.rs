//! Shared data model for Sleuth case files.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_case};
