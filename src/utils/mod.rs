//! Utility modules

pub mod fuzzy;

pub use fuzzy::{closest_match, resolve_name, NameMatch};
