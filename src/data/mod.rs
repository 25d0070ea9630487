//! Data Module
//!
//! Parameter sets and the named presets built from them.

pub mod parameters;
pub mod preset;

pub use parameters::{ParameterKey, ParameterValues};
pub use preset::Preset;
