//! Pairwise Preset Comparison
//!
//! Sweeps one render parameter across its domain and asks an external oracle
//! to pick a winner for every unordered pair of presets:
//! - Fixed-field parameter sets and named presets
//! - Deterministic preset sweep and pair enumeration
//! - Pluggable oracle (remote service, terminal operator, scripted)
//! - Per-pair report and end-of-run win tally

pub mod config;
pub mod data;
pub mod driver;
pub mod oracle;
pub mod utils;

// Re-exports for convenience
pub use config::{DuelConfig, OracleConfig, OracleMode, SweepConfig};
pub use data::{ParameterKey, ParameterValues, Preset};
pub use driver::{build_presets, enumerate_pairs, ComparisonDriver, DriverError, RunSummary, Side};
pub use oracle::{ChoiceOracle, OracleError};
