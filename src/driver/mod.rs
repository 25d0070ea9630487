//! Driver Module
//!
//! Builds the preset sweep, walks every unordered pair, asks the oracle for a
//! choice and reports the winner. Pairs are processed strictly one at a time;
//! the first failure ends the run.

mod pairs;
mod presets;
mod summary;

pub use pairs::{enumerate_pairs, pair_count, ComparisonPair, Side};
pub use presets::build_presets;
pub use summary::{ChoiceOutcome, PresetTally, RunSummary};

use chrono::Local;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::data::{ParameterValues, Preset};
use crate::oracle::{ChoiceOracle, OracleError};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("oracle answered pair ({index_a}, {index_b}) with {chosen}, which is neither side")]
    MalformedChoice {
        index_a: usize,
        index_b: usize,
        chosen: ParameterValues,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Match the oracle's answer against the two sides of `pair` by value.
///
/// A degenerate pair whose sides are equal resolves to `A`.
pub fn resolve_side(pair: &ComparisonPair<'_>, chosen: &ParameterValues) -> Result<Side, DriverError> {
    let is_a = *chosen == pair.a.parameters;
    let is_b = *chosen == pair.b.parameters;

    match (is_a, is_b) {
        (true, true) => {
            warn!(
                "Degenerate pair ({}, {}): both sides are identical, recording A",
                pair.index_a, pair.index_b
            );
            Ok(Side::A)
        }
        (true, false) => Ok(Side::A),
        (false, true) => Ok(Side::B),
        (false, false) => Err(DriverError::MalformedChoice {
            index_a: pair.index_a,
            index_b: pair.index_b,
            chosen: *chosen,
        }),
    }
}

/// Write the human-readable line for one answered pair
pub fn report(out: &mut dyn Write, pair: &ComparisonPair<'_>, outcome: &ChoiceOutcome) -> io::Result<()> {
    let chosen = pair.side(outcome.side);
    writeln!(out, "User picked preset {}: {}", outcome.side, chosen)?;
    out.flush()
}

/// Sequential pairwise comparison over a fixed preset sequence
pub struct ComparisonDriver {
    oracle: Arc<dyn ChoiceOracle>,
    presets: Vec<Preset>,
    out: Box<dyn Write + Send + Sync>,
}

impl ComparisonDriver {
    pub fn new(oracle: Arc<dyn ChoiceOracle>, presets: Vec<Preset>) -> Self {
        Self {
            oracle,
            presets,
            out: Box::new(io::stdout()),
        }
    }

    /// Send reports somewhere other than stdout
    pub fn with_output(mut self, out: impl Write + Send + Sync + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Ask the oracle to choose between the two sides of `pair`
    pub async fn request_choice(&self, pair: &ComparisonPair<'_>) -> Result<ParameterValues, DriverError> {
        debug!(
            oracle = self.oracle.name(),
            "Requesting choice between '{}' and '{}'",
            pair.a.name,
            pair.b.name
        );
        let chosen = self
            .oracle
            .prompt_choice(&pair.a.parameters, &pair.b.parameters)
            .await?;
        Ok(chosen)
    }

    /// Run every pair, then write the summary.
    pub async fn run(&mut self) -> Result<RunSummary, DriverError> {
        let total = pair_count(self.presets.len());
        info!(
            "Comparing {} presets across {} pairs using the {} oracle",
            self.presets.len(),
            total,
            self.oracle.name()
        );

        let mut outcomes = Vec::new();
        for (n, pair) in enumerate_pairs(&self.presets).enumerate() {
            let started = Instant::now();

            let chosen = match self.request_choice(&pair).await {
                Ok(chosen) => chosen,
                Err(e) => {
                    error!("Oracle failed on pair {}/{}: {}", n + 1, total, e);
                    return Err(e);
                }
            };
            let side = match resolve_side(&pair, &chosen) {
                Ok(side) => side,
                Err(e) => {
                    error!("Aborting run: {}", e);
                    return Err(e);
                }
            };

            let outcome = ChoiceOutcome {
                index_a: pair.index_a,
                index_b: pair.index_b,
                side,
                selected: pair.side(side).name.clone(),
                answered_at: Local::now(),
                duration_secs: started.elapsed().as_secs_f64(),
            };
            report(&mut *self.out, &pair, &outcome)?;
            outcomes.push(outcome);
        }

        let summary = RunSummary::new(&self.presets, outcomes);
        write!(self.out, "{}", summary)?;
        self.out.flush()?;

        info!("Run complete: {} choices recorded", summary.total_choices());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepConfig;

    fn presets(n: usize) -> Vec<Preset> {
        build_presets(n, &SweepConfig::default()).unwrap()
    }

    #[test]
    fn test_resolve_side_by_value() {
        let seq = presets(2);
        let pairs: Vec<_> = enumerate_pairs(&seq).collect();
        let pair = &pairs[0];

        // a structurally equal copy still matches
        let copy_of_b = ParameterValues { ..seq[1].parameters };
        assert_eq!(resolve_side(pair, &seq[0].parameters).unwrap(), Side::A);
        assert_eq!(resolve_side(pair, &copy_of_b).unwrap(), Side::B);
    }

    #[test]
    fn test_resolve_side_rejects_third_value() {
        let seq = presets(3);
        let pairs: Vec<_> = enumerate_pairs(&seq).collect();
        let err = resolve_side(&pairs[0], &seq[2].parameters).unwrap_err();
        assert!(matches!(err, DriverError::MalformedChoice { index_a: 0, index_b: 1, .. }));
    }

    #[test]
    fn test_degenerate_pair_resolves_to_a() {
        let preset = presets(1).remove(0);
        let seq = vec![preset.clone(), preset];
        let pairs: Vec<_> = enumerate_pairs(&seq).collect();
        assert_eq!(resolve_side(&pairs[0], &seq[0].parameters).unwrap(), Side::A);
    }

    #[test]
    fn test_report_line() {
        let seq = presets(3);
        let pairs: Vec<_> = enumerate_pairs(&seq).collect();
        let outcome = ChoiceOutcome {
            index_a: 1,
            index_b: 2,
            side: Side::B,
            selected: seq[2].name.clone(),
            answered_at: Local::now(),
            duration_secs: 0.0,
        };

        let mut buf = Vec::new();
        report(&mut buf, &pairs[2], &outcome).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "User picked preset B: transparency=1 {transparency: 1, see_through: 0.2, outline: 0.5, smoothness: 1}\n"
        );
    }
}
