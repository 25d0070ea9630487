//! Per-choice outcomes and the end-of-run tally

use chrono::{DateTime, Local};
use std::fmt;

use super::pairs::Side;
use crate::data::Preset;

/// What the oracle decided for one pair
#[derive(Debug, Clone)]
pub struct ChoiceOutcome {
    pub index_a: usize,
    pub index_b: usize,
    pub side: Side,
    pub selected: String,
    pub answered_at: DateTime<Local>,
    /// Seconds spent waiting on the oracle
    pub duration_secs: f64,
}

impl ChoiceOutcome {
    pub fn winner_index(&self) -> usize {
        match self.side {
            Side::A => self.index_a,
            Side::B => self.index_b,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresetTally {
    pub name: String,
    pub wins: usize,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcomes: Vec<ChoiceOutcome>,
    /// Ranked by wins, ties kept in sequence order
    pub ranking: Vec<PresetTally>,
}

impl RunSummary {
    pub fn new(presets: &[Preset], outcomes: Vec<ChoiceOutcome>) -> Self {
        let mut wins = vec![0usize; presets.len()];
        for outcome in &outcomes {
            wins[outcome.winner_index()] += 1;
        }

        let mut ranking: Vec<PresetTally> = presets
            .iter()
            .zip(wins)
            .map(|(preset, wins)| PresetTally { name: preset.name.clone(), wins })
            .collect();
        // stable sort preserves sequence order among ties
        ranking.sort_by(|x, y| y.wins.cmp(&x.wins));

        Self { outcomes, ranking }
    }

    pub fn total_choices(&self) -> usize {
        self.outcomes.len()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "═".repeat(40))?;
        writeln!(f, "Summary: {} choices", self.total_choices())?;
        writeln!(f, "{}", "═".repeat(40))?;
        for (rank, tally) in self.ranking.iter().enumerate() {
            writeln!(f, "{:>3}. {:<24} {} wins", rank + 1, tally.name, tally.wins)?;
        }
        Ok(())
    }
}
