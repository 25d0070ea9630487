use std::fmt;

use crate::data::Preset;

/// Which side of a pair the oracle picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Two distinct positions of the preset sequence, `index_a < index_b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonPair<'a> {
    pub index_a: usize,
    pub index_b: usize,
    pub a: &'a Preset,
    pub b: &'a Preset,
}

impl<'a> ComparisonPair<'a> {
    pub fn side(&self, side: Side) -> &'a Preset {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    pub fn index(&self, side: Side) -> usize {
        match side {
            Side::A => self.index_a,
            Side::B => self.index_b,
        }
    }
}

/// Number of unordered pairs over `n` items
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// All unordered pairs of distinct positions, in lexicographic `(i, j)` order.
///
/// Pairs are produced lazily; nothing is allocated up front.
pub fn enumerate_pairs(presets: &[Preset]) -> impl Iterator<Item = ComparisonPair<'_>> {
    presets.iter().enumerate().flat_map(move |(i, a)| {
        presets
            .iter()
            .enumerate()
            .skip(i + 1)
            .map(move |(j, b)| ComparisonPair { index_a: i, index_b: j, a, b })
    })
}
