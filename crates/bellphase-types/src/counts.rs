//! Shot counts per measurement outcome.

use serde::{Deserialize, Serialize};

use crate::distribution::ProbabilityDistribution;
use crate::error::{CountsError, CountsResult};
use crate::outcome::{ALL_OUTCOMES, Outcome};

/// Shot counts for the four two-qubit outcomes.
///
/// Storage is dense: every outcome has a slot, and outcomes absent from the
/// input are zero. Backends routinely omit outcomes they never observed
/// (a noiseless φ=0 run reports only "00" and "11"), so constructors accept
/// partial maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementCounts {
    counts: [u64; 4],
}

impl MeasurementCounts {
    /// Empty counts (all outcomes zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(bitstring, count)` pairs.
    ///
    /// Missing outcomes default to zero. A key outside the canonical set
    /// `{00, 01, 10, 11}` is rejected with [`CountsError::InvalidBitstring`];
    /// repeated keys accumulate.
    pub fn from_pairs<'a, I>(pairs: I) -> CountsResult<Self>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut counts = Self::new();
        for (key, count) in pairs {
            let outcome: Outcome = key.parse()?;
            counts.add(outcome, count);
        }
        Ok(counts)
    }

    /// Count for a single outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    /// Add shots to an outcome.
    pub fn add(&mut self, outcome: Outcome, count: u64) {
        self.counts[outcome.index()] += count;
    }

    /// Record a single shot.
    pub fn record(&mut self, outcome: Outcome) {
        self.add(outcome, 1);
    }

    /// Total number of shots across all outcomes.
    pub fn total_shots(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate `(outcome, count)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        ALL_OUTCOMES.into_iter().map(|o| (o, self.get(o)))
    }

    /// The most frequent outcome, or `None` when all counts are zero.
    pub fn most_frequent(&self) -> Option<(Outcome, u64)> {
        self.iter().filter(|&(_, c)| c > 0).max_by_key(|&(_, c)| c)
    }

    /// Counts with the bit order flipped ("01" and "10" swapped).
    ///
    /// Used to normalize backends that report classical bits in the
    /// opposite order.
    pub fn reversed(&self) -> Self {
        let mut counts = Self::new();
        for (outcome, count) in self.iter() {
            counts.add(outcome.reversed(), count);
        }
        counts
    }

    /// Convert to a normalized probability distribution.
    ///
    /// Fails with [`CountsError::EmptySample`] when the total shot count is
    /// zero: callers must not receive NaN or silently-zero probabilities.
    pub fn to_probabilities(&self) -> CountsResult<ProbabilityDistribution> {
        let total = self.total_shots();
        if total == 0 {
            return Err(CountsError::EmptySample);
        }
        let total = total as f64;
        Ok(ProbabilityDistribution::new(
            self.get(Outcome::ZeroZero) as f64 / total,
            self.get(Outcome::ZeroOne) as f64 / total,
            self.get(Outcome::OneZero) as f64 / total,
            self.get(Outcome::OneOne) as f64 / total,
        ))
    }
}
