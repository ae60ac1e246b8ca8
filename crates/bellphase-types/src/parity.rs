//! Even/odd parity aggregation.

use serde::{Deserialize, Serialize};

use crate::distribution::ProbabilityDistribution;

/// Parity split of a probability distribution.
///
/// `p_even` sums the even-parity outcomes {00, 11}; `p_odd` sums the
/// odd-parity outcomes {01, 10}. For any distribution,
/// `p_even + p_odd == 1` within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParityAggregate {
    /// P(00) + P(11).
    pub p_even: f64,
    /// P(01) + P(10).
    pub p_odd: f64,
}

impl ParityAggregate {
    /// Aggregate a distribution into its parity split.
    pub fn from_distribution(probs: &ProbabilityDistribution) -> Self {
        Self {
            p_even: probs.p00() + probs.p11(),
            p_odd: probs.p01() + probs.p10(),
        }
    }
}
