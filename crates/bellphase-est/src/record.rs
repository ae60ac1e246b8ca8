//! Per-sample estimation records.

use serde::{Deserialize, Serialize};

use bellphase_types::{ParityAggregate, ProbabilityDistribution};

use crate::estimator::{self, PhaseEstimate};

/// The full estimation output for one measurement sample.
///
/// Immutable once built: the true phase used to generate the sample, the
/// measured outcome probabilities, the parity aggregate, and the four
/// redundant phase estimates. Under noise the estimators can disagree;
/// no reconciliation into a single φ̂ is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationRecord {
    /// Phase used to generate the sample, for validation against estimates.
    pub phi_true: f64,
    /// Measured outcome probabilities.
    pub probabilities: ProbabilityDistribution,
    /// Even/odd parity split of the probabilities.
    pub parity: ParityAggregate,
    /// Estimate from the "00" population.
    pub from_p00: PhaseEstimate,
    /// Estimate from the "11" population.
    pub from_p11: PhaseEstimate,
    /// Estimate from the even-parity population.
    pub from_p_even: PhaseEstimate,
    /// Estimate from the odd-parity population.
    pub from_p_odd: PhaseEstimate,
}

impl EstimationRecord {
    /// Compute the record for one sample's probability distribution.
    pub fn compute(phi_true: f64, probabilities: ProbabilityDistribution) -> Self {
        let parity = ParityAggregate::from_distribution(&probabilities);
        Self {
            phi_true,
            probabilities,
            parity,
            from_p00: estimator::from_p00(probabilities.p00()),
            from_p11: estimator::from_p11(probabilities.p11()),
            from_p_even: estimator::from_p_even(parity.p_even),
            from_p_odd: estimator::from_p_odd(parity.p_odd),
        }
    }

    /// Number of estimators that passed the validity guard (0..=4).
    pub fn valid_estimates(&self) -> usize {
        [
            self.from_p00,
            self.from_p11,
            self.from_p_even,
            self.from_p_odd,
        ]
        .iter()
        .filter(|e| e.is_valid())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellphase_types::theory;
    use std::f64::consts::PI;

    #[test]
    fn test_record_noiseless_phi_zero() {
        let record = EstimationRecord::compute(0.0, theory::xx_distribution(0.0));
        assert_eq!(record.from_p00.phi_hat, Some(0.0));
        assert_eq!(record.from_p_even.phi_hat, Some(0.0));
        assert_eq!(record.valid_estimates(), 4);
        assert!((record.parity.p_even - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_mixed_validity() {
        // p00 slightly over 0.5 drives the P00 estimator out of domain while
        // the parity estimators, fed by a compensating p11, stay valid.
        let probs = ProbabilityDistribution::new(0.52, 0.01, 0.01, 0.46);
        let record = EstimationRecord::compute(0.0, probs);
        assert!(!record.from_p00.is_valid());
        assert!(record.from_p_even.is_valid());
        assert!(record.from_p_odd.is_valid());
        assert_eq!(record.valid_estimates(), 3);
    }

    #[test]
    fn test_record_phi_pi() {
        let record = EstimationRecord::compute(PI, theory::xx_distribution(PI));
        assert_eq!(record.from_p00.raw_argument, -1.0);
        assert_eq!(record.from_p00.phi_hat, Some(PI));
        assert_eq!(record.from_p_odd.raw_argument, -1.0);
        assert_eq!(record.from_p_odd.phi_hat, Some(PI));
    }
}
