//! Property tests for probability and parity invariants.

use proptest::prelude::*;

use bellphase_types::{MeasurementCounts, Outcome, ParityAggregate};

proptest! {
    /// Probabilities derived from any non-empty counts sum to 1.
    #[test]
    fn probabilities_sum_to_one(
        c00 in 0u64..100_000,
        c01 in 0u64..100_000,
        c10 in 0u64..100_000,
        c11 in 1u64..100_000,
    ) {
        let counts = MeasurementCounts::from_pairs([
            ("00", c00),
            ("01", c01),
            ("10", c10),
            ("11", c11),
        ]).unwrap();
        let probs = counts.to_probabilities().unwrap();
        prop_assert!((probs.sum() - 1.0).abs() < 1e-9);
        for outcome in [Outcome::ZeroZero, Outcome::ZeroOne, Outcome::OneZero, Outcome::OneOne] {
            let p = probs.get(outcome);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }

    /// Parity halves always complement each other.
    #[test]
    fn parity_complements(
        c00 in 0u64..100_000,
        c01 in 0u64..100_000,
        c10 in 0u64..100_000,
        c11 in 1u64..100_000,
    ) {
        let counts = MeasurementCounts::from_pairs([
            ("00", c00),
            ("01", c01),
            ("10", c10),
            ("11", c11),
        ]).unwrap();
        let parity = ParityAggregate::from_distribution(&counts.to_probabilities().unwrap());
        prop_assert!((parity.p_even + parity.p_odd - 1.0).abs() < 1e-9);
    }

    /// Bit-order reversal preserves the total and the parity split.
    #[test]
    fn reversal_preserves_parity(
        c00 in 0u64..100_000,
        c01 in 0u64..100_000,
        c10 in 0u64..100_000,
        c11 in 1u64..100_000,
    ) {
        let counts = MeasurementCounts::from_pairs([
            ("00", c00),
            ("01", c01),
            ("10", c10),
            ("11", c11),
        ]).unwrap();
        let reversed = counts.reversed();
        prop_assert_eq!(counts.total_shots(), reversed.total_shots());

        let parity = ParityAggregate::from_distribution(&counts.to_probabilities().unwrap());
        let parity_rev = ParityAggregate::from_distribution(&reversed.to_probabilities().unwrap());
        prop_assert!((parity.p_even - parity_rev.p_even).abs() < 1e-12);
    }
}
