//! Shot sampling from closed-form distributions.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use bellphase_est::RawSample;
use bellphase_types::outcome::ALL_OUTCOMES;
use bellphase_types::{Basis, MeasurementCounts, Outcome, ProbabilityDistribution};

/// Synthetic measurement source.
///
/// Each shot draws one outcome from the theory distribution's CDF; counts
/// accumulate per outcome, exactly as a counts-returning backend reports
/// them.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    basis: Basis,
    shots: u64,
    seed: u64,
}

impl SyntheticSource {
    /// Source measuring in `basis` with `shots` shots per phase point.
    pub fn new(basis: Basis, shots: u64) -> Self {
        Self {
            basis,
            shots,
            seed: 0,
        }
    }

    /// Set the RNG seed. Runs with the same configuration and seed
    /// produce identical counts.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Shots per phase point.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Measurement basis.
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Sample counts for one phase using the given random number generator.
    pub fn sample_counts_with_rng<R: Rng>(&self, phi: f64, rng: &mut R) -> MeasurementCounts {
        let dist = self.basis.distribution(phi);
        let mut counts = MeasurementCounts::new();
        for _ in 0..self.shots {
            let r: f64 = rng.r#gen();
            counts.record(draw(&dist, r));
        }
        counts
    }

    /// Sample one raw sample per phase, in order, from a fresh seeded RNG.
    pub fn run(&self, phis: &[f64]) -> Vec<RawSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        debug!(
            basis = %self.basis,
            shots = self.shots,
            seed = self.seed,
            points = phis.len(),
            "sampling synthetic counts"
        );
        phis.iter()
            .map(|&phi| {
                let counts = self.sample_counts_with_rng(phi, &mut rng);
                RawSample {
                    phi,
                    backend: Some("synthetic".into()),
                    shots: Some(self.shots),
                    counts: to_sparse_map(&counts),
                }
            })
            .collect()
    }
}

/// Draw one outcome from the distribution's CDF.
fn draw(dist: &ProbabilityDistribution, r: f64) -> Outcome {
    let mut cumulative = 0.0;
    for outcome in ALL_OUTCOMES {
        cumulative += dist.get(outcome);
        if r < cumulative {
            return outcome;
        }
    }
    // Fallback for r landing on accumulated rounding slack.
    Outcome::OneOne
}

/// Counts as a bitstring map holding only observed outcomes, the way
/// backends report them.
fn to_sparse_map(counts: &MeasurementCounts) -> BTreeMap<String, u64> {
    counts
        .iter()
        .filter(|&(_, c)| c > 0)
        .map(|(o, c)| (o.as_str().to_string(), c))
        .collect()
}
