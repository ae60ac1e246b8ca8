//! Normalized outcome probabilities.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Probability of each two-qubit outcome.
///
/// Instances come from [`MeasurementCounts::to_probabilities`] or from the
/// closed-form constructors in [`theory`], both of which produce
/// probabilities in [0, 1] summing to 1 within floating-point tolerance.
///
/// [`MeasurementCounts::to_probabilities`]: crate::MeasurementCounts::to_probabilities
/// [`theory`]: crate::theory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    p00: f64,
    p01: f64,
    p10: f64,
    p11: f64,
}

impl ProbabilityDistribution {
    /// Build a distribution from per-outcome probabilities.
    pub fn new(p00: f64, p01: f64, p10: f64, p11: f64) -> Self {
        Self { p00, p01, p10, p11 }
    }

    /// Probability of outcome "00".
    pub fn p00(&self) -> f64 {
        self.p00
    }

    /// Probability of outcome "01".
    pub fn p01(&self) -> f64 {
        self.p01
    }

    /// Probability of outcome "10".
    pub fn p10(&self) -> f64 {
        self.p10
    }

    /// Probability of outcome "11".
    pub fn p11(&self) -> f64 {
        self.p11
    }

    /// Probability of a single outcome.
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::ZeroZero => self.p00,
            Outcome::ZeroOne => self.p01,
            Outcome::OneZero => self.p10,
            Outcome::OneOne => self.p11,
        }
    }

    /// Sum of all four probabilities (1.0 up to floating-point error).
    pub fn sum(&self) -> f64 {
        self.p00 + self.p01 + self.p10 + self.p11
    }
}
