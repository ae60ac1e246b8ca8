//! Closed-form outcome distributions for the phase-encoded Bell state.
//!
//! The prepared state is (|00⟩ + e^{iφ}|11⟩)/√2. Measuring in the Z⊗Z
//! basis never sees φ; rotating both qubits with a Hadamard before
//! measurement (X⊗X basis) moves the phase into the outcome populations:
//!
//! ```text
//! P(00) = P(11) = (1 + cos φ) / 4
//! P(01) = P(10) = (1 − cos φ) / 4
//! ```
//!
//! These distributions feed the synthetic measurement source and the
//! theory-curve export used for plotting overlays.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::distribution::ProbabilityDistribution;

/// Measurement basis for both qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    /// Hadamard on both qubits before measurement.
    X,
    /// Direct computational-basis measurement.
    Z,
}

impl Basis {
    /// Closed-form outcome distribution for phase `phi` in this basis.
    pub fn distribution(self, phi: f64) -> ProbabilityDistribution {
        match self {
            Basis::X => xx_distribution(phi),
            Basis::Z => zz_distribution(),
        }
    }
}

impl FromStr for Basis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Basis::X),
            "z" => Ok(Basis::Z),
            other => Err(format!("unknown basis '{other}': expected x or z")),
        }
    }
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Basis::X => f.write_str("x"),
            Basis::Z => f.write_str("z"),
        }
    }
}

/// X⊗X outcome probabilities for phase `phi`.
pub fn xx_distribution(phi: f64) -> ProbabilityDistribution {
    let c = phi.cos();
    ProbabilityDistribution::new(
        (1.0 + c) / 4.0,
        (1.0 - c) / 4.0,
        (1.0 - c) / 4.0,
        (1.0 + c) / 4.0,
    )
}

/// Z⊗Z outcome probabilities; the relative phase is invisible here.
pub fn zz_distribution() -> ProbabilityDistribution {
    ProbabilityDistribution::new(0.5, 0.0, 0.0, 0.5)
}

/// 1-sigma binomial standard error of an estimated probability.
///
/// Good enough for visual error bars; `p_hat` slightly outside [0, 1]
/// from floating-point noise is treated as zero variance.
pub fn binomial_stderr(p_hat: f64, shots: u64) -> f64 {
    ((p_hat * (1.0 - p_hat)).max(0.0) / shots.max(1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_xx_phi_zero_is_even_only() {
        let probs = xx_distribution(0.0);
        assert!((probs.p00() - 0.5).abs() < 1e-12);
        assert!((probs.p11() - 0.5).abs() < 1e-12);
        assert!(probs.p01().abs() < 1e-12);
        assert!(probs.p10().abs() < 1e-12);
    }

    #[test]
    fn test_xx_phi_pi_is_odd_only() {
        let probs = xx_distribution(PI);
        assert!(probs.p00().abs() < 1e-12);
        assert!((probs.p01() - 0.5).abs() < 1e-12);
        assert!((probs.p10() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_xx_sums_to_one_across_phases() {
        for i in 0..=8 {
            let phi = i as f64 * PI / 4.0;
            assert!((xx_distribution(phi).sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zz_ignores_phase() {
        let probs = Basis::Z.distribution(1.234);
        assert_eq!(probs.p00(), 0.5);
        assert_eq!(probs.p11(), 0.5);
        assert_eq!(probs.p01(), 0.0);
    }

    #[test]
    fn test_binomial_stderr() {
        // p=0.5 over 1000 shots: sqrt(0.25/1000)
        let se = binomial_stderr(0.5, 1000);
        assert!((se - 0.015811).abs() < 1e-5);
        // degenerate inputs stay finite
        assert_eq!(binomial_stderr(0.0, 1000), 0.0);
        assert_eq!(binomial_stderr(1.0 + 1e-15, 0), 0.0);
    }

    #[test]
    fn test_basis_parsing() {
        assert_eq!("X".parse::<Basis>().unwrap(), Basis::X);
        assert_eq!("z".parse::<Basis>().unwrap(), Basis::Z);
        assert!("y".parse::<Basis>().is_err());
    }
}
