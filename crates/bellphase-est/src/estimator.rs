//! Inverse-cosine phase estimators.
//!
//! In the X⊗X basis the outcome populations of (|00⟩ + e^{iφ}|11⟩)/√2 are
//! P00 = P11 = (1 + cos φ)/4 and P01 = P10 = (1 − cos φ)/4. Inverting any
//! of the four statistics below yields an estimate of φ:
//!
//! | estimator    | raw argument    |
//! |--------------|-----------------|
//! | from P00     | 4·p00 − 1       |
//! | from P11     | 4·p11 − 1       |
//! | from P_even  | 2·p_even − 1    |
//! | from P_odd   | 1 − 2·p_odd     |
//!
//! All four share one validity policy: an argument outside [-1, 1] marks
//! the estimate invalid. The argument is never clamped into range —
//! clamping would silently misrepresent statistically anomalous or
//! undersampled data as a confident boundary estimate.
//!
//! `acos` is even and restricted to [0, π], so a single estimate cannot
//! distinguish φ from −φ or from 2π − φ. That ambiguity is inherent to
//! the method and is preserved as-is.

use serde::{Deserialize, Serialize};

/// One phase estimate: the inverse-cosine argument and, when the argument
/// lies in [-1, 1], the resulting angle in [0, π] radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseEstimate {
    /// The value handed to `acos`, before the validity check.
    pub raw_argument: f64,
    /// `acos(raw_argument)`, or `None` when the argument is out of domain.
    pub phi_hat: Option<f64>,
}

impl PhaseEstimate {
    /// Whether the estimate passed the validity guard.
    pub fn is_valid(&self) -> bool {
        self.phi_hat.is_some()
    }
}

/// Shared validity guard: out-of-domain arguments are invalid, never clamped.
fn guarded_acos(raw_argument: f64) -> PhaseEstimate {
    let phi_hat = if !(-1.0..=1.0).contains(&raw_argument) {
        None
    } else {
        Some(raw_argument.acos())
    };
    PhaseEstimate {
        raw_argument,
        phi_hat,
    }
}

/// Estimate φ from the "00" population.
pub fn from_p00(p00: f64) -> PhaseEstimate {
    guarded_acos(4.0 * p00 - 1.0)
}

/// Estimate φ from the "11" population.
pub fn from_p11(p11: f64) -> PhaseEstimate {
    guarded_acos(4.0 * p11 - 1.0)
}

/// Estimate φ from the even-parity population P00 + P11.
pub fn from_p_even(p_even: f64) -> PhaseEstimate {
    guarded_acos(2.0 * p_even - 1.0)
}

/// Estimate φ from the odd-parity population P01 + P10.
pub fn from_p_odd(p_odd: f64) -> PhaseEstimate {
    guarded_acos(1.0 - 2.0 * p_odd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_raw_argument_formulas() {
        assert_eq!(from_p00(0.3).raw_argument, 4.0 * 0.3 - 1.0);
        assert_eq!(from_p11(0.3).raw_argument, 4.0 * 0.3 - 1.0);
        assert_eq!(from_p_even(0.3).raw_argument, 2.0 * 0.3 - 1.0);
        assert_eq!(from_p_odd(0.3).raw_argument, 1.0 - 2.0 * 0.3);
    }

    #[test]
    fn test_boundaries_are_valid() {
        // arg = 1 exactly: p00 = 0.5
        let est = from_p00(0.5);
        assert_eq!(est.raw_argument, 1.0);
        assert_eq!(est.phi_hat, Some(0.0));

        // arg = -1 exactly: p00 = 0
        let est = from_p00(0.0);
        assert_eq!(est.raw_argument, -1.0);
        assert_eq!(est.phi_hat, Some(PI));
    }

    #[test]
    fn test_out_of_domain_is_invalid_not_clamped() {
        // p00 = 0.51 -> arg = 1.04: invalid, not pulled back to 1.0
        let est = from_p00(0.51);
        assert!(est.raw_argument > 1.0);
        assert_eq!(est.phi_hat, None);
        assert!(!est.is_valid());

        // Marginally past the boundary is still invalid.
        let est = from_p_even((1.0 + (1.0 + 1e-12)) / 2.0);
        assert!(est.raw_argument > 1.0);
        assert_eq!(est.phi_hat, None);

        let est = from_p_odd(1.0 + 1e-9);
        assert!(est.raw_argument < -1.0);
        assert_eq!(est.phi_hat, None);
    }

    #[test]
    fn test_noiseless_phi_zero() {
        // P00 = P11 = 0.5, P01 = P10 = 0
        let est = from_p00(0.5);
        assert_eq!((est.raw_argument, est.phi_hat), (1.0, Some(0.0)));
        let est = from_p_even(1.0);
        assert_eq!((est.raw_argument, est.phi_hat), (1.0, Some(0.0)));
        let est = from_p_odd(0.0);
        assert_eq!((est.raw_argument, est.phi_hat), (1.0, Some(0.0)));
    }

    #[test]
    fn test_noiseless_phi_pi() {
        // P01 = P10 = 0.5, P00 = P11 = 0
        let est = from_p_odd(1.0);
        assert_eq!(est.raw_argument, -1.0);
        assert_eq!(est.phi_hat, Some(PI));
        let est = from_p00(0.0);
        assert_eq!(est.raw_argument, -1.0);
        assert_eq!(est.phi_hat, Some(PI));
    }

    #[test]
    fn test_determinism() {
        let a = from_p_even(0.7321);
        let b = from_p_even(0.7321);
        assert_eq!(a, b);
    }
}
