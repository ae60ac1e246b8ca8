//! Two-qubit measurement outcomes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CountsError;

/// One of the four canonical two-qubit measurement outcomes.
///
/// The label reads classical bit 1 then classical bit 0, matching the
/// bitstring keys reported by counts-returning backends. Backends that
/// report the opposite bit order can be normalized with [`Outcome::reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both qubits measured 0.
    #[serde(rename = "00")]
    ZeroZero,
    /// Bit 1 measured 0, bit 0 measured 1.
    #[serde(rename = "01")]
    ZeroOne,
    /// Bit 1 measured 1, bit 0 measured 0.
    #[serde(rename = "10")]
    OneZero,
    /// Both qubits measured 1.
    #[serde(rename = "11")]
    OneOne,
}

/// All four outcomes in canonical order (00, 01, 10, 11).
pub const ALL_OUTCOMES: [Outcome; 4] = [
    Outcome::ZeroZero,
    Outcome::ZeroOne,
    Outcome::OneZero,
    Outcome::OneOne,
];

impl Outcome {
    /// The canonical bitstring label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::ZeroZero => "00",
            Outcome::ZeroOne => "01",
            Outcome::OneZero => "10",
            Outcome::OneOne => "11",
        }
    }

    /// Index in canonical order, used for dense per-outcome storage.
    pub const fn index(self) -> usize {
        match self {
            Outcome::ZeroZero => 0,
            Outcome::ZeroOne => 1,
            Outcome::OneZero => 2,
            Outcome::OneOne => 3,
        }
    }

    /// Whether the outcome has even parity (bit sum mod 2 == 0).
    pub const fn is_even_parity(self) -> bool {
        matches!(self, Outcome::ZeroZero | Outcome::OneOne)
    }

    /// The outcome with the bit order flipped ("01" ↔ "10").
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::ZeroOne => Outcome::OneZero,
            Outcome::OneZero => Outcome::ZeroOne,
            other => other,
        }
    }
}

impl FromStr for Outcome {
    type Err = CountsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(Outcome::ZeroZero),
            "01" => Ok(Outcome::ZeroOne),
            "10" => Ok(Outcome::OneZero),
            "11" => Ok(Outcome::OneOne),
            other => Err(CountsError::InvalidBitstring(other.to_string())),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
