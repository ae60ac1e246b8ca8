//! Core measurement types for two-qubit phase estimation.
//!
//! This crate holds the value types shared by the estimator and the
//! synthetic measurement source:
//!
//! - [`Outcome`]: the four canonical two-qubit measurement outcomes
//! - [`MeasurementCounts`]: shot counts per outcome
//! - [`ProbabilityDistribution`]: normalized outcome probabilities
//! - [`ParityAggregate`]: even/odd parity split of a distribution
//! - [`theory`]: closed-form outcome distributions for the phase-encoded
//!   Bell state (|00⟩ + e^{iφ}|11⟩)/√2
//!
//! All types are value-like snapshots: once constructed they are never
//! mutated, and every derived quantity (probabilities, parity) is computed
//! from an earlier snapshot.
//!
//! # Example
//!
//! ```
//! use bellphase_types::MeasurementCounts;
//!
//! let counts = MeasurementCounts::from_pairs([("00", 504u64), ("11", 496u64)])?;
//! let probs = counts.to_probabilities()?;
//! assert!((probs.p00() - 0.504).abs() < 1e-12);
//! # Ok::<(), bellphase_types::CountsError>(())
//! ```

pub mod counts;
pub mod distribution;
pub mod error;
pub mod outcome;
pub mod parity;
pub mod theory;

pub use counts::MeasurementCounts;
pub use distribution::ProbabilityDistribution;
pub use error::{CountsError, CountsResult};
pub use outcome::Outcome;
pub use parity::ParityAggregate;
pub use theory::Basis;
