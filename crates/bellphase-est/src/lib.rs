//! Phase estimation from two-qubit measurement statistics.
//!
//! The prepared state is (|00⟩ + e^{iφ}|11⟩)/√2, measured in the X⊗X
//! basis. Each outcome population is a function of cos φ, so φ can be
//! recovered from measured probabilities through an inverse cosine. This
//! crate turns raw measurement counts into estimation records and persists
//! them for an external plotting collaborator.
//!
//! # Pipeline
//!
//! ```text
//! [raw sample JSON] -> Input Module -> MeasurementCounts
//!                                          |
//!                                          v
//!                               ProbabilityDistribution
//!                                          |
//!                                          v
//!                    Parity Aggregate + 4 Phase Estimators
//!                                          |
//!                                          v
//!                                 EstimationRecord
//!                                          |
//!                                          v
//!                               CSV / JSON Output
//! ```
//!
//! Four redundant estimators (from P00, P11, P_even, P_odd) are computed
//! per sample. Each applies the same validity guard: an inverse-cosine
//! argument outside [-1, 1] marks that estimate invalid, and is never
//! clamped into range. The estimators are deliberately not reconciled into
//! a single φ̂; consumers see all four.
//!
//! # Example
//!
//! ```
//! use bellphase_est::{BatchProcessor, LoadedSample, RawSample};
//!
//! let sample = RawSample::from_json(
//!     r#"{ "phi": 0.0, "counts": { "00": 504, "11": 496 } }"#,
//! )?;
//! let batch = BatchProcessor::new().process(vec![LoadedSample {
//!     label: "phi_0.000.json".into(),
//!     sample,
//! }])?;
//! assert_eq!(batch.records.len(), 1);
//! # Ok::<(), bellphase_est::EstError>(())
//! ```

pub mod batch;
pub mod error;
pub mod estimator;
pub mod export;
pub mod input;
pub mod record;
pub mod report;

pub use batch::{BatchOutcome, BatchProcessor, FailurePolicy};
pub use error::{EstError, EstResult};
pub use estimator::PhaseEstimate;
pub use export::ExportConfig;
pub use input::{LoadedSample, RawSample};
pub use record::EstimationRecord;
pub use report::EstimationReport;
