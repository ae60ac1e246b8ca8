//! Synthetic measurement source.
//!
//! Stands in for a real simulator or hardware backend when none is
//! available: shot counts are drawn from the closed-form outcome
//! distribution of the phase-encoded Bell state, per basis and phase.
//! Output uses the same raw-sample JSON layout the estimator ingests, so
//! a synthetic run is indistinguishable from a recorded one downstream.
//!
//! Sampling is seeded and fully deterministic for a fixed configuration.

pub mod files;
pub mod source;

pub use files::write_sample_files;
pub use source::SyntheticSource;
