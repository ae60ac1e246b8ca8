//! Estimation report: batch results plus run metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::batch::BatchOutcome;
use crate::record::EstimationRecord;

/// Complete output of one estimation run.
///
/// Wraps the ordered records with enough metadata to reproduce the run:
/// schema version, timestamp, and the CLI arguments used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationReport {
    /// Schema version for forward compatibility.
    pub schema_version: String,
    /// Timestamp of the run.
    pub timestamp: DateTime<Utc>,
    /// CLI arguments used for this run.
    pub cli_args: Vec<String>,
    /// Samples successfully processed.
    pub processed: usize,
    /// Samples skipped under the skip-and-log policy.
    pub skipped: usize,
    /// Records in input order.
    pub records: Vec<EstimationRecord>,
}

impl EstimationReport {
    /// Current report schema version.
    pub const SCHEMA_VERSION: &'static str = "0.1.0";

    /// Build a report from a batch outcome.
    pub fn from_outcome(outcome: BatchOutcome, cli_args: &[String]) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION.into(),
            timestamp: Utc::now(),
            cli_args: cli_args.to_vec(),
            processed: outcome.records.len(),
            skipped: outcome.skipped,
            records: outcome.records,
        }
    }
}
