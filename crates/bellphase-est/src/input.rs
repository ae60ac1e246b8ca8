//! Raw sample input: JSON layout and directory loading.
//!
//! One sample per file, as written by a counts-returning run (simulator,
//! hardware, or the synthetic source):
//!
//! ```json
//! {
//!     "phi": 1.571,
//!     "backend": "ibm_oslo",
//!     "shots": 1000,
//!     "counts": { "00": 233, "01": 248, "10": 271, "11": 247 }
//! }
//! ```
//!
//! `backend` and `shots` are optional metadata; outcomes missing from
//! `counts` are zero shots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bellphase_types::{CountsResult, MeasurementCounts};

use crate::error::{EstError, EstResult};

/// One raw measurement sample as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Phase encoded into the prepared state, in radians.
    pub phi: f64,
    /// Backend that produced the counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// Shots requested for the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u64>,
    /// Observed counts per bitstring; missing outcomes are zero.
    pub counts: BTreeMap<String, u64>,
}

impl RawSample {
    /// Parse a sample from its JSON representation.
    pub fn from_json(json: &str) -> EstResult<Self> {
        serde_json::from_str(json).map_err(|e| EstError::Parse(e.to_string()))
    }

    /// Serialize the sample to pretty-printed JSON.
    pub fn to_json(&self) -> EstResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EstError::Export(e.to_string()))
    }

    /// Validate and densify the counts map.
    ///
    /// `reverse_bits` flips the bit order at ingest, for backends that
    /// report classical bits in the opposite convention.
    pub fn measurement_counts(&self, reverse_bits: bool) -> CountsResult<MeasurementCounts> {
        let counts =
            MeasurementCounts::from_pairs(self.counts.iter().map(|(k, &v)| (k.as_str(), v)))?;
        Ok(if reverse_bits {
            counts.reversed()
        } else {
            counts
        })
    }
}

/// A sample tagged with where it came from, for logging and ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSample {
    /// Source label, typically the file name.
    pub label: String,
    /// The parsed sample.
    pub sample: RawSample,
}

/// List the `*.json` sample files in a directory, sorted by file name.
///
/// Sorting makes batch order deterministic across re-runs regardless of
/// directory enumeration order.
pub fn list_sample_files(dir: &Path) -> EstResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| EstError::Io(format!("failed to read {}: {e}", dir.display())))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Read and parse one sample file.
pub fn load_sample_file(path: &Path) -> EstResult<LoadedSample> {
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let source = std::fs::read_to_string(path)
        .map_err(|e| EstError::Io(format!("failed to read {}: {e}", path.display())))?;
    let sample = RawSample::from_json(&source)?;
    Ok(LoadedSample { label, sample })
}
