//! CSV and JSON output for estimation results.
//!
//! The CSV layout is the reference interchange format consumed by the
//! external plotting collaborator: one header row, one data row per
//! sample, invalid `phi_hat_*` fields rendered empty.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{EstError, EstResult};
use crate::record::EstimationRecord;
use crate::report::EstimationReport;

/// CSV header for estimation records.
pub const CSV_HEADER: &str = "phi_true,P00,P11,Peven,Podd,\
arg00_raw,phi_hat_00,arg11_raw,phi_hat_11,\
argeven_raw,phi_hat_even,argodd_raw,phi_hat_odd";

/// Export configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExportConfig {
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render one record as a CSV row (no trailing newline).
pub fn csv_row(record: &EstimationRecord) -> String {
    let mut row = String::new();
    // The header fixes the column order; keep the two in sync.
    let _ = write!(
        row,
        "{},{},{},{},{},{},{},{},{},{},{},{},{}",
        record.phi_true,
        record.probabilities.p00(),
        record.probabilities.p11(),
        record.parity.p_even,
        record.parity.p_odd,
        record.from_p00.raw_argument,
        opt(record.from_p00.phi_hat),
        record.from_p11.raw_argument,
        opt(record.from_p11.phi_hat),
        record.from_p_even.raw_argument,
        opt(record.from_p_even.phi_hat),
        record.from_p_odd.raw_argument,
        opt(record.from_p_odd.phi_hat),
    );
    row
}

/// Render records as a complete CSV document.
pub fn to_csv(records: &[EstimationRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&csv_row(record));
        out.push('\n');
    }
    out
}

/// Write records to a CSV file.
pub fn write_csv(path: &Path, records: &[EstimationRecord]) -> EstResult<()> {
    std::fs::write(path, to_csv(records))
        .map_err(|e| EstError::Io(format!("failed to write {}: {e}", path.display())))
}

/// Serialize a report to JSON.
pub fn to_json(report: &EstimationReport, config: &ExportConfig) -> EstResult<String> {
    let result = if config.pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    result.map_err(|e| EstError::Export(e.to_string()))
}

/// Write a report to a JSON file.
pub fn write_json(path: &Path, report: &EstimationReport, config: &ExportConfig) -> EstResult<()> {
    let json = to_json(report, config)?;
    std::fs::write(path, json)
        .map_err(|e| EstError::Io(format!("failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellphase_types::ProbabilityDistribution;

    #[test]
    fn test_csv_header_layout() {
        assert_eq!(
            CSV_HEADER,
            "phi_true,P00,P11,Peven,Podd,arg00_raw,phi_hat_00,arg11_raw,phi_hat_11,argeven_raw,phi_hat_even,argodd_raw,phi_hat_odd"
        );
        assert_eq!(CSV_HEADER.split(',').count(), 13);
    }

    #[test]
    fn test_row_column_count_matches_header() {
        let record =
            EstimationRecord::compute(0.0, ProbabilityDistribution::new(0.5, 0.0, 0.0, 0.5));
        let row = csv_row(&record);
        assert_eq!(row.split(',').count(), CSV_HEADER.split(',').count());
    }

    #[test]
    fn test_invalid_estimates_render_empty() {
        // p00 = 0.52 pushes the P00 estimator out of domain.
        let record =
            EstimationRecord::compute(0.0, ProbabilityDistribution::new(0.52, 0.0, 0.0, 0.48));
        let row = csv_row(&record);
        let fields: Vec<&str> = row.split(',').collect();
        // arg00_raw present, phi_hat_00 empty
        assert_eq!(fields[5], "1.08");
        assert_eq!(fields[6], "");
        // phi_hat_11 still populated
        assert!(!fields[8].is_empty());
    }

    #[test]
    fn test_to_csv_one_row_per_record() {
        let records = vec![
            EstimationRecord::compute(0.0, ProbabilityDistribution::new(0.5, 0.0, 0.0, 0.5)),
            EstimationRecord::compute(3.14, ProbabilityDistribution::new(0.0, 0.5, 0.5, 0.0)),
        ];
        let csv = to_csv(&records);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("phi_true,"));
    }
}
