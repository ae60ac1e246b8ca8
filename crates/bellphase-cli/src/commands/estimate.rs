//! Estimate command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use bellphase_est::{BatchProcessor, EstimationReport, ExportConfig, FailurePolicy, export};

/// Execute the estimate command.
pub fn execute(
    input_dir: &str,
    output: Option<&str>,
    format: &str,
    on_error: &str,
    reverse_bits: bool,
) -> Result<()> {
    let policy = match on_error {
        "skip" => FailurePolicy::SkipAndLog,
        "abort" => FailurePolicy::Abort,
        other => anyhow::bail!("unknown failure policy '{other}': expected skip or abort"),
    };

    println!(
        "{} Estimating phases from {}",
        style("→").cyan().bold(),
        style(input_dir).green()
    );

    let outcome = BatchProcessor::new()
        .with_policy(policy)
        .with_reverse_bits(reverse_bits)
        .process_dir(Path::new(input_dir))
        .map_err(|e| anyhow::anyhow!("estimation failed: {e}"))?;

    println!(
        "  {} sample(s) processed, {} skipped",
        outcome.records.len(),
        outcome.skipped
    );
    for record in &outcome.records {
        println!(
            "  φ = {:>7.4}: {}/4 estimator(s) in domain",
            record.phi_true,
            record.valid_estimates()
        );
    }

    let body = match format {
        "csv" => export::to_csv(&outcome.records),
        "json" => {
            let cli_args: Vec<String> = std::env::args().collect();
            let report = EstimationReport::from_outcome(outcome, &cli_args);
            export::to_json(&report, &ExportConfig::default())
                .map_err(|e| anyhow::anyhow!("JSON export failed: {e}"))?
        }
        other => anyhow::bail!("unknown output format '{other}': expected csv or json"),
    };

    match output {
        Some(path) => {
            std::fs::write(path, body)
                .map_err(|e| anyhow::anyhow!("failed to write {path}: {e}"))?;
            println!("{} Saved estimates to {}", style("✓").green().bold(), path);
        }
        None => print!("{body}"),
    }

    Ok(())
}
