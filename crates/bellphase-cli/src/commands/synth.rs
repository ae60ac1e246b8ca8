//! Synth command implementation.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::Result;
use console::style;

use bellphase_sim::{SyntheticSource, write_sample_files};
use bellphase_types::Basis;

/// Execute the synth command.
pub fn execute(output_dir: &str, basis: &str, shots: u64, phis: &[f64], seed: u64) -> Result<()> {
    let basis: Basis = basis
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // Same sweep the reference experiments use.
    let default_phis = [0.0, PI / 2.0, PI];
    let phis = if phis.is_empty() { &default_phis } else { phis };

    println!(
        "{} Sampling {} phase point(s) in the {} basis ({} shots each, seed {})",
        style("→").cyan().bold(),
        phis.len(),
        style(basis.to_string()).yellow(),
        shots,
        seed
    );

    let source = SyntheticSource::new(basis, shots).with_seed(seed);
    let paths = write_sample_files(Path::new(output_dir), &source, phis)
        .map_err(|e| anyhow::anyhow!("sampling failed: {e}"))?;

    for path in &paths {
        println!("  {}", path.display());
    }
    println!(
        "{} Wrote {} sample file(s) to {}",
        style("✓").green().bold(),
        paths.len(),
        style(output_dir).green()
    );

    Ok(())
}
