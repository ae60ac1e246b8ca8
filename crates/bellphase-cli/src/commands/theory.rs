//! Theory command implementation.
//!
//! Samples the closed-form outcome probabilities over [0, 2π] and emits
//! them as CSV, for overlaying measured points on theory curves.

use std::f64::consts::PI;
use std::fmt::Write as _;

use anyhow::Result;
use console::style;

use bellphase_types::Basis;

/// Execute the theory command.
pub fn execute(basis: &str, points: usize, output: Option<&str>) -> Result<()> {
    let basis: Basis = basis
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    if points < 2 {
        anyhow::bail!("need at least 2 points, got {points}");
    }

    let mut csv = String::with_capacity(32 * (points + 1));
    csv.push_str("phi,P00,P01,P10,P11\n");
    for i in 0..points {
        let phi = 2.0 * PI * i as f64 / (points - 1) as f64;
        let probs = basis.distribution(phi);
        let _ = writeln!(
            csv,
            "{phi},{},{},{},{}",
            probs.p00(),
            probs.p01(),
            probs.p10(),
            probs.p11()
        );
    }

    match output {
        Some(path) => {
            std::fs::write(path, csv)
                .map_err(|e| anyhow::anyhow!("failed to write {path}: {e}"))?;
            println!(
                "{} Saved {} theory points ({} basis) to {}",
                style("✓").green().bold(),
                points,
                basis,
                path
            );
        }
        None => print!("{csv}"),
    }

    Ok(())
}
