//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - phase estimation from two-qubit measurement statistics",
        style("Bellphase").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  bellphase-types  Measurement counts, distributions, parity");
    println!("  bellphase-est    Phase estimators, batch processing, export");
    println!("  bellphase-sim    Synthetic measurement source");
    println!("  bellphase-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/bellphase").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
