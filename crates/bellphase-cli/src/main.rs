//! Bellphase command-line interface.
//!
//! Estimates the relative phase of a two-qubit Bell-like state from
//! measurement counts, generates synthetic count samples, and exports
//! theory curves for plotting.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{estimate, synth, theory, version};

/// Bellphase - phase estimation from two-qubit measurement statistics
#[derive(Parser)]
#[command(name = "bellphase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate phases from a directory of raw sample JSON files
    Estimate {
        /// Directory of per-phase sample files
        #[arg(short, long)]
        input_dir: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Sample failure handling (skip, abort)
        #[arg(long, default_value = "skip")]
        on_error: String,

        /// Flip bit order of incoming counts ("01" <-> "10")
        #[arg(long)]
        reverse_bits: bool,
    },

    /// Generate synthetic count samples from the closed-form distribution
    Synth {
        /// Directory to write sample files into
        #[arg(short, long)]
        output_dir: String,

        /// Measurement basis (x, z)
        #[arg(short, long, default_value = "x")]
        basis: String,

        /// Number of shots per phase point
        #[arg(short, long, default_value = "1000")]
        shots: u64,

        /// Phase values in radians (repeatable); defaults to 0, π/2, π
        #[arg(long = "phi")]
        phis: Vec<f64>,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Export sampled theory curves as CSV for plotting overlays
    Theory {
        /// Measurement basis (x, z)
        #[arg(short, long, default_value = "x")]
        basis: String,

        /// Number of phase points over [0, 2π]
        #[arg(short, long, default_value = "400")]
        points: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Estimate {
            input_dir,
            output,
            format,
            on_error,
            reverse_bits,
        } => estimate::execute(
            &input_dir,
            output.as_deref(),
            &format,
            &on_error,
            reverse_bits,
        ),

        Commands::Synth {
            output_dir,
            basis,
            shots,
            phis,
            seed,
        } => synth::execute(&output_dir, &basis, shots, &phis, seed),

        Commands::Theory {
            basis,
            points,
            output,
        } => theory::execute(&basis, points, output.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
