//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Finpop - sampling-model selection and distribution statistics for finite populations
#[derive(Parser, Debug)]
#[command(name = "finpop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute binomial statistics from direct parameters
    Binomial {
        /// Sample size (n)
        #[arg(short = 'n', long)]
        sample: u64,

        /// Probability of success (p), between 0 and 1
        #[arg(short, long, value_parser = validate_probability)]
        p: f64,

        /// Observed successes in the sample (x)
        #[arg(short = 'x', long)]
        observed: Option<u64>,

        /// Population size (N); enables the finite-population correction
        /// when the sample exceeds 5% of it
        #[arg(short = 'N', long)]
        population: Option<u64>,

        /// Write the full results to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Compute hypergeometric statistics from direct parameters
    Hypergeometric {
        /// Population size (N)
        #[arg(short = 'N', long)]
        population: u64,

        /// Successes in the population (K)
        #[arg(short = 'K', long)]
        successes: u64,

        /// Sample size (n)
        #[arg(short = 'n', long)]
        sample: u64,

        /// Observed successes in the sample (x)
        #[arg(short = 'x', long)]
        observed: Option<u64>,

        /// Write the full results to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Select the best-fitting model for (N, K, n) and compute its statistics
    Auto {
        /// Population size (N)
        #[arg(short = 'N', long)]
        population: u64,

        /// Successes in the population (K)
        #[arg(short = 'K', long)]
        successes: u64,

        /// Sample size (n)
        #[arg(short = 'n', long)]
        sample: u64,

        /// Observed successes in the sample (x)
        #[arg(short = 'x', long)]
        observed: Option<u64>,

        /// Write the full results to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Derive (N, K) from a categorical dataset column, then auto-select
    Analyze {
        /// Input file path (CSV or Parquet)
        #[arg(short, long)]
        input: PathBuf,

        /// Sample size (n) to draw from the analyzed population
        #[arg(short = 'n', long)]
        sample: u64,

        /// Observed successes in the sample (x)
        #[arg(short = 'x', long)]
        observed: Option<u64>,

        /// Column to analyze.
        /// If not provided, will be selected interactively from the
        /// categorical columns of the dataset.
        #[arg(short, long)]
        column: Option<String>,

        /// Success category within the column.
        /// If not provided, will be selected interactively from the
        /// column's observed categories.
        #[arg(long)]
        category: Option<String>,

        /// Skip interactive confirmation prompts
        #[arg(long, default_value = "false")]
        no_confirm: bool,

        /// Write the full results to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

/// Validator for probability parameters
fn validate_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "probability must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
