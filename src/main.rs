//! Finpop: Finite-Population Sampling Analysis CLI
//!
//! Chooses between the binomial approximation and the exact hypergeometric
//! model for a sampling scenario and reports the distribution's statistics,
//! either from directly-entered parameters or from a categorical column of
//! a tabular dataset.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;

use finpop::cli::{self, Cli, Commands};
use finpop::data::{analyze_categorical_column, category_counts, load_dataset, summarize_columns};
use finpop::dist::{
    compute_auto, BinomialDistribution, ChartSeries, HypergeometricDistribution,
};
use finpop::report::{
    export_report, print_categorical, print_chart, print_decision, print_result,
};
use finpop::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_step_header,
    print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Binomial {
            sample,
            p,
            observed,
            population,
            export,
        } => run_binomial(sample, p, observed, population, export.as_deref()),
        Commands::Hypergeometric {
            population,
            successes,
            sample,
            observed,
            export,
        } => run_hypergeometric(population, successes, sample, observed, export.as_deref()),
        Commands::Auto {
            population,
            successes,
            sample,
            observed,
            export,
        } => run_auto(population, successes, sample, observed, export.as_deref()),
        Commands::Analyze {
            input,
            sample,
            observed,
            column,
            category,
            no_confirm,
            export,
        } => run_analyze(
            &input,
            sample,
            observed,
            column,
            category,
            no_confirm,
            export.as_deref(),
        ),
    }
}

fn run_binomial(
    sample: u64,
    p: f64,
    observed: Option<u64>,
    population: Option<u64>,
    export: Option<&Path>,
) -> Result<()> {
    let engine = BinomialDistribution;
    let results = engine.calculate(sample, p, observed, population)?;
    let chart = ChartSeries::from_series(engine.probability_series(sample, p)?);

    print_result(&results);
    print_chart(&chart);

    if let Some(path) = export {
        export_report(path, "binomial", None, None, &results, Some(&chart))?;
        print_success(&format!("Report written to {}", path.display()));
    }
    Ok(())
}

fn run_hypergeometric(
    population: u64,
    successes: u64,
    sample: u64,
    observed: Option<u64>,
    export: Option<&Path>,
) -> Result<()> {
    let engine = HypergeometricDistribution;
    let results = engine.calculate(population, successes, sample, observed)?;
    let chart =
        ChartSeries::from_series(engine.probability_series(population, successes, sample)?);

    print_result(&results);
    print_chart(&chart);

    if let Some(path) = export {
        export_report(path, "hypergeometric", None, None, &results, Some(&chart))?;
        print_success(&format!("Report written to {}", path.display()));
    }
    Ok(())
}

fn run_auto(
    population: u64,
    successes: u64,
    sample: u64,
    observed: Option<u64>,
    export: Option<&Path>,
) -> Result<()> {
    let outcome = compute_auto(population, successes, sample, observed)?;

    print_decision(&outcome.decision);
    print_result(&outcome.results);
    print_chart(&outcome.chart);

    if let Some(path) = export {
        export_report(
            path,
            "auto",
            Some(&outcome.decision),
            None,
            &outcome.results,
            Some(&outcome.chart),
        )?;
        print_success(&format!("Report written to {}", path.display()));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    input: &Path,
    sample: u64,
    observed: Option<u64>,
    column: Option<String>,
    category: Option<String>,
    no_confirm: bool,
    export: Option<&Path>,
) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(input)?;
    finish_with_success(&spinner, "Dataset loaded");
    println!(
        "      Rows: {}   Columns: {}",
        style(df.height()).yellow(),
        style(df.width()).yellow()
    );

    // Step 2: Pick the column and success category
    print_step_header(2, "Column & Category");
    let summaries = summarize_columns(&df)?;

    let column = match column {
        Some(name) => {
            if !summaries.iter().any(|s| s.name == name) {
                let available: Vec<&str> =
                    summaries.iter().map(|s| s.name.as_str()).collect();
                anyhow::bail!(
                    "Column '{}' not found in dataset. Available columns: {:?}",
                    name,
                    available
                );
            }
            name
        }
        None => cli::select_column(&summaries)?,
    };

    let counts = category_counts(&df, &column)?;
    let category = match category {
        Some(value) => value,
        None => cli::select_category(&counts)?,
    };

    let analysis = analyze_categorical_column(&df, &column, &category)?;
    print_categorical(&analysis);

    if !no_confirm {
        let message = format!(
            "Run model selection with N={}, K={} and sample size n={}?",
            analysis.population, analysis.successes, sample
        );
        if !cli::confirm_step(&message)? {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    // Step 3: Model selection and statistics
    print_step_header(3, "Model Selection & Statistics");
    let outcome = compute_auto(analysis.population, analysis.successes, sample, observed)?;

    print_decision(&outcome.decision);
    print_result(&outcome.results);
    print_chart(&outcome.chart);

    if let Some(path) = export {
        export_report(
            path,
            "analyze",
            Some(&outcome.decision),
            Some(&analysis),
            &outcome.results,
            Some(&outcome.chart),
        )?;
        print_success(&format!("Report written to {}", path.display()));
    }

    print_completion();
    Ok(())
}
