//! Statistical core: distribution engines, model selection, orchestration.
//!
//! Everything in this module is a pure, synchronous function of its inputs:
//! no I/O, no shared mutable state, safe to call concurrently. The
//! presentation layer (CLI, report) sits on top of the convenience API at
//! the bottom of this file.

pub mod auto;
pub mod binomial;
pub mod engine;
pub mod error;
pub mod factory;
pub mod hypergeometric;
pub mod result;
pub mod selector;

pub use auto::{
    calculate_with_auto_selection, cumulative_percentages, AutoInputs, AutoSelectionResult,
    ChartSeries,
};
pub use binomial::BinomialDistribution;
pub use engine::{CalculationInputs, DistributionEngine, DistributionFamily};
pub use error::DistError;
pub use factory::{DistributionFactory, EngineConstructor};
pub use hypergeometric::HypergeometricDistribution;
pub use result::{
    DistributionResult, EchoedInputs, Interpretations, PopulationType, ProbabilitySeries,
    SummaryStatistics,
};
pub use selector::{ModelDecision, ModelSelector, SAMPLE_RATIO_THRESHOLD};

/// Decide which distribution family fits a sampling scenario.
pub fn decide_model(
    population: u64,
    successes: u64,
    sample: u64,
) -> Result<ModelDecision, DistError> {
    ModelSelector::decide(population, successes, sample)
}

/// Compute binomial statistics from direct parameters.
pub fn compute_binomial(
    sample: u64,
    p: f64,
    observed: Option<u64>,
    population: Option<u64>,
) -> Result<DistributionResult, DistError> {
    BinomialDistribution.calculate(sample, p, observed, population)
}

/// Compute hypergeometric statistics from direct parameters.
pub fn compute_hypergeometric(
    population: u64,
    successes: u64,
    sample: u64,
    observed: Option<u64>,
) -> Result<DistributionResult, DistError> {
    HypergeometricDistribution.calculate(population, successes, sample, observed)
}

/// Select the model for (N, K, n) and run the full calculation.
pub fn compute_auto(
    population: u64,
    successes: u64,
    sample: u64,
    observed: Option<u64>,
) -> Result<AutoSelectionResult, DistError> {
    calculate_with_auto_selection(population, successes, sample, observed)
}
