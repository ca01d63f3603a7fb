//! End-to-end calculation from raw population parameters.
//!
//! Combines the model selector (family choice and parameter shaping), the
//! factory (engine instantiation), and the chosen engine (computation) into
//! one call, and derives the chart-ready cumulative series.

use serde::Serialize;

use super::engine::CalculationInputs;
use super::error::DistError;
use super::factory::DistributionFactory;
use super::result::{round4, round6, DistributionResult, ProbabilitySeries};
use super::selector::{ModelDecision, ModelSelector};

/// Probability and cumulative series ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Support values in ascending order
    pub x_values: Vec<u64>,
    /// P(X = x) * 100, rounded to 4 decimals
    pub probabilities: Vec<f64>,
    /// Running sum of `probabilities`, rounded to 4 decimals at each step
    pub cumulative: Vec<f64>,
}

impl ChartSeries {
    /// Extend a probability series with its cumulative sums.
    pub fn from_series(series: ProbabilitySeries) -> Self {
        let cumulative = cumulative_percentages(&series.probabilities);
        Self {
            x_values: series.x_values,
            probabilities: series.probabilities,
            cumulative,
        }
    }
}

/// Running sum over a percentage series, rounded at each step.
///
/// Every cumulative-probability call site goes through this helper so the
/// series and any point lookups cannot diverge.
pub fn cumulative_percentages(probabilities: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    probabilities
        .iter()
        .map(|p| {
            running += p;
            round4(running)
        })
        .collect()
}

/// The raw population parameters echoed with an auto-selection result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AutoInputs {
    /// Population size (N)
    pub population: u64,
    /// Successes in the population (K)
    pub successes: u64,
    /// Sample size (n)
    pub sample: u64,
    /// Observed successes in the sample (x)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<u64>,
    /// K/N, rounded to 6 decimals
    pub p: f64,
}

/// Combined output of one auto-selected calculation.
#[derive(Debug, Clone, Serialize)]
pub struct AutoSelectionResult {
    /// Why this family was chosen (kept alongside the results so callers can
    /// display the justification without recomputation)
    pub decision: ModelDecision,
    pub results: DistributionResult,
    pub chart: ChartSeries,
    pub inputs: AutoInputs,
}

/// Run model selection and the chosen engine from raw (N, K, n, x).
pub fn calculate_with_auto_selection(
    population: u64,
    successes: u64,
    sample: u64,
    observed: Option<u64>,
) -> Result<AutoSelectionResult, DistError> {
    let (decision, inputs) =
        ModelSelector::distribution_inputs(population, successes, sample, observed)?;

    let factory = DistributionFactory::with_builtins();
    let engine = factory.create(&decision.family.to_string())?;

    let results = engine.calculate(&inputs)?;
    let series = engine.probability_series(&strip_observed(inputs))?;
    let chart = ChartSeries::from_series(series);

    Ok(AutoSelectionResult {
        decision,
        results,
        chart,
        inputs: AutoInputs {
            population,
            successes,
            sample,
            observed,
            p: round6(successes as f64 / population as f64),
        },
    })
}

/// Series generation covers the whole support; the observed count only
/// matters for the point probability.
fn strip_observed(inputs: CalculationInputs) -> CalculationInputs {
    match inputs {
        CalculationInputs::Binomial {
            sample,
            p,
            population,
            ..
        } => CalculationInputs::Binomial {
            sample,
            p,
            observed: None,
            population,
        },
        CalculationInputs::Hypergeometric {
            population,
            successes,
            sample,
            ..
        } => CalculationInputs::Hypergeometric {
            population,
            successes,
            sample,
            observed: None,
        },
    }
}
