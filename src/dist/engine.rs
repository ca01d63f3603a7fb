//! The distribution-engine contract shared by every family.

use serde::Serialize;

use super::error::DistError;
use super::result::{DistributionResult, ProbabilitySeries, SummaryStatistics};

/// Distribution families known to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionFamily {
    /// Sampling with replacement (or a negligible sample fraction)
    Binomial,
    /// Sampling without replacement from a finite population
    Hypergeometric,
}

impl std::fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionFamily::Binomial => write!(f, "Binomial"),
            DistributionFamily::Hypergeometric => write!(f, "Hypergeometric"),
        }
    }
}

impl std::str::FromStr for DistributionFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binomial" => Ok(DistributionFamily::Binomial),
            "hypergeometric" => Ok(DistributionFamily::Hypergeometric),
            _ => Err(format!(
                "Unknown distribution family: '{}'. Use 'binomial' or 'hypergeometric'.",
                s
            )),
        }
    }
}

/// Typed calculation parameters, one variant per family.
///
/// Non-negativity of N, K, n and x is carried by the `u64` type; the
/// remaining cross-field bounds (p range, x ≤ n, x ≤ K, n ≤ N, K ≤ N) are
/// validated by the engines before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationInputs {
    Binomial {
        /// Sample size (n), must be at least 1
        sample: u64,
        /// Probability of success (p), in [0, 1]
        p: f64,
        /// Observed successes in the sample (x), 0 ≤ x ≤ n
        observed: Option<u64>,
        /// Population size (N) for the finite-population correction
        population: Option<u64>,
    },
    Hypergeometric {
        /// Population size (N), must be at least 1
        population: u64,
        /// Successes in the population (K), 0 ≤ K ≤ N
        successes: u64,
        /// Sample size (n), 1 ≤ n ≤ N
        sample: u64,
        /// Observed successes in the sample (x), 0 ≤ x ≤ min(n, K)
        observed: Option<u64>,
    },
}

impl CalculationInputs {
    /// The family these inputs parameterize.
    pub fn family(&self) -> DistributionFamily {
        match self {
            CalculationInputs::Binomial { .. } => DistributionFamily::Binomial,
            CalculationInputs::Hypergeometric { .. } => DistributionFamily::Hypergeometric,
        }
    }
}

/// Capability contract shared by the distribution engines.
///
/// Engines are stateless: every method is a pure function of its inputs, so
/// a single engine value can serve concurrent callers. An engine handed the
/// other family's inputs fails with [`DistError::MismatchedInputs`].
pub trait DistributionEngine: std::fmt::Debug {
    /// The family this engine computes.
    fn family(&self) -> DistributionFamily;

    /// Full calculation: validation, moments, shape interpretations, and the
    /// point probability when an observed count is supplied.
    fn calculate(&self, inputs: &CalculationInputs) -> Result<DistributionResult, DistError>;

    /// Probability mass over the support, as percentages rounded to 4
    /// decimals in ascending x order.
    fn probability_series(&self, inputs: &CalculationInputs)
        -> Result<ProbabilitySeries, DistError>;

    /// The statistics sub-record alone, without interpretations or
    /// probabilities.
    fn statistics(&self, inputs: &CalculationInputs) -> Result<SummaryStatistics, DistError>;
}
