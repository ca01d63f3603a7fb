//! Result records produced by the distribution engines.
//!
//! All records are plain value objects: created fresh per calculation,
//! serializable, and free of shared mutable state. Numeric fields are
//! rounded to 6 decimal places, percentage fields to 4.

use serde::Serialize;

use super::engine::DistributionFamily;

/// Round to 6 decimal places (statistics and probabilities).
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Round to 4 decimal places (percentages and ratios).
pub(crate) fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

/// Whether the calculation treats the population as finite.
///
/// Binomial calculations are classified `Finite` only when a population size
/// is supplied and the sample exceeds 5% of it; hypergeometric calculations
/// are always `Finite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PopulationType {
    Finite,
    Infinite,
}

impl std::fmt::Display for PopulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopulationType::Finite => write!(f, "Finite"),
            PopulationType::Infinite => write!(f, "Infinite"),
        }
    }
}

/// The inputs echoed back alongside every result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EchoedInputs {
    /// Population size (N)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// Successes in the population (K)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successes: Option<u64>,
    /// Sample size (n)
    pub sample: u64,
    /// Observed successes in the sample (x)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<u64>,
    /// Probability of success (p)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
}

/// Moment statistics for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    /// Exact-by-enumeration median (hypergeometric only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<u64>,
    pub variance: f64,
    pub std: f64,
    /// Std after the finite-population correction (binomial, when it applies)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_std: Option<f64>,
    /// The correction factor sqrt((N-n)/(N-1)) itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction_factor: Option<f64>,
    pub skewness: f64,
    /// Excess kurtosis (0 = normal-like)
    pub kurtosis: f64,
}

/// Qualitative readings of the distribution's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretations {
    pub skewness: String,
    pub kurtosis: String,
}

/// Complete output of one distribution calculation.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionResult {
    pub family: DistributionFamily,
    pub inputs: EchoedInputs,
    pub population_type: PopulationType,
    /// n/N for binomial calculations with a known population
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_ratio: Option<f64>,
    /// n/N for hypergeometric calculations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_ratio: Option<f64>,
    pub statistics: SummaryStatistics,
    pub interpretations: Interpretations,
    /// P(X = x) when an observed count was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_x: Option<f64>,
    /// The same probability on a 0-100 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability_x_pct: Option<f64>,
}

/// Probability mass over the support, on a percentage scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilitySeries {
    /// Support values in ascending order
    pub x_values: Vec<u64>,
    /// P(X = x) * 100, rounded to 4 decimals
    pub probabilities: Vec<f64>,
}

/// Shared kurtosis reading, identical across families.
pub(crate) fn interpret_kurtosis(kurtosis: f64) -> String {
    if kurtosis > 1.0 {
        "Leptokurtic: the distribution is more peaked than a normal distribution (heavy tails)."
            .to_string()
    } else if kurtosis < -1.0 {
        "Platykurtic: the distribution is flatter than a normal distribution (light tails)."
            .to_string()
    } else {
        "Mesokurtic: the distribution is shaped much like the normal bell curve.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.2460937499), 0.246094);
        assert_eq!(round6(1.5811388300), 1.581139);
        assert_eq!(round6(2.0), 2.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(24.609375), 24.6094);
        assert_eq!(round4(0.00004), 0.0);
    }

    #[test]
    fn test_population_type_display() {
        assert_eq!(PopulationType::Finite.to_string(), "Finite");
        assert_eq!(PopulationType::Infinite.to_string(), "Infinite");
    }

    #[test]
    fn test_interpret_kurtosis_categories() {
        assert!(interpret_kurtosis(1.5).starts_with("Leptokurtic"));
        assert!(interpret_kurtosis(-1.5).starts_with("Platykurtic"));
        assert!(interpret_kurtosis(0.0).starts_with("Mesokurtic"));
        assert!(interpret_kurtosis(1.0).starts_with("Mesokurtic"));
        assert!(interpret_kurtosis(-1.0).starts_with("Mesokurtic"));
    }
}
