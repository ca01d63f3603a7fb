//! Sampling-model selection.
//!
//! Decides from (N, K, n) whether the binomial approximation is acceptable
//! or the exact hypergeometric model is required, and maps the raw
//! population parameters into the chosen engine's calculation inputs.

use serde::Serialize;

use super::engine::{CalculationInputs, DistributionFamily};
use super::error::DistError;
use super::result::{round4, round6};

/// Sample fraction n/N at and above which the hypergeometric model is used.
pub const SAMPLE_RATIO_THRESHOLD: f64 = 0.20;

/// Outcome of one model-selection decision.
///
/// Created fresh per call; pure value, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDecision {
    /// The chosen distribution family
    pub family: DistributionFamily,
    /// n/N, rounded to 4 decimals
    pub sample_ratio: f64,
    /// The threshold the decision was made against
    pub threshold: f64,
    /// Why this family was chosen, with the ratio spelled out
    pub reason: String,
    /// Present only when the binomial approximation was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Stateless decision policy.
pub struct ModelSelector;

impl ModelSelector {
    /// Decide which distribution family fits the sampling scenario.
    ///
    /// # Arguments
    /// * `population` - Population size (N), at least 1
    /// * `successes` - Successes in the population (K), 0 ≤ K ≤ N
    /// * `sample` - Sample size (n), 1 ≤ n ≤ N
    ///
    /// # Returns
    /// Hypergeometric when n/N ≥ 0.20, otherwise Binomial together with a
    /// recommendation to switch for higher precision. Deterministic for a
    /// given input.
    pub fn decide(population: u64, successes: u64, sample: u64) -> Result<ModelDecision, DistError> {
        if population == 0 {
            return Err(DistError::validation(
                "N",
                "population size (N) must be greater than 0",
            ));
        }
        if successes > population {
            return Err(DistError::validation(
                "K",
                "population successes (K) cannot be larger than the population size (N)",
            ));
        }
        if sample == 0 {
            return Err(DistError::validation(
                "n",
                "sample size (n) must be greater than 0",
            ));
        }
        if sample > population {
            return Err(DistError::validation(
                "n",
                "sample size (n) cannot be larger than the population size (N)",
            ));
        }

        let sample_ratio = sample as f64 / population as f64;
        let ratio_pct = sample_ratio * 100.0;
        let threshold_pct = SAMPLE_RATIO_THRESHOLD * 100.0;

        let (family, reason, recommendation) = if sample_ratio >= SAMPLE_RATIO_THRESHOLD {
            (
                DistributionFamily::Hypergeometric,
                format!(
                    "The sample is {:.2}% of the population (>= {:.0}%). Using the \
                     hypergeometric distribution because sampling without replacement \
                     materially affects the probabilities.",
                    ratio_pct, threshold_pct
                ),
                None,
            )
        } else {
            (
                DistributionFamily::Binomial,
                format!(
                    "The sample is {:.2}% of the population (< {:.0}%). Using the \
                     binomial distribution as an approximation because the effect of \
                     sampling without replacement is negligible.",
                    ratio_pct, threshold_pct
                ),
                Some(format!(
                    "For higher precision consider the hypergeometric distribution. \
                     The binomial is a good approximation when n/N < {:.0}%.",
                    threshold_pct
                )),
            )
        };

        Ok(ModelDecision {
            family,
            sample_ratio: round4(sample_ratio),
            threshold: SAMPLE_RATIO_THRESHOLD,
            reason,
            recommendation,
        })
    }

    /// Decide and shape the parameters for the chosen engine.
    ///
    /// The binomial approximation gets `{n, p = K/N, x, N}`; the
    /// hypergeometric model gets `{N, K, n, x}` untouched. Validation of
    /// `x` against the sample is left to the engine.
    pub fn distribution_inputs(
        population: u64,
        successes: u64,
        sample: u64,
        observed: Option<u64>,
    ) -> Result<(ModelDecision, CalculationInputs), DistError> {
        let decision = Self::decide(population, successes, sample)?;

        let inputs = match decision.family {
            DistributionFamily::Binomial => CalculationInputs::Binomial {
                sample,
                p: round6(successes as f64 / population as f64),
                observed,
                population: Some(population),
            },
            DistributionFamily::Hypergeometric => CalculationInputs::Hypergeometric {
                population,
                successes,
                sample,
                observed,
            },
        };

        Ok((decision, inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sample_chooses_binomial_with_recommendation() {
        let decision = ModelSelector::decide(1000, 200, 50).unwrap();
        assert_eq!(decision.family, DistributionFamily::Binomial);
        assert_eq!(decision.sample_ratio, 0.05);
        assert!(decision.recommendation.is_some());
        assert!(decision.reason.contains("5.00%"));
    }

    #[test]
    fn test_large_sample_chooses_hypergeometric() {
        let decision = ModelSelector::decide(1000, 200, 250).unwrap();
        assert_eq!(decision.family, DistributionFamily::Hypergeometric);
        assert_eq!(decision.sample_ratio, 0.25);
        assert!(decision.recommendation.is_none());
    }

    #[test]
    fn test_threshold_boundary_is_hypergeometric() {
        // Exactly 20% is already "at or above" the threshold.
        let decision = ModelSelector::decide(1000, 200, 200).unwrap();
        assert_eq!(decision.family, DistributionFamily::Hypergeometric);
    }

    #[test]
    fn test_decision_is_deterministic() {
        let a = ModelSelector::decide(500, 100, 30).unwrap();
        let b = ModelSelector::decide(500, 100, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_binomial_inputs_carry_derived_p() {
        let (decision, inputs) =
            ModelSelector::distribution_inputs(1000, 200, 50, Some(10)).unwrap();
        assert_eq!(decision.family, DistributionFamily::Binomial);
        match inputs {
            CalculationInputs::Binomial {
                sample,
                p,
                observed,
                population,
            } => {
                assert_eq!(sample, 50);
                assert_eq!(p, 0.2);
                assert_eq!(observed, Some(10));
                assert_eq!(population, Some(1000));
            }
            _ => panic!("Expected binomial inputs"),
        }
    }

    #[test]
    fn test_hypergeometric_inputs_pass_through() {
        let (decision, inputs) =
            ModelSelector::distribution_inputs(1000, 200, 250, None).unwrap();
        assert_eq!(decision.family, DistributionFamily::Hypergeometric);
        match inputs {
            CalculationInputs::Hypergeometric {
                population,
                successes,
                sample,
                observed,
            } => {
                assert_eq!((population, successes, sample, observed), (1000, 200, 250, None));
            }
            _ => panic!("Expected hypergeometric inputs"),
        }
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            ModelSelector::decide(0, 0, 1).unwrap_err().field(),
            Some("N")
        );
        assert_eq!(
            ModelSelector::decide(10, 11, 5).unwrap_err().field(),
            Some("K")
        );
        assert_eq!(
            ModelSelector::decide(10, 5, 0).unwrap_err().field(),
            Some("n")
        );
        assert_eq!(
            ModelSelector::decide(10, 5, 11).unwrap_err().field(),
            Some("n")
        );
    }
}
