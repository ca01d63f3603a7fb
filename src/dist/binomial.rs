//! Binomial distribution engine.
//!
//! Models the number of successes in `n` independent draws with success
//! probability `p`. When a population size `N` is supplied and the sample is
//! a non-negligible fraction of it, the reported std is accompanied by a
//! finite-population-corrected value approximating without-replacement
//! sampling.

use statrs::distribution::{Binomial, Discrete};

use super::engine::{CalculationInputs, DistributionEngine, DistributionFamily};
use super::error::DistError;
use super::result::{
    interpret_kurtosis, round4, round6, DistributionResult, EchoedInputs, Interpretations,
    PopulationType, ProbabilitySeries, SummaryStatistics,
};

/// Sample fraction above which the population counts as finite
const FINITE_RATIO_THRESHOLD: f64 = 0.05;

/// Stateless binomial engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialDistribution;

impl BinomialDistribution {
    fn validate(
        sample: u64,
        p: f64,
        observed: Option<u64>,
        population: Option<u64>,
    ) -> Result<(), DistError> {
        if sample == 0 {
            return Err(DistError::validation(
                "n",
                "sample size (n) must be greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&p) || p.is_nan() {
            return Err(DistError::validation(
                "p",
                "probability of success (p) must be between 0 and 1",
            ));
        }
        if let Some(x) = observed {
            if x > sample {
                return Err(DistError::validation(
                    "x",
                    format!("observed successes (x) must be between 0 and {}", sample),
                ));
            }
        }
        if let Some(n_pop) = population {
            if n_pop == 0 {
                return Err(DistError::validation(
                    "N",
                    "population size (N) must be greater than 0",
                ));
            }
            if sample > n_pop {
                return Err(DistError::validation(
                    "n",
                    "sample size (n) cannot be larger than the population size (N)",
                ));
            }
        }
        Ok(())
    }

    /// P(X = x) via a log-gamma based pmf, stable for n in the thousands.
    fn pmf(sample: u64, p: f64, x: u64) -> Result<f64, DistError> {
        let dist = Binomial::new(p, sample).map_err(|_| {
            DistError::validation("p", "probability of success (p) must be between 0 and 1")
        })?;
        Ok(dist.pmf(x))
    }

    /// Classify the population and return the sample fraction when known.
    fn population_type(sample: u64, population: Option<u64>) -> (PopulationType, Option<f64>) {
        match population {
            None => (PopulationType::Infinite, None),
            Some(n_pop) => {
                let ratio = sample as f64 / n_pop as f64;
                if ratio > FINITE_RATIO_THRESHOLD {
                    (PopulationType::Finite, Some(ratio))
                } else {
                    (PopulationType::Infinite, Some(ratio))
                }
            }
        }
    }

    fn correction_factor(sample: u64, population: u64) -> f64 {
        ((population - sample) as f64 / (population - 1) as f64).sqrt()
    }

    /// (1 - 2p) / sqrt(npq); 0 at the point-mass cases p = 0 and p = 1.
    fn skewness(sample: u64, p: f64) -> f64 {
        if p == 0.0 || p == 1.0 {
            return 0.0;
        }
        let q = 1.0 - p;
        (1.0 - 2.0 * p) / (sample as f64 * p * q).sqrt()
    }

    /// Excess kurtosis (1 - 6pq) / (npq); 0 at p = 0 and p = 1.
    fn kurtosis(sample: u64, p: f64) -> f64 {
        if p == 0.0 || p == 1.0 {
            return 0.0;
        }
        let q = 1.0 - p;
        (1.0 - 6.0 * p * q) / (sample as f64 * p * q)
    }

    /// Reading of the skewness statistic by sign and magnitude.
    fn interpret_skewness(skewness: f64) -> String {
        if skewness < -0.5 {
            "Significant negative skew: the distribution has a longer tail to the left."
                .to_string()
        } else if skewness > 0.5 {
            "Significant positive skew: the distribution has a longer tail to the right."
                .to_string()
        } else if skewness.abs() < 0.1 {
            "Approximately symmetric distribution.".to_string()
        } else if skewness < 0.0 {
            "Slight negative skew: the distribution leans to the left.".to_string()
        } else {
            "Slight positive skew: the distribution leans to the right.".to_string()
        }
    }

    /// Full calculation from typed parameters.
    ///
    /// # Arguments
    /// * `sample` - Sample size (n), at least 1
    /// * `p` - Probability of success, in [0, 1]
    /// * `observed` - Observed successes (x), 0 ≤ x ≤ n
    /// * `population` - Population size (N) for the finite-population check
    pub fn calculate(
        &self,
        sample: u64,
        p: f64,
        observed: Option<u64>,
        population: Option<u64>,
    ) -> Result<DistributionResult, DistError> {
        Self::validate(sample, p, observed, population)?;

        let (population_type, ratio) = Self::population_type(sample, population);
        let statistics = self.summary_statistics(sample, p, population);

        let (probability_x, probability_x_pct) = match observed {
            Some(x) => {
                let pmf = Self::pmf(sample, p, x)?;
                (Some(round6(pmf)), Some(round4(pmf * 100.0)))
            }
            None => (None, None),
        };

        Ok(DistributionResult {
            family: DistributionFamily::Binomial,
            inputs: EchoedInputs {
                population,
                successes: None,
                sample,
                observed,
                p: Some(p),
            },
            population_type,
            population_ratio: ratio.map(round6),
            sample_ratio: None,
            statistics,
            interpretations: Interpretations {
                skewness: Self::interpret_skewness(statistics.skewness),
                kurtosis: interpret_kurtosis(statistics.kurtosis),
            },
            probability_x,
            probability_x_pct,
        })
    }

    /// The statistics sub-record alone (validation still applies).
    pub fn statistics(
        &self,
        sample: u64,
        p: f64,
        population: Option<u64>,
    ) -> Result<SummaryStatistics, DistError> {
        Self::validate(sample, p, None, population)?;
        Ok(self.summary_statistics(sample, p, population))
    }

    fn summary_statistics(&self, sample: u64, p: f64, population: Option<u64>) -> SummaryStatistics {
        let mean = sample as f64 * p;
        let variance = mean * (1.0 - p);
        let std = variance.sqrt();

        let (population_type, _) = Self::population_type(sample, population);
        let (adjusted_std, correction_factor) = match population {
            Some(n_pop) if population_type == PopulationType::Finite => {
                let factor = Self::correction_factor(sample, n_pop);
                (Some(round6(std * factor)), Some(round6(factor)))
            }
            _ => (None, None),
        };

        SummaryStatistics {
            mean: round6(mean),
            median: None,
            variance: round6(variance),
            std: round6(std),
            adjusted_std,
            correction_factor,
            skewness: round6(Self::skewness(sample, p)),
            kurtosis: round6(Self::kurtosis(sample, p)),
        }
    }

    /// pmf over x = 0..=n as percentages rounded to 4 decimals.
    pub fn probability_series(&self, sample: u64, p: f64) -> Result<ProbabilitySeries, DistError> {
        Self::validate(sample, p, None, None)?;

        let x_values: Vec<u64> = (0..=sample).collect();
        let mut probabilities = Vec::with_capacity(x_values.len());
        for &x in &x_values {
            probabilities.push(round4(Self::pmf(sample, p, x)? * 100.0));
        }
        Ok(ProbabilitySeries {
            x_values,
            probabilities,
        })
    }
}

impl DistributionEngine for BinomialDistribution {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Binomial
    }

    fn calculate(&self, inputs: &CalculationInputs) -> Result<DistributionResult, DistError> {
        match *inputs {
            CalculationInputs::Binomial {
                sample,
                p,
                observed,
                population,
            } => self.calculate(sample, p, observed, population),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Binomial,
                got: inputs.family(),
            }),
        }
    }

    fn probability_series(
        &self,
        inputs: &CalculationInputs,
    ) -> Result<ProbabilitySeries, DistError> {
        match *inputs {
            CalculationInputs::Binomial { sample, p, .. } => self.probability_series(sample, p),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Binomial,
                got: inputs.family(),
            }),
        }
    }

    fn statistics(&self, inputs: &CalculationInputs) -> Result<SummaryStatistics, DistError> {
        match *inputs {
            CalculationInputs::Binomial {
                sample,
                p,
                population,
                ..
            } => self.statistics(sample, p, population),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Binomial,
                got: inputs.family(),
            }),
        }
    }
}
