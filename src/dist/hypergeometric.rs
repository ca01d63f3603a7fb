//! Hypergeometric distribution engine.
//!
//! Models the number of successes drawn when sampling without replacement
//! from a finite population of `N` items containing `K` successes. The
//! finite-population factor is always part of the variance here; there is no
//! infinite variant of this family.
//!
//! The median has no closed form, so it is computed exactly by walking the
//! support and accumulating probability mass. Shape is interpreted by
//! comparing the mean against that median rather than by the sign of the
//! skewness statistic; the asymmetric support makes the mean/median reading
//! the more faithful one for this family.

use statrs::distribution::{Discrete, Hypergeometric};

use super::engine::{CalculationInputs, DistributionEngine, DistributionFamily};
use super::error::DistError;
use super::result::{
    interpret_kurtosis, round4, round6, DistributionResult, EchoedInputs, Interpretations,
    PopulationType, ProbabilitySeries, SummaryStatistics,
};

/// Stateless hypergeometric engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypergeometricDistribution;

impl HypergeometricDistribution {
    fn validate(
        population: u64,
        successes: u64,
        sample: u64,
        observed: Option<u64>,
    ) -> Result<(), DistError> {
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
        if let Some(x) = observed {
            // x > n and x > K are distinct bounds, reported separately.
            if x > sample {
                return Err(DistError::validation(
                    "x",
                    format!(
                        "observed successes (x) cannot be larger than the sample size n={}",
                        sample
                    ),
                ));
            }
            if x > successes {
                return Err(DistError::validation(
                    "x",
                    format!(
                        "observed successes (x) cannot be larger than the population successes K={}",
                        successes
                    ),
                ));
            }
        }
        Ok(())
    }

    /// P(X = x) = C(K,x) C(N-K,n-x) / C(N,n), via statrs' log-gamma pmf.
    fn pmf(population: u64, successes: u64, sample: u64, x: u64) -> Result<f64, DistError> {
        let dist = Hypergeometric::new(population, successes, sample).map_err(|_| {
            DistError::validation(
                "K",
                "population successes (K) cannot be larger than the population size (N)",
            )
        })?;
        Ok(dist.pmf(x))
    }

    fn mean(population: u64, successes: u64, sample: u64) -> f64 {
        sample as f64 * (successes as f64 / population as f64)
    }

    /// n p q (N-n)/(N-1) — the finite-population factor always applies.
    fn variance(population: u64, successes: u64, sample: u64) -> f64 {
        let nn = population as f64;
        let p = successes as f64 / nn;
        let q = 1.0 - p;
        sample as f64 * p * q * ((nn - sample as f64) / (nn - 1.0))
    }

    /// Closed-form skewness; 0 when the denominator degenerates (N = 1, or
    /// K ∈ {0, N}, or n = N).
    fn skewness(population: u64, successes: u64, sample: u64) -> f64 {
        if population == 1 {
            return 0.0;
        }
        let nn = population as f64;
        let kk = successes as f64;
        let n = sample as f64;

        let denominator = (n * kk * (nn - kk) * (nn - n)).sqrt() * (nn - 2.0);
        if denominator == 0.0 {
            return 0.0;
        }
        let numerator = (nn - 2.0 * kk) * (nn - 1.0).sqrt() * (nn - 2.0 * n);
        numerator / denominator
    }

    /// Closed-form excess kurtosis; 0 when N ≤ 3 or the denominator
    /// degenerates.
    fn kurtosis(population: u64, successes: u64, sample: u64) -> f64 {
        if population <= 3 {
            return 0.0;
        }
        let nn = population as f64;
        let kk = successes as f64;
        let n = sample as f64;

        let denominator = n * kk * (nn - kk) * (nn - n) * (nn - 2.0) * (nn - 3.0) / (nn - 1.0);
        if denominator == 0.0 {
            return 0.0;
        }

        let term1 = (nn - 1.0) * (nn * (nn + 1.0) - 6.0 * kk * (nn - kk) * (nn - n) / (n * (nn - n)));
        let term2 = 3.0 * n * kk * (nn - kk) * (nn - n) / (n * (nn - n));
        let numerator = term1 - term2;

        (nn + 1.0) * numerator / denominator
    }

    /// Exact median by enumeration: the first x whose cumulative mass
    /// reaches 0.5. Falls back to ⌊mean⌋ against rounding at the last
    /// support point.
    fn median(population: u64, successes: u64, sample: u64) -> Result<u64, DistError> {
        let max_x = sample.min(successes);
        let mut cumulative = 0.0;
        for x in 0..=max_x {
            cumulative += Self::pmf(population, successes, sample, x)?;
            if cumulative >= 0.5 {
                return Ok(x);
            }
        }
        Ok(Self::mean(population, successes, sample).floor() as u64)
    }

    /// Shape reading by mean-vs-median comparison (not skewness sign).
    fn interpret_shape(mean: f64, median: u64) -> String {
        let median = median as f64;
        if mean < median - 0.1 {
            "Negative skew (left tail): the mean is below the median, indicating a longer tail toward smaller values."
                .to_string()
        } else if mean > median + 0.1 {
            "Positive skew (right tail): the mean is above the median, indicating a longer tail toward larger values."
                .to_string()
        } else {
            "Symmetric: the mean and the median are approximately equal.".to_string()
        }
    }

    /// Full calculation from typed parameters.
    ///
    /// # Arguments
    /// * `population` - Population size (N), at least 1
    /// * `successes` - Successes in the population (K), 0 ≤ K ≤ N
    /// * `sample` - Sample size (n), 1 ≤ n ≤ N
    /// * `observed` - Observed successes (x), 0 ≤ x ≤ min(n, K)
    pub fn calculate(
        &self,
        population: u64,
        successes: u64,
        sample: u64,
        observed: Option<u64>,
    ) -> Result<DistributionResult, DistError> {
        Self::validate(population, successes, sample, observed)?;

        let p = successes as f64 / population as f64;
        let statistics = self.summary_statistics(population, successes, sample)?;
        let mean = Self::mean(population, successes, sample);
        let median = statistics.median.unwrap_or(0);

        let (probability_x, probability_x_pct) = match observed {
            Some(x) => {
                let pmf = Self::pmf(population, successes, sample, x)?;
                (Some(round6(pmf)), Some(round4(pmf * 100.0)))
            }
            None => (None, None),
        };

        Ok(DistributionResult {
            family: DistributionFamily::Hypergeometric,
            inputs: EchoedInputs {
                population: Some(population),
                successes: Some(successes),
                sample,
                observed,
                p: Some(round6(p)),
            },
            population_type: PopulationType::Finite,
            population_ratio: None,
            sample_ratio: Some(round4(sample as f64 / population as f64)),
            statistics,
            interpretations: Interpretations {
                skewness: Self::interpret_shape(mean, median),
                kurtosis: interpret_kurtosis(statistics.kurtosis),
            },
            probability_x,
            probability_x_pct,
        })
    }

    /// The statistics sub-record alone (validation still applies).
    pub fn statistics(
        &self,
        population: u64,
        successes: u64,
        sample: u64,
    ) -> Result<SummaryStatistics, DistError> {
        Self::validate(population, successes, sample, None)?;
        self.summary_statistics(population, successes, sample)
    }

    fn summary_statistics(
        &self,
        population: u64,
        successes: u64,
        sample: u64,
    ) -> Result<SummaryStatistics, DistError> {
        let variance = Self::variance(population, successes, sample);
        Ok(SummaryStatistics {
            mean: round6(Self::mean(population, successes, sample)),
            median: Some(Self::median(population, successes, sample)?),
            variance: round6(variance),
            std: round6(variance.sqrt()),
            adjusted_std: None,
            correction_factor: None,
            skewness: round6(Self::skewness(population, successes, sample)),
            kurtosis: round6(Self::kurtosis(population, successes, sample)),
        })
    }

    /// pmf over x = 0..=min(n, K) as percentages rounded to 4 decimals.
    /// The support is bounded above by K, unlike the binomial's full 0..=n.
    pub fn probability_series(
        &self,
        population: u64,
        successes: u64,
        sample: u64,
    ) -> Result<ProbabilitySeries, DistError> {
        Self::validate(population, successes, sample, None)?;

        let x_values: Vec<u64> = (0..=sample.min(successes)).collect();
        let mut probabilities = Vec::with_capacity(x_values.len());
        for &x in &x_values {
            probabilities.push(round4(Self::pmf(population, successes, sample, x)? * 100.0));
        }
        Ok(ProbabilitySeries {
            x_values,
            probabilities,
        })
    }
}

impl DistributionEngine for HypergeometricDistribution {
    fn family(&self) -> DistributionFamily {
        DistributionFamily::Hypergeometric
    }

    fn calculate(&self, inputs: &CalculationInputs) -> Result<DistributionResult, DistError> {
        match *inputs {
            CalculationInputs::Hypergeometric {
                population,
                successes,
                sample,
                observed,
            } => self.calculate(population, successes, sample, observed),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Hypergeometric,
                got: inputs.family(),
            }),
        }
    }

    fn probability_series(
        &self,
        inputs: &CalculationInputs,
    ) -> Result<ProbabilitySeries, DistError> {
        match *inputs {
            CalculationInputs::Hypergeometric {
                population,
                successes,
                sample,
                ..
            } => self.probability_series(population, successes, sample),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Hypergeometric,
                got: inputs.family(),
            }),
        }
    }

    fn statistics(&self, inputs: &CalculationInputs) -> Result<SummaryStatistics, DistError> {
        match *inputs {
            CalculationInputs::Hypergeometric {
                population,
                successes,
                sample,
                ..
            } => self.statistics(population, successes, sample),
            _ => Err(DistError::MismatchedInputs {
                expected: DistributionFamily::Hypergeometric,
                got: inputs.family(),
            }),
        }
    }
}
