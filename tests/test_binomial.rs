//! Integration tests for the binomial engine

use finpop::dist::{compute_binomial, BinomialDistribution, PopulationType};

#[test]
fn test_known_scenario_n10_p05() {
    let result = compute_binomial(10, 0.5, Some(5), None).unwrap();

    assert_eq!(result.statistics.mean, 5.0);
    assert_eq!(result.statistics.variance, 2.5);
    assert_eq!(result.statistics.std, 1.581139);
    assert_eq!(result.probability_x, Some(0.246094));
    assert_eq!(result.probability_x_pct, Some(24.6094));
    assert_eq!(result.population_type, PopulationType::Infinite);
    assert!(result.statistics.median.is_none(), "binomial has no median field");
}

#[test]
fn test_probability_series_sums_to_one() {
    let series = BinomialDistribution.probability_series(25, 0.3).unwrap();

    assert_eq!(series.x_values.len(), 26, "support is 0..=n");
    assert_eq!(series.x_values[0], 0);
    assert_eq!(series.x_values[25], 25);

    // Percentages rounded to 4 decimals; allow for accumulated rounding.
    let total: f64 = series.probabilities.iter().sum();
    assert!(
        (total - 100.0).abs() < 0.01,
        "series should sum to ~100%, got {}",
        total
    );
}

#[test]
fn test_series_is_stable_for_large_n() {
    // C(2000, 1000) overflows naive factorials; the log-gamma pmf must not.
    let series = BinomialDistribution.probability_series(2000, 0.5).unwrap();

    let total: f64 = series.probabilities.iter().sum();
    assert!((total - 100.0).abs() < 0.05, "got {}", total);
    assert!(series.probabilities[1000] > 0.0, "mode must carry mass");
    assert!(series.probabilities.iter().all(|p| p.is_finite()));
}

#[test]
fn test_observed_boundaries() {
    // x = 0 and x = n are valid support points.
    assert!(compute_binomial(10, 0.5, Some(0), None).is_ok());
    assert!(compute_binomial(10, 0.5, Some(10), None).is_ok());

    // x = n + 1 is out of support.
    let err = compute_binomial(10, 0.5, Some(11), None).unwrap_err();
    assert!(err.to_string().contains("(x)"));
    assert!(err.to_string().contains("between 0 and 10"));
}

#[test]
fn test_finite_population_correction_applies_above_5pct() {
    // n/N = 0.1 > 0.05: finite classification plus the corrected std.
    let result = compute_binomial(10, 0.5, None, Some(100)).unwrap();

    assert_eq!(result.population_type, PopulationType::Finite);
    assert_eq!(result.population_ratio, Some(0.1));
    // sqrt((100-10)/(100-1)) = 0.953463
    assert_eq!(result.statistics.correction_factor, Some(0.953463));
    assert_eq!(result.statistics.adjusted_std, Some(1.507557));
    // The uncorrected std is still reported alongside.
    assert_eq!(result.statistics.std, 1.581139);
}

#[test]
fn test_small_sample_fraction_stays_infinite() {
    let result = compute_binomial(10, 0.5, None, Some(1000)).unwrap();

    assert_eq!(result.population_type, PopulationType::Infinite);
    assert_eq!(result.population_ratio, Some(0.01));
    assert!(result.statistics.adjusted_std.is_none());
    assert!(result.statistics.correction_factor.is_none());
}

#[test]
fn test_exactly_5pct_is_not_finite() {
    let result = compute_binomial(10, 0.5, None, Some(200)).unwrap();
    assert_eq!(result.population_type, PopulationType::Infinite);
}

#[test]
fn test_degenerate_probabilities() {
    // p = 0 and p = 1 are valid point masses, not errors.
    let result = compute_binomial(10, 0.0, Some(0), None).unwrap();
    assert_eq!(result.statistics.mean, 0.0);
    assert_eq!(result.statistics.variance, 0.0);
    assert_eq!(result.statistics.skewness, 0.0);
    assert_eq!(result.statistics.kurtosis, 0.0);
    assert_eq!(result.probability_x, Some(1.0));

    let result = compute_binomial(10, 1.0, Some(10), None).unwrap();
    assert_eq!(result.statistics.mean, 10.0);
    assert_eq!(result.statistics.skewness, 0.0);
    assert_eq!(result.statistics.kurtosis, 0.0);
    assert_eq!(result.probability_x, Some(1.0));
}

#[test]
fn test_rejects_out_of_range_probability() {
    let err = compute_binomial(10, 1.5, None, None).unwrap_err();
    assert!(err.to_string().contains("(p)"));
    assert!(err.to_string().contains("between 0 and 1"));
}

#[test]
fn test_rejects_sample_larger_than_population() {
    let err = compute_binomial(50, 0.5, None, Some(20)).unwrap_err();
    assert!(err.to_string().contains("(n)"));
    assert!(err.to_string().contains("(N)"));
}

#[test]
fn test_interpretations_follow_the_shape() {
    // Symmetric: p = 0.5 gives skewness 0.
    let result = compute_binomial(10, 0.5, None, None).unwrap();
    assert!(result
        .interpretations
        .skewness
        .starts_with("Approximately symmetric"));

    // p = 0.05, n = 10: skewness = 0.9/sqrt(0.475) ≈ 1.31, strongly positive.
    let result = compute_binomial(10, 0.05, None, None).unwrap();
    assert!(result
        .interpretations
        .skewness
        .starts_with("Significant positive"));
    assert!(result.interpretations.kurtosis.starts_with("Leptokurtic"));
}
