//! Integration tests for model selection

use finpop::dist::{decide_model, DistributionFamily, SAMPLE_RATIO_THRESHOLD};

#[test]
fn test_small_sample_prefers_binomial() {
    let decision = decide_model(1000, 200, 50).unwrap();

    assert_eq!(decision.family, DistributionFamily::Binomial);
    assert_eq!(decision.sample_ratio, 0.05);
    assert_eq!(decision.threshold, SAMPLE_RATIO_THRESHOLD);
    assert!(
        decision.recommendation.is_some(),
        "the approximation always carries a recommendation"
    );
}

#[test]
fn test_large_sample_requires_hypergeometric() {
    let decision = decide_model(1000, 200, 250).unwrap();

    assert_eq!(decision.family, DistributionFamily::Hypergeometric);
    assert_eq!(decision.sample_ratio, 0.25);
    assert!(decision.recommendation.is_none());
}

#[test]
fn test_exact_threshold_chooses_hypergeometric() {
    let decision = decide_model(100, 30, 20).unwrap();
    assert_eq!(decision.family, DistributionFamily::Hypergeometric);

    // One below the threshold flips back to the approximation.
    let decision = decide_model(100, 30, 19).unwrap();
    assert_eq!(decision.family, DistributionFamily::Binomial);
}

#[test]
fn test_reason_embeds_ratio_and_threshold() {
    let decision = decide_model(1000, 200, 50).unwrap();
    assert!(decision.reason.contains("5.00%"), "got: {}", decision.reason);
    assert!(decision.reason.contains("20%"), "got: {}", decision.reason);

    let decision = decide_model(1000, 200, 250).unwrap();
    assert!(decision.reason.contains("25.00%"), "got: {}", decision.reason);
    assert!(decision.reason.contains("without replacement"));
}

#[test]
fn test_validation_errors_name_the_field() {
    assert!(decide_model(0, 0, 1)
        .unwrap_err()
        .to_string()
        .contains("(N)"));
    assert!(decide_model(100, 101, 10)
        .unwrap_err()
        .to_string()
        .contains("(K)"));
    assert!(decide_model(100, 50, 0)
        .unwrap_err()
        .to_string()
        .contains("(n)"));
    assert!(decide_model(100, 50, 101)
        .unwrap_err()
        .to_string()
        .contains("cannot be larger than the population"));
}

#[test]
fn test_k_equal_n_is_valid() {
    // Every population member a success is a legal, degenerate scenario.
    let decision = decide_model(100, 100, 10).unwrap();
    assert_eq!(decision.family, DistributionFamily::Binomial);
}
