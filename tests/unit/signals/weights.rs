//! Unit tests for forecast weight validation

use aurix::signals::ForecastWeights;

#[test]
fn test_default_weights_sum_to_one() {
    let weights = ForecastWeights::default();
    let total = weights.gap_weight + weights.momentum_weight + weights.volume_weight;
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(weights.gap_weight, 0.5);
    assert_eq!(weights.momentum_weight, 0.3);
    assert_eq!(weights.volume_weight, 0.2);
}

#[test]
fn test_custom_weights_accepted() {
    let weights = ForecastWeights::new(0.4, 0.4, 0.2).unwrap();
    assert_eq!(weights.gap_weight, 0.4);
}

#[test]
fn test_weights_must_sum_to_one() {
    let result = ForecastWeights::new(0.5, 0.3, 0.1);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("sum to 1.0"));
}

#[test]
fn test_weights_slightly_off_rejected() {
    assert!(ForecastWeights::new(0.5, 0.3, 0.21).is_err());
}

#[test]
fn test_negative_weight_rejected() {
    let result = ForecastWeights::new(-0.1, 0.6, 0.5);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("non-negative"));
}
