//! Unit tests for the confusion matrix and point metrics

use aurix::eval::ConfusionMatrix;

fn opt(values: &[i8]) -> Vec<Option<bool>> {
    // 1 -> positive, 0 -> negative, -1 -> undefined
    values
        .iter()
        .map(|v| match v {
            1 => Some(true),
            0 => Some(false),
            _ => None,
        })
        .collect()
}

#[test]
fn test_counts_and_skips() {
    let actual = opt(&[1, 0, 1, 0, -1, 1]);
    let predicted = opt(&[1, 1, 0, 0, 1, -1]);
    let matrix = ConfusionMatrix::from_labels(&actual, &predicted);

    assert_eq!(matrix.true_positives, 1);
    assert_eq!(matrix.false_positives, 1);
    assert_eq!(matrix.false_negatives, 1);
    assert_eq!(matrix.true_negatives, 1);
    assert_eq!(matrix.skipped, 2);
    assert_eq!(matrix.total(), 4);
}

#[test]
fn test_point_metrics() {
    let actual = opt(&[1, 0, 1, 0, -1, 1]);
    let predicted = opt(&[1, 1, 0, 0, 1, -1]);
    let matrix = ConfusionMatrix::from_labels(&actual, &predicted);

    assert_eq!(matrix.precision(), 0.5);
    assert_eq!(matrix.recall(), 0.5);
    assert_eq!(matrix.f1(), 0.5);
    assert_eq!(matrix.accuracy(), 0.5);
}

#[test]
fn test_all_negative_predictor_scores_zero_precision() {
    // High accuracy from refusing to predict is exactly what precision
    // is here to expose.
    let actual = opt(&[1, 0, 0, 0]);
    let predicted = opt(&[0, 0, 0, 0]);
    let matrix = ConfusionMatrix::from_labels(&actual, &predicted);

    assert_eq!(matrix.precision(), 0.0);
    assert_eq!(matrix.recall(), 0.0);
    assert_eq!(matrix.f1(), 0.0);
    assert_eq!(matrix.accuracy(), 0.75);
}

#[test]
fn test_empty_streams() {
    let matrix = ConfusionMatrix::from_labels(&[], &[]);
    assert_eq!(matrix.total(), 0);
    assert_eq!(matrix.precision(), 0.0);
    assert_eq!(matrix.recall(), 0.0);
    assert_eq!(matrix.accuracy(), 0.0);
}

#[test]
fn test_support_and_rates() {
    let actual = opt(&[1, 0, 1, 0, -1, 1]);
    let predicted = opt(&[1, 1, 0, 0, 1, -1]);
    let matrix = ConfusionMatrix::from_labels(&actual, &predicted);

    assert_eq!(matrix.support_pos(), 2);
    assert_eq!(matrix.support_neg(), 2);
    assert_eq!(matrix.positive_rate(), 0.5);
    assert_eq!(matrix.predicted_positive_rate(), 0.5);
}

#[test]
fn test_perfect_predictor() {
    let actual = opt(&[1, 0, 1, 0]);
    let matrix = ConfusionMatrix::from_labels(&actual, &actual);
    assert_eq!(matrix.precision(), 1.0);
    assert_eq!(matrix.recall(), 1.0);
    assert_eq!(matrix.f1(), 1.0);
    assert_eq!(matrix.accuracy(), 1.0);
    assert_eq!(matrix.skipped, 0);
}
