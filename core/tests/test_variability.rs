// core/tests/test_variability.rs
use chrono::NaiveDate;
use wellbeing_core::{
    annotate_charges, classify_scores, compute_variability, DailyWellbeingRecord, VariabilityLevel,
};

// Symmetrisk triplett rundt 50 => utvalgsstandardavvik = offset
fn triplet(offset: f64) -> Vec<f64> {
    vec![50.0 - offset, 50.0, 50.0 + offset]
}

#[test]
fn empty_and_single_are_insufficient() {
    assert_eq!(classify_scores(&[]).into_tuple(), (VariabilityLevel::InsufficientData, None));
    assert_eq!(classify_scores(&[73.0]).into_tuple(), (VariabilityLevel::InsufficientData, None));
    assert_eq!(compute_variability(&[]).score, None);

    let one = annotate_charges(&[DailyWellbeingRecord::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        1, 5, 1, 1, 5,
    )]);
    assert_eq!(compute_variability(&one).level, VariabilityLevel::InsufficientData);
}

#[test]
fn thresholds_low_moderate_high() {
    let low = classify_scores(&triplet(8.0));
    assert_eq!(low.level, VariabilityLevel::Low);
    assert!((low.score.unwrap() - 8.0).abs() < 1e-9);

    let moderate = classify_scores(&triplet(15.0));
    assert_eq!(moderate.level, VariabilityLevel::Moderate);
    assert!((moderate.score.unwrap() - 15.0).abs() < 1e-9);

    let high = classify_scores(&triplet(25.0));
    assert_eq!(high.level, VariabilityLevel::High);
    assert!((high.score.unwrap() - 25.0).abs() < 1e-9);
}

#[test]
fn threshold_edges_are_lower_inclusive() {
    assert_eq!(classify_scores(&triplet(10.0)).level, VariabilityLevel::Moderate);
    assert_eq!(classify_scores(&triplet(20.0)).level, VariabilityLevel::High);
    assert_eq!(classify_scores(&[50.0, 50.0]).level, VariabilityLevel::Low);
}

#[test]
fn non_finite_scores_are_skipped() {
    let v = classify_scores(&[f64::NAN, 42.0, 50.0, 58.0, f64::INFINITY]);
    assert_eq!(v.level, VariabilityLevel::Low);
    assert!((v.score.unwrap() - 8.0).abs() < 1e-9);

    let v = classify_scores(&[f64::NAN, 42.0]);
    assert_eq!(v.level, VariabilityLevel::InsufficientData);
}

#[test]
fn score_is_unrounded_and_idempotent() {
    let scores = [80.0, 55.0, 30.0, 75.0, 100.0, 0.0];
    let a = classify_scores(&scores);
    let b = classify_scores(&scores);
    assert_eq!(a, b);
    assert_eq!(a.level, VariabilityLevel::High);
    assert!((a.score.unwrap() - 36.5604522218567).abs() < 1e-9);
}

#[test]
fn labels() {
    assert_eq!(VariabilityLevel::InsufficientData.to_string(), "insufficient data");
    assert_eq!(VariabilityLevel::Moderate.as_str(), "moderate");
    assert_eq!(VariabilityLevel::High.label_fr(), "Élevée");
    assert_eq!(
        serde_json::to_value(VariabilityLevel::InsufficientData).unwrap(),
        serde_json::json!("insufficient data")
    );
    assert_eq!(serde_json::to_value(VariabilityLevel::Low).unwrap(), serde_json::json!("low"));
}
