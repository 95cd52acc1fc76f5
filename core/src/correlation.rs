use std::collections::BTreeMap;

use crate::models::ActivityRecord;
use crate::stats::{pearson, RoundTo, StatsError};
use crate::types::{CorrelationReport, CorrelationValue, DEFAULT_MIN_CATEGORY_RECORDS};

/// Global korrelasjon krever alltid minst to økter.
pub const MIN_GLOBAL_RECORDS: usize = 2;

/// Pearson med vakter, mappet til tre-tilstand og rundet til 2 desimaler.
///
/// Nullvarians-vakten sammenligner eksakt: en nesten konstant serie (f.eks. `[1.0, 1.0 + 1e-15]`)
/// regnes som varierende og gir et tall; kun ikke-finite resultater fanges etterpå.
pub fn guarded_pearson(xs: &[f64], ys: &[f64], min_points: usize) -> CorrelationValue {
    match pearson(xs, ys, min_points) {
        Ok(r) => CorrelationValue::Value(r.round_to(2)),
        Err(StatsError::LengthMismatch { x, y }) => {
            log::warn!("correlation: length mismatch x={x} y={y}");
            CorrelationValue::ComputationError
        }
        Err(e) => {
            log::debug!("correlation: insufficient data ({e})");
            CorrelationValue::InsufficientData
        }
    }
}

fn correlate(records: &[&ActivityRecord], min_points: usize) -> CorrelationValue {
    let difficulty: Vec<f64> = records.iter().map(|r| f64::from(r.difficulty)).collect();
    let enjoyment: Vec<f64> = records.iter().map(|r| f64::from(r.enjoyment)).collect();
    guarded_pearson(&difficulty, &enjoyment, min_points)
}

/// Korrelasjon mellom opplevd vanskelighet og glede, globalt og per kategori.
/// Bruker standard minimum (2) per kategori.
pub fn correlation_difficulty_pleasure(records: &[ActivityRecord]) -> CorrelationReport {
    correlation_with_min(records, DEFAULT_MIN_CATEGORY_RECORDS)
}

/// Som `correlation_difficulty_pleasure`, med eget minimum per kategori (klemmes til ≥ 2).
pub fn correlation_with_min(records: &[ActivityRecord], min_category_records: usize) -> CorrelationReport {
    if records.is_empty() {
        return CorrelationReport::default();
    }

    let all: Vec<&ActivityRecord> = records.iter().collect();
    let global = correlate(&all, MIN_GLOBAL_RECORDS);

    // Grupper per kategori; udefinert nøkkel hoppes over
    let mut groups: BTreeMap<&str, Vec<&ActivityRecord>> = BTreeMap::new();
    for r in records {
        if let Some(cat) = r.category.as_deref() {
            groups.entry(cat).or_default().push(r);
        }
    }

    let by_category = groups
        .into_iter()
        .map(|(cat, rs)| {
            let value = correlate(&rs, min_category_records);
            (cat.to_string(), value)
        })
        .collect();

    CorrelationReport {
        global: Some(global),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(cat: Option<&str>, d: u8, e: u8) -> ActivityRecord {
        ActivityRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category: cat.map(str::to_string),
            difficulty: d,
            enjoyment: e,
            duration_min: None,
            comment: None,
        }
    }

    #[test]
    fn null_category_is_skipped_but_counts_globally() {
        let records = vec![rec(None, 2, 3), rec(None, 5, 7), rec(Some("Basket"), 4, 4)];
        let report = correlation_difficulty_pleasure(&records);
        assert!(report.global.unwrap().is_value());
        assert_eq!(report.by_category.len(), 1);
        assert_eq!(report.by_category["Basket"], CorrelationValue::InsufficientData);
    }

    #[test]
    fn mismatched_series_is_computation_error() {
        assert_eq!(
            guarded_pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0], 2),
            CorrelationValue::ComputationError
        );
    }

    #[test]
    fn near_constant_series_is_not_treated_as_constant() {
        let xs = [1.0, 1.0 + 1e-12, 1.0 + 2e-12];
        let v = guarded_pearson(&xs, &[1.0, 2.0, 3.0], 2);
        assert!(v.is_value(), "got {v:?}");
        assert_eq!(
            guarded_pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], 2),
            CorrelationValue::InsufficientData
        );
    }

    #[test]
    fn stricter_minimum_applies_per_category_only() {
        let records = vec![rec(Some("Natation"), 2, 3), rec(Some("Natation"), 6, 8)];
        let report = correlation_with_min(&records, 3);
        assert_eq!(report.global, Some(CorrelationValue::Value(1.0)));
        assert_eq!(report.by_category["Natation"], CorrelationValue::InsufficientData);
    }
}
