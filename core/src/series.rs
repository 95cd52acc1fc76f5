use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{ActivityRecord, ChargedRecord, DailyWellbeingRecord};
use crate::stats::mean;
use crate::types::{DailyActivityMeans, DailyWellbeingMeans};

/// Felles tilgang til dato for vindusfiltrering.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for DailyWellbeingRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ActivityRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ChargedRecord {
    fn date(&self) -> NaiveDate {
        self.record.date
    }
}

/// Første dato som er med i et vindu på `days` dager som slutter i `today`.
/// None når vinduet går forbi kalenderens nedre grense (=> ubegrenset vindu).
pub fn window_start(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    today.checked_sub_signed(Duration::days(i64::from(days)))
}

/// Beholder registreringer med dato >= today - days (inklusiv), i opprinnelig rekkefølge.
pub fn trailing_window<T: Dated + Clone>(records: &[T], today: NaiveDate, days: u32) -> Vec<T> {
    let Some(start) = window_start(today, days) else {
        log::debug!("window of {days} days before {today} is unbounded, keeping all records");
        return records.to_vec();
    };
    records
        .iter()
        .filter(|r| r.date() >= start)
        .cloned()
        .collect()
}

/// Snitt av charge_norm. None for tom serie.
pub fn mean_charge_norm(series: &[ChargedRecord]) -> Option<f64> {
    let scores: Vec<f64> = series.iter().map(|r| r.charge_norm).collect();
    mean(&scores)
}

/// Snitt per dato av de fem målingene (nøytral verdi for manglende), sortert på dato.
pub fn daily_wellbeing_means(records: &[DailyWellbeingRecord]) -> Vec<DailyWellbeingMeans> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&DailyWellbeingRecord>> = BTreeMap::new();
    for r in records {
        by_date.entry(r.date).or_default().push(r);
    }

    by_date
        .into_iter()
        .map(|(date, rs)| {
            let avg = |f: fn(&DailyWellbeingRecord) -> u8| -> f64 {
                let xs: Vec<f64> = rs.iter().map(|&r| f64::from(f(r))).collect();
                mean(&xs).unwrap_or_default()
            };
            DailyWellbeingMeans {
                date,
                count: rs.len(),
                fatigue: avg(DailyWellbeingRecord::fatigue_or_neutral),
                sleep_quality: avg(DailyWellbeingRecord::sleep_quality_or_neutral),
                pain: avg(DailyWellbeingRecord::pain_or_neutral),
                stress: avg(DailyWellbeingRecord::stress_or_neutral),
                mood: avg(DailyWellbeingRecord::mood_or_neutral),
            }
        })
        .collect()
}

/// Snitt per dato av vanskelighet og glede, sortert på dato.
pub fn daily_activity_means(records: &[ActivityRecord]) -> Vec<DailyActivityMeans> {
    let mut by_date: BTreeMap<NaiveDate, (usize, f64, f64)> = BTreeMap::new();
    for r in records {
        let e = by_date.entry(r.date).or_insert((0, 0.0, 0.0));
        e.0 += 1;
        e.1 += f64::from(r.difficulty);
        e.2 += f64::from(r.enjoyment);
    }

    by_date
        .into_iter()
        .map(|(date, (n, d, e))| DailyActivityMeans {
            date,
            count: n,
            difficulty: d / n as f64,
            enjoyment: e / n as f64,
        })
        .collect()
}
