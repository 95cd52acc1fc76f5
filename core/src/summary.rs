use chrono::NaiveDate;

use crate::charge::annotate_charges;
use crate::correlation::correlation_with_min;
use crate::metrics::Metrics;
use crate::models::{ActivityRecord, DailyWellbeingRecord};
use crate::series::{daily_activity_means, daily_wellbeing_means, mean_charge_norm, trailing_window};
use crate::stats::RoundTo;
use crate::types::{ActivitySummary, AnalysisCfg, WellbeingSummary};
use crate::variability::compute_variability;

#[derive(Clone)]
pub struct WellbeingInputs<'a> {
    pub records: &'a [DailyWellbeingRecord],
    /// Sluttdato for vinduet. None => ingen vindusfiltrering.
    pub today: Option<NaiveDate>,
    pub cfg: &'a AnalysisCfg,
    /// Tellere (prod: Some, test: gjerne None)
    pub metrics: Option<&'a Metrics>,
}

#[derive(Clone)]
pub struct ActivityInputs<'a> {
    pub records: &'a [ActivityRecord],
    pub today: Option<NaiveDate>,
    pub cfg: &'a AnalysisCfg,
    pub metrics: Option<&'a Metrics>,
}

fn windowed<T: crate::series::Dated + Clone>(
    records: &[T],
    today: Option<NaiveDate>,
    cfg: &AnalysisCfg,
) -> (Vec<T>, Option<u32>) {
    match (today, cfg.window_days()) {
        (Some(t), Some(days)) => (trailing_window(records, t, days), Some(days)),
        _ => (records.to_vec(), None),
    }
}

/// Oppsummering for dashboardet: snitt-score og variabilitet over vinduet.
pub fn summarize_wellbeing(inputs: WellbeingInputs) -> WellbeingSummary {
    // 1️⃣ Vindu (siste N dager)
    let (records, window_days) = windowed(inputs.records, inputs.today, inputs.cfg);

    // 2️⃣ charge + charge_norm på kopier, sortert på dato
    let series = annotate_charges(&records);

    // 3️⃣ Snitt og variabilitet
    let mean = mean_charge_norm(&series).map(|m| m.round_to(2));
    let variability = compute_variability(&series);
    if let Some(m) = inputs.metrics {
        m.observe_variability(&variability);
    }

    log::debug!(
        "wellbeing summary: {} of {} records in window, level={}",
        series.len(),
        inputs.records.len(),
        variability.level
    );

    WellbeingSummary {
        window_days,
        records: series.len(),
        mean_charge_norm: mean,
        variability: variability.level,
        variability_score: variability.score.map(|s| s.round_to(2)),
        daily_means: daily_wellbeing_means(&records),
        series,
    }
}

/// Korrelasjon + daglige snitt for aktivitetene i vinduet.
pub fn summarize_activities(inputs: ActivityInputs) -> ActivitySummary {
    let (records, window_days) = windowed(inputs.records, inputs.today, inputs.cfg);

    let correlation = correlation_with_min(&records, inputs.cfg.min_category_records());
    if let Some(m) = inputs.metrics {
        m.observe_correlation(&correlation);
    }

    ActivitySummary {
        window_days,
        records: records.len(),
        correlation,
        daily_means: daily_activity_means(&records),
    }
}
