// JSON inn / JSON ut. Brukes av Python-bindingen og av andre ikke-Rust-klienter.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::charge::{annotate_charges, charge_record};
use crate::correlation::correlation_with_min;
use crate::error::{parse_json, CoreResult};
use crate::models::{ActivityRecord, DailyWellbeingRecord};
use crate::summary::{summarize_activities, summarize_wellbeing, ActivityInputs, WellbeingInputs};
use crate::types::AnalysisCfg;
use crate::variability::classify_scores;

// Rad med (kanskje) charge_norm – andre felt ignoreres
#[derive(Debug, Deserialize)]
struct ScorePoint {
    #[serde(default)]
    charge_norm: Option<f64>,
}

// Tolerant aktivitetsrad: difficulty/enjoyment kan mangle
#[derive(Debug, Deserialize)]
struct ActivityRowTol {
    date: NaiveDate,
    #[serde(default, alias = "sport")]
    category: Option<String>,
    #[serde(default, alias = "difficulte")]
    difficulty: Option<u8>,
    #[serde(default, alias = "plaisir")]
    enjoyment: Option<u8>,
    #[serde(default, alias = "duree")]
    duration_min: Option<u32>,
    #[serde(default, alias = "commentaire")]
    comment: Option<String>,
}

/// Rader uten både difficulty og enjoyment tas ikke med (parvis utelatelse).
/// Mangler feltene i alle rader blir input tom => tom rapport.
fn complete_activities(rows: Vec<ActivityRowTol>) -> Vec<ActivityRecord> {
    let total = rows.len();
    let records: Vec<ActivityRecord> = rows
        .into_iter()
        .filter_map(|r| match (r.difficulty, r.enjoyment) {
            (Some(difficulty), Some(enjoyment)) => Some(ActivityRecord {
                date: r.date,
                category: r.category,
                difficulty,
                enjoyment,
                duration_min: r.duration_min,
                comment: r.comment,
            }),
            _ => None,
        })
        .collect();
    if records.len() < total {
        log::debug!(
            "activities: dropped {} of {} rows without difficulty/enjoyment",
            total - records.len(),
            total
        );
    }
    records
}

#[derive(Debug, Deserialize)]
struct CorrelationIn {
    records: Vec<ActivityRowTol>,
    #[serde(default)]
    cfg: AnalysisCfg,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CorrelationRepr {
    Object(CorrelationIn),
    Records(Vec<ActivityRowTol>),
}

#[derive(Debug, Deserialize)]
struct SummaryIn<T> {
    records: Vec<T>,
    #[serde(default)]
    today: Option<NaiveDate>,
    #[serde(default)]
    cfg: AnalysisCfg,
}

#[derive(Debug, Serialize)]
struct ChargeOut {
    charge: f64,
    charge_norm: f64,
}

/// Én dagsregistrering => {"charge", "charge_norm"}.
pub fn charge_json(json_in: &str) -> CoreResult<String> {
    let record: DailyWellbeingRecord = parse_json("DailyWellbeingRecord", json_in)?;
    let charged = charge_record(&record);
    Ok(serde_json::to_string(&ChargeOut {
        charge: charged.charge,
        charge_norm: charged.charge_norm,
    })?)
}

/// Liste av dagsregistreringer => samme liste med charge/charge_norm, sortert på dato.
pub fn annotate_charges_json(json_in: &str) -> CoreResult<String> {
    let records: Vec<DailyWellbeingRecord> = parse_json("Vec<DailyWellbeingRecord>", json_in)?;
    Ok(serde_json::to_string(&annotate_charges(&records))?)
}

/// Liste av rader med `charge_norm` => {"level", "score"}.
/// Rader uten feltet teller ikke; færre enn to brukbare => "insufficient data".
pub fn variability_json(json_in: &str) -> CoreResult<String> {
    let points: Vec<ScorePoint> = parse_json("Vec<ScorePoint>", json_in)?;
    let scores: Vec<f64> = points.into_iter().filter_map(|p| p.charge_norm).collect();
    Ok(serde_json::to_string(&classify_scores(&scores))?)
}

/// Aktiviteter (liste, eller {"records", "cfg"}) => {"global", "by_category"}.
/// Rader uten difficulty/enjoyment hoppes over; ingen komplette rader => {"global": null, "by_category": {}}.
pub fn correlation_json(json_in: &str) -> CoreResult<String> {
    let (records, cfg) = match parse_json::<CorrelationRepr>("CorrelationIn", json_in)? {
        CorrelationRepr::Object(o) => (complete_activities(o.records), o.cfg),
        CorrelationRepr::Records(r) => (complete_activities(r), AnalysisCfg::default()),
    };
    cfg.validate()?;
    let report = correlation_with_min(&records, cfg.min_category_records());
    Ok(serde_json::to_string(&report)?)
}

/// {"records", "today"?, "cfg"?} => WellbeingSummary
pub fn summarize_wellbeing_json(json_in: &str) -> CoreResult<String> {
    let parsed: SummaryIn<DailyWellbeingRecord> = parse_json("WellbeingSummaryIn", json_in)?;
    parsed.cfg.validate()?;
    let summary = summarize_wellbeing(WellbeingInputs {
        records: &parsed.records,
        today: parsed.today,
        cfg: &parsed.cfg,
        metrics: None,
    });
    Ok(serde_json::to_string(&summary)?)
}

/// {"records", "today"?, "cfg"?} => ActivitySummary
pub fn summarize_activities_json(json_in: &str) -> CoreResult<String> {
    let parsed: SummaryIn<ActivityRowTol> = parse_json("ActivitySummaryIn", json_in)?;
    parsed.cfg.validate()?;
    let records = complete_activities(parsed.records);
    let summary = summarize_activities(ActivityInputs {
        records: &records,
        today: parsed.today,
        cfg: &parsed.cfg,
        metrics: None,
    });
    Ok(serde_json::to_string(&summary)?)
}
