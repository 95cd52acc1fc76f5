//! Wellbeing analytics core: charge score, variability of the normalized score
//! and difficulty/pleasure correlation over logged activities.
//!
//! All analyses are pure functions over in-memory records. Degenerate input
//! yields sentinel values, never errors; `CoreError` only covers the JSON and
//! config boundary.

pub mod charge;
pub mod config;
pub mod correlation;
pub mod error;
pub mod json;
pub mod metrics;
pub mod models;
pub mod series;
pub mod stats;
pub mod summary;
pub mod types;
pub mod variability;

#[cfg(feature = "python")]
mod py;

pub use charge::{annotate_charges, charge_record, compute_charge, normalize_charge};
pub use config::{load_cfg, save_cfg};
pub use correlation::{correlation_difficulty_pleasure, correlation_with_min, guarded_pearson};
pub use error::{CoreError, CoreResult};
pub use json::{
    annotate_charges_json, charge_json, correlation_json, summarize_activities_json,
    summarize_wellbeing_json, variability_json,
};
pub use metrics::Metrics;
pub use models::{ActivityRecord, ChargedRecord, DailyWellbeingRecord, NEUTRAL_METRIC};
pub use series::{daily_activity_means, daily_wellbeing_means, mean_charge_norm, trailing_window};
pub use stats::{RoundTo, StatsError};
pub use summary::{summarize_activities, summarize_wellbeing, ActivityInputs, WellbeingInputs};
pub use types::{
    ActivitySummary, AnalysisCfg, CorrelationReport, CorrelationValue, Variability,
    VariabilityLevel, WellbeingSummary,
};
pub use variability::{classify_scores, compute_variability};
