use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

pub const INSUFFICIENT_DATA: &str = "insufficient data";
pub const COMPUTATION_ERROR: &str = "computation error";

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
pub const MAX_WINDOW_DAYS: u32 = 36_500;
pub const DEFAULT_MIN_CATEGORY_RECORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariabilityLevel {
    #[serde(rename = "insufficient data")]
    InsufficientData,
    Low,
    Moderate,
    High,
}

impl VariabilityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientData => INSUFFICIENT_DATA,
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Etikett slik dashboardet viser den.
    pub fn label_fr(self) -> &'static str {
        match self {
            Self::InsufficientData => "Données insuffisantes",
            Self::Low => "Faible",
            Self::Moderate => "Modérée",
            Self::High => "Élevée",
        }
    }
}

impl fmt::Display for VariabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nivå + urundet standardavvik. `score` er None når nivået er InsufficientData.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variability {
    pub level: VariabilityLevel,
    pub score: Option<f64>,
}

impl Variability {
    pub fn insufficient() -> Self {
        Self { level: VariabilityLevel::InsufficientData, score: None }
    }

    pub fn into_tuple(self) -> (VariabilityLevel, Option<f64>) {
        (self.level, self.score)
    }
}

/// Tre-tilstand: tall (2 desimaler) | for lite data | beregningsfeil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrelationValue {
    Value(f64),
    InsufficientData,
    ComputationError,
}

impl CorrelationValue {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_value(self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn label_fr(self) -> String {
        match self {
            Self::Value(v) => format!("{v}"),
            Self::InsufficientData => "Données insuffisantes".to_string(),
            Self::ComputationError => "Erreur de calcul".to_string(),
        }
    }
}

impl fmt::Display for CorrelationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.2}"),
            Self::InsufficientData => f.write_str(INSUFFICIENT_DATA),
            Self::ComputationError => f.write_str(COMPUTATION_ERROR),
        }
    }
}

// Tall serialiseres som tall, sentinel som streng
impl Serialize for CorrelationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::InsufficientData => serializer.serialize_str(INSUFFICIENT_DATA),
            Self::ComputationError => serializer.serialize_str(COMPUTATION_ERROR),
        }
    }
}

/// `global` er None kun når input er tom.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CorrelationReport {
    pub global: Option<CorrelationValue>,
    pub by_category: BTreeMap<String, CorrelationValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisCfg {
    /// Glidende vindu i dager (0 => hele historikken)
    pub window_days: Option<u32>,
    /// Minste antall økter per kategori for korrelasjon (2, strengere variant: 3)
    pub min_category_records: Option<usize>,
}

impl AnalysisCfg {
    pub fn window_days(&self) -> Option<u32> {
        match self.window_days.unwrap_or(DEFAULT_WINDOW_DAYS) {
            0 => None,
            d => Some(d),
        }
    }

    pub fn min_category_records(&self) -> usize {
        self.min_category_records
            .unwrap_or(DEFAULT_MIN_CATEGORY_RECORDS)
            .max(2)
    }
}

/// Snitt av de fem målingene for én dato.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWellbeingMeans {
    pub date: NaiveDate,
    pub count: usize,
    pub fatigue: f64,
    pub sleep_quality: f64,
    pub pain: f64,
    pub stress: f64,
    pub mood: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityMeans {
    pub date: NaiveDate,
    pub count: usize,
    pub difficulty: f64,
    pub enjoyment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellbeingSummary {
    pub window_days: Option<u32>,
    pub records: usize,
    /// Snitt av charge_norm (2 desimaler)
    pub mean_charge_norm: Option<f64>,
    pub variability: VariabilityLevel,
    /// Standardavvik rundet til 2 desimaler for visning
    pub variability_score: Option<f64>,
    pub series: Vec<crate::models::ChargedRecord>,
    pub daily_means: Vec<DailyWellbeingMeans>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub window_days: Option<u32>,
    pub records: usize,
    pub correlation: CorrelationReport,
    pub daily_means: Vec<DailyActivityMeans>,
}
