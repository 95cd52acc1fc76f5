use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nøytralt midtpunkt på 1–5-skalaen. Brukes når en måling mangler.
pub const NEUTRAL_METRIC: u8 = 3;

/// Én egenrapport per utøver per dag (1–5-skala).
/// Høyere er bedre for søvn/humør, verre for fatigue/smerte/stress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWellbeingRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub fatigue: Option<u8>,
    #[serde(default, alias = "sommeil")]
    pub sleep_quality: Option<u8>,
    #[serde(default, alias = "douleur")]
    pub pain: Option<u8>,
    #[serde(default)]
    pub stress: Option<u8>,
    #[serde(default, alias = "humeur")]
    pub mood: Option<u8>,
}

impl DailyWellbeingRecord {
    /// Komplett registrering (alle fem målinger satt).
    pub fn new(date: NaiveDate, fatigue: u8, sleep_quality: u8, pain: u8, stress: u8, mood: u8) -> Self {
        Self {
            date,
            fatigue: Some(fatigue),
            sleep_quality: Some(sleep_quality),
            pain: Some(pain),
            stress: Some(stress),
            mood: Some(mood),
        }
    }

    /// Tom registrering – alle målinger faller tilbake til nøytral verdi.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            fatigue: None,
            sleep_quality: None,
            pain: None,
            stress: None,
            mood: None,
        }
    }

    #[inline]
    pub fn fatigue_or_neutral(&self) -> u8 {
        self.fatigue.unwrap_or(NEUTRAL_METRIC)
    }

    #[inline]
    pub fn sleep_quality_or_neutral(&self) -> u8 {
        self.sleep_quality.unwrap_or(NEUTRAL_METRIC)
    }

    #[inline]
    pub fn pain_or_neutral(&self) -> u8 {
        self.pain.unwrap_or(NEUTRAL_METRIC)
    }

    #[inline]
    pub fn stress_or_neutral(&self) -> u8 {
        self.stress.unwrap_or(NEUTRAL_METRIC)
    }

    #[inline]
    pub fn mood_or_neutral(&self) -> u8 {
        self.mood.unwrap_or(NEUTRAL_METRIC)
    }
}

/// Én loggført treningsøkt. difficulty/enjoyment på 1–10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    /// Idrett/aktivitet (fritekst). None => udefinert nøkkel, hoppes over per kategori.
    #[serde(default, alias = "sport")]
    pub category: Option<String>,
    #[serde(alias = "difficulte")]
    pub difficulty: u8,
    #[serde(alias = "plaisir")]
    pub enjoyment: u8,
    #[serde(default, alias = "duree")]
    pub duration_min: Option<u32>,
    #[serde(default, alias = "commentaire")]
    pub comment: Option<String>,
}

impl ActivityRecord {
    pub fn new(date: NaiveDate, category: &str, difficulty: u8, enjoyment: u8) -> Self {
        Self {
            date,
            category: Some(category.to_string()),
            difficulty,
            enjoyment,
            duration_min: None,
            comment: None,
        }
    }
}

/// Kopi av en dagsregistrering med avledede felt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargedRecord {
    #[serde(flatten)]
    pub record: DailyWellbeingRecord,
    /// Rå sammensatt score (1–5)
    pub charge: f64,
    /// Normalisert score (0–100)
    pub charge_norm: f64,
}

impl ChargedRecord {
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }
}
