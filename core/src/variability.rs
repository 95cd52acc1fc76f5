use crate::models::ChargedRecord;
use crate::stats::sample_std_dev;
use crate::types::{Variability, VariabilityLevel};

pub const LOW_BELOW: f64 = 10.0;
pub const MODERATE_BELOW: f64 = 20.0;

/// Klassifiser standardavviket: <10 lav, [10,20) moderat, ellers høy.
pub fn classify_std_dev(std_dev: f64) -> VariabilityLevel {
    if std_dev < LOW_BELOW {
        VariabilityLevel::Low
    } else if std_dev < MODERATE_BELOW {
        VariabilityLevel::Moderate
    } else {
        VariabilityLevel::High
    }
}

/// Variabilitet over en serie av normaliserte scorer.
/// Ikke-finite verdier hoppes over (som manglende verdier).
pub fn classify_scores(scores: &[f64]) -> Variability {
    let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
    match sample_std_dev(&finite) {
        Some(sd) => Variability {
            level: classify_std_dev(sd),
            score: Some(sd),
        },
        None => {
            log::debug!("variability: {} usable scores, need 2", finite.len());
            Variability::insufficient()
        }
    }
}

/// Variabilitet av charge_norm over hele serien (forventet sortert på dato).
pub fn compute_variability(series: &[ChargedRecord]) -> Variability {
    let scores: Vec<f64> = series.iter().map(|r| r.charge_norm).collect();
    classify_scores(&scores)
}
