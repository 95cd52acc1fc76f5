use crate::models::{ChargedRecord, DailyWellbeingRecord};

/// Invertering rundt midtpunktet på 1–5-skalaen (1 + 5).
const INVERT_AROUND: f64 = 6.0;
const SCALE_MIN: f64 = 1.0;
const SCALE_SPAN: f64 = 4.0;

/// Psykofysiologisk charge (1–5). Lavere = mer degradert tilstand.
///
/// Snitt av fem ledd: fatigue, smerte og stress inverteres (6 - x),
/// søvn og humør brukes direkte. Manglende måling => 3.
pub fn compute_charge(record: &DailyWellbeingRecord) -> f64 {
    let fatigue_inv = INVERT_AROUND - f64::from(record.fatigue_or_neutral());
    let pain_inv = INVERT_AROUND - f64::from(record.pain_or_neutral());
    let stress_inv = INVERT_AROUND - f64::from(record.stress_or_neutral());

    let sleep = f64::from(record.sleep_quality_or_neutral());
    let mood = f64::from(record.mood_or_neutral());

    (fatigue_inv + sleep + pain_inv + stress_inv + mood) / 5.0
}

/// 1–5 => 0–100, lineært. Klemmer ikke: charge utenfor [1,5] gir score utenfor [0,100].
#[inline]
pub fn normalize_charge(charge: f64) -> f64 {
    ((charge - SCALE_MIN) / SCALE_SPAN) * 100.0
}

/// Kopi av registreringen med charge og charge_norm.
pub fn charge_record(record: &DailyWellbeingRecord) -> ChargedRecord {
    let charge = compute_charge(record);
    ChargedRecord {
        record: record.clone(),
        charge,
        charge_norm: normalize_charge(charge),
    }
}

/// Beregner avledede felt for alle registreringer, sortert på dato (stabil).
/// Input endres ikke.
pub fn annotate_charges(records: &[DailyWellbeingRecord]) -> Vec<ChargedRecord> {
    let mut out: Vec<ChargedRecord> = records.iter().map(charge_record).collect();
    out.sort_by_key(|r| r.date());
    out
}
