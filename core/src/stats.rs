use thiserror::Error;

// --- RoundTo trait (offentlig, brukt til visning av korrelasjon/variabilitet) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Hvorfor en korrelasjon ikke kunne beregnes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("series length mismatch: x={x}, y={y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("too few points: got {n}, need at least {min}")]
    TooFewPoints { n: usize, min: usize },
    #[error("zero variance in {0}")]
    ZeroVariance(&'static str),
    #[error("non-finite result")]
    NonFinite,
}

/// Aritmetisk snitt. None for tom serie.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().copied().sum::<f64>() / xs.len() as f64)
    }
}

/// Utvalgsstandardavvik (n-1 i nevneren). None for færre enn 2 punkter.
pub fn sample_std_dev(xs: &[f64]) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let m = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    Some((ss / (xs.len() - 1) as f64).sqrt())
}

fn is_constant(xs: &[f64]) -> bool {
    match xs.first() {
        Some(first) => xs.iter().all(|x| x == first),
        None => true,
    }
}

/// Pearson-korrelasjon med vakter.
///
/// Krever minst `min_points` par og varians i begge serier; en konstant serie gir
/// udefinert korrelasjon (ikke 0). Resultatet klemmes til [-1, 1].
pub fn pearson(xs: &[f64], ys: &[f64], min_points: usize) -> Result<f64, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch { x: xs.len(), y: ys.len() });
    }
    let n = xs.len();
    let min = min_points.max(2);
    if n < min {
        return Err(StatsError::TooFewPoints { n, min });
    }
    if is_constant(xs) {
        return Err(StatsError::ZeroVariance("x"));
    }
    if is_constant(ys) {
        return Err(StatsError::ZeroVariance("y"));
    }

    let mx = mean(xs).ok_or(StatsError::TooFewPoints { n, min })?;
    let my = mean(ys).ok_or(StatsError::TooFewPoints { n, min })?;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let r = sxy / (sxx * syy).sqrt();
    if !r.is_finite() {
        return Err(StatsError::NonFinite);
    }
    Ok(r.clamp(-1.0, 1.0))
}
