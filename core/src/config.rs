use std::path::Path;

use crate::error::{parse_json, CoreError, CoreResult};
use crate::types::{AnalysisCfg, MAX_WINDOW_DAYS};

impl AnalysisCfg {
    pub fn from_json(json_in: &str) -> CoreResult<Self> {
        let cfg: AnalysisCfg = parse_json("AnalysisCfg", json_in)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Avviser verdier som ikke gir mening (minimum under 2, vindu over 100 år).
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(d) = self.window_days {
            if d > MAX_WINDOW_DAYS {
                return Err(CoreError::InvalidCfg(format!(
                    "window_days must be <= {MAX_WINDOW_DAYS}, got {d}"
                )));
            }
        }
        if let Some(n) = self.min_category_records {
            if n < 2 {
                return Err(CoreError::InvalidCfg(format!(
                    "min_category_records must be >= 2, got {n}"
                )));
            }
        }
        Ok(())
    }
}

/// Leser inn analysekonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_cfg(path: impl AsRef<Path>) -> CoreResult<AnalysisCfg> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg = AnalysisCfg::from_json(&contents)?;
        log::info!(
            "config loaded from {} (window_days={:?}, min_category_records={})",
            path.display(),
            cfg.window_days(),
            cfg.min_category_records()
        );
        Ok(cfg)
    } else {
        log::info!("no config at {}, using defaults", path.display());
        Ok(AnalysisCfg::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_cfg(cfg: &AnalysisCfg, path: impl AsRef<Path>) -> CoreResult<()> {
    cfg.validate()?;
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    log::info!("config saved to {}", path.display());
    Ok(())
}
