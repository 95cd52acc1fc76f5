// tests/test_config.rs
use std::fs;

use wellbeing_core::{load_cfg, save_cfg, AnalysisCfg, CoreError};

#[test]
fn defaults_when_fields_missing() {
    let cfg = AnalysisCfg::from_json("{}").unwrap();
    assert_eq!(cfg, AnalysisCfg::default());
    assert_eq!(cfg.window_days(), Some(30));
    assert_eq!(cfg.min_category_records(), 2);
}

#[test]
fn zero_window_disables_windowing() {
    let cfg = AnalysisCfg::from_json(r#"{"window_days": 0}"#).unwrap();
    assert_eq!(cfg.window_days(), None);
}

#[test]
fn rejects_minimum_below_two() {
    let err = AnalysisCfg::from_json(r#"{"min_category_records": 1}"#).unwrap_err();
    assert!(matches!(err, CoreError::InvalidCfg(_)));
}

#[test]
fn wrong_type_reports_path() {
    match AnalysisCfg::from_json(r#"{"window_days": "thirty"}"#) {
        Err(CoreError::Parse { path, .. }) => assert_eq!(path, "window_days"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_gives_default() {
    let cfg = load_cfg("tests/does_not_exist_cfg.json").unwrap();
    assert_eq!(cfg, AnalysisCfg::default());
}

#[test]
fn save_and_load_cfg() {
    let path = "tests/tmp_analysis_cfg.json";
    let _ = fs::remove_file(path);

    let cfg = AnalysisCfg {
        window_days: Some(14),
        min_category_records: Some(3),
    };
    save_cfg(&cfg, path).expect("save_cfg failed");

    let loaded = load_cfg(path).expect("load_cfg failed");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.window_days(), Some(14));
    assert_eq!(loaded.min_category_records(), 3);

    fs::remove_file(path).ok();
}

#[test]
fn rejects_window_beyond_a_century() {
    let err = AnalysisCfg::from_json(r#"{"window_days": 4000000000}"#).unwrap_err();
    assert!(matches!(err, CoreError::InvalidCfg(_)));

    let cfg = AnalysisCfg::from_json(r#"{"window_days": 36500}"#).unwrap();
    assert_eq!(cfg.window_days(), Some(36_500));
}
