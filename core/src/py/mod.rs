use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::CoreResult;
use crate::json;

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

// Tillater både str og dict/list (serialiseres med Python sin json.dumps)
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

// Returnér som Python-objekt via json.loads (unngår pyo3 serde-feature)
fn json_to_py(py: Python<'_>, out: &str) -> PyResult<PyObject> {
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out,))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

fn run(py: Python<'_>, payload: &PyAny, f: fn(&str) -> CoreResult<String>) -> PyResult<PyObject> {
    let json_in = payload_to_json(py, payload)?;
    let out = f(&json_in).map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &out)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
fn compute_charge(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::charge_json)
}

#[pyfunction]
fn annotate_charges(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::annotate_charges_json)
}

#[pyfunction]
fn compute_variability(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::variability_json)
}

#[pyfunction]
fn correlation_difficulty_pleasure(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::correlation_json)
}

#[pyfunction]
fn summarize_wellbeing(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::summarize_wellbeing_json)
}

#[pyfunction]
fn summarize_activities(py: Python<'_>, payload: &PyAny) -> PyResult<PyObject> {
    run(py, payload, json::summarize_activities_json)
}

/// Ren normalisering (float inn, float ut).
#[pyfunction]
fn normalize_charge(charge: f64) -> f64 {
    crate::charge::normalize_charge(charge)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn wellbeing_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_charge, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_charge, m)?)?;
    m.add_function(wrap_pyfunction!(annotate_charges, m)?)?;
    m.add_function(wrap_pyfunction!(compute_variability, m)?)?;
    m.add_function(wrap_pyfunction!(correlation_difficulty_pleasure, m)?)?;

    // Oppsummeringer for dashboardet
    m.add_function(wrap_pyfunction!(summarize_wellbeing, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_activities, m)?)?;
    Ok(())
}
