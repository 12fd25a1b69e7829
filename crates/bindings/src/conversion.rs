//! Python↔Rust conversion.
//!
//! Converts Python dicts into the core `Config` type via JSON serialization, so
//! the same schema is used from Python and from config files. The reverse
//! direction turns serializable reports into plain Python objects.

use aluref_core::config::Config;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::Serialize;

/// Converts a Python dict to a model `Config`.
///
/// The dict is serialized to JSON and then deserialized into `Config`. Keys must match
/// the Rust config structure (`general`, `scoreboard`).
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict.
///
/// # Returns
///
/// The deserialized `Config`, or a `PyErr` if the dict is invalid.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((dict,))?.extract()?;

    Config::from_json_str(&json_str).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Converts any serializable value into the equivalent Python object via `json.loads`.
///
/// # Errors
///
/// Returns a `PyValueError` if serialization fails, or the error raised by `json.loads`.
pub fn to_py_json<T: Serialize + ?Sized>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    let json_str = serde_json::to_string(value)
        .map_err(|e| PyValueError::new_err(format!("Serialization failed: {e}")))?;
    let json = py.import("json")?;
    Ok(json.getattr("loads")?.call1((json_str,))?.unbind())
}
