//! Scoreboard Python binding.
//!
//! Exposes the verdict-form comparator: check against DUT values, read
//! statistics, and retrieve the retained mismatch records as dicts.

use aluref_core::Comparator;
use aluref_core::config::Config;
use aluref_core::sim::{Stimulus, replay};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::conversion::{py_dict_to_config, to_py_json};
use crate::stats::PyStats;

/// Python-exposed scoreboard: wraps a `Comparator` around a fresh accumulator.
#[pyclass(name = "Scoreboard")]
#[derive(Debug)]
pub struct PyScoreboard {
    /// Wrapped comparator.
    pub inner: Comparator,
}

#[pymethods]
impl PyScoreboard {
    /// Creates a scoreboard, optionally configured from a dict.
    ///
    /// # Arguments
    /// * `py` - Python interpreter token.
    /// * `config_dict` - Optional dict such as `{"scoreboard": {"mismatch_log_depth": 16}}`.
    ///
    /// # Errors
    /// Returns a `PyValueError` if the dict does not match the configuration schema.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => Config::default(),
        };
        Ok(Self {
            inner: Comparator::with_config(&config),
        })
    }

    /// Applies one operation and returns `True` if the model matches `from_dut`.
    ///
    /// The model advances on every call, match or not.
    #[pyo3(signature = (din, op, reset, from_dut))]
    pub fn check(&mut self, din: i32, op: i32, reset: i32, from_dut: i32) -> bool {
        self.inner.check_encoded(din, op, reset, from_dut)
    }

    /// Advances the model without comparing and returns the new accumulator.
    #[pyo3(signature = (din, op, reset=0))]
    pub fn step(&mut self, din: i32, op: i32, reset: i32) -> i32 {
        self.inner.step_encoded(din, op, reset)
    }

    /// Replays a JSON transaction array and returns the report as a dict.
    ///
    /// # Errors
    /// Returns a `PyValueError` if the JSON is not a valid transaction array.
    pub fn replay_json(&mut self, py: Python<'_>, json: &str) -> PyResult<PyObject> {
        let stimulus =
            Stimulus::from_json_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let report = replay(&mut self.inner, &stimulus.transactions);
        to_py_json(py, &report)
    }

    /// Current model accumulator value.
    #[getter]
    pub fn value(&self) -> i32 {
        self.inner.value()
    }

    /// Snapshot of the statistics.
    pub fn stats(&self) -> PyStats {
        PyStats::from(self.inner.stats().clone())
    }

    /// Retained mismatch records, oldest first, as a list of dicts.
    ///
    /// # Errors
    /// Returns an error if the records cannot be converted.
    pub fn mismatches(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_py_json(py, self.inner.mismatches())
    }

    /// Human-readable mismatch lines, oldest first.
    pub fn mismatch_lines(&self) -> Vec<String> {
        self.inner
            .mismatches()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn __repr__(&self) -> String {
        let stats = self.inner.stats();
        format!(
            "Scoreboard(checks={}, mismatches={}, value={:#010x})",
            stats.checks,
            stats.mismatches,
            self.inner.value()
        )
    }
}
