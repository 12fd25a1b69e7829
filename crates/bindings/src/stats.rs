//! Statistics Python binding.
//!
//! Exposes scoreboard statistics to Python: getters for verdict counts and the
//! operation mix, `print` / `print_sections` for human-readable output, and
//! `to_dict` for JSON-serializable export.

use aluref_core::Opcode;
use aluref_core::stats::ScoreboardStats;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::conversion::to_py_json;

/// Python-exposed statistics: wraps `ScoreboardStats`.
#[pyclass(name = "Stats")]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// Wrapped statistics snapshot.
    pub inner: ScoreboardStats,
}

impl From<ScoreboardStats> for PyStats {
    fn from(inner: ScoreboardStats) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyStats {
    #[getter]
    fn checks(&self) -> u64 {
        self.inner.checks
    }
    #[getter]
    fn matches(&self) -> u64 {
        self.inner.matches
    }
    #[getter]
    fn mismatches(&self) -> u64 {
        self.inner.mismatches
    }
    #[getter]
    fn resets(&self) -> u64 {
        self.inner.resets
    }
    #[getter]
    fn unrecognized_ops(&self) -> u64 {
        self.inner.unrecognized_ops
    }
    #[getter]
    fn match_rate(&self) -> f64 {
        self.inner.match_rate()
    }

    /// Number of times the opcode with encoding `op` was applied without reset.
    ///
    /// # Errors
    /// Returns a `PyValueError` for an encoding outside `0..=7`.
    fn count(&self, op: i32) -> PyResult<u64> {
        let op = Opcode::try_from(op).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(self.inner.count(op))
    }

    /// Print all stats.
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "mix".
    /// Pass an empty list for full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    /// Returns all counters as a dict.
    fn to_dict(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_py_json(py, &self.inner)
    }
}
