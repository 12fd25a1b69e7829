//! Accumulator Python binding.
//!
//! Exposes an owned accumulator model for testbenches that compare the value
//! themselves (query form) or that drive several DUT instances from one thread.

use aluref_core::AccumulatorModel;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-exposed accumulator: wraps one `AccumulatorModel`.
#[pyclass(name = "Accumulator")]
#[derive(Debug, Default)]
pub struct PyAccumulator {
    /// Wrapped model.
    pub inner: AccumulatorModel,
}

#[pymethods]
impl PyAccumulator {
    /// Creates a model with the accumulator at zero, or at `value` if given.
    #[new]
    #[pyo3(signature = (value=0))]
    fn new(value: i32) -> Self {
        Self {
            inner: AccumulatorModel::with_value(value),
        }
    }

    /// Applies one operation and returns the updated accumulator.
    ///
    /// # Arguments
    /// * `din` - Input operand.
    /// * `op` - Opcode encoding; unrecognized values behave as NOP.
    /// * `reset` - Non-zero (or `True`) asserts reset.
    #[pyo3(signature = (din, op, reset=0))]
    pub fn calc(&mut self, din: i32, op: i32, reset: i32) -> i32 {
        self.inner.apply_encoded(din, op, reset)
    }

    /// Like `calc`, but rejects opcode encodings outside `0..=7`.
    ///
    /// # Errors
    ///
    /// Returns a `PyValueError` for an unrecognized opcode; the model is not advanced.
    #[pyo3(signature = (din, op, reset=false))]
    pub fn apply_strict(&mut self, din: i32, op: i32, reset: bool) -> PyResult<i32> {
        self.inner
            .apply_strict(din, op, reset)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Clears the accumulator.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current accumulator value.
    #[getter]
    pub fn value(&self) -> i32 {
        self.inner.value()
    }

    fn __repr__(&self) -> String {
        format!("Accumulator(value={:#010x})", self.inner.value())
    }
}
