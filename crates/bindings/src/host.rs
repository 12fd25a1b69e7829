//! Handle-less host functions.
//!
//! Mirrors the integer calling convention of the DPI/JNI natives so a Python
//! testbench can call `aluref.calc(din, op, reset)` or
//! `aluref.scoreboard_check(din, op, reset, from_dut)` directly. Each Python
//! thread gets its own model.

use pyo3::prelude::*;

use crate::stats::PyStats;

/// Applies one operation and returns the updated accumulator (query form).
#[pyfunction]
pub fn calc(din: i32, op: i32, reset: i32) -> i32 {
    aluref_core::host::calc(din, op, reset)
}

/// Applies one operation and compares with the DUT value (verdict form).
///
/// Returns `1` for a match and `0` for a mismatch.
#[pyfunction]
#[pyo3(signature = (din, op, reset, from_dut))]
pub fn scoreboard_check(din: i32, op: i32, reset: i32, from_dut: i32) -> i32 {
    aluref_core::host::scoreboard_check(din, op, reset, from_dut)
}

/// Starts a new session on the calling thread, clearing both models.
#[pyfunction]
pub fn reset() {
    aluref_core::host::reset_thread_models();
}

/// Returns the verdict-form statistics of the calling thread.
#[pyfunction]
pub fn stats() -> PyStats {
    PyStats::from(aluref_core::host::scoreboard_stats())
}
