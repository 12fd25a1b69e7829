//! Python bindings for the Leros ALU reference model.
//!
//! This crate exposes the model to Python hosts (e.g. cocotb testbenches) via PyO3. It provides:
//! 1. **Host functions:** `calc` and `scoreboard_check` with the integer calling convention.
//! 2. **Model classes:** `Accumulator` (query form) and `Scoreboard` (verdict form).
//! 3. **Statistics:** `Stats` for verdict counts and the operation mix.
//! 4. **Utilities:** Version string, logging setup, and dict-to-config conversion.

use pyo3::prelude::*;

/// Python dict to Rust `Config` conversion.
pub mod conversion;
/// Handle-less host functions (`calc`, `scoreboard_check`).
pub mod host;
/// Accumulator binding (`PyAccumulator`).
pub mod model;
/// Scoreboard binding (`PyScoreboard`).
pub mod scoreboard;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all model classes and functions onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_model_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<model::PyAccumulator>()?;
    m.add_class::<scoreboard::PyScoreboard>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(host::calc, m)?)?;
    m.add_function(wrap_pyfunction!(host::scoreboard_check, m)?)?;
    m.add_function(wrap_pyfunction!(host::reset, m)?)?;
    m.add_function(wrap_pyfunction!(host::stats, m)?)?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn aluref(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_model_module(m)?;
    Ok(())
}
