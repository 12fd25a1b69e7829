//! Utility functions exposed to Python.
//!
//! Provides the version string and logging setup for the `aluref` module.

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the model version string (e.g., for scripting or diagnostics).
///
/// # Returns
///
/// The crate version, such as `"0.3.0"`.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs a stderr `tracing` subscriber so model events reach the simulator log.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"aluref_core=warn"`. When omitted,
///   `RUST_LOG` is used, falling back to `"warn"`.
///
/// # Returns
///
/// `True` if the subscriber was installed, `False` if one was already set.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> bool {
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
