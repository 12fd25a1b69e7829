//! Configuration for the reference model and scoreboard.
//!
//! This module defines the configuration structures used by the hosts. It provides:
//! 1. **Defaults:** Baseline constants used when a field is omitted.
//! 2. **Structures:** General (tracing) and scoreboard (mismatch log) settings.
//! 3. **Loading:** JSON parsing from strings and files.
//!
//! The model itself has no tunables: its semantics are fixed by the hardware. The
//! configuration only affects what the scoreboard records and logs. Python hosts pass a
//! dict that is converted through JSON; the C-ABI hosts use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ModelError;

/// Default configuration constants.
mod defaults {
    /// Number of mismatch records kept by a comparator.
    ///
    /// Older records are dropped first once the log is full. The counters in
    /// the statistics keep the full totals.
    pub const MISMATCH_LOG_DEPTH: usize = 64;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Scoreboard settings.
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] if the document is not valid JSON or does not
    /// match the configuration schema.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::parse("config", e))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Io`] if the file cannot be read, or
    /// [`ModelError::Parse`] if its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `debug` event for every check, not only for mismatches.
    #[serde(default)]
    pub trace_checks: bool,
}

/// Scoreboard settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardConfig {
    /// Maximum number of mismatch records retained (0 disables the log).
    #[serde(default = "ScoreboardConfig::default_mismatch_log_depth")]
    pub mismatch_log_depth: usize,
}

impl ScoreboardConfig {
    /// Returns the default mismatch log depth.
    const fn default_mismatch_log_depth() -> usize {
        defaults::MISMATCH_LOG_DEPTH
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            mismatch_log_depth: defaults::MISMATCH_LOG_DEPTH,
        }
    }
}
