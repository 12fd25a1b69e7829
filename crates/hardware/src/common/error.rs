//! Error definitions.
//!
//! The accumulator datapath itself never fails: unknown opcodes degrade to a
//! no-op and a mismatch is reported as a verdict. Errors only arise at the
//! edges of the crate:
//! 1. **Strict Decoding:** Callers that opt into rejecting unknown opcodes.
//! 2. **Parsing:** Configuration and stimulus documents.
//! 3. **I/O:** Reading those documents from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the per-cycle model path.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The host passed an opcode encoding outside `0..=7` to a strict decoder.
    #[error("unknown opcode encoding {0}")]
    UnknownOpcode(i32),

    /// A configuration or stimulus document could not be parsed.
    #[error("invalid {what}: {source}")]
    Parse {
        /// What was being parsed (e.g. `"config"`, `"stimulus"`).
        what: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration or stimulus file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Wraps a JSON error raised while parsing `what`.
    pub(crate) const fn parse(what: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { what, source }
    }

    /// Wraps an I/O error raised while reading `path`.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
