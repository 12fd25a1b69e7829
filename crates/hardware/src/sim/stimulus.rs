//! Transaction stimulus.
//!
//! A stimulus is the ordered list of operations the DUT received, optionally
//! with the accumulator value sampled from the DUT after each one. It is stored
//! as a JSON array:
//!
//! ```json
//! [
//!   { "din": 10, "op": 6 },
//!   { "din": 5,  "op": 1, "observed": 15 },
//!   { "reset": 1, "observed": 0 }
//! ]
//! ```
//!
//! `op` and `reset` keep the raw host encoding so values recorded from the DUT
//! replay exactly as they were seen. `reset` also accepts `true`/`false`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::error::ModelError;
use crate::isa::Opcode;

/// One recorded DUT operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Input operand.
    #[serde(default)]
    pub din: i32,
    /// Opcode in the host integer encoding.
    #[serde(default)]
    pub op: i32,
    /// Reset in the host integer encoding; non-zero asserts reset.
    #[serde(default, deserialize_with = "reset_flag")]
    pub reset: i32,
    /// Accumulator value sampled from the DUT, if one was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<i32>,
}

impl Transaction {
    /// A non-reset operation with no observed value.
    pub const fn new(din: i32, op: Opcode) -> Self {
        Self {
            din,
            op: op.encoding(),
            reset: 0,
            observed: None,
        }
    }

    /// A reset cycle with no observed value.
    pub const fn reset() -> Self {
        Self {
            din: 0,
            op: 0,
            reset: 1,
            observed: None,
        }
    }

    /// Attaches the value sampled from the DUT.
    #[must_use]
    pub const fn observed(mut self, value: i32) -> Self {
        self.observed = Some(value);
        self
    }
}

/// Reads a reset value written either as a host integer or as a JSON bool.
fn reset_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Encoded(i32),
        Flag(bool),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Encoded(raw) => raw,
        Raw::Flag(flag) => i32::from(flag),
    })
}

/// An ordered list of transactions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus {
    /// Transactions in DUT order.
    pub transactions: Vec<Transaction>,
}

impl Stimulus {
    /// Parses a stimulus from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] if the document is not a valid transaction array.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::parse("stimulus", e))
    }

    /// Reads and parses a JSON stimulus file.
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

    /// Serializes the stimulus to a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(|e| ModelError::parse("stimulus", e))
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl From<Vec<Transaction>> for Stimulus {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl FromIterator<Transaction> for Stimulus {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}
