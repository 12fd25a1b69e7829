//! Mismatch records.

use std::fmt;

use serde::Serialize;

use crate::isa::Opcode;

/// One disagreement between the model and the DUT.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based index of the operation within the comparator's session.
    pub index: u64,
    /// Input operand of the operation.
    pub din: i32,
    /// Decoded opcode (unrecognized encodings appear as `NOP`).
    pub op: Opcode,
    /// Whether reset was asserted.
    pub reset: bool,
    /// Value computed by the model.
    pub expected: i32,
    /// Value sampled from the DUT.
    pub observed: i32,
}

impl Mismatch {
    /// Bits that differ between the expected and observed values.
    pub const fn diff_bits(&self) -> u32 {
        (self.expected ^ self.observed) as u32
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ", self.index)?;
        if self.reset {
            f.write_str("reset")?;
        } else {
            write!(f, "{} din={:#010x}", self.op, self.din)?;
        }
        write!(
            f,
            ": expected {:#010x} observed {:#010x} (diff {:#010x})",
            self.expected,
            self.observed,
            self.diff_bits()
        )
    }
}
