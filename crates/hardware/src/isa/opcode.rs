//! ALU opcode definitions.
//!
//! Hosts pass the opcode as a small integer matching the enumeration order
//! below. Two decoders are provided:
//! 1. **Lenient:** [`Opcode::decode_lenient`] maps any unrecognized value to
//!    [`Opcode::Nop`]. This is what the model uses, so don't-care encodings in
//!    the DUT instruction stream leave the accumulator untouched.
//! 2. **Strict:** `Opcode::try_from(i32)` rejects unrecognized values with
//!    [`ModelError::UnknownOpcode`] for callers that want validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::OPCODE_COUNT;
use crate::common::error::ModelError;

/// Operation selected on the ALU for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Opcode {
    /// No operation; the accumulator is unchanged.
    #[default]
    Nop = 0,
    /// Accumulator plus operand, wrapping on overflow.
    Add = 1,
    /// Accumulator minus operand, wrapping on overflow.
    Sub = 2,
    /// Bitwise AND with the operand.
    And = 3,
    /// Bitwise OR with the operand.
    Or = 4,
    /// Bitwise XOR with the operand.
    Xor = 5,
    /// Load the operand into the accumulator.
    #[serde(alias = "LD")]
    Load = 6,
    /// Logical right shift of the accumulator by one bit; the operand is ignored.
    #[serde(alias = "SHR")]
    ShiftRightLogical = 7,
}

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Self; OPCODE_COUNT] = [
        Self::Nop,
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Load,
        Self::ShiftRightLogical,
    ];

    /// Decodes a host opcode encoding.
    ///
    /// # Returns
    ///
    /// `Some(opcode)` for `0..=7`, `None` for anything else.
    #[inline]
    pub const fn decode(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Nop),
            1 => Some(Self::Add),
            2 => Some(Self::Sub),
            3 => Some(Self::And),
            4 => Some(Self::Or),
            5 => Some(Self::Xor),
            6 => Some(Self::Load),
            7 => Some(Self::ShiftRightLogical),
            _ => None,
        }
    }

    /// Decodes a host opcode encoding, treating unrecognized values as `Nop`.
    #[inline]
    pub fn decode_lenient(raw: i32) -> Self {
        Self::decode(raw).unwrap_or_else(|| {
            tracing::trace!(raw, "unrecognized opcode encoding treated as NOP");
            Self::Nop
        })
    }

    /// Returns the host integer encoding of this opcode.
    #[inline]
    pub const fn encoding(self) -> i32 {
        self as i32
    }

    /// Returns `true` if the opcode reads the `din` operand.
    pub const fn uses_operand(self) -> bool {
        !matches!(self, Self::Nop | Self::ShiftRightLogical)
    }

    /// Returns the assembler mnemonic used by the Leros toolchain.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Load => "ld",
            Self::ShiftRightLogical => "shr",
        }
    }
}

impl TryFrom<i32> for Opcode {
    type Error = ModelError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::decode(raw).ok_or(ModelError::UnknownOpcode(raw))
    }
}

impl From<Opcode> for i32 {
    fn from(op: Opcode) -> Self {
        op.encoding()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Decodes the host reset flag. Any non-zero value means reset is asserted.
#[inline]
pub const fn decode_reset(raw: i32) -> bool {
    raw != 0
}
