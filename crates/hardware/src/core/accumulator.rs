//! Accumulator register state machine.
//!
//! This module implements the stateful half of the Leros ALU model. It provides:
//! 1. **State:** One 32-bit signed register, zero at construction.
//! 2. **Stepping:** `apply` advances the register by one opcode, with reset taking
//!    unconditional precedence.
//! 3. **Host Decoding:** `apply_encoded` accepts the raw host integers and treats
//!    unrecognized opcode encodings as `NOP`; `apply_strict` rejects them instead.
//!
//! The register value after any sequence of operations is a pure function of the
//! ordered sequence of `(din, op, reset)` applied since construction.

use crate::common::constants::ACCU_RESET_VALUE;
use crate::common::error::ModelError;
use crate::core::traits::ReferenceModel;
use crate::core::units::alu::Alu;
use crate::isa::Opcode;

/// Golden model of the Leros accumulator.
///
/// Each verification session owns one instance and calls [`apply`](Self::apply)
/// exactly once per DUT operation. Skipping or repeating a call desynchronizes the
/// model from the DUT.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccumulatorModel {
    accu: i32,
}

impl AccumulatorModel {
    /// Creates a model with the accumulator at its reset value.
    pub const fn new() -> Self {
        Self {
            accu: ACCU_RESET_VALUE,
        }
    }

    /// Creates a model whose accumulator already holds `value`.
    ///
    /// Used to resume from a checkpointed register value.
    pub const fn with_value(value: i32) -> Self {
        Self { accu: value }
    }

    /// Applies one ALU operation.
    ///
    /// # Arguments
    ///
    /// * `din`   - Input operand.
    /// * `op`    - Operation to perform.
    /// * `reset` - When `true`, clears the accumulator and ignores `op` and `din`.
    ///
    /// # Returns
    ///
    /// The accumulator value after the update.
    ///
    /// # Examples
    ///
    /// ```
    /// use aluref_core::{AccumulatorModel, Opcode};
    ///
    /// let mut model = AccumulatorModel::new();
    /// let _ = model.apply(10, Opcode::Load, false);
    /// let _ = model.apply(5, Opcode::Add, false);
    /// let _ = model.apply(3, Opcode::Sub, false);
    /// assert_eq!(model.apply(0xF, Opcode::And, false), 12);
    ///
    /// assert_eq!(model.apply(99, Opcode::Load, true), 0);
    /// ```
    #[inline]
    pub const fn apply(&mut self, din: i32, op: Opcode, reset: bool) -> i32 {
        self.accu = if reset {
            ACCU_RESET_VALUE
        } else {
            Alu::execute(op, self.accu, din)
        };
        self.accu
    }

    /// Applies one operation given in the host integer encoding.
    ///
    /// Unrecognized opcode encodings leave the accumulator unchanged, the same
    /// as `NOP`. Any non-zero `reset` asserts reset.
    #[inline]
    pub fn apply_encoded(&mut self, din: i32, op: i32, reset: i32) -> i32 {
        self.apply(din, Opcode::decode_lenient(op), crate::isa::decode_reset(reset))
    }

    /// Applies one operation, rejecting opcode encodings outside `0..=7`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownOpcode`] for an unrecognized encoding. The
    /// accumulator is left untouched in that case.
    pub fn apply_strict(&mut self, din: i32, op: i32, reset: bool) -> Result<i32, ModelError> {
        let op = Opcode::try_from(op)?;
        Ok(self.apply(din, op, reset))
    }

    /// Returns the current accumulator value.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.accu
    }

    /// Clears the accumulator, as if reset were asserted for one cycle.
    pub const fn reset(&mut self) {
        self.accu = ACCU_RESET_VALUE;
    }
}

impl ReferenceModel for AccumulatorModel {
    #[inline]
    fn apply(&mut self, din: i32, op: Opcode, reset: bool) -> i32 {
        Self::apply(self, din, op, reset)
    }

    #[inline]
    fn value(&self) -> i32 {
        Self::value(self)
    }
}
