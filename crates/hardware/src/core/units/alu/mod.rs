//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational part of the Leros ALU: given the
//! current accumulator and the `din` operand, compute the next accumulator
//! value for one opcode. It holds no state; the register lives in
//! [`AccumulatorModel`](crate::core::AccumulatorModel).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Load
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     Shr

/// Accumulator arithmetic (add, subtract, load).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift operations (logical shift right).
pub mod shifts;

use crate::isa::Opcode;

/// Arithmetic Logic Unit for the accumulator datapath.
///
/// All operations are on 32-bit two's-complement values and wrap exactly as
/// the hardware adder does.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes the next accumulator value.
    ///
    /// Dispatches to the appropriate submodule based on the opcode.
    ///
    /// # Arguments
    ///
    /// * `op`  - The ALU operation to perform
    /// * `acc` - Current accumulator value
    /// * `din` - Input operand (ignored by `Nop` and `ShiftRightLogical`)
    ///
    /// # Returns
    ///
    /// The next accumulator value.
    ///
    /// # Examples
    ///
    /// ```
    /// use aluref_core::core::units::alu::Alu;
    /// use aluref_core::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 10, 5), 15);
    ///
    /// // Wraps like the 32-bit hardware adder
    /// assert_eq!(Alu::execute(Opcode::Add, i32::MAX, 1), i32::MIN);
    ///
    /// // Zero-filling shift, even for negative values
    /// assert_eq!(Alu::execute(Opcode::ShiftRightLogical, -1, 0), 0x7FFF_FFFF);
    /// ```
    #[inline]
    pub const fn execute(op: Opcode, acc: i32, din: i32) -> i32 {
        match op {
            Opcode::Nop => acc,
            Opcode::Add | Opcode::Sub | Opcode::Load => arithmetic::execute(op, acc, din),
            Opcode::And | Opcode::Or | Opcode::Xor => logic::execute(op, acc, din),
            Opcode::ShiftRightLogical => shifts::execute(op, acc),
        }
    }
}
