//! ALU arithmetic operations.
//!
//! Implements accumulator addition, subtraction, and load. Addition and
//! subtraction wrap on overflow, matching the 32-bit two's-complement adder
//! in the DUT.

use crate::isa::Opcode;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op`  - The ALU operation to perform (must be an arithmetic variant).
/// * `acc` - Current accumulator value.
/// * `din` - Input operand.
///
/// # Returns
///
/// The next accumulator value. Returns `acc` unchanged for non-arithmetic opcodes.
pub const fn execute(op: Opcode, acc: i32, din: i32) -> i32 {
    match op {
        Opcode::Add => acc.wrapping_add(din),
        Opcode::Sub => acc.wrapping_sub(din),
        Opcode::Load => din,
        _ => acc,
    }
}
