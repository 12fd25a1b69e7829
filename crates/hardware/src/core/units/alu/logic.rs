//! ALU logical operations.
//!
//! Implements bitwise AND, OR, and XOR of the accumulator with the operand
//! over all 32 bits.

use crate::isa::Opcode;

/// Executes a logical operation.
///
/// # Arguments
///
/// * `op`  - The ALU operation to perform (must be a logic variant).
/// * `acc` - Current accumulator value.
/// * `din` - Input operand.
///
/// # Returns
///
/// The next accumulator value. Returns `acc` unchanged for non-logic opcodes.
pub const fn execute(op: Opcode, acc: i32, din: i32) -> i32 {
    match op {
        Opcode::And => acc & din,
        Opcode::Or => acc | din,
        Opcode::Xor => acc ^ din,
        _ => acc,
    }
}
