//! ALU shift operations.
//!
//! The Leros ALU has a single shift: logical shift right by one bit. The
//! shift is performed on the unsigned view of the register so the vacated
//! bit 31 is always zero, independent of the sign of the stored value. The
//! result is additionally masked with [`LOGICAL_SHIFT_MASK`] so the
//! guarantee does not depend on which view the shift happened in.

use crate::common::constants::{LOGICAL_SHIFT_MASK, SHR_AMOUNT};
use crate::isa::Opcode;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`  - The ALU operation to perform (must be a shift variant).
/// * `acc` - The value to be shifted.
///
/// # Returns
///
/// The shifted value with bit 31 cleared. Returns `acc` unchanged for
/// non-shift opcodes.
pub const fn execute(op: Opcode, acc: i32) -> i32 {
    match op {
        Opcode::ShiftRightLogical => shr(acc),
        _ => acc,
    }
}

/// Logical shift right by one, zero-filling bit 31.
#[inline]
pub const fn shr(acc: i32) -> i32 {
    (((acc as u32) >> SHR_AMOUNT) & LOGICAL_SHIFT_MASK) as i32
}
