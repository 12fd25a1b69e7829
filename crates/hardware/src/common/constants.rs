//! Global model constants.
//!
//! This module defines constants used across the model. It includes:
//! 1. **Register Constants:** Accumulator reset value.
//! 2. **Shift Constants:** The mask that makes a right shift logical.
//! 3. **Host Encoding Constants:** Verdict values returned across the host ABI.

/// Value the accumulator holds after construction and after reset.
pub const ACCU_RESET_VALUE: i32 = 0;

/// Mask applied after a right shift to force bit 31 to zero.
pub const LOGICAL_SHIFT_MASK: u32 = 0x7FFF_FFFF;

/// Shift distance of the `SHR` opcode.
pub const SHR_AMOUNT: u32 = 1;

/// Number of defined opcode encodings (`0..OPCODE_COUNT`).
pub const OPCODE_COUNT: usize = 8;

/// Host-side verdict value for a match ("good").
pub const VERDICT_MATCH: i32 = 1;

/// Host-side verdict value for a mismatch ("bad").
pub const VERDICT_MISMATCH: i32 = 0;
