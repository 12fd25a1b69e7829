//! Instruction Set Architecture (ISA) Definitions.
//!
//! The Leros ALU is driven by a 3-bit operation select. This module defines the
//! opcode enumeration and the decoding of the integer encoding used by the
//! simulation hosts (`NOP=0 .. SHR=7`).

/// Opcode enumeration, host encoding, and decoding helpers.
pub mod opcode;

pub use opcode::{Opcode, decode_reset};
