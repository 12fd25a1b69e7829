//! Execution units.
//!
//! The Leros datapath has a single functional unit: the accumulator ALU.

/// Arithmetic Logic Unit for accumulator operations.
pub mod alu;
