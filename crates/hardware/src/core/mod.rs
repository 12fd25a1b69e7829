//! Model core.
//!
//! This module contains the accumulator state machine, the trait that
//! decouples the scoreboard from a concrete model, and the combinational
//! ALU units that compute each opcode's effect.

/// Stateful accumulator register and the per-cycle `apply` operation.
pub mod accumulator;

/// Reference-model trait used by the scoreboard.
pub mod traits;

/// Execution units (ALU).
pub mod units;

pub use self::accumulator::AccumulatorModel;
pub use self::traits::ReferenceModel;
