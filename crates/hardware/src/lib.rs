//! Leros accumulator ALU reference model.
//!
//! This crate implements a bit-exact golden model of the Leros single-accumulator ALU
//! for scoreboard-style verification of a hardware design under test (DUT):
//! 1. **Core:** The 32-bit accumulator register and the per-opcode ALU units.
//! 2. **ISA:** Opcode enumeration and decoding of the host integer encoding.
//! 3. **Scoreboard:** Expected-vs-observed comparison, verdicts, and a mismatch log.
//! 4. **Simulation:** Replay of recorded transaction streams.
//! 5. **Host:** The `calc` / `scoreboard_check` integer calling convention.
//! 6. **Support:** Configuration, statistics, and error types.
//!
//! Models are owned values. Each verification session owns its own
//! [`AccumulatorModel`] (or a [`Comparator`] wrapping one) and drives it in lockstep
//! with the DUT. Only the [`host`] entry points keep an instance per calling thread.

/// Common types and constants (reset value, masks, errors).
pub mod common;
/// Model configuration (defaults, scoreboard and tracing settings).
pub mod config;
/// Model core (accumulator state, reference-model trait, ALU units).
pub mod core;
/// Handle-less integer entry points used by the simulation hosts.
pub mod host;
/// Instruction set (opcode enumeration and decoding).
pub mod isa;
/// Scoreboard comparison (comparator, verdicts, mismatch records).
pub mod scoreboard;
/// Transaction stimulus loading and replay.
pub mod sim;
/// Scoreboard statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Stateful accumulator model; construct with `AccumulatorModel::new`.
pub use crate::core::AccumulatorModel;
/// Opcode enumeration shared by the model and the host adapters.
pub use crate::isa::Opcode;
/// Verdict-form wrapper around a reference model.
pub use crate::scoreboard::{Comparator, Verdict};
