//! Reference-model trait.
//!
//! The scoreboard only needs to advance a model by one operation and read back
//! its register. Keeping that behind a trait lets the comparator wrap the
//! accumulator model in production and a mock in tests.

use crate::isa::Opcode;

/// A stateful golden model that can be stepped in lockstep with the DUT.
pub trait ReferenceModel {
    /// Applies one operation and returns the post-update register value.
    ///
    /// A `reset` of `true` takes precedence over `op` and `din`.
    fn apply(&mut self, din: i32, op: Opcode, reset: bool) -> i32;

    /// Returns the current register value without advancing the model.
    fn value(&self) -> i32;
}
