//! Host calling convention.
//!
//! Simulation hosts call the model through two handle-less entry points that take
//! and return plain 32-bit integers:
//! 1. **Query form:** [`calc`] returns the updated accumulator.
//! 2. **Verdict form:** [`scoreboard_check`] returns `1` for a match, `0` for a mismatch.
//!
//! Because these signatures carry no handle, each one is backed by a model owned by
//! the calling thread. A harness that runs one DUT per thread therefore gets one
//! independent accumulator per DUT. The two forms keep separate models, so a harness
//! uses one form per DUT; mixing them on one thread would not share state.
//!
//! The C-ABI and Python adapters forward to these functions unchanged.

use std::cell::RefCell;

use crate::core::accumulator::AccumulatorModel;
use crate::scoreboard::Comparator;
use crate::stats::ScoreboardStats;

thread_local! {
    static QUERY_MODEL: RefCell<AccumulatorModel> = const { RefCell::new(AccumulatorModel::new()) };
    static VERDICT_SCOREBOARD: RefCell<Comparator> = RefCell::new(Comparator::new());
}

/// Applies one operation to this thread's query-form model.
///
/// # Arguments
///
/// * `din`   - Input operand.
/// * `op`    - Opcode encoding (`0..=7`); other values behave as `NOP`.
/// * `reset` - Non-zero asserts reset.
///
/// # Returns
///
/// The accumulator value after the update.
pub fn calc(din: i32, op: i32, reset: i32) -> i32 {
    QUERY_MODEL.with_borrow_mut(|model| model.apply_encoded(din, op, reset))
}

/// Applies one operation to this thread's verdict-form model and compares the result
/// with the DUT value.
///
/// # Returns
///
/// `1` if the model's value equals `from_dut`, `0` otherwise.
pub fn scoreboard_check(din: i32, op: i32, reset: i32, from_dut: i32) -> i32 {
    VERDICT_SCOREBOARD.with_borrow_mut(|sb| sb.compare_encoded(din, op, reset, from_dut).encoding())
}

/// Returns a snapshot of this thread's verdict-form statistics.
pub fn scoreboard_stats() -> ScoreboardStats {
    VERDICT_SCOREBOARD.with_borrow(|sb| sb.stats().clone())
}

/// Discards both of this thread's models and statistics, starting a new session.
pub fn reset_thread_models() {
    QUERY_MODEL.with_borrow_mut(AccumulatorModel::reset);
    VERDICT_SCOREBOARD.with_borrow_mut(|sb| *sb = Comparator::new());
}
