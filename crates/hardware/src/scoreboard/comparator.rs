//! Expected-vs-observed comparator.
//!
//! The comparator owns a reference model and advances it exactly once per call.
//! This includes calls that only ask for a verdict: every check permanently
//! affects later results, so the harness must call it in lockstep with the DUT's
//! real operation sequence.

use std::collections::VecDeque;

use crate::config::Config;
use crate::core::accumulator::AccumulatorModel;
use crate::core::traits::ReferenceModel;
use crate::isa::{Opcode, decode_reset};
use crate::scoreboard::mismatch::Mismatch;
use crate::scoreboard::verdict::Verdict;
use crate::stats::ScoreboardStats;

/// Verdict-form wrapper around a [`ReferenceModel`].
#[derive(Clone, Debug)]
pub struct Comparator<M = AccumulatorModel> {
    model: M,
    stats: ScoreboardStats,
    mismatches: VecDeque<Mismatch>,
    log_depth: usize,
    trace_checks: bool,
    next_index: u64,
}

impl Comparator<AccumulatorModel> {
    /// Creates a comparator around a fresh accumulator model with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a comparator around a fresh accumulator model.
    pub fn with_config(config: &Config) -> Self {
        Self::with_model(AccumulatorModel::new(), config)
    }
}

impl Default for Comparator<AccumulatorModel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ReferenceModel> Comparator<M> {
    /// Creates a comparator around an existing model.
    pub fn with_model(model: M, config: &Config) -> Self {
        Self {
            model,
            stats: ScoreboardStats::default(),
            mismatches: VecDeque::with_capacity(config.scoreboard.mismatch_log_depth),
            log_depth: config.scoreboard.mismatch_log_depth,
            trace_checks: config.general.trace_checks,
            next_index: 0,
        }
    }

    /// Applies one operation to the model and compares the result with `observed`.
    ///
    /// # Arguments
    ///
    /// * `din`      - Input operand.
    /// * `op`       - Operation to perform.
    /// * `reset`    - Reset flag; takes precedence over `op`.
    /// * `observed` - Accumulator value sampled from the DUT for this operation.
    ///
    /// # Returns
    ///
    /// [`Verdict::Match`] if the model's expected value equals `observed`.
    pub fn compare(&mut self, din: i32, op: Opcode, reset: bool, observed: i32) -> Verdict {
        let index = self.next_index;
        let expected = self.step(din, op, reset);
        let verdict = Verdict::of(expected, observed);
        self.stats.record_verdict(verdict.is_match());

        if verdict.is_match() {
            if self.trace_checks {
                tracing::debug!(index, %op, din, reset, expected, "scoreboard match");
            }
        } else {
            let mismatch = Mismatch {
                index,
                din,
                op,
                reset,
                expected,
                observed,
            };
            tracing::warn!("scoreboard mismatch {mismatch}");
            self.log_mismatch(mismatch);
        }
        verdict
    }

    /// Boolean form of [`compare`](Self::compare): `true` for a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use aluref_core::{Comparator, Opcode};
    ///
    /// let mut sb = Comparator::new();
    /// assert!(sb.check(5, Opcode::Add, false, 5));
    /// assert!(!sb.check(5, Opcode::Add, false, 5)); // model is now at 10
    /// ```
    #[inline]
    pub fn check(&mut self, din: i32, op: Opcode, reset: bool, observed: i32) -> bool {
        self.compare(din, op, reset, observed).is_match()
    }

    /// [`compare`](Self::compare) with opcode and reset in the host integer encoding.
    ///
    /// Unrecognized opcode encodings behave as `NOP` and are counted in the stats.
    pub fn compare_encoded(&mut self, din: i32, op: i32, reset: i32, observed: i32) -> Verdict {
        let op = self.decode(op);
        self.compare(din, op, decode_reset(reset), observed)
    }

    /// Boolean form of [`compare_encoded`](Self::compare_encoded).
    #[inline]
    pub fn check_encoded(&mut self, din: i32, op: i32, reset: i32, observed: i32) -> bool {
        self.compare_encoded(din, op, reset, observed).is_match()
    }

    /// Advances the model without comparing (query form).
    ///
    /// The operation is counted in the opcode mix but produces no verdict.
    pub fn step(&mut self, din: i32, op: Opcode, reset: bool) -> i32 {
        self.next_index += 1;
        self.stats.record_op(op, reset);
        self.model.apply(din, op, reset)
    }

    /// [`step`](Self::step) with opcode and reset in the host integer encoding.
    pub fn step_encoded(&mut self, din: i32, op: i32, reset: i32) -> i32 {
        let op = self.decode(op);
        self.step(din, op, decode_reset(reset))
    }

    /// Returns the wrapped model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns the model's current register value.
    pub fn value(&self) -> i32 {
        self.model.value()
    }

    /// Returns the statistics accumulated so far.
    pub const fn stats(&self) -> &ScoreboardStats {
        &self.stats
    }

    /// Returns the retained mismatch records, oldest first.
    pub const fn mismatches(&self) -> &VecDeque<Mismatch> {
        &self.mismatches
    }

    /// Removes and returns the retained mismatch records.
    pub fn take_mismatches(&mut self) -> Vec<Mismatch> {
        self.mismatches.drain(..).collect()
    }

    /// Number of operations applied since construction.
    pub const fn operations(&self) -> u64 {
        self.next_index
    }

    /// Consumes the comparator and returns the wrapped model.
    pub fn into_model(self) -> M {
        self.model
    }

    fn decode(&mut self, raw: i32) -> Opcode {
        Opcode::decode(raw).unwrap_or_else(|| {
            self.stats.record_unrecognized();
            Opcode::decode_lenient(raw)
        })
    }

    fn log_mismatch(&mut self, mismatch: Mismatch) {
        if self.log_depth == 0 {
            return;
        }
        if self.mismatches.len() == self.log_depth {
            let _ = self.mismatches.pop_front();
        }
        self.mismatches.push_back(mismatch);
    }
}
