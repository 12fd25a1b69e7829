//! Stimulus replay.
//!
//! Feeds a recorded transaction stream through a comparator in order.
//! Transactions that carry an observed value are checked (verdict form); the
//! rest only advance the model (query form), so the model stays in lockstep
//! with the DUT either way.

use serde::Serialize;

use crate::core::traits::ReferenceModel;
use crate::scoreboard::{Comparator, Mismatch, Verdict};
use crate::sim::stimulus::Transaction;
use crate::stats::ScoreboardStats;

/// Result of replaying a transaction stream.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReplayReport {
    /// Model accumulator value after each transaction.
    pub values: Vec<i32>,
    /// Verdict for each transaction, or `None` where nothing was observed.
    pub verdicts: Vec<Option<Verdict>>,
    /// Mismatches raised during this replay that the comparator retained.
    pub mismatches: Vec<Mismatch>,
    /// Comparator statistics at the end of the replay (cumulative).
    pub stats: ScoreboardStats,
}

impl ReplayReport {
    /// Returns `true` if no checked transaction mismatched.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().flatten().all(|v| v.is_match())
    }

    /// Final accumulator value, or `None` for an empty replay.
    pub fn final_value(&self) -> Option<i32> {
        self.values.last().copied()
    }
}

/// Replays `transactions` through `comparator`.
///
/// # Arguments
///
/// * `comparator`   - Comparator to drive. Its model continues from its current state.
/// * `transactions` - Operations in DUT order.
///
/// # Returns
///
/// A per-transaction report of model values and verdicts.
pub fn replay<M: ReferenceModel>(
    comparator: &mut Comparator<M>,
    transactions: &[Transaction],
) -> ReplayReport {
    let first_index = comparator.operations();
    let mut values = Vec::with_capacity(transactions.len());
    let mut verdicts = Vec::with_capacity(transactions.len());

    for tx in transactions {
        match tx.observed {
            Some(observed) => {
                let verdict = comparator.compare_encoded(tx.din, tx.op, tx.reset, observed);
                verdicts.push(Some(verdict));
            }
            None => {
                let _ = comparator.step_encoded(tx.din, tx.op, tx.reset);
                verdicts.push(None);
            }
        }
        values.push(comparator.value());
    }

    let mismatches = comparator
        .mismatches()
        .iter()
        .filter(|m| m.index >= first_index)
        .cloned()
        .collect();

    tracing::debug!(
        transactions = transactions.len(),
        checks = comparator.stats().checks,
        mismatches = comparator.stats().mismatches,
        "replay complete"
    );

    ReplayReport {
        values,
        verdicts,
        mismatches,
        stats: comparator.stats().clone(),
    }
}
