//! Scoreboard comparison.
//!
//! The scoreboard wraps a reference model and checks its result against the
//! value sampled from the DUT on the same cycle. It provides:
//! 1. **Comparator:** Steps the model once per check and compares.
//! 2. **Verdicts:** The match/mismatch result and its host integer encoding.
//! 3. **Mismatch Records:** A bounded log of the most recent disagreements.
//!
//! A mismatch is an expected outcome signalling a DUT defect. It is reported as
//! data; what to do about it is up to the calling harness.

/// Comparator that drives a reference model in lockstep with the DUT.
pub mod comparator;

/// Mismatch records.
pub mod mismatch;

/// Verdict type and host encoding.
pub mod verdict;

pub use comparator::Comparator;
pub use mismatch::Mismatch;
pub use verdict::Verdict;
