//! Transaction replay.
//!
//! Provides loading of recorded DUT transaction streams and replaying them
//! through a comparator, for regression runs outside a live simulation.

/// Drives a transaction stream through a comparator.
pub mod replay;

/// Transaction records and JSON loading.
pub mod stimulus;

pub use replay::{ReplayReport, replay};
pub use stimulus::{Stimulus, Transaction};
