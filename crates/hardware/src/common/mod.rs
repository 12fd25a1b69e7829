//! Common utilities and types used throughout the reference model.
//!
//! This module provides building blocks shared by the model, the scoreboard,
//! and the host adapters. It includes:
//! 1. **Constants:** Reset value, shift mask, and host encodings.
//! 2. **Error Handling:** The error type for the fallible edges of the crate.

/// Common constants used throughout the model.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{ACCU_RESET_VALUE, LOGICAL_SHIFT_MASK};
pub use error::ModelError;
