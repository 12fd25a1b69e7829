/// Stimulus replay.
pub mod replay;
