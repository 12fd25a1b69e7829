//! Scoreboard verdicts.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{VERDICT_MATCH, VERDICT_MISMATCH};

/// Outcome of comparing the model's expected value with the DUT's observed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Expected and observed values are equal ("good").
    Match,
    /// Expected and observed values differ ("bad").
    Mismatch,
}

impl Verdict {
    /// Compares an expected and an observed value.
    #[inline]
    pub const fn of(expected: i32, observed: i32) -> Self {
        if expected == observed {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    /// Returns `true` for [`Verdict::Match`].
    #[inline]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    /// Returns the host encoding: `1` for a match, `0` for a mismatch.
    #[inline]
    pub const fn encoding(self) -> i32 {
        match self {
            Self::Match => VERDICT_MATCH,
            Self::Mismatch => VERDICT_MISMATCH,
        }
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched { Self::Match } else { Self::Mismatch }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_match()
    }
}

impl From<Verdict> for i32 {
    fn from(verdict: Verdict) -> Self {
        verdict.encoding()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => f.write_str("match"),
            Self::Mismatch => f.write_str("mismatch"),
        }
    }
}
