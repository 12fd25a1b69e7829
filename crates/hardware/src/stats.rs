//! Scoreboard statistics collection and reporting.
//!
//! This module tracks what a comparator has seen over a verification session. It provides:
//! 1. **Verdicts:** Total checks, matches, and mismatches.
//! 2. **Operation mix:** Counts per opcode, resets, and unrecognized encodings.
//! 3. **Reporting:** A printable summary and a serializable form for host export.

use serde::Serialize;

use crate::common::constants::OPCODE_COUNT;
use crate::isa::Opcode;

/// Counters accumulated by a comparator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreboardStats {
    /// Number of verdicts produced (query-form steps are not counted).
    pub checks: u64,
    /// Number of checks whose expected value equalled the observed value.
    pub matches: u64,
    /// Number of checks whose expected value differed from the observed value.
    pub mismatches: u64,
    /// Number of operations applied with reset asserted.
    pub resets: u64,
    /// Operations applied without reset, indexed by opcode encoding.
    pub op_counts: [u64; OPCODE_COUNT],
    /// Operations whose raw encoding was not a defined opcode (counted as `NOP`).
    pub unrecognized_ops: u64,
}

impl ScoreboardStats {
    /// Records one applied operation.
    pub(crate) const fn record_op(&mut self, op: Opcode, reset: bool) {
        if reset {
            self.resets += 1;
        } else {
            self.op_counts[op as usize] += 1;
        }
    }

    /// Records one verdict.
    pub(crate) const fn record_verdict(&mut self, matched: bool) {
        self.checks += 1;
        if matched {
            self.matches += 1;
        } else {
            self.mismatches += 1;
        }
    }

    /// Records a raw opcode encoding that did not decode.
    pub(crate) const fn record_unrecognized(&mut self) {
        self.unrecognized_ops += 1;
    }

    /// Returns the number of times `op` was applied without reset.
    pub const fn count(&self, op: Opcode) -> u64 {
        self.op_counts[op as usize]
    }

    /// Returns `true` if no mismatch has been recorded.
    pub const fn all_matched(&self) -> bool {
        self.mismatches == 0
    }

    /// Fraction of checks that matched, or `1.0` before the first check.
    pub fn match_rate(&self) -> f64 {
        if self.checks == 0 {
            1.0
        } else {
            self.matches as f64 / self.checks as f64
        }
    }

    /// Print the selected sections. Options: `"summary"`, `"mix"`.
    /// An empty slice prints everything.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        if want("summary") {
            println!("\n==========================================================");
            println!("LEROS ALU SCOREBOARD STATISTICS");
            println!("==========================================================");
            println!("checks                   {}", self.checks);
            println!("matches                  {}", self.matches);
            println!("mismatches               {}", self.mismatches);
            println!("match_rate               {:.4}", self.match_rate());
            println!("resets                   {}", self.resets);
            println!("----------------------------------------------------------");
        }
        if want("mix") {
            println!("OPERATION MIX");
            for op in Opcode::ALL {
                println!("  op.{:<21}{}", op.mnemonic(), self.count(op));
            }
            println!("  op.unrecognized        {}", self.unrecognized_ops);
            println!("----------------------------------------------------------");
        }
    }

    /// Print all sections.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
