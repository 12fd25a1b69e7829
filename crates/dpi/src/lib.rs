//! C ABI entry points for the Leros ALU reference model.
//!
//! This crate builds a shared/static library that simulators link against. It provides:
//! 1. **DPI functions:** `calc` and `scoreboard_check`, matching the SystemVerilog
//!    imports used by the Leros testbench:
//!    ```systemverilog
//!    import "DPI-C" function int calc(int din, int op, int reset);
//!    import "DPI-C" function int scoreboard_check(int din, int op, int reset, int fromDUT);
//!    ```
//! 2. **Handle API:** `aluref_model_*` functions for hosts that drive several DUT
//!    instances from one thread and need one model per instance.
//!
//! See `include/aluref.h` for the C prototypes.

use libc::c_int;

/// Handle-based entry points.
pub mod handle;

pub use handle::AlurefModel;

/// Applies one operation to the calling thread's model and returns the accumulator.
///
/// `op` uses the encoding `NOP=0 .. SHR=7`; other values behave as `NOP`.
/// Any non-zero `reset` asserts reset.
#[unsafe(no_mangle)]
pub extern "C" fn calc(din: c_int, op: c_int, reset: c_int) -> c_int {
    aluref_core::host::calc(din, op, reset)
}

/// Applies one operation to the calling thread's scoreboard and compares the
/// result with `from_dut`.
///
/// Returns `1` for a match ("good") and `0` for a mismatch ("bad").
#[unsafe(no_mangle)]
pub extern "C" fn scoreboard_check(
    din: c_int,
    op: c_int,
    reset: c_int,
    from_dut: c_int,
) -> c_int {
    aluref_core::host::scoreboard_check(din, op, reset, from_dut)
}

/// Starts a new session on the calling thread, clearing the `calc` and
/// `scoreboard_check` models.
#[unsafe(no_mangle)]
pub extern "C" fn aluref_reset() {
    aluref_core::host::reset_thread_models();
}

/// Number of mismatches seen by `scoreboard_check` on the calling thread.
///
/// Saturates at `c_int::MAX`.
#[unsafe(no_mangle)]
pub extern "C" fn aluref_mismatch_count() -> c_int {
    c_int::try_from(aluref_core::host::scoreboard_stats().mismatches).unwrap_or(c_int::MAX)
}
