//! Handle-based model API.
//!
//! Each handle owns one independent comparator (and therefore one accumulator).
//! Hosts create a handle per DUT instance, pass it to every call, and free it at
//! the end of the test. A null handle is tolerated: calls on it are no-ops that
//! return 0.

use aluref_core::Comparator;
use libc::c_int;

/// Opaque model handle.
#[derive(Debug, Default)]
pub struct AlurefModel {
    sb: Comparator,
}

/// Borrows the model behind `model`, or logs and returns `None` for null.
///
/// # Safety
///
/// `model` must be null or a live pointer returned by [`aluref_model_new`] with no
/// other reference to it active.
unsafe fn model_mut<'a>(
    model: *mut AlurefModel,
    caller: &'static str,
) -> Option<&'a mut AlurefModel> {
    // SAFETY: upheld by the caller; `as_mut` handles null.
    let model = unsafe { model.as_mut() };
    if model.is_none() {
        tracing::warn!(caller, "null aluref model handle");
    }
    model
}

/// Allocates a new model with the accumulator at zero.
///
/// The returned handle must be released with [`aluref_model_free`].
#[unsafe(no_mangle)]
pub extern "C" fn aluref_model_new() -> *mut AlurefModel {
    Box::into_raw(Box::default())
}

/// Releases a model allocated by [`aluref_model_new`]. Null is ignored.
///
/// # Safety
///
/// `model` must be null or a pointer returned by [`aluref_model_new`] that has not
/// already been freed. The handle must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn aluref_model_free(model: *mut AlurefModel) {
    if !model.is_null() {
        // SAFETY: the pointer came from `Box::into_raw` in `aluref_model_new`
        // and ownership is handed back exactly once.
        drop(unsafe { Box::from_raw(model) });
    }
}

/// Applies one operation and returns the updated accumulator (query form).
///
/// # Safety
///
/// `model` must be null or a live handle from [`aluref_model_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn aluref_model_calc(
    model: *mut AlurefModel,
    din: c_int,
    op: c_int,
    reset: c_int,
) -> c_int {
    // SAFETY: forwarded from this function's contract.
    unsafe { model_mut(model, "aluref_model_calc") }
        .map_or(0, |m| m.sb.step_encoded(din, op, reset))
}

/// Applies one operation and compares with `from_dut` (verdict form).
///
/// Returns `1` for a match, `0` for a mismatch or a null handle.
///
/// # Safety
///
/// `model` must be null or a live handle from [`aluref_model_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn aluref_model_check(
    model: *mut AlurefModel,
    din: c_int,
    op: c_int,
    reset: c_int,
    from_dut: c_int,
) -> c_int {
    // SAFETY: forwarded from this function's contract.
    unsafe { model_mut(model, "aluref_model_check") }.map_or(0, |m| {
        m.sb.compare_encoded(din, op, reset, from_dut).encoding()
    })
}

/// Returns the current accumulator without advancing the model.
///
/// # Safety
///
/// `model` must be null or a live handle from [`aluref_model_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn aluref_model_value(model: *const AlurefModel) -> c_int {
    // SAFETY: forwarded from this function's contract; only a shared borrow is taken.
    unsafe { model.as_ref() }.map_or(0, |m| m.sb.value())
}

/// Returns the number of mismatches seen by this model, saturating at `c_int::MAX`.
///
/// # Safety
///
/// `model` must be null or a live handle from [`aluref_model_new`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn aluref_model_mismatches(model: *const AlurefModel) -> c_int {
    // SAFETY: forwarded from this function's contract; only a shared borrow is taken.
    unsafe { model.as_ref() }.map_or(0, |m| {
        c_int::try_from(m.sb.stats().mismatches).unwrap_or(c_int::MAX)
    })
}
