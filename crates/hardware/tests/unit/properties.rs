//! Model Property Tests
//!
//! Randomized checks of the algebraic properties the DUT relies on:
//!   - reset always yields zero, from any state and with any opcode
//!   - a non-reset sequence equals the left fold of the opcode table
//!   - NOP is idempotent
//!   - ADD then SUB with the same operand restores the register
//!   - SHR never produces a negative value

use aluref_core::{AccumulatorModel, Comparator, Opcode};
use proptest::prelude::*;

use crate::common::harness::{Step, TestContext, oracle_fold, run_fresh};

fn any_opcode() -> impl Strategy<Value = Opcode> {
    prop::sample::select(Opcode::ALL.to_vec())
}

fn any_step() -> impl Strategy<Value = Step> {
    (any::<i32>(), any_opcode(), prop::bool::weighted(0.05)).prop_map(|(din, op, reset)| Step {
        din,
        op,
        reset,
    })
}

proptest! {
    #[test]
    fn reset_always_zero(start in any::<i32>(), din in any::<i32>(), op in any_opcode()) {
        let mut model = AccumulatorModel::with_value(start);
        prop_assert_eq!(model.apply(din, op, true), 0);
    }

    #[test]
    fn sequence_equals_oracle_fold(steps in prop::collection::vec(any_step(), 0..256)) {
        prop_assert_eq!(run_fresh(&steps), oracle_fold(&steps));
    }

    #[test]
    fn comparator_agrees_with_oracle(steps in prop::collection::vec(any_step(), 1..128)) {
        let mut tc = TestContext::new();
        prop_assert_eq!(tc.check_against_oracle(&steps), 0);
        prop_assert!(tc.sb.stats().all_matched());
        prop_assert_eq!(tc.sb.stats().checks, steps.len() as u64);
    }

    #[test]
    fn nop_is_idempotent(start in any::<i32>(), dins in prop::collection::vec(any::<i32>(), 1..32)) {
        let mut model = AccumulatorModel::with_value(start);
        for din in dins {
            prop_assert_eq!(model.apply(din, Opcode::Nop, false), start);
        }
    }

    #[test]
    fn add_then_sub_restores(start in any::<i32>(), din in any::<i32>()) {
        let mut model = AccumulatorModel::with_value(start);
        let _ = model.apply(din, Opcode::Add, false);
        prop_assert_eq!(model.apply(din, Opcode::Sub, false), start);
    }

    #[test]
    fn shr_is_never_negative(start in any::<i32>(), din in any::<i32>()) {
        let mut model = AccumulatorModel::with_value(start);
        let v = model.apply(din, Opcode::ShiftRightLogical, false);
        prop_assert!(v >= 0);
        prop_assert_eq!(v as u32, (start as u32) >> 1);
    }

    #[test]
    fn unrecognized_encoding_matches_nop(start in any::<i32>(), din in any::<i32>(), raw in 8i32..) {
        let mut a = AccumulatorModel::with_value(start);
        let mut b = AccumulatorModel::with_value(start);
        prop_assert_eq!(a.apply_encoded(din, raw, 0), b.apply(din, Opcode::Nop, false));
    }

    #[test]
    fn comparator_mismatch_on_any_wrong_observation(din in any::<i32>(), delta in 1i32..) {
        let mut sb = Comparator::new();
        prop_assert!(!sb.check(din, Opcode::Load, false, din.wrapping_add(delta)));
    }
}

#[test]
fn tracked_sequence_from_harness() {
    let mut tc = TestContext::new();
    let steps = [
        Step::op(Opcode::Load, 10),
        Step::op(Opcode::Add, 5),
        Step::op(Opcode::Sub, 3),
        Step::op(Opcode::And, 0xF),
    ];
    assert_eq!(tc.run(&steps), 12);
}
