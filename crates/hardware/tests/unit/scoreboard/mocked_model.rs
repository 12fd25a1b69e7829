//! Comparator tests against a mocked reference model.
//!
//! These pin the comparator's contract with its model independent of the ALU:
//! exactly one `apply` per check, arguments passed through unchanged, and the
//! verdict derived purely from the returned value.

use aluref_core::config::Config;
use aluref_core::{Comparator, Opcode, Verdict};
use mockall::predicate::eq;

use crate::common::mocks::model::MockModel;

#[test]
fn check_applies_exactly_once_with_same_arguments() {
    let mut model = MockModel::new();
    let _ = model
        .expect_apply()
        .with(eq(7), eq(Opcode::Xor), eq(false))
        .times(1)
        .return_const(123);

    let mut sb = Comparator::with_model(model, &Config::default());
    assert_eq!(sb.compare(7, Opcode::Xor, false, 123), Verdict::Match);
}

#[test]
fn verdict_follows_model_output() {
    let mut model = MockModel::new();
    let _ = model.expect_apply().times(2).return_const(-1);

    let mut sb = Comparator::with_model(model, &Config::default());
    assert!(sb.check(0, Opcode::Nop, false, -1));
    assert!(!sb.check(0, Opcode::Nop, false, 0x7FFF_FFFF));
}

#[test]
fn encoded_reset_is_forwarded_as_bool() {
    let mut model = MockModel::new();
    let _ = model
        .expect_apply()
        .with(eq(3), eq(Opcode::Nop), eq(true))
        .times(1)
        .return_const(0);

    let mut sb = Comparator::with_model(model, &Config::default());
    assert!(sb.check_encoded(3, 42, 1, 0));
}

#[test]
fn value_is_read_without_apply() {
    let mut model = MockModel::new();
    let _ = model.expect_apply().never();
    let _ = model.expect_value().times(1).return_const(9);

    let sb = Comparator::with_model(model, &Config::default());
    assert_eq!(sb.value(), 9);
}
