//! ALU Arithmetic Tests
//!
//! Deterministic edge cases for ADD, SUB, and LOAD on the 32-bit accumulator:
//!   - Identity and inverse
//!   - Two's-complement wraparound at i32::MAX / i32::MIN
//!   - LOAD ignoring the previous accumulator

use aluref_core::Opcode;
use aluref_core::core::units::alu::Alu;

fn alu(op: Opcode, acc: i32, din: i32) -> i32 {
    Alu::execute(op, acc, din)
}

// ═════════════════════════════════════════════════════════════════════════════
//  ADD
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn add_basic() {
    assert_eq!(alu(Opcode::Add, 0, 5), 5);
    assert_eq!(alu(Opcode::Add, 10, -3), 7);
}

#[test]
fn add_zero_identity() {
    assert_eq!(alu(Opcode::Add, 0x1357_9BDF, 0), 0x1357_9BDF);
}

#[test]
fn add_wraps_at_max() {
    assert_eq!(alu(Opcode::Add, i32::MAX, 1), i32::MIN);
}

#[test]
fn add_wraps_at_min() {
    assert_eq!(alu(Opcode::Add, i32::MIN, -1), i32::MAX);
}

#[test]
fn add_all_ones_plus_one_is_zero() {
    assert_eq!(alu(Opcode::Add, -1, 1), 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SUB
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sub_basic() {
    assert_eq!(alu(Opcode::Sub, 15, 3), 12);
    assert_eq!(alu(Opcode::Sub, 0, 1), -1);
}

#[test]
fn sub_self_is_zero() {
    assert_eq!(alu(Opcode::Sub, -123_456, -123_456), 0);
}

#[test]
fn sub_wraps_at_min() {
    assert_eq!(alu(Opcode::Sub, i32::MIN, 1), i32::MAX);
}

#[test]
fn sub_min_from_zero_wraps_to_min() {
    // 0 - (-2^31) overflows back to -2^31
    assert_eq!(alu(Opcode::Sub, 0, i32::MIN), i32::MIN);
}

#[test]
fn add_then_sub_restores_at_extremes() {
    for acc in [i32::MIN, -1, 0, 1, i32::MAX] {
        for din in [i32::MIN, -1, 1, i32::MAX] {
            let sum = alu(Opcode::Add, acc, din);
            assert_eq!(alu(Opcode::Sub, sum, din), acc, "acc={acc} din={din}");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  LOAD
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn load_replaces_accumulator() {
    assert_eq!(alu(Opcode::Load, 0x7777, -5), -5);
    assert_eq!(alu(Opcode::Load, i32::MIN, i32::MAX), i32::MAX);
}

#[test]
fn submodule_passes_through_foreign_opcodes() {
    use aluref_core::core::units::alu::arithmetic;
    assert_eq!(arithmetic::execute(Opcode::Xor, 9, 3), 9);
    assert_eq!(arithmetic::execute(Opcode::Nop, 9, 3), 9);
}
