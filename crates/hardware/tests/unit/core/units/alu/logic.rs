//! ALU Logic Operation Tests
//!
//! Identity, annihilation, and bit-pattern cases for AND, OR, and XOR over the
//! full 32 bits, including the sign bit.

use aluref_core::Opcode;
use aluref_core::core::units::alu::Alu;

// ─── Constants ───────────────────────────────────────────────────────────────

const ALL_ONES: i32 = -1; // 0xFFFF_FFFF
const ALTERNATING_A: i32 = 0xAAAA_AAAA_u32 as i32;
const ALTERNATING_5: i32 = 0x5555_5555;
const SIGN_BIT: i32 = i32::MIN; // 0x8000_0000

// ─── Helper ──────────────────────────────────────────────────────────────────

fn alu(op: Opcode, acc: i32, din: i32) -> i32 {
    Alu::execute(op, acc, din)
}

#[test]
fn and_identity_and_annihilation() {
    assert_eq!(alu(Opcode::And, 0x1234_5678, ALL_ONES), 0x1234_5678);
    assert_eq!(alu(Opcode::And, 0x1234_5678, 0), 0);
}

#[test]
fn and_masks_low_nibble() {
    assert_eq!(alu(Opcode::And, 12, 0xF), 12);
    assert_eq!(alu(Opcode::And, 0x1F, 0xF), 0xF);
}

#[test]
fn and_disjoint_patterns() {
    assert_eq!(alu(Opcode::And, ALTERNATING_A, ALTERNATING_5), 0);
}

#[test]
fn and_keeps_sign_bit() {
    assert_eq!(alu(Opcode::And, ALL_ONES, SIGN_BIT), SIGN_BIT);
}

#[test]
fn or_identity_and_saturation() {
    assert_eq!(alu(Opcode::Or, 0x0F0F, 0), 0x0F0F);
    assert_eq!(alu(Opcode::Or, 0x0F0F, ALL_ONES), ALL_ONES);
}

#[test]
fn or_complementary_patterns() {
    assert_eq!(alu(Opcode::Or, ALTERNATING_A, ALTERNATING_5), ALL_ONES);
}

#[test]
fn or_sets_sign_bit() {
    assert_eq!(alu(Opcode::Or, 1, SIGN_BIT), SIGN_BIT | 1);
    assert!(alu(Opcode::Or, 1, SIGN_BIT) < 0);
}

#[test]
fn xor_identity_and_self_inverse() {
    assert_eq!(alu(Opcode::Xor, 0x1357, 0), 0x1357);
    assert_eq!(alu(Opcode::Xor, 0x1357, 0x1357), 0);
}

#[test]
fn xor_all_ones_is_bitwise_not() {
    for v in [0, 1, -1, i32::MAX, i32::MIN, 0x1234_5678] {
        assert_eq!(alu(Opcode::Xor, v, ALL_ONES), !v);
    }
}

#[test]
fn xor_twice_restores() {
    let once = alu(Opcode::Xor, 0x0BAD_F00D, ALTERNATING_A);
    assert_eq!(alu(Opcode::Xor, once, ALTERNATING_A), 0x0BAD_F00D);
}
