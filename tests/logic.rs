//! Logical instruction tests (AND, OR)

use micro86::cpu::{Cpu, CpuHarness, Flags};

#[test]
fn test_and_registers() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x0F; MOV BL, 0x33; AND AL, BL
    harness.load_program(&[0xB0, 0x0F, 0xB3, 0x33, 0x20, 0xD8]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x03);
    assert_eq!(harness.cpu.read_reg8(Cpu::BL), 0x33); // source untouched
}

#[test]
fn test_and_disjoint_bits_sets_zero_flag() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0xF0; MOV BL, 0x0F; AND AL, BL
    harness.load_program(&[0xB0, 0xF0, 0xB3, 0x0F, 0x20, 0xD8]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0);
    assert!(harness.cpu.flags.contains(Flags::ZERO));
}

#[test]
fn test_or_registers() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x0F; MOV BL, 0x30; OR AL, BL
    harness.load_program(&[0xB0, 0x0F, 0xB3, 0x30, 0x08, 0xD8]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x3F);
}

#[test]
fn test_or_high_bit_sets_sign_flag() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x01; MOV BL, 0x80; OR AL, BL
    harness.load_program(&[0xB0, 0x01, 0xB3, 0x80, 0x08, 0xD8]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x81);
    assert!(harness.cpu.flags.contains(Flags::SIGN));
    assert!(!harness.cpu.flags.contains(Flags::ZERO));
}
