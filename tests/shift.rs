//! Shift instruction tests (SHL/SHR by 1 and by CL)

use micro86::cpu::{Cpu, CpuHarness, Flags};

#[test]
fn test_shl_by_one() {
    let mut harness = CpuHarness::new();
    // MOV AL, 2; SHL AL, 1
    harness.load_program(&[0xB0, 0x02, 0xD0, 0xE0]);
    harness.step_n(2);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 4);
}

#[test]
fn test_shr_by_one() {
    let mut harness = CpuHarness::new();
    // MOV AL, 8; SHR AL, 1
    harness.load_program(&[0xB0, 0x08, 0xD0, 0xE8]);
    harness.step_n(2);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 4);
}

#[test]
fn test_shl_drops_high_bit() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x81; SHL AL, 1
    harness.load_program(&[0xB0, 0x81, 0xD0, 0xE0]);
    harness.step_n(2);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x02); // bit 7 shifted out
}

#[test]
fn test_shl_by_cl() {
    let mut harness = CpuHarness::new();
    // MOV AL, 1; MOV CL, 4; SHL AL, CL
    harness.load_program(&[0xB0, 0x01, 0xB1, 0x04, 0xD2, 0xE0]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x10);
}

#[test]
fn test_shr_by_cl() {
    let mut harness = CpuHarness::new();
    // MOV BL, 0x80; MOV CL, 3; SHR BL, CL
    harness.load_program(&[0xB3, 0x80, 0xB1, 0x03, 0xD2, 0xEB]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::BL), 0x10);
}

#[test]
fn test_shift_by_zero_keeps_value() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x80; MOV CL, 0; SHL AL, CL
    harness.load_program(&[0xB0, 0x80, 0xB1, 0x00, 0xD2, 0xE0]);
    harness.step_n(3);

    // Value unchanged, but flags are refreshed from it
    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x80);
    assert!(harness.cpu.flags.contains(Flags::SIGN));
}

#[test]
fn test_shift_count_of_eight_clears_register() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0xFF; MOV CL, 8; SHL AL, CL
    harness.load_program(&[0xB0, 0xFF, 0xB1, 0x08, 0xD2, 0xE0]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0);
    assert!(harness.cpu.flags.contains(Flags::ZERO));
}

#[test]
fn test_large_shr_count_clears_register() {
    let mut harness = CpuHarness::new();
    // MOV BL, 0xFF; MOV CL, 0x20; SHR BL, CL
    harness.load_program(&[0xB3, 0xFF, 0xB1, 0x20, 0xD2, 0xEB]);
    harness.step_n(3);

    assert_eq!(harness.cpu.read_reg8(Cpu::BL), 0);
    assert!(harness.cpu.flags.contains(Flags::ZERO));
}

#[test]
fn test_unsupported_shift_subcode_keeps_value() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x80; 0xD0 with reg field /0 is not a supported shift
    harness.load_program(&[0xB0, 0x80, 0xD0, 0xC0]);
    harness.step_n(2);

    assert_eq!(harness.cpu.read_reg8(Cpu::AL), 0x80);
    assert!(harness.cpu.flags.contains(Flags::SIGN)); // flags still refreshed
}
