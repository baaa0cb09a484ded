//! Dispatch table for instruction execution
//!
//! Maps all 256 opcodes to their handler functions. Slots without a
//! defined instruction point at the invalid_opcode handler, which turns
//! the fetch into an unknown-opcode fault.

use crate::cpu::execute::*;
use crate::cpu::state::{Control, Fault};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// Instruction handler function signature
///
/// Takes mutable CPU state, the memory bus, and the opcode byte (needed
/// by handlers that serve several opcodes, like the MOV-immediate row and
/// the shift encodings). Returns whether to keep running, or a fault.
pub type InstructionHandler = fn(&mut Cpu, &mut Memory, u8) -> Result<Control, Fault>;

/// Dispatch table with 256 entries, one for each possible opcode
pub static DISPATCH_TABLE: [InstructionHandler; 256] = [
    // 0x00-0x0F: ADD and OR
    arithmetic::add_rm_r, // 0x00: ADD r/m8, r8
    invalid_opcode, // 0x01
    invalid_opcode, // 0x02
    invalid_opcode, // 0x03
    invalid_opcode, // 0x04
    invalid_opcode, // 0x05
    invalid_opcode, // 0x06
    invalid_opcode, // 0x07
    logic::or_rm_r, // 0x08: OR r/m8, r8
    invalid_opcode, // 0x09
    invalid_opcode, // 0x0A
    invalid_opcode, // 0x0B
    invalid_opcode, // 0x0C
    invalid_opcode, // 0x0D
    invalid_opcode, // 0x0E
    invalid_opcode, // 0x0F
    // 0x10-0x1F: unused
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x10-0x17
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x18-0x1F
    // 0x20-0x2F: AND and SUB
    logic::and_rm_r, // 0x20: AND r/m8, r8
    invalid_opcode, // 0x21
    invalid_opcode, // 0x22
    invalid_opcode, // 0x23
    invalid_opcode, // 0x24
    invalid_opcode, // 0x25
    invalid_opcode, // 0x26
    invalid_opcode, // 0x27
    arithmetic::sub_rm_r, // 0x28: SUB r/m8, r8
    invalid_opcode, // 0x29
    invalid_opcode, // 0x2A
    invalid_opcode, // 0x2B
    arithmetic::sub_acc_imm, // 0x2C: SUB AL, imm8
    invalid_opcode, // 0x2D
    invalid_opcode, // 0x2E
    invalid_opcode, // 0x2F
    // 0x30-0x3F: CMP
    invalid_opcode, // 0x30
    invalid_opcode, // 0x31
    invalid_opcode, // 0x32
    invalid_opcode, // 0x33
    invalid_opcode, // 0x34
    invalid_opcode, // 0x35
    invalid_opcode, // 0x36
    invalid_opcode, // 0x37
    arithmetic::cmp_rm_r, // 0x38: CMP r/m8, r8
    invalid_opcode, // 0x39
    invalid_opcode, // 0x3A
    invalid_opcode, // 0x3B
    arithmetic::cmp_acc_imm, // 0x3C: CMP AL, imm8
    invalid_opcode, // 0x3D
    invalid_opcode, // 0x3E
    invalid_opcode, // 0x3F
    // 0x40-0x4F: unused
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x40-0x47
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x48-0x4F
    // 0x50-0x5F: PUSH and POP
    stack::push_ax, // 0x50: PUSH AX
    invalid_opcode, // 0x51
    stack::push_dx, // 0x52: PUSH DX
    invalid_opcode, // 0x53
    invalid_opcode, // 0x54
    invalid_opcode, // 0x55
    invalid_opcode, // 0x56
    invalid_opcode, // 0x57
    stack::pop_ax, // 0x58: POP AX
    invalid_opcode, // 0x59
    stack::pop_dx, // 0x5A: POP DX
    invalid_opcode, // 0x5B
    invalid_opcode, // 0x5C
    invalid_opcode, // 0x5D
    invalid_opcode, // 0x5E
    invalid_opcode, // 0x5F
    // 0x60-0x6F: unused
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x60-0x67
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x68-0x6F
    // 0x70-0x7F: conditional jumps (short)
    invalid_opcode, // 0x70
    invalid_opcode, // 0x71
    invalid_opcode, // 0x72
    invalid_opcode, // 0x73
    control_flow::je, // 0x74: JE rel8
    control_flow::jne, // 0x75: JNE rel8
    invalid_opcode, // 0x76
    invalid_opcode, // 0x77
    invalid_opcode, // 0x78
    invalid_opcode, // 0x79
    invalid_opcode, // 0x7A
    invalid_opcode, // 0x7B
    invalid_opcode, // 0x7C
    invalid_opcode, // 0x7D
    control_flow::jle, // 0x7E: JLE rel8
    control_flow::jg, // 0x7F: JG rel8
    // 0x80-0x8F: MOV with ModR/M
    invalid_opcode, // 0x80
    invalid_opcode, // 0x81
    invalid_opcode, // 0x82
    invalid_opcode, // 0x83
    invalid_opcode, // 0x84
    invalid_opcode, // 0x85
    invalid_opcode, // 0x86
    invalid_opcode, // 0x87
    data_transfer::mov_rm_r, // 0x88: MOV r/m8, r8
    invalid_opcode, // 0x89
    invalid_opcode, // 0x8A
    invalid_opcode, // 0x8B
    invalid_opcode, // 0x8C
    invalid_opcode, // 0x8D
    invalid_opcode, // 0x8E
    invalid_opcode, // 0x8F
    // 0x90-0x9F: unused
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x90-0x97
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0x98-0x9F
    // 0xA0-0xAF: unused
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0xA0-0xA7
    invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, invalid_opcode, // 0xA8-0xAF
    // 0xB0-0xBF: MOV immediate to register
    data_transfer::mov_r_imm, // 0xB0: MOV AL, imm8
    data_transfer::mov_r_imm, // 0xB1: MOV CL, imm8
    data_transfer::mov_r_imm, // 0xB2: MOV DL, imm8
    data_transfer::mov_r_imm, // 0xB3: MOV BL, imm8
    data_transfer::mov_r_imm, // 0xB4: MOV AH, imm8
    data_transfer::mov_r_imm, // 0xB5: MOV CH, imm8
    data_transfer::mov_r_imm, // 0xB6: MOV DH, imm8
    data_transfer::mov_r_imm, // 0xB7: MOV BH, imm8
    invalid_opcode, // 0xB8
    invalid_opcode, // 0xB9
    invalid_opcode, // 0xBA
    invalid_opcode, // 0xBB
    invalid_opcode, // 0xBC
    invalid_opcode, // 0xBD
    invalid_opcode, // 0xBE
    invalid_opcode, // 0xBF
    // 0xC0-0xCF: RET
    invalid_opcode, // 0xC0
    invalid_opcode, // 0xC1
    invalid_opcode, // 0xC2
    control_flow::ret_near, // 0xC3: RET
    invalid_opcode, // 0xC4
    invalid_opcode, // 0xC5
    invalid_opcode, // 0xC6
    invalid_opcode, // 0xC7
    invalid_opcode, // 0xC8
    invalid_opcode, // 0xC9
    invalid_opcode, // 0xCA
    invalid_opcode, // 0xCB
    invalid_opcode, // 0xCC
    invalid_opcode, // 0xCD
    invalid_opcode, // 0xCE
    invalid_opcode, // 0xCF
    // 0xD0-0xDF: shifts
    shift::shift_rm_1, // 0xD0: SHL/SHR r/m8, 1
    invalid_opcode, // 0xD1
    shift::shift_rm_cl, // 0xD2: SHL/SHR r/m8, CL
    invalid_opcode, // 0xD3
    invalid_opcode, // 0xD4
    invalid_opcode, // 0xD5
    invalid_opcode, // 0xD6
    invalid_opcode, // 0xD7
    invalid_opcode, // 0xD8
    invalid_opcode, // 0xD9
    invalid_opcode, // 0xDA
    invalid_opcode, // 0xDB
    invalid_opcode, // 0xDC
    invalid_opcode, // 0xDD
    invalid_opcode, // 0xDE
    invalid_opcode, // 0xDF
    // 0xE0-0xEF: CALL and JMP
    invalid_opcode, // 0xE0
    invalid_opcode, // 0xE1
    invalid_opcode, // 0xE2
    invalid_opcode, // 0xE3
    invalid_opcode, // 0xE4
    invalid_opcode, // 0xE5
    invalid_opcode, // 0xE6
    invalid_opcode, // 0xE7
    control_flow::call_near, // 0xE8: CALL rel16
    invalid_opcode, // 0xE9
    invalid_opcode, // 0xEA
    control_flow::jmp_short, // 0xEB: JMP rel8
    invalid_opcode, // 0xEC
    invalid_opcode, // 0xED
    invalid_opcode, // 0xEE
    invalid_opcode, // 0xEF
    // 0xF0-0xFF: HLT and groups
    invalid_opcode, // 0xF0
    invalid_opcode, // 0xF1
    invalid_opcode, // 0xF2
    invalid_opcode, // 0xF3
    handlers::hlt, // 0xF4: HLT
    invalid_opcode, // 0xF5
    arithmetic::group_f6, // 0xF6: MUL/DIV/NOT r/m8 (group)
    invalid_opcode, // 0xF7
    invalid_opcode, // 0xF8
    invalid_opcode, // 0xF9
    invalid_opcode, // 0xFA
    invalid_opcode, // 0xFB
    invalid_opcode, // 0xFC
    invalid_opcode, // 0xFD
    arithmetic::group_fe, // 0xFE: INC/DEC r/m8 (group)
    invalid_opcode, // 0xFF
];
