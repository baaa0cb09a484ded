//! Data transfer handlers (MOV forms)

use log::debug;

use crate::cpu::execute::{modrm_reg, modrm_rm};
use crate::cpu::state::{Control, Fault, REG_NAMES};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// MOV r8, imm8 - Move immediate into register
/// Handles opcodes 0xB0-0xB7; the register index is embedded in the opcode
pub fn mov_r_imm(cpu: &mut Cpu, mem: &mut Memory, opcode: u8) -> Result<Control, Fault> {
    let reg = opcode - 0xB0;
    let value = cpu.fetch_u8(mem);
    cpu.write_reg8(reg, value);
    debug!("MOV {}, {:#04X}", REG_NAMES[reg as usize], value);
    Ok(Control::Continue)
}

/// MOV r/m8, r8 (0x88) - Copy source register into destination register
pub fn mov_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let value = cpu.read_reg8(modrm_reg(modrm));
    cpu.write_reg8(modrm_rm(modrm), value);
    debug!(
        "MOV {}, {} ({:#04X})",
        REG_NAMES[modrm_rm(modrm) as usize],
        REG_NAMES[modrm_reg(modrm) as usize],
        value
    );
    Ok(Control::Continue)
}
