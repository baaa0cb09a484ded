//! Logical instruction handlers (AND, OR)
//!
//! NOT is encoded under the 0xF6 group and is handled with it in the
//! arithmetic module.

use log::debug;

use crate::cpu::execute::{modrm_reg, modrm_rm};
use crate::cpu::state::{Control, Fault};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// AND r/m8, r8 (0x20) - dest := dest & src
pub fn and_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let result = cpu.read_reg8(modrm_rm(modrm)) & cpu.read_reg8(modrm_reg(modrm));
    cpu.update_flags(result);
    cpu.write_reg8(modrm_rm(modrm), result);
    debug!("AND: result {:#04X}", result);
    Ok(Control::Continue)
}

/// OR r/m8, r8 (0x08) - dest := dest | src
pub fn or_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let result = cpu.read_reg8(modrm_rm(modrm)) | cpu.read_reg8(modrm_reg(modrm));
    cpu.update_flags(result);
    cpu.write_reg8(modrm_rm(modrm), result);
    debug!("OR: result {:#04X}", result);
    Ok(Control::Continue)
}
