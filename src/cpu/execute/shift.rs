//! Shift instruction handlers (SHL, SHR)
//!
//! Two encodings: 0xD0 shifts by one, 0xD2 shifts by the count in CL.
//! The reg field selects the operation: /4 SHL, /5 SHR. Other reg fields
//! leave the value untouched but flags are still refreshed from it.

use log::debug;

use crate::cpu::execute::{modrm_reg, modrm_rm};
use crate::cpu::state::{Control, Fault};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// Shift r/m8 by 1 (0xD0)
pub fn shift_rm_1(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    shift_rm(cpu, mem, 1)
}

/// Shift r/m8 by CL (0xD2)
pub fn shift_rm_cl(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let count = cpu.read_reg8(Cpu::CL);
    shift_rm(cpu, mem, count)
}

fn shift_rm(cpu: &mut Cpu, mem: &mut Memory, count: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let rm = modrm_rm(modrm);
    let value = cpu.read_reg8(rm);

    // Counts of 8 or more shift every bit out of the byte
    let result = match modrm_reg(modrm) {
        4 => {
            if count < 8 {
                value << count
            } else {
                0
            }
        }
        5 => {
            if count < 8 {
                value >> count
            } else {
                0
            }
        }
        _ => value,
    };

    cpu.write_reg8(rm, result);
    cpu.update_flags(result);
    debug!("shift by {}: result {:#04X}", count, result);
    Ok(Control::Continue)
}
