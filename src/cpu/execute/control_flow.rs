//! Control flow instruction handlers (JMP, Jcc, CALL, RET)
//!
//! Displacements are applied after IP has advanced past the displacement
//! bytes, and IP arithmetic wraps modulo 256.

use log::debug;

use crate::cpu::execute::stack::{pop_byte, push_byte};
use crate::cpu::state::{Control, Fault, Flags};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// Add a signed 8-bit displacement to IP
#[inline(always)]
fn jump_rel8(cpu: &mut Cpu, disp: i8) {
    cpu.ip = cpu.ip.wrapping_add(disp as u8);
}

/// JMP rel8 (0xEB) - unconditional short jump
pub fn jmp_short(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let disp = cpu.fetch_i8(mem);
    jump_rel8(cpu, disp);
    debug!("JMP to {:#04X}", cpu.ip);
    Ok(Control::Continue)
}

/// JE rel8 (0x74) - jump if ZF=1
pub fn je(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let disp = cpu.fetch_i8(mem);
    if cpu.flags.contains(Flags::ZERO) {
        jump_rel8(cpu, disp);
        debug!("JE taken to {:#04X}", cpu.ip);
    }
    Ok(Control::Continue)
}

/// JNE rel8 (0x75) - jump if ZF=0
pub fn jne(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let disp = cpu.fetch_i8(mem);
    if !cpu.flags.contains(Flags::ZERO) {
        jump_rel8(cpu, disp);
        debug!("JNE taken to {:#04X}", cpu.ip);
    }
    Ok(Control::Continue)
}

/// JG rel8 (0x7F) - jump if ZF=0 and SF=0
pub fn jg(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let disp = cpu.fetch_i8(mem);
    if !cpu.flags.contains(Flags::ZERO) && !cpu.flags.contains(Flags::SIGN) {
        jump_rel8(cpu, disp);
        debug!("JG taken to {:#04X}", cpu.ip);
    }
    Ok(Control::Continue)
}

/// JLE rel8 (0x7E) - jump if ZF=1 or SF=1
pub fn jle(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let disp = cpu.fetch_i8(mem);
    if cpu.flags.contains(Flags::ZERO) || cpu.flags.contains(Flags::SIGN) {
        jump_rel8(cpu, disp);
        debug!("JLE taken to {:#04X}", cpu.ip);
    } else {
        debug!("JLE not taken");
    }
    Ok(Control::Continue)
}

/// CALL rel16 (0xE8) - call with a 16-bit relative displacement
///
/// The displacement is consumed little-endian; the return address is the IP
/// after both displacement bytes and is pushed as a single byte. Targets
/// farther than +-127 are reachable even though return addresses stay one
/// byte wide.
pub fn call_near(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let offset = cpu.fetch_u16(mem) as i16;
    let return_addr = cpu.ip;
    push_byte(cpu, mem, return_addr);
    cpu.ip = cpu.ip.wrapping_add(offset as u8);
    debug!(
        "CALL: offset {:#06X}, to {:#04X}, pushed return addr {:#04X}",
        offset as u16, cpu.ip, return_addr
    );
    Ok(Control::Continue)
}

/// RET (0xC3) - pop a single byte into IP
pub fn ret_near(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    cpu.ip = pop_byte(cpu, mem);
    debug!("RET to {:#04X}", cpu.ip);
    Ok(Control::Continue)
}
