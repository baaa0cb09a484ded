//! Arithmetic instruction handlers (ADD, SUB, CMP, INC/DEC, MUL/DIV/NOT)
//!
//! All arithmetic is 8-bit with wrap-around. Results update the zero and
//! sign flags through `Cpu::update_flags` unless noted otherwise.

use log::debug;

use crate::cpu::execute::{modrm_reg, modrm_rm};
use crate::cpu::state::{Control, Fault};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// ADD r/m8, r8 (0x00) - dest := dest + src
pub fn add_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let result = cpu
        .read_reg8(modrm_rm(modrm))
        .wrapping_add(cpu.read_reg8(modrm_reg(modrm)));
    cpu.update_flags(result);
    cpu.write_reg8(modrm_rm(modrm), result);
    debug!("ADD: result {:#04X}", result);
    Ok(Control::Continue)
}

/// SUB r/m8, r8 (0x28) - dest := dest - src
pub fn sub_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let result = cpu
        .read_reg8(modrm_rm(modrm))
        .wrapping_sub(cpu.read_reg8(modrm_reg(modrm)));
    cpu.update_flags(result);
    cpu.write_reg8(modrm_rm(modrm), result);
    debug!("SUB: result {:#04X}", result);
    Ok(Control::Continue)
}

/// SUB AL, imm8 (0x2C)
pub fn sub_acc_imm(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let value = cpu.fetch_u8(mem);
    let result = cpu.read_reg8(Cpu::AL).wrapping_sub(value);
    cpu.write_reg8(Cpu::AL, result);
    cpu.update_flags(result);
    debug!("SUB AL, {:#04X} = {:#04X}", value, result);
    Ok(Control::Continue)
}

/// CMP r/m8, r8 (0x38) - compute dest - src for flags, discard the result
pub fn cmp_rm_r(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let result = cpu
        .read_reg8(modrm_rm(modrm))
        .wrapping_sub(cpu.read_reg8(modrm_reg(modrm)));
    cpu.update_flags(result);
    Ok(Control::Continue)
}

/// CMP AL, imm8 (0x3C)
pub fn cmp_acc_imm(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let value = cpu.fetch_u8(mem);
    let al = cpu.read_reg8(Cpu::AL);
    let result = al.wrapping_sub(value);
    cpu.update_flags(result);
    debug!(
        "CMP AL ({:#04X}) with {:#04X}, result {:#04X}, flags {:#04X}",
        al,
        value,
        result,
        cpu.flags.bits()
    );
    Ok(Control::Continue)
}

/// INC/DEC r/m8 group (0xFE)
///
/// Reg field 0 increments; any other field decrements.
pub fn group_fe(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let rm = modrm_rm(modrm);
    let result = if modrm_reg(modrm) == 0 {
        let result = cpu.read_reg8(rm).wrapping_add(1);
        debug!("INC: register now {:#04X}", result);
        result
    } else {
        let result = cpu.read_reg8(rm).wrapping_sub(1);
        debug!("DEC: register now {:#04X}", result);
        result
    };
    cpu.write_reg8(rm, result);
    cpu.update_flags(result);
    Ok(Control::Continue)
}

/// MUL/DIV/NOT r/m8 group (0xF6)
///
/// /4 MUL: AX := AL * src, AL holds the low byte and AH the high byte.
/// /6 DIV: AL := AX / src truncated to a byte; the remainder is then
///         taken from AH combined with the quotient already written to AL.
///         Division by zero is a fault.
/// /2 NOT: bitwise complement in place.
/// Other reg fields do nothing. None of these update flags.
pub fn group_f6(cpu: &mut Cpu, mem: &mut Memory, _opcode: u8) -> Result<Control, Fault> {
    let modrm = cpu.fetch_u8(mem);
    let rm = modrm_rm(modrm);
    match modrm_reg(modrm) {
        4 => {
            let product = u16::from(cpu.read_reg8(Cpu::AL)) * u16::from(cpu.read_reg8(rm));
            cpu.write_reg8(Cpu::AL, product as u8);
            cpu.write_reg8(Cpu::AH, (product >> 8) as u8);
            debug!("MUL: AX = {:#06X}", product);
        }
        6 => {
            let divisor = cpu.read_reg8(rm);
            if divisor == 0 {
                return Err(Fault::DivideByZero {
                    ip: cpu.ip.wrapping_sub(2),
                });
            }
            let dividend = u16::from(cpu.read_reg8(Cpu::AH)) << 8 | u16::from(cpu.read_reg8(Cpu::AL));
            let quotient = (dividend / u16::from(divisor)) as u8;
            cpu.write_reg8(Cpu::AL, quotient);
            // The remainder reads AH together with the quotient already in
            // AL, not the original dividend.
            let remainder =
                (u16::from(cpu.read_reg8(Cpu::AH)) << 8 | u16::from(quotient)) % u16::from(divisor);
            cpu.write_reg8(Cpu::AH, remainder as u8);
            debug!("DIV: quotient {:#04X}, remainder {:#04X}", quotient, remainder);
        }
        2 => {
            let result = !cpu.read_reg8(rm);
            cpu.write_reg8(rm, result);
            debug!("NOT: register now {:#04X}", result);
        }
        _ => {}
    }
    Ok(Control::Continue)
}
