//! CPU state and register management
//!
//! The architectural state is deliberately small:
//! - Eight 8-bit general registers (AL, CL, DL, BL, AH, CH, DH, BH)
//! - An 8-bit instruction pointer and 8-bit stack pointer
//! - A flags byte with zero and sign bits
//! - The instruction cache fronting the fetch path

use bitflags::bitflags;
use log::debug;
use thiserror::Error;

use crate::cpu::cache::InstructionCache;
use crate::cpu::dispatch::DISPATCH_TABLE;
use crate::memory::{Memory, MEMORY_SIZE};

bitflags! {
    /// CPU flags byte
    ///
    /// Only the zero and sign bits are ever updated. The carry bit is
    /// reserved by the encoding but no instruction in this subset writes it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        const CARRY = 0x01;
        const ZERO = 0x40;
        const SIGN = 0x80;
    }
}

/// What the executor decided after one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep stepping
    Continue,
    /// HLT was executed; the run loop should stop
    Halt,
}

/// Fatal execution faults
///
/// A fault aborts the whole run; there is no recovery point. The driver maps
/// any fault to a nonzero process exit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unknown opcode {opcode:#04X} at IP {ip:#04X}")]
    UnknownOpcode { opcode: u8, ip: u8 },

    #[error("division by zero at IP {ip:#04X}")]
    DivideByZero { ip: u8 },
}

/// Register names indexed by the ModR/M register encoding
pub const REG_NAMES: [&str; 8] = ["AL", "CL", "DL", "BL", "AH", "CH", "DH", "BH"];

/// CPU state
pub struct Cpu {
    /// General purpose registers, indexed by the ModR/M encoding:
    /// 0=AL, 1=CL, 2=DL, 3=BL, 4=AH, 5=CH, 6=DH, 7=BH
    ///
    /// The bank is the single storage for both views: indexed access for
    /// the decoder, named constants (`Cpu::AL`, ...) for handlers.
    pub regs: [u8; 8],

    /// Instruction pointer (wraps modulo 256)
    pub ip: u8,

    /// Stack pointer; the stack grows downward from the top of memory
    pub sp: u8,

    /// Flags register
    pub flags: Flags,

    /// Instruction cache on the fetch path
    pub icache: InstructionCache,
}

impl Cpu {
    /// Register encoding constants
    pub const AL: u8 = 0;
    pub const CL: u8 = 1;
    pub const DL: u8 = 2;
    pub const BL: u8 = 3;
    pub const AH: u8 = 4;
    pub const CH: u8 = 5;
    pub const DH: u8 = 6;
    pub const BH: u8 = 7;

    /// Create a new CPU in its power-on state
    pub fn new() -> Self {
        Self {
            regs: [0; 8],
            ip: 0,
            sp: (MEMORY_SIZE - 1) as u8,
            flags: Flags::empty(),
            icache: InstructionCache::new(),
        }
    }

    /// Reset to the power-on state: cleared registers and flags, IP at 0,
    /// SP at the top of memory, cold cache
    pub fn reset(&mut self) {
        self.regs = [0; 8];
        self.ip = 0;
        self.sp = (MEMORY_SIZE - 1) as u8;
        self.flags = Flags::empty();
        self.icache = InstructionCache::new();
    }

    // === Register Access Methods ===

    /// Read an 8-bit register by its encoding; the high bits of the code
    /// are ignored, so this never fails
    #[inline(always)]
    pub fn read_reg8(&self, reg: u8) -> u8 {
        self.regs[(reg & 0b111) as usize]
    }

    /// Write an 8-bit register by its encoding
    #[inline(always)]
    pub fn write_reg8(&mut self, reg: u8, value: u8) {
        self.regs[(reg & 0b111) as usize] = value;
    }

    // === Flag Update ===

    /// Update the zero and sign flags from a result byte
    ///
    /// No other flag bit is touched.
    #[inline(always)]
    pub fn update_flags(&mut self, result: u8) {
        self.flags.set(Flags::ZERO, result == 0);
        self.flags.set(Flags::SIGN, result & 0x80 != 0);
    }

    // === Fetch Unit ===

    /// Fetch the byte at IP through the instruction cache and advance IP
    #[inline(always)]
    pub fn fetch_u8(&mut self, mem: &Memory) -> u8 {
        let byte = self.icache.fetch_byte(mem, self.ip);
        self.ip = self.ip.wrapping_add(1);
        byte
    }

    /// Fetch a signed byte from IP and advance IP
    #[inline(always)]
    pub fn fetch_i8(&mut self, mem: &Memory) -> i8 {
        self.fetch_u8(mem) as i8
    }

    /// Fetch a word from IP and advance IP (little-endian)
    #[inline(always)]
    pub fn fetch_u16(&mut self, mem: &Memory) -> u16 {
        let low = self.fetch_u8(mem) as u16;
        let high = self.fetch_u8(mem) as u16;
        (high << 8) | low
    }

    // === Execution ===

    /// Execute one instruction
    ///
    /// Fetches the opcode at IP through the cache and dispatches to its
    /// handler. Handlers consume any ModR/M byte, immediate, or displacement
    /// through the fetch unit, so every instruction byte is accounted for in
    /// the cache statistics.
    pub fn step(&mut self, mem: &mut Memory) -> Result<Control, Fault> {
        let opcode = self.fetch_u8(mem);
        debug!(
            "executing opcode {:#04X} at IP {:#04X}",
            opcode,
            self.ip.wrapping_sub(1)
        );

        let handler = DISPATCH_TABLE[opcode as usize];
        handler(self, mem, opcode)
    }

    /// Run until HLT or a fault
    ///
    /// There is no step-count termination: the loop ends only when HLT
    /// stops it or a fault propagates out.
    pub fn run(&mut self, mem: &mut Memory) -> Result<(), Fault> {
        loop {
            if let Control::Halt = self.step(mem)? {
                return Ok(());
            }
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_flags_tracks_zero_and_sign() {
        let mut cpu = Cpu::new();
        for byte in 0..=255u8 {
            cpu.update_flags(byte);
            assert_eq!(cpu.flags.contains(Flags::ZERO), byte == 0);
            assert_eq!(cpu.flags.contains(Flags::SIGN), byte >= 0x80);
        }
    }

    #[test]
    fn update_flags_leaves_carry_alone() {
        let mut cpu = Cpu::new();
        cpu.flags = Flags::CARRY;
        cpu.update_flags(0);
        assert!(cpu.flags.contains(Flags::CARRY));
        cpu.update_flags(0x80);
        assert!(cpu.flags.contains(Flags::CARRY));
    }

    #[test]
    fn register_views_share_storage() {
        let mut cpu = Cpu::new();
        cpu.write_reg8(Cpu::DH, 0x7E);
        assert_eq!(cpu.regs[6], 0x7E);
        cpu.regs[Cpu::BL as usize] = 0x21;
        assert_eq!(cpu.read_reg8(Cpu::BL), 0x21);
    }

    #[test]
    fn register_code_high_bits_are_ignored() {
        let mut cpu = Cpu::new();
        cpu.write_reg8(0xFA, 0x33); // low 3 bits select DL
        assert_eq!(cpu.read_reg8(Cpu::DL), 0x33);
    }
}
