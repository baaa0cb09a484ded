//! CPU test harness for instruction testing
//!
//! Provides a minimal environment for testing CPU instructions without the
//! file loader or CLI driver. Contains just CPU state and memory.

use crate::cpu::state::{Control, Fault};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// Test harness for CPU instruction testing
///
/// Provides a minimal environment with CPU and memory for testing
/// individual instructions or short sequences.
pub struct CpuHarness {
    /// CPU state
    pub cpu: Cpu,

    /// Memory
    pub mem: Memory,
}

impl CpuHarness {
    /// Create a new test harness with initialized CPU and memory
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(),
        }
    }

    /// Load a program at address 0 and reset the CPU to run it
    ///
    /// The cache is reset along with the CPU, so previously cached lines
    /// cannot shadow the newly loaded code.
    pub fn load_program(&mut self, code: &[u8]) {
        self.cpu.reset();
        self.mem = Memory::new();
        self.mem.load(code, 0);
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<Control, Fault> {
        self.cpu.step(&mut self.mem)
    }

    /// Execute n instructions, panicking on any fault
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step().expect("unexpected fault");
        }
    }

    /// Run until HLT, propagating any fault
    pub fn run(&mut self) -> Result<(), Fault> {
        self.cpu.run(&mut self.mem)
    }
}

impl Default for CpuHarness {
    fn default() -> Self {
        Self::new()
    }
}
