//! micro86 - 8-bit x86-subset emulator
//!
//! Main entry point: loads a raw program image at address 0 and runs it
//! until HLT or a fault.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use micro86::cpu::Cpu;
use micro86::loader;
use micro86::memory::Memory;

/// 8-bit x86-subset emulator with a direct-mapped instruction cache
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Raw binary program image, loaded at physical address 0
    program: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut mem = Memory::new();
    let mut cpu = Cpu::new();

    if let Err(err) = loader::load_program(&mut mem, &args.program) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    // The loop ends only through HLT (success) or a fault
    if let Err(fault) = cpu.run(&mut mem) {
        error!("{fault}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
