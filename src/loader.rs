//! Program loader
//!
//! Copies a raw binary image from disk into memory at physical address 0.
//! The loader runs entirely before execution starts; the executor never
//! touches the filesystem.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::memory::{Memory, MEMORY_SIZE};

/// Errors produced while loading a program image
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program file: {0}")]
    Io(#[from] std::io::Error),

    #[error("program too large for memory ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
}

/// Load a raw program image into memory at address 0
///
/// Returns the number of bytes loaded. Images larger than the memory are
/// rejected.
pub fn load_program(mem: &mut Memory, path: &Path) -> Result<usize, LoadError> {
    let image = fs::read(path)?;

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            size: image.len(),
            max: MEMORY_SIZE,
        });
    }

    mem.load(&image, 0);

    if log::log_enabled!(log::Level::Debug) {
        debug!("machine code:");
        for (addr, byte) in image.iter().enumerate() {
            debug!("{:#04X}: {:#04X}", addr, byte);
        }
    }

    println!("Loaded {} bytes into memory", image.len());
    Ok(image.len())
}
