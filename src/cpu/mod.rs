//! CPU emulation module
//!
//! Single-step dispatch over a 256-entry handler table, with every
//! instruction byte fetched through the direct-mapped instruction cache.

pub mod cache;
pub mod dispatch;
pub mod execute;
pub mod harness;
pub mod state;

pub use cache::{CacheStats, InstructionCache};
pub use harness::CpuHarness;
pub use state::{Control, Cpu, Fault, Flags};
