//! Profiling utilities.
//!
//! - `cpu_cycles`: CPU cycle counter via DWT
//! - `memory`: Memory profiling (stack/RAM usage) and the MEM debug page

mod cpu_cycles;
mod memory;

pub use cpu_cycles::{Dwt, init, read};
pub use memory::{MemPage, MemoryStats};
