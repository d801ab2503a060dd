//! Memory profiling for RP2350 and the MEM debug page.
//!
//! # Memory Layout (RP2350)
//!
//! - RAM: 512KB at 0x20000000 (striped across SRAM0-7)
//! - SRAM4: 4KB at 0x20080000 (direct mapped)
//! - SRAM5: 4KB at 0x20081000 (direct mapped)
//!
//! # Stack
//!
//! Embassy uses a single main stack. Stack grows downward from the top of RAM.
//! We can measure usage by comparing MSP to the stack start address.

use core::fmt::Write;

use diag_common::config::{TEXT_MARGIN, row};
use diag_common::{DebugPage, Graphics};

use crate::config::FRAMEBUFFER_SIZE;

/// RP2350 RAM configuration.
const RAM_START: u32 = 0x2000_0000;
const RAM_SIZE: u32 = 512 * 1024; // 512KB
const RAM_END: u32 = RAM_START + RAM_SIZE;

/// Statics other than the framebuffer (executors, channel, canvas).
const OTHER_STATICS: u32 = 16 * 1024;

/// Memory statistics snapshot.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemoryStats {
    /// Current stack pointer value (MSP register).
    pub stack_ptr: u32,
    /// Estimated stack usage in bytes.
    pub stack_used: u32,
    /// Total stack size (RAM minus static allocations, approximate).
    pub stack_total: u32,
    /// Known static RAM usage (framebuffer + estimated overhead).
    pub static_ram: u32,
    /// Total RAM available.
    pub ram_total: u32,
}

impl MemoryStats {
    /// Collect current memory statistics.
    ///
    /// Stack usage is measured from the current MSP value. The "total" stack
    /// size is estimated since we don't have precise linker symbol access.
    pub fn collect() -> Self {
        let stack_ptr = read_msp();

        // Stack grows down from RAM_END
        let stack_used = RAM_END.saturating_sub(stack_ptr);

        let static_estimate = FRAMEBUFFER_SIZE as u32 + OTHER_STATICS;
        let stack_total = RAM_SIZE.saturating_sub(static_estimate);

        Self {
            stack_ptr,
            stack_used,
            stack_total,
            static_ram: static_estimate,
            ram_total: RAM_SIZE,
        }
    }

    /// Get stack usage as a percentage.
    pub fn stack_percent(&self) -> u32 {
        if self.stack_total > 0 {
            (self.stack_used * 100) / self.stack_total
        } else {
            0
        }
    }

    /// Get static RAM usage as a percentage of total.
    pub fn static_percent(&self) -> u32 {
        if self.ram_total > 0 {
            (self.static_ram * 100) / self.ram_total
        } else {
            0
        }
    }

    /// Draw the MEM page lines for this snapshot.
    pub fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        gfx.set_print_pos(TEXT_MARGIN, row(0));
        let _ = write!(gfx, "STACK:{:>6}B {:>2}%", self.stack_used, self.stack_percent());
        gfx.set_print_pos(TEXT_MARGIN, row(1));
        let _ = write!(gfx, "STATIC:{:>4}K {:>2}%", self.static_ram / 1024, self.static_percent());
        gfx.set_print_pos(TEXT_MARGIN, row(2));
        let _ = write!(gfx, "RAM  :{:>5}K", self.ram_total / 1024);
    }
}

#[cfg(target_arch = "arm")]
#[inline]
fn read_msp() -> u32 { cortex_m::register::msp::read() }

#[cfg(not(target_arch = "arm"))]
#[inline]
fn read_msp() -> u32 {
    RAM_END // Placeholder for tests: empty stack
}

/// MEM debug page: stack and static RAM usage, sampled on every frame.
pub struct MemPage;

impl DebugPage for MemPage {
    fn render(
        &self,
        gfx: &mut dyn Graphics,
    ) {
        MemoryStats::collect().render(gfx);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::TextLines;

    #[test]
    fn test_constants() {
        assert_eq!(RAM_SIZE, 524_288); // 512KB
        assert_eq!(RAM_END, 0x2008_0000);
    }

    #[test]
    fn test_memory_stats_default() {
        let stats = MemoryStats::default();
        assert_eq!(stats.stack_ptr, 0);
        assert_eq!(stats.stack_used, 0);
        assert_eq!(stats.stack_percent(), 0);
    }

    #[test]
    fn test_collect_on_host() {
        let stats = MemoryStats::collect();
        assert_eq!(stats.stack_used, 0);
        assert_eq!(stats.static_ram, 153_600 + 16 * 1024);
        assert_eq!(stats.stack_total, RAM_SIZE - stats.static_ram);
    }

    #[test]
    fn test_stack_percent() {
        let stats = MemoryStats {
            stack_ptr: 0,
            stack_used: 1000,
            stack_total: 10000,
            static_ram: 0,
            ram_total: 0,
        };
        assert_eq!(stats.stack_percent(), 10);
    }

    #[test]
    fn test_static_percent() {
        let stats = MemoryStats {
            stack_ptr: 0,
            stack_used: 0,
            stack_total: 0,
            static_ram: 153_600,
            ram_total: 524_288,
        };
        // 153600 / 524288 * 100 = ~29%
        assert_eq!(stats.static_percent(), 29);
    }

    #[test]
    fn test_mem_page_lines() {
        let stats = MemoryStats {
            stack_ptr: RAM_END - 2048,
            stack_used: 2048,
            stack_total: 20_480,
            static_ram: 153_600,
            ram_total: RAM_SIZE,
        };
        let mut gfx = TextLines::default();
        stats.render(&mut gfx);
        assert_eq!(gfx.line_at(2, 12), Some("STACK:  2048B 10%"));
        assert_eq!(gfx.line_at(2, 22), Some("STATIC: 150K 29%"));
        assert_eq!(gfx.line_at(2, 32), Some("RAM  :  512K"));
    }
}
