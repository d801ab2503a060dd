//! CPU cycle counter using the Cortex-M33 DWT.
//!
//! The Data Watchpoint and Trace (DWT) cycle counter (CYCCNT) is the
//! time base of every [`CycleMeasurement`](diag_common::CycleMeasurement)
//! in the firmware.
//!
//! # Overflow Handling
//!
//! CYCCNT is a 32-bit counter that wraps every ~28.6 seconds at 150 MHz
//! (2^32 / 150M). Measured regions are microseconds long, and
//! `diag_common::cycles::elapsed` uses `wrapping_sub`, so a wrap between
//! start and end is harmless.

use diag_common::CycleCounter;

/// Enable the DWT cycle counter.
///
/// Must be called after `embassy_rp::init()` and before the first
/// measurement. Safe to call multiple times (idempotent).
pub fn init() {
    // DEMCR.TRCENA (bit 24) must be set first, then DWT.CTRL.CYCCNTENA (bit 0)
    #[cfg(target_arch = "arm")]
    unsafe {
        use core::ptr::{read_volatile, write_volatile};

        // DCB DEMCR register (0xE000EDFC) - enable trace
        const DEMCR: *mut u32 = 0xE000_EDFC as *mut u32;
        let demcr_val = read_volatile(DEMCR);
        write_volatile(DEMCR, demcr_val | (1 << 24)); // TRCENA bit

        // DWT CTRL register (0xE0001000) - enable cycle counter
        const DWT_CTRL: *mut u32 = 0xE000_1000 as *mut u32;
        let ctrl_val = read_volatile(DWT_CTRL);
        write_volatile(DWT_CTRL, ctrl_val | 1); // CYCCNTENA bit
    }
}

/// Read current cycle count (32-bit, wraps).
#[inline]
pub fn read() -> u32 {
    #[cfg(target_arch = "arm")]
    unsafe {
        // DWT CYCCNT register (0xE0001004)
        const DWT_CYCCNT: *const u32 = 0xE000_1004 as *const u32;
        core::ptr::read_volatile(DWT_CYCCNT)
    }
    #[cfg(not(target_arch = "arm"))]
    {
        0 // Placeholder for tests
    }
}

/// The DWT cycle counter as a [`CycleCounter`].
#[derive(Clone, Copy, Default)]
pub struct Dwt;

impl CycleCounter for Dwt {
    #[inline]
    fn now(&self) -> u32 { read() }
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib --target <host-triple>)
// =============================================================================
