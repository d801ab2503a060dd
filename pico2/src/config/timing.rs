//! Clock, task periods and input timing.

use diag_common::config::CoreTiming;

/// CPU clock (stock RP2350).
pub const CPU_FREQ_HZ: u32 = 150_000_000;

/// Period of the core tick in microseconds.
pub const CORE_TICK_US: u32 = 60;

/// Period of the UI poll in microseconds.
pub const UI_POLL_US: u32 = 1000;

/// Timing the CORE page reports against.
pub const CORE_TIMING: CoreTiming = CoreTiming {
    clock_hz: CPU_FREQ_HZ,
    core_period_us: CORE_TICK_US,
    ui_period_us: UI_POLL_US,
};

/// Debug menu redraw period (~30 FPS).
pub const MENU_FRAME_MS: u64 = 33;

/// Idle screen redraw period.
pub const IDLE_FRAME_MS: u64 = 250;

/// Button debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press becomes a long press.
pub const LONG_PRESS_MS: u64 = 1000;

/// Capacity of the UI event channel.
pub const EVENT_QUEUE_DEPTH: usize = 16;
