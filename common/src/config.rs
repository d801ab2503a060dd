//! Display geometry and timing configuration for the debug overlay.
//!
//! Debug pages are laid out for a 128x64 monochrome frame with 10 px text
//! rows, the same grid the pages use for `set_print_pos`.

// =============================================================================
// Frame Geometry
// =============================================================================

/// Overlay frame width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Overlay frame height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Vertical distance between text rows.
pub const LINE_HEIGHT: i32 = 10;

/// Left margin used by every page.
pub const TEXT_MARGIN: i32 = 2;

/// Y position of the page indicator / title row.
pub const TITLE_ROW: i32 = 2;

/// Y position of the first page content row.
pub const FIRST_ROW: i32 = 12;

/// Y position of content row `n` (0-based).
#[inline]
pub const fn row(n: i32) -> i32 { FIRST_ROW + n * LINE_HEIGHT }

// =============================================================================
// Core Timing
// =============================================================================

/// Clock and timer periods the CORE page reports against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreTiming {
    /// CPU clock in Hz.
    pub clock_hz: u32,
    /// Period of the core (highest priority) tick in microseconds.
    pub core_period_us: u32,
    /// Period of the UI poll in microseconds.
    pub ui_period_us: u32,
}

impl CoreTiming {
    /// Stock RP2350 clock with a 60 us core tick and 1 ms UI poll.
    pub const DEFAULT: Self = Self {
        clock_hz: 150_000_000,
        core_period_us: 60,
        ui_period_us: 1000,
    };

    /// Clock in whole MHz.
    #[inline]
    pub const fn clock_mhz(&self) -> u32 { self.clock_hz / 1_000_000 }
}

impl Default for CoreTiming {
    fn default() -> Self { Self::DEFAULT }
}
