//! Display and overlay placement constants.
//!
//! The 128x64 overlay frame is drawn at 2x scale in the middle of the
//! 320x240 panel. Offsets are computed at compile time.

use diag_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const DISPLAY_WIDTH: u32 = 320;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 240;

/// RGB565 framebuffer size in bytes (153,600).
pub const FRAMEBUFFER_SIZE: usize = (DISPLAY_WIDTH * DISPLAY_HEIGHT * 2) as usize;

// =============================================================================
// Overlay Placement
// =============================================================================

/// Integer scale of the overlay frame on the panel.
pub const OVERLAY_SCALE: u32 = 2;

/// Scaled overlay width (256 px).
pub const OVERLAY_WIDTH: u32 = SCREEN_WIDTH * OVERLAY_SCALE;

/// Scaled overlay height (128 px).
pub const OVERLAY_HEIGHT: u32 = SCREEN_HEIGHT * OVERLAY_SCALE;

/// Left edge of the overlay on the panel.
pub const OVERLAY_X: i32 = ((DISPLAY_WIDTH - OVERLAY_WIDTH) / 2) as i32;

/// Top edge of the overlay on the panel.
pub const OVERLAY_Y: i32 = ((DISPLAY_HEIGHT - OVERLAY_HEIGHT) / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_is_centered() {
        assert_eq!((OVERLAY_WIDTH, OVERLAY_HEIGHT), (256, 128));
        assert_eq!((OVERLAY_X, OVERLAY_Y), (32, 56));
        assert_eq!(FRAMEBUFFER_SIZE, 153_600);
    }
}
