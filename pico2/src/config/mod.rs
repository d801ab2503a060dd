//! Firmware configuration.
//!
//! - `layout`: Display dimensions and overlay placement
//! - `pins`: GPIO map (display, buttons, CV inputs, debug pin)
//! - `timing`: Clock, task periods and input timing

pub mod layout;
pub mod pins;
pub mod timing;

// Re-export at config level for convenience
pub use layout::{
    DISPLAY_HEIGHT,
    DISPLAY_WIDTH,
    FRAMEBUFFER_SIZE,
    OVERLAY_HEIGHT,
    OVERLAY_SCALE,
    OVERLAY_WIDTH,
    OVERLAY_X,
    OVERLAY_Y,
};
pub use timing::{
    CORE_TICK_US,
    CORE_TIMING,
    CPU_FREQ_HZ,
    DEBOUNCE_MS,
    EVENT_QUEUE_DEPTH,
    IDLE_FRAME_MS,
    LONG_PRESS_MS,
    MENU_FRAME_MS,
    UI_POLL_US,
};
