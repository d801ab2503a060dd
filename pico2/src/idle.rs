//! Idle screen shown while the debug menu is closed.
//!
//! The firmware samples [`IdleStatus`] once per redraw; drawing and the
//! menu trigger live here so they can be tested on the host.

use core::fmt::Write;

use diag_common::config::{TEXT_MARGIN, TITLE_ROW, row};
use diag_common::{Control, Event, EventKind, Graphics};

/// Values shown on the idle screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleStatus {
    pub uptime_s: u64,
    /// Core tick load in percent of its period.
    pub core_load: u32,
    /// Duration of the last display flush.
    pub flush_us: u32,
    /// Frames dropped because a flush was still running.
    pub frames_dropped: u32,
}

/// `true` for the press that opens the debug menu (X).
#[inline]
pub fn opens_menu(event: &Event) -> bool {
    event.control == Control::ButtonUp && event.kind == EventKind::ButtonPress
}

/// Draw one idle frame.
pub fn draw_idle(
    gfx: &mut dyn Graphics,
    status: &IdleStatus,
) {
    gfx.begin_frame(false);
    gfx.set_print_pos(TEXT_MARGIN, TITLE_ROW);
    gfx.print("DIAG");
    gfx.set_print_pos(TEXT_MARGIN, row(0));
    let _ = write!(gfx, "UP   : {}s", status.uptime_s);
    gfx.set_print_pos(TEXT_MARGIN, row(1));
    let _ = write!(gfx, "LOAD : {}%", status.core_load);
    gfx.set_print_pos(TEXT_MARGIN, row(2));
    let _ = write!(gfx, "FLUSH:{:>6}us {}", status.flush_us, status.frames_dropped);
    gfx.set_print_pos(TEXT_MARGIN, row(3));
    gfx.print("X: DEBUG MENU");
    gfx.end_frame();
}
