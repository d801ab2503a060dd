//! Drawing surface contract used by debug pages.
//!
//! Text goes through [`core::fmt::Write`], so pages format with `write!`
//! the way the firmware formats into `heapless::String`s.

use core::fmt::Write;

use heapless::String;

/// Widest field [`Graphics::pretty_print`] pads to. Any `i32` fits.
pub const PRETTY_PRINT_MAX: usize = 16;

/// Text-oriented frame drawing surface.
pub trait Graphics: Write {
    /// Start a new frame. `wait` blocks until the previous frame was handed
    /// off when the surface double buffers.
    fn begin_frame(
        &mut self,
        wait: bool,
    );

    /// Finish the frame and hand it to the display.
    fn end_frame(&mut self);

    /// Move the text cursor (top-left of the next glyph).
    fn set_print_pos(
        &mut self,
        x: i32,
        y: i32,
    );

    /// Draw a one pixel rectangle outline.
    fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    );

    /// Print text at the cursor.
    fn print(
        &mut self,
        text: &str,
    ) {
        self.write_str(text).ok();
    }

    /// Print `value` right-aligned in a field of `width` characters.
    ///
    /// Fields wider than [`PRETTY_PRINT_MAX`] are clamped to it.
    fn pretty_print(
        &mut self,
        value: i32,
        width: usize,
    ) {
        let width = width.min(PRETTY_PRINT_MAX);
        let mut s: String<PRETTY_PRINT_MAX> = String::new();
        let _ = write!(s, "{value:>width$}");
        self.print(&s);
    }
}


#[cfg(test)]
mod tests {
    use super::recorder::{DrawOp, Recorder};
    use super::*;

    #[test]
    fn test_pretty_print_right_aligns() {
        let mut gfx = Recorder::new();
        gfx.pretty_print(42, 6);
        gfx.pretty_print(-7, 3);
        gfx.pretty_print(123_456_789, 4);
        assert_eq!(
            gfx.ops,
            [
                DrawOp::Text("    42".into()),
                DrawOp::Text(" -7".into()),
                DrawOp::Text("123456789".into()),
            ]
        );
    }

    #[test]
    fn test_pretty_print_clamps_wide_fields() {
        let mut gfx = Recorder::new();
        gfx.pretty_print(42, 20);
        gfx.pretty_print(i32::MIN, 40);
        assert_eq!(
            gfx.ops,
            [
                DrawOp::Text(format!("{:>16}", 42)),
                DrawOp::Text(format!("{:>16}", i32::MIN)),
            ]
        );
    }

    #[test]
    fn test_printf_through_write() {
        let mut gfx = Recorder::new();
        gfx.begin_frame(false);
        gfx.set_print_pos(2, 12);
        let _ = write!(gfx, "F_CPU: {}MHz", 150);
        gfx.end_frame();
        assert_eq!(gfx.text_at(2, 12), "F_CPU: 150MHz");
        assert_eq!(gfx.frames_ended(), 1);
    }
}
