//! 128x64 monochrome canvas implementing [`Graphics`].
//!
//! Pages draw into a 1 bpp [`MonoFrame`] with `embedded-graphics`; at
//! `end_frame` the finished frame goes to a [`Present`] sink (a display
//! driver in firmware, a capture in tests).

use core::convert::Infallible;
use core::fmt::{self, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::graphics::Graphics;

const ROW_BYTES: usize = SCREEN_WIDTH as usize / 8;
const FRAME_BYTES: usize = ROW_BYTES * SCREEN_HEIGHT as usize;

/// Overlay text style.
pub const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

// =============================================================================
// Mono Frame
// =============================================================================

/// 1 bpp frame buffer, row-major, MSB is the leftmost pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct MonoFrame {
    bits: [u8; FRAME_BYTES],
}

impl MonoFrame {
    pub const fn new() -> Self { Self { bits: [0; FRAME_BYTES] } }

    /// Turn every pixel off.
    pub fn clear_all(&mut self) { self.bits = [0; FRAME_BYTES]; }

    /// Whether the pixel at `(x, y)` is on. Out of range reads as off.
    #[inline]
    pub fn is_set(
        &self,
        x: u32,
        y: u32,
    ) -> bool {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        let (byte, mask) = Self::locate(x, y);
        self.bits[byte] & mask != 0
    }

    /// Number of pixels that are on.
    pub fn lit_pixels(&self) -> u32 { self.bits.iter().map(|b| b.count_ones()).sum() }

    /// Raw frame bytes.
    pub fn as_bytes(&self) -> &[u8] { &self.bits }

    #[inline]
    fn set(
        &mut self,
        x: u32,
        y: u32,
        on: bool,
    ) {
        let (byte, mask) = Self::locate(x, y);
        if on {
            self.bits[byte] |= mask;
        } else {
            self.bits[byte] &= !mask;
        }
    }

    #[inline]
    const fn locate(
        x: u32,
        y: u32,
    ) -> (usize, u8) {
        (y as usize * ROW_BYTES + x as usize / 8, 0x80 >> (x % 8))
    }
}

impl Default for MonoFrame {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for MonoFrame {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for MonoFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y))
                && x < SCREEN_WIDTH
                && y < SCREEN_HEIGHT
            {
                self.set(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Sink for finished frames.
pub trait Present {
    /// Hand a finished frame to the display.
    fn present(
        &mut self,
        frame: &MonoFrame,
    );

    /// Block until the previous frame has been taken.
    fn wait_ready(&mut self) {}
}

/// Text cursor canvas over a [`MonoFrame`].
pub struct FrameCanvas<P> {
    frame: MonoFrame,
    cursor: Point,
    presenter: P,
}

impl<P: Present> FrameCanvas<P> {
    pub const fn new(presenter: P) -> Self {
        Self {
            frame: MonoFrame::new(),
            cursor: Point::zero(),
            presenter,
        }
    }

    /// Frame being drawn.
    #[inline]
    pub fn frame(&self) -> &MonoFrame { &self.frame }

    /// Position of the next glyph.
    #[inline]
    pub fn cursor(&self) -> Point { self.cursor }

    #[inline]
    pub fn presenter(&self) -> &P { &self.presenter }

    #[inline]
    pub fn presenter_mut(&mut self) -> &mut P { &mut self.presenter }
}

impl<P> Write for FrameCanvas<P> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        self.cursor = Text::with_baseline(s, self.cursor, TEXT_STYLE, Baseline::Top)
            .draw(&mut self.frame)
            .unwrap_or_else(|never| match never {});
        Ok(())
    }
}

impl<P: Present> Graphics for FrameCanvas<P> {
    fn begin_frame(
        &mut self,
        wait: bool,
    ) {
        if wait {
            self.presenter.wait_ready();
        }
        self.frame.clear_all();
        self.cursor = Point::zero();
    }

    fn end_frame(&mut self) { self.presenter.present(&self.frame); }

    fn set_print_pos(
        &mut self,
        x: i32,
        y: i32,
    ) {
        self.cursor = Point::new(x, y);
    }

    fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.frame)
            .ok();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Presenter that keeps the last frame.
    #[derive(Default)]
    pub(crate) struct Capture {
        pub(crate) presented: usize,
        pub(crate) waits: usize,
        pub(crate) last: Option<MonoFrame>,
    }

    impl Present for Capture {
        fn present(
            &mut self,
            frame: &MonoFrame,
        ) {
            self.presented += 1;
            self.last = Some(frame.clone());
        }

        fn wait_ready(&mut self) { self.waits += 1; }
    }

    #[test]
    fn test_frame_pixels() {
        let mut frame = MonoFrame::new();
        Pixel(Point::new(3, 5), BinaryColor::On).draw(&mut frame).ok();
        Pixel(Point::new(-1, 5), BinaryColor::On).draw(&mut frame).ok();
        Pixel(Point::new(128, 0), BinaryColor::On).draw(&mut frame).ok();

        assert!(frame.is_set(3, 5));
        assert!(!frame.is_set(4, 5));
        assert!(!frame.is_set(500, 500));
        assert_eq!(frame.lit_pixels(), 1);
        assert_eq!(frame.as_bytes()[5 * 16], 0x10);

        Pixel(Point::new(3, 5), BinaryColor::Off).draw(&mut frame).ok();
        assert_eq!(frame.lit_pixels(), 0);
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut canvas = FrameCanvas::new(Capture::default());
        canvas.set_print_pos(2, 12);
        canvas.print("AB");
        assert_eq!(canvas.cursor(), Point::new(14, 12));

        let _ = write!(canvas, "{}", 7);
        assert_eq!(canvas.cursor(), Point::new(20, 12));
        assert!(canvas.frame().lit_pixels() > 0);
    }

    #[test]
    fn test_glyph_lands_below_cursor() {
        let mut canvas = FrameCanvas::new(Capture::default());
        canvas.set_print_pos(0, 12);
        canvas.print("W");
        for y in 0..64 {
            for x in 0..128 {
                if canvas.frame().is_set(x, y) {
                    assert!(x < 6 && (12..22).contains(&y), "stray pixel at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_draw_frame_outline() {
        let mut canvas = FrameCanvas::new(Capture::default());
        canvas.draw_frame(0, 0, 128, 64);
        let frame = canvas.frame();
        assert!(frame.is_set(0, 0));
        assert!(frame.is_set(127, 63));
        assert!(!frame.is_set(64, 32));
        assert_eq!(frame.lit_pixels(), 2 * 128 + 2 * 62);
    }

    #[test]
    fn test_frame_lifecycle() {
        let mut canvas = FrameCanvas::new(Capture::default());
        canvas.begin_frame(true);
        canvas.print("X");
        canvas.end_frame();

        assert_eq!(canvas.presenter().waits, 1);
        assert_eq!(canvas.presenter().presented, 1);
        let lit = canvas.presenter().last.as_ref().map(MonoFrame::lit_pixels);
        assert!(lit.is_some_and(|n| n > 0));

        canvas.begin_frame(false);
        assert_eq!(canvas.frame().lit_pixels(), 0);
        assert_eq!(canvas.cursor(), Point::zero());
        assert_eq!(canvas.presenter_mut().waits, 1);
    }
}
