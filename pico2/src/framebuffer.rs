//! RGB565 framebuffer renderer for the ST7789 panel.
//!
//! [`FrameRenderer`] implements `DrawTarget` over a big-endian RGB565 byte
//! buffer laid out the way the ST7789 expects it after `RAMWR`. The overlay
//! is copied in with [`FrameRenderer::blit_overlay`], which scales each
//! overlay pixel to an `OVERLAY_SCALE` square in one `fill_contiguous` pass.

use diag_common::MonoFrame;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, OVERLAY_HEIGHT, OVERLAY_SCALE, OVERLAY_WIDTH, OVERLAY_X, OVERLAY_Y};

const WIDTH: usize = DISPLAY_WIDTH as usize;
const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// Overlay foreground (lit pixels).
pub const OVERLAY_FG: Rgb565 = Rgb565::WHITE;

/// Overlay and panel background.
pub const OVERLAY_BG: Rgb565 = Rgb565::BLACK;

/// Renderer writing into a framebuffer reference.
pub struct FrameRenderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> FrameRenderer<'a> {
    /// Create a new renderer targeting the given framebuffer.
    pub fn new(framebuffer: &'a mut [u8]) -> Self { Self { framebuffer } }

    /// Clear the framebuffer with a color.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let bytes = Self::pixel_bytes(color);
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Copy `frame` to the middle of the panel at `OVERLAY_SCALE`.
    pub fn blit_overlay(
        &mut self,
        frame: &MonoFrame,
    ) {
        let area = Rectangle::new(Point::new(OVERLAY_X, OVERLAY_Y), Size::new(OVERLAY_WIDTH, OVERLAY_HEIGHT));
        let colors = (0..OVERLAY_HEIGHT).flat_map(move |y| {
            (0..OVERLAY_WIDTH).map(move |x| {
                if frame.is_set(x / OVERLAY_SCALE, y / OVERLAY_SCALE) {
                    OVERLAY_FG
                } else {
                    OVERLAY_BG
                }
            })
        });
        self.fill_contiguous(&area, colors).ok();
    }

    /// Color of the pixel at `(x, y)`, `None` off screen.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Rgb565> {
        let idx = Self::index(x, y)?;
        let raw = u16::from_be_bytes([self.framebuffer[idx], self.framebuffer[idx + 1]]);
        Some(RawU16::new(raw).into())
    }

    #[inline]
    fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            Some((y as usize * WIDTH + x as usize) * 2)
        } else {
            None
        }
    }

    #[inline]
    fn pixel_bytes(color: Rgb565) -> [u8; 2] {
        let raw: RawU16 = color.into();
        raw.into_inner().to_be_bytes()
    }

    /// Set a pixel in the framebuffer.
    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if let Some(idx) = Self::index(x, y) {
            self.framebuffer[idx..idx + 2].copy_from_slice(&Self::pixel_bytes(color));
        }
    }
}

impl OriginDimensions for FrameRenderer<'_> {
    fn size(&self) -> Size { Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }
}

impl DrawTarget for FrameRenderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        // colors are ordered over the full `area`, skip the clipped ones
        let mut colors = colors.into_iter();
        for point in area.points() {
            let Some(color) = colors.next() else {
                break;
            };
            if drawable_area.contains(point) {
                self.set_pixel(point.x, point.y, color);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}
