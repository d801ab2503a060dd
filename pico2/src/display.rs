//! Display configuration and overlay presenter for the Pimoroni PIM715
//! Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - DC: GPIO16
//! - CS: GPIO17 (directly to SPI peripheral)
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use diag_common::{FrameCanvas, MonoFrame, Present};
use diag_pico2::framebuffer::{FrameRenderer, OVERLAY_BG};
use embassy_rp::spi::Config as SpiConfig;

use crate::st7789::FRAMEBUFFER;
use crate::tasks::flush::{FLUSH_SIGNAL, try_claim};

/// Canvas the overlay is drawn on.
pub type OverlayCanvas = FrameCanvas<FlushPresenter>;

/// SPI configuration for the ST7789 display.
/// The ST7789 supports up to 62.5MHz SPI clock.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}

/// Fill the framebuffer with the background color.
///
/// Call before the flush task is spawned.
pub fn clear_framebuffer() {
    // SAFETY: no flush is running yet
    let buffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
    FrameRenderer::new(buffer).clear_buffer(OVERLAY_BG);
}

/// Hands finished overlay frames to the flush task.
pub struct FlushPresenter;

impl Present for FlushPresenter {
    fn present(
        &mut self,
        frame: &MonoFrame,
    ) {
        if !try_claim() {
            return;
        }
        // SAFETY: try_claim gives exclusive access until the flush task releases it
        let buffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        FrameRenderer::new(buffer).blit_overlay(frame);
        FLUSH_SIGNAL.signal(());
    }
}
