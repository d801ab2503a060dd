//! Async ST7789 display driver for embassy-rp.
//!
//! One static RGB565 framebuffer (153,600 bytes) is streamed to the panel
//! with an async DMA transfer. The overlay only changes a 256x128 window,
//! but the full buffer is sent so the window never has to be reprogrammed.
//!
//! - **Async DMA:** `flush_buffer()` transfers via DMA without blocking the CPU
//! - **Max SPI speed:** 62.5 MHz SPI clock (ST7789 maximum)
//! - **Pre-configured window:** full screen, set once during `init()`

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAMEBUFFER_SIZE};

/// Static framebuffer shared by the presenter and the flush task.
///
/// Access is serialized by the flush busy flag in `tasks::flush`.
pub static mut FRAMEBUFFER: [u8; FRAMEBUFFER_SIZE] = [0u8; FRAMEBUFFER_SIZE];

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// Power-up sequence: command, parameters, delay after it (ms).
const INIT_SEQUENCE: [(u8, &[u8], u64); 6] = [
    (SWRESET, &[], 150),
    (SLPOUT, &[], 10),
    (COLMOD, &[0x55], 0),                    // RGB565
    (MADCTL, &[MADCTL_MV | MADCTL_MX], 0),   // landscape, 90° rotation
    (INVON, &[], 10),                        // required for PIM715
    (NORON, &[], 10),
];

/// ST7789 panel on SPI0 - owns the bus and control pins.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Run the power-up sequence, switch the panel on and set a full-screen window.
    pub async fn init(&mut self) {
        for (cmd, params, delay_ms) in INIT_SEQUENCE {
            self.command(cmd, params).await;
            if delay_ms > 0 {
                Timer::after_millis(delay_ms).await;
            }
        }
        self.command(DISPON, &[]).await;
        Timer::after_millis(10).await;

        self.set_window(0, 0, DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16).await;
    }

    /// Send a command byte followed by its parameters, each with CS pulsed.
    async fn command(
        &mut self,
        cmd: u8,
        params: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();

        if !params.is_empty() {
            self.cs.set_low();
            self.dc.set_high();
            self.spi.write(params).await.ok();
            self.cs.set_high();
        }
    }

    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let [x0h, x0l] = x.to_be_bytes();
        let [x1h, x1l] = (x + w - 1).to_be_bytes();
        let [y0h, y0l] = y.to_be_bytes();
        let [y1h, y1l] = (y + h - 1).to_be_bytes();
        self.command(CASET, &[x0h, x0l, x1h, x1l]).await;
        self.command(RASET, &[y0h, y0l, y1h, y1l]).await;
    }

    /// Stream a full framebuffer via async DMA.
    pub async fn flush_buffer(
        &mut self,
        buffer: &[u8],
    ) {
        // RAMWR command then large data transfer with CS held low
        self.cs.set_low();
        self.dc.set_low();
        // Use blocking write for single-byte command (faster than DMA setup)
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}
