//! Display flush task.
//!
//! Runs on the thread-mode executor. The presenter fills the framebuffer
//! and raises [`FLUSH_SIGNAL`]; this task streams the buffer via DMA and
//! releases it again, so the menu loop never waits on the SPI transfer.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use crate::st7789::{FRAMEBUFFER, St7789Flusher};

/// Signal to notify the flush task that the framebuffer holds a new frame.
pub static FLUSH_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Set while the framebuffer is being filled or flushed.
static FLUSH_BUSY: AtomicBool = AtomicBool::new(false);

/// Frames dropped because the previous flush was still running.
pub static FRAMES_DROPPED: AtomicU32 = AtomicU32::new(0);

/// Last flush time in microseconds.
pub static LAST_FLUSH_TIME_US: AtomicU32 = AtomicU32::new(0);

/// Claim the framebuffer for writing. `false` if a flush is in progress.
pub fn try_claim() -> bool {
    let claimed = FLUSH_BUSY
        .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        .is_ok();
    if !claimed {
        FRAMES_DROPPED.fetch_add(1, Ordering::Relaxed);
    }
    claimed
}

#[embassy_executor::task]
pub async fn display_flush_task(flusher: &'static mut St7789Flusher<'static>) {
    info!("Display flush task started");

    loop {
        FLUSH_SIGNAL.wait().await;

        let flush_start = Instant::now();

        // SAFETY: the presenter holds FLUSH_BUSY until this flush completes
        let buffer = unsafe { &*core::ptr::addr_of!(FRAMEBUFFER) };
        flusher.flush_buffer(buffer).await;

        LAST_FLUSH_TIME_US.store(flush_start.elapsed().as_micros() as u32, Ordering::Relaxed);
        FLUSH_BUSY.store(false, Ordering::Release);
    }
}
