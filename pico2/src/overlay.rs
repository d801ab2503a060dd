//! Thread-mode overlay: idle screen and the debug menu loop.

use core::sync::atomic::Ordering;

use defmt::{debug, info};
use diag_common::convert::load_percent;
use diag_common::{CycleConverter, DebugMenu, DebugStats, MenuState, Registry};
use diag_pico2::config::{CORE_TIMING, IDLE_FRAME_MS, MENU_FRAME_MS};
use diag_pico2::idle::{IdleStatus, draw_idle, opens_menu};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Ticker, with_timeout};

use crate::display::OverlayCanvas;
use crate::queue::{ChannelEventQueue, EVENTS, WAKE};
use crate::tasks::flush::{FRAMES_DROPPED, LAST_FLUSH_TIME_US};

/// Run the debug menu until back is pressed, one frame per `MENU_FRAME_MS`.
///
/// Leftover events are flushed and the idle screen is woken on exit.
pub async fn run_debug_menu(
    canvas: &mut OverlayCanvas,
    queue: &mut ChannelEventQueue,
    registry: Registry<'_>,
) {
    info!("DEBUG/STATS MENU");
    let mut menu = DebugMenu::new(registry);
    let mut ticker = Ticker::every(Duration::from_millis(MENU_FRAME_MS));

    while menu.step(canvas, queue) != MenuState::Exited {
        ticker.next().await;
    }

    DebugMenu::finish(queue);
    info!("Debug menu closed");
}

/// Idle screen: uptime, core load and flush stats, X opens the debug menu.
///
/// Redraws every `IDLE_FRAME_MS`, and at once when [`WAKE`] is raised.
/// Never returns.
pub async fn idle_loop(
    canvas: &mut OverlayCanvas,
    stats: &DebugStats,
    registry: Registry<'_>,
) -> ! {
    let mut queue = ChannelEventQueue;
    let converter = CycleConverter::new(CORE_TIMING.clock_hz);

    loop {
        draw_idle(canvas, &sample_status(stats, &converter));

        let woken = with_timeout(Duration::from_millis(IDLE_FRAME_MS), select(WAKE.wait(), EVENTS.receive())).await;
        match woken {
            Ok(Either::First(())) => {
                debug!("Idle screen woken, {} frames dropped", FRAMES_DROPPED.load(Ordering::Relaxed));
            }
            Ok(Either::Second(event)) if opens_menu(&event) => {
                run_debug_menu(canvas, &mut queue, registry).await;
            }
            Ok(Either::Second(_)) | Err(_) => {}
        }
    }
}

fn sample_status(
    stats: &DebugStats,
    converter: &CycleConverter,
) -> IdleStatus {
    let isr_us = converter.to_micros(stats.isr_cycles.value());
    IdleStatus {
        uptime_s: Instant::now().as_secs(),
        core_load: load_percent(isr_us, CORE_TIMING.core_period_us),
        flush_us: LAST_FLUSH_TIME_US.load(Ordering::Relaxed),
        frames_dropped: FRAMES_DROPPED.load(Ordering::Relaxed),
    }
}
