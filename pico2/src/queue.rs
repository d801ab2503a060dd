//! UI event channel between the UI poll and the thread-mode overlay.
//!
//! A single static [`Channel`] carries events from the UI poll interrupt
//! executor to the idle screen and the debug menu. Producers never block:
//! [`try_send_event`] drops the event and counts it when the channel is full.

use defmt::warn;
use diag_common::stats::EventCounters;
use diag_common::{Event, EventQueue};
use diag_pico2::config::EVENT_QUEUE_DEPTH;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Global event channel shared between the UI poll and the overlay.
pub static EVENTS: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH> = Channel::new();

/// Raised when a consumer lets go of the queue.
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Enqueue without blocking. Returns `false` if the event was dropped.
pub fn try_send_event(
    event: Event,
    counters: &EventCounters,
) -> bool {
    match EVENTS.try_send(event) {
        Ok(()) => {
            counters.record_push(EVENTS.len());
            true
        }
        Err(_) => {
            counters.record_overflow();
            warn!("event queue full, dropped {}", event);
            false
        }
    }
}

/// Consumer side of [`EVENTS`] as an [`EventQueue`].
pub struct ChannelEventQueue;

impl EventQueue for ChannelEventQueue {
    #[inline]
    fn len(&self) -> usize { EVENTS.len() }

    #[inline]
    fn pull_event(&mut self) -> Option<Event> { EVENTS.try_receive().ok() }

    fn flush(&mut self) { EVENTS.clear(); }

    fn poke(&mut self) { WAKE.signal(()); }
}
