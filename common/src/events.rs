//! UI input events and the queue contract the debug menu consumes.
//!
//! The queue itself belongs to the input subsystem: overflow and
//! backpressure policy live there. The menu only needs to see how many
//! events are pending, pull them, discard leftovers and wake the producer.

use heapless::Deque;

use crate::stats::EventCounters;

/// Physical control that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    ButtonUp,
    ButtonDown,
    /// Left button: advances to the next debug page.
    ButtonL,
    /// Right button: leaves the debug menu.
    ButtonR,
    EncoderL,
    EncoderR,
}

/// What happened on the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    ButtonPress,
    ButtonLongPress,
    EncoderTurn,
}

/// One input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    pub kind: EventKind,
    pub control: Control,
    /// Encoder delta; 0 for buttons.
    pub value: i16,
}

impl Event {
    /// A short button press on `control`.
    pub const fn press(control: Control) -> Self {
        Self {
            kind: EventKind::ButtonPress,
            control,
            value: 0,
        }
    }

    /// A long button press on `control`.
    pub const fn long_press(control: Control) -> Self {
        Self {
            kind: EventKind::ButtonLongPress,
            control,
            value: 0,
        }
    }

    /// An encoder turn by `delta` detents.
    pub const fn encoder(
        control: Control,
        delta: i16,
    ) -> Self {
        Self {
            kind: EventKind::EncoderTurn,
            control,
            value: delta,
        }
    }
}

/// Queue of pending input events as seen by a consumer.
pub trait EventQueue {
    /// Number of events pending right now.
    fn len(&self) -> usize;

    /// Whether any event is pending.
    fn available(&self) -> bool { self.len() > 0 }

    /// Take the oldest pending event.
    fn pull_event(&mut self) -> Option<Event>;

    /// Discard all pending events.
    fn flush(&mut self);

    /// Wake the event producer / dispatcher after the consumer lets go.
    fn poke(&mut self);
}

/// Fixed-capacity event queue with overflow accounting.
///
/// Producer and consumer share one `&mut` owner; firmware that needs an
/// interrupt-side producer uses a channel-backed [`EventQueue`] instead.
pub struct BoundedEventQueue<'a, const N: usize> {
    events: Deque<Event, N>,
    counters: &'a EventCounters,
    pokes: u32,
}

impl<'a, const N: usize> BoundedEventQueue<'a, N> {
    pub const fn new(counters: &'a EventCounters) -> Self {
        Self {
            events: Deque::new(),
            counters,
            pokes: 0,
        }
    }

    /// Enqueue an event. Returns `false` and counts an overflow if full.
    pub fn push(
        &mut self,
        event: Event,
    ) -> bool {
        if self.events.push_back(event).is_err() {
            self.counters.record_overflow();
            warn!("event queue full, dropped {}", event);
            return false;
        }
        self.counters.record_push(self.events.len());
        true
    }

    /// How many times the consumer poked the queue.
    #[inline]
    pub const fn pokes(&self) -> u32 { self.pokes }
}

impl<const N: usize> EventQueue for BoundedEventQueue<'_, N> {
    #[inline]
    fn len(&self) -> usize { self.events.len() }

    #[inline]
    fn pull_event(&mut self) -> Option<Event> { self.events.pop_front() }

    fn flush(&mut self) { self.events.clear(); }

    fn poke(&mut self) { self.pokes = self.pokes.saturating_add(1); }
}
