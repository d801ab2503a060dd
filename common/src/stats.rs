//! Instrumentation state shared between producers and the debug pages.
//!
//! One [`DebugStats`] instance is created at start-up and handed by
//! reference to the core tick (ISR timing), the UI poll (poll timing and
//! event counters) and the pages that display them.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::smoothed::SmoothedValue;

/// Window of the cycle smoothers.
pub const CYCLE_WINDOW: usize = 16;

/// Smoothed cycle counts of one instrumented context.
pub type CycleStat = SmoothedValue<u32, CYCLE_WINDOW>;

/// UI event queue counters.
pub struct EventCounters {
    event_count: AtomicU32,
    max_queue_depth: AtomicU32,
    queue_overflow: AtomicU32,
}

impl EventCounters {
    pub const fn new() -> Self {
        Self {
            event_count: AtomicU32::new(0),
            max_queue_depth: AtomicU32::new(0),
            queue_overflow: AtomicU32::new(0),
        }
    }

    /// Record an accepted event; `depth` is the queue length after the push.
    pub fn record_push(
        &self,
        depth: usize,
    ) {
        self.event_count.fetch_add(1, Ordering::Relaxed);
        let depth = u32::try_from(depth).unwrap_or(u32::MAX);
        self.max_queue_depth.fetch_max(depth, Ordering::Relaxed);
    }

    /// Record an event dropped because the queue was full.
    pub fn record_overflow(&self) { self.queue_overflow.fetch_add(1, Ordering::Relaxed); }

    /// Accepted events since boot.
    #[inline]
    pub fn event_count(&self) -> u32 { self.event_count.load(Ordering::Relaxed) }

    /// Highest queue depth observed.
    #[inline]
    pub fn max_queue_depth(&self) -> u32 { self.max_queue_depth.load(Ordering::Relaxed) }

    /// Dropped events since boot.
    #[inline]
    pub fn queue_overflow(&self) -> u32 { self.queue_overflow.load(Ordering::Relaxed) }
}

impl Default for EventCounters {
    fn default() -> Self { Self::new() }
}

/// All debug counters of the device.
pub struct DebugStats {
    /// Cycles spent in the core tick.
    pub isr_cycles: CycleStat,
    /// Cycles spent in the UI poll.
    pub ui_cycles: CycleStat,
    /// Event queue counters.
    pub events: EventCounters,
}

impl DebugStats {
    pub const fn new() -> Self {
        Self {
            isr_cycles: SmoothedValue::new(),
            ui_cycles: SmoothedValue::new(),
            events: EventCounters::new(),
        }
    }
}

impl Default for DebugStats {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_counters() {
        let counters = EventCounters::new();
        counters.record_push(1);
        counters.record_push(3);
        counters.record_push(2);
        counters.record_overflow();

        assert_eq!(counters.event_count(), 3);
        assert_eq!(counters.max_queue_depth(), 3);
        assert_eq!(counters.queue_overflow(), 1);
    }

    #[test]
    fn test_stats_start_empty() {
        let stats = DebugStats::default();
        assert_eq!(stats.isr_cycles.value(), 0);
        assert_eq!(stats.ui_cycles.value(), 0);
        assert_eq!(stats.events.event_count(), 0);
    }
}
