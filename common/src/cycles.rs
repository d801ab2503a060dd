//! Scoped cycle-count measurement of a code region.
//!
//! A [`CycleMeasurement`] reads the free-running counter when created and
//! submits `end - start` to its target [`SmoothedValue`] when ended or
//! dropped. The counter is 32 bits and wraps; `wrapping_sub` gives the right
//! delta as long as a region is shorter than one full counter period
//! (about 28.6 s at 150 MHz).

use crate::smoothed::SmoothedValue;

/// A free-running 32-bit cycle counter.
pub trait CycleCounter {
    /// Current counter value.
    fn now(&self) -> u32;
}

impl<C: CycleCounter + ?Sized> CycleCounter for &C {
    #[inline]
    fn now(&self) -> u32 { (**self).now() }
}

/// Elapsed cycles between two counter reads, across at most one wrap.
#[inline]
pub const fn elapsed(
    start: u32,
    end: u32,
) -> u32 {
    end.wrapping_sub(start)
}

/// In-flight measurement of one code region.
#[must_use = "the region is measured until this guard is ended or dropped"]
pub struct CycleMeasurement<'a, C: CycleCounter, const N: usize> {
    counter: &'a C,
    target: Option<&'a SmoothedValue<u32, N>>,
    start: u32,
}

impl<'a, C: CycleCounter, const N: usize> CycleMeasurement<'a, C, N> {
    /// Start measuring; the delta goes to `target`.
    #[inline]
    pub fn begin(
        counter: &'a C,
        target: &'a SmoothedValue<u32, N>,
    ) -> Self {
        Self {
            counter,
            target: Some(target),
            start: counter.now(),
        }
    }

    /// Counter value captured at `begin`.
    #[inline]
    pub const fn start(&self) -> u32 { self.start }

    /// Stop measuring, submit the delta and return it.
    #[inline]
    pub fn end(mut self) -> u32 { self.submit().unwrap_or_default() }

    #[inline]
    fn submit(&mut self) -> Option<u32> {
        let target = self.target.take()?;
        let delta = elapsed(self.start, self.counter.now());
        target.update(delta);
        Some(delta)
    }
}

impl<C: CycleCounter, const N: usize> Drop for CycleMeasurement<'_, C, N> {
    #[inline]
    fn drop(&mut self) { self.submit(); }
}

/// Run `f` inside a measurement feeding `target`.
#[inline]
pub fn measure<C: CycleCounter, const N: usize, R>(
    counter: &C,
    target: &SmoothedValue<u32, N>,
    f: impl FnOnce() -> R,
) -> R {
    let _measurement = CycleMeasurement::begin(counter, target);
    f()
}

#[cfg(test)]
pub(crate) mod tests {
    use core::cell::Cell;

    use super::*;

    /// Counter that advances by a fixed step on every read.
    pub(crate) struct StepCounter {
        pub(crate) now: Cell<u32>,
        pub(crate) step: u32,
    }

    impl StepCounter {
        pub(crate) fn new(
            start: u32,
            step: u32,
        ) -> Self {
            Self {
                now: Cell::new(start),
                step,
            }
        }
    }

    impl CycleCounter for StepCounter {
        fn now(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(self.step));
            now
        }
    }

    #[test]
    fn test_elapsed_normal() {
        assert_eq!(elapsed(100, 200), 100);
        assert_eq!(elapsed(0, 1000), 1000);
    }

    #[test]
    fn test_elapsed_wrap() {
        assert_eq!(elapsed(u32::MAX - 100, 100), 201);
    }

    #[test]
    fn test_end_submits_delta() {
        let counter = StepCounter::new(1000, 250);
        let target: SmoothedValue<u32, 16> = SmoothedValue::new();

        let m = CycleMeasurement::begin(&counter, &target);
        assert_eq!(m.start(), 1000);
        assert_eq!(m.end(), 250);
        assert_eq!(target.value(), 250);
    }

    #[test]
    fn test_drop_submits_once() {
        let counter = StepCounter::new(0, 40);
        let target: SmoothedValue<u32, 1> = SmoothedValue::new();

        {
            let _m = CycleMeasurement::begin(&counter, &target);
        }
        assert_eq!(target.value(), 40);

        // end() consumes the guard; Drop must not submit a second sample
        let m = CycleMeasurement::begin(&counter, &target);
        let before = counter.now.get();
        m.end();
        assert_eq!(counter.now.get(), before.wrapping_add(40));
    }

    #[test]
    fn test_measurement_across_wrap() {
        let counter = StepCounter::new(u32::MAX - 9, 20);
        let target: SmoothedValue<u32, 16> = SmoothedValue::new();
        let m = CycleMeasurement::begin(&counter, &target);
        assert_eq!(m.end(), 20);
    }

    #[test]
    fn test_measure_returns_closure_result() {
        let counter = StepCounter::new(0, 7);
        let target: SmoothedValue<u32, 16> = SmoothedValue::new();
        let out = measure(&counter, &target, || 41 + 1);
        assert_eq!(out, 42);
        assert_eq!(target.value(), 7);
    }
}
