//! Bounded exponential smoother for ISR-fed timing samples.
//!
//! # Algorithm
//!
//! Exponential moving average with decay `1/N`, kept as a running sum so the
//! update is a shift, a subtract and an add:
//!
//! ```text
//! sum'     = sum - (sum >> log2(N)) + sample
//! estimate = sum' >> log2(N)
//! ```
//!
//! The first sample seeds `sum = sample << log2(N)`, so the estimate is exact
//! immediately instead of ramping up from zero. The estimate always stays
//! inside `[min sample, max sample]` of everything seen so far.
//!
//! # Concurrency
//!
//! One writer (an interrupt handler or a polling routine) calls `update`;
//! any context may call `value`. The accumulator words are only touched by
//! the writer. Readers see a single published `AtomicU32`, so a read is never
//! torn on targets without 64-bit atomics (Cortex-M33).

use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Unsigned sample types accepted by [`SmoothedValue`].
pub trait Sample: Copy {
    /// Largest representable sample; estimates saturate here.
    const MAX: Self;

    /// Widen to the 32-bit storage word.
    fn widen(self) -> u32;

    /// Narrow from the storage word, saturating at [`Sample::MAX`].
    fn narrow(value: u32) -> Self;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn widen(self) -> u32 { u32::from(self) }

                #[inline]
                fn narrow(value: u32) -> Self { <$t>::try_from(value).unwrap_or(<$t>::MAX) }
            }
        )*
    };
}

impl_sample!(u8, u16, u32);

/// Exponentially smoothed value over a window of `N` samples.
///
/// `N` must be a power of two no larger than 65536; other values fail to
/// compile when the type is used.
pub struct SmoothedValue<T, const N: usize> {
    sum_lo: AtomicU32,
    sum_hi: AtomicU32,
    primed: AtomicBool,
    estimate: AtomicU32,
    _sample: PhantomData<T>,
}

impl<T: Sample, const N: usize> SmoothedValue<T, N> {
    const SHIFT: u32 = {
        assert!(N.is_power_of_two() && N <= 1 << 16, "smoothing window must be a power of two <= 65536");
        N.trailing_zeros()
    };

    /// Create an empty smoother. `value()` reads 0 until the first update.
    pub const fn new() -> Self {
        let _ = Self::SHIFT;
        Self {
            sum_lo: AtomicU32::new(0),
            sum_hi: AtomicU32::new(0),
            primed: AtomicBool::new(false),
            estimate: AtomicU32::new(0),
            _sample: PhantomData,
        }
    }

    /// Fold one sample into the estimate. O(1), no locks.
    ///
    /// Must only be called from one execution context at a time.
    #[inline]
    pub fn update(
        &self,
        sample: T,
    ) {
        let sample = u64::from(sample.widen());

        let sum = if self.primed.load(Ordering::Relaxed) {
            let sum = (u64::from(self.sum_hi.load(Ordering::Relaxed)) << 32)
                | u64::from(self.sum_lo.load(Ordering::Relaxed));
            sum - (sum >> Self::SHIFT) + sample
        } else {
            self.primed.store(true, Ordering::Relaxed);
            sample << Self::SHIFT
        };

        self.sum_lo.store(sum as u32, Ordering::Relaxed);
        self.sum_hi.store((sum >> 32) as u32, Ordering::Relaxed);

        let estimate = (sum >> Self::SHIFT).min(u64::from(T::MAX.widen()));
        self.estimate.store(estimate as u32, Ordering::Release);
    }

    /// Current smoothed estimate.
    #[inline]
    pub fn value(&self) -> T { T::narrow(self.estimate.load(Ordering::Acquire)) }

    /// Whether at least one sample has been seen since creation or reset.
    #[inline]
    pub fn is_primed(&self) -> bool { self.primed.load(Ordering::Relaxed) }

    /// Forget all samples. Writer context only.
    pub fn reset(&self) {
        self.primed.store(false, Ordering::Relaxed);
        self.sum_lo.store(0, Ordering::Relaxed);
        self.sum_hi.store(0, Ordering::Relaxed);
        self.estimate.store(0, Ordering::Release);
    }

    /// Smoothing window length.
    #[inline]
    pub const fn window(&self) -> usize { N }
}

impl<T: Sample, const N: usize> Default for SmoothedValue<T, N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
