//! Cycle count to microsecond conversion without runtime division.
//!
//! The reciprocal `2^32 / (clock_hz / 1_000_000)` is computed once (at
//! compile time for a constant clock). Converting is then one widening
//! 32x32 multiply and taking the high word:
//!
//! ```text
//! us = (cycles * reciprocal) >> 32
//! ```
//!
//! Clocks that are not a whole number of MHz use the truncated MHz value.
//! Clocks below 1 MHz are treated as 1 MHz.

/// High 32 bits of the 64-bit product `a * b`.
#[inline]
pub const fn multiply_u32xu32_rshift32(
    a: u32,
    b: u32,
) -> u32 {
    ((a as u64 * b as u64) >> 32) as u32
}

/// Fixed-point reciprocal of the clock in MHz, scaled by 2^32.
pub const fn cycles_reciprocal(clock_hz: u32) -> u32 {
    let mhz = clock_hz / 1_000_000;
    let mhz = if mhz == 0 { 1 } else { mhz };
    let reciprocal = (1u64 << 32) / mhz as u64;
    if reciprocal > u32::MAX as u64 { u32::MAX } else { reciprocal as u32 }
}

/// Convert a cycle count at `clock_hz` to microseconds.
///
/// Prefer [`CycleConverter`] in hot paths so the reciprocal is not
/// recomputed per call.
#[inline]
pub const fn cycles_to_microseconds(
    cycles: u32,
    clock_hz: u32,
) -> u32 {
    multiply_u32xu32_rshift32(cycles, cycles_reciprocal(clock_hz))
}

/// Percentage of `period_us` taken by `used_us`. Zero for a zero period.
#[inline]
pub const fn load_percent(
    used_us: u32,
    period_us: u32,
) -> u32 {
    if period_us == 0 {
        return 0;
    }
    (used_us as u64 * 100 / period_us as u64) as u32
}

/// Cycle to microsecond converter with a precomputed reciprocal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleConverter {
    clock_hz: u32,
    reciprocal: u32,
}

impl CycleConverter {
    /// Precompute the reciprocal for `clock_hz`.
    pub const fn new(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            reciprocal: cycles_reciprocal(clock_hz),
        }
    }

    /// Convert `cycles` to microseconds.
    #[inline]
    pub const fn to_micros(
        &self,
        cycles: u32,
    ) -> u32 {
        multiply_u32xu32_rshift32(cycles, self.reciprocal)
    }

    /// Clock this converter was built for.
    #[inline]
    pub const fn clock_hz(&self) -> u32 { self.clock_hz }

    /// The precomputed 2^32-scaled reciprocal.
    #[inline]
    pub const fn reciprocal(&self) -> u32 { self.reciprocal }
}
