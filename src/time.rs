//! Time abstraction traits for platform-agnostic timing.
//!
//! The button only ever asks "how long since the last confirmed transition",
//! so the traits here are deliberately small. [`Millis`] and [`MillisDuration`]
//! cover the common case of a free-running 32-bit millisecond counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter must use wrapping
    /// subtraction so that one wrap between `earlier` and `self` still
    /// yields the true elapsed time.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Elapsed milliseconds between two [`Millis`] readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    #[inline]
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

/// A reading of a free-running millisecond counter that wraps at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    #[inline]
    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

/// Any closure returning the current [`Millis`] is a time source, so a HAL's
/// tick counter can be plugged in as `&|| Millis(timer.millis())`.
impl<F> TimeSource<Millis> for F
where
    F: Fn() -> Millis,
{
    #[inline]
    fn now(&self) -> Millis {
        self()
    }
}
