use std::fmt::Debug;
use std::time::{Duration, Instant, SystemTime};

/// A source of instants that a [`Timer`][crate::Timer] samples at the start and end of each
/// interval.
///
/// A clock on its own makes no promise about the direction its instants move in. Only clocks that
/// also implement [`Steady`] can drive a [`Timer`][crate::Timer].
#[cfg_attr(test, mockall::automock(type Instant = Duration;))]
pub trait Clock: Debug {
    /// An opaque point in time produced by this clock.
    type Instant: Copy + Debug;

    /// Samples the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the time that passed between two instants of this clock.
    ///
    /// If `earlier` is actually later than `later`, returns [`Duration::ZERO`].
    fn duration_between(&self, earlier: Self::Instant, later: Self::Instant) -> Duration;
}

/// Marks a [`Clock`] whose instants never move backward.
///
/// Implementing this trait promises that the clock is immune to wall-clock adjustments such as
/// NTP synchronization or manual changes of the system time. A [`Timer`][crate::Timer] can only
/// be built on a steady clock, so a clock without this marker is rejected at compile time:
///
/// ```compile_fail
/// use lap_time::{Seconds, SystemClock, Timer};
///
/// let timer = Timer::<Seconds, f64, SystemClock>::new();
/// ```
pub trait Steady: Clock {}

/// The monotonic clock of the standard library, backed by [`std::time::Instant`].
///
/// This is the most precise steady clock available on every platform and the default clock of
/// a [`Timer`][crate::Timer].
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct StdClock;

impl StdClock {
    /// Creates the clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn duration_between(&self, earlier: Instant, later: Instant) -> Duration {
        later.saturating_duration_since(earlier)
    }
}

impl Steady for StdClock {}

/// The wall clock of the operating system, backed by [`std::time::SystemTime`].
///
/// This clock exists as an example of a clock that a [`Timer`][crate::Timer] rejects. The wall
/// clock may jump backward or forward when the system time is adjusted, so it does not implement
/// [`Steady`]. It is not meant for wall-clock or calendar time keeping.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct SystemClock;

impl SystemClock {
    /// Creates the clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    type Instant = SystemTime;

    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn duration_between(&self, earlier: SystemTime, later: SystemTime) -> Duration {
        later.duration_since(earlier).unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
impl Steady for MockClock {}
