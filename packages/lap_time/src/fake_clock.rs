//! Fake steady clock for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{Clock, Steady};

/// Steady clock whose time only moves when a test advances it.
///
/// Clones share the same time, so a test can keep one clone and hand another to a timer.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeClock {
    now: Arc<Mutex<Duration>>,
}

impl FakeClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves the time of this clock and all its clones forward.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned");

        *now = now
            .checked_add(by)
            .expect("fake time overflow indicates a broken test");
    }
}

impl Clock for FakeClock {
    type Instant = Duration;

    fn now(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned")
    }

    fn duration_between(&self, earlier: Duration, later: Duration) -> Duration {
        later.saturating_sub(earlier)
    }
}

impl Steady for FakeClock {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(FakeClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn clones_share_time() {
        let clock1 = FakeClock::new();
        let clock2 = clock1.clone();

        clock1.advance(Duration::from_millis(100));
        assert_eq!(clock2.now(), Duration::from_millis(100));

        clock2.advance(Duration::from_millis(50));
        assert_eq!(clock1.now(), Duration::from_millis(150));
    }
}
