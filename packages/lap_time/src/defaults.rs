use crate::{Microseconds, Milliseconds, Nanoseconds, Seconds, StdClock, Timer};

/// Timer with the default configuration: seconds as `f64`, sampled from [`StdClock`].
pub type DefaultTimer = Timer<Seconds, f64, StdClock>;

/// Timer that reports seconds.
pub type SecondsTimer<R = f64, C = StdClock> = Timer<Seconds, R, C>;

/// Timer that reports milliseconds.
pub type MillisecondsTimer<R = f64, C = StdClock> = Timer<Milliseconds, R, C>;

/// Timer that reports microseconds.
pub type MicrosecondsTimer<R = f64, C = StdClock> = Timer<Microseconds, R, C>;

/// Timer that reports nanoseconds.
pub type NanosecondsTimer<R = f64, C = StdClock> = Timer<Nanoseconds, R, C>;

/// Measures how long one call of `f` takes, in seconds.
///
/// This is [`Timer::latency()`] on a [`DefaultTimer`], for when you do not want to name a timer
/// type. Whatever `f` returns is discarded. If `f` panics, the panic unwinds to the caller and no
/// measurement is produced.
///
/// # Examples
///
/// ```
/// let data = vec![5, 3, 1, 4, 2];
///
/// let seconds = lap_time::latency(move || {
///     let mut data = data;
///     data.sort_unstable();
///     data
/// });
///
/// assert!(seconds >= 0.0);
/// ```
pub fn latency<F, T>(f: F) -> f64
where
    F: FnOnce() -> T,
{
    DefaultTimer::latency(f)
}

/// Measures how long one call of the fallible `f` takes, in seconds.
///
/// This is [`Timer::try_latency()`] on a [`DefaultTimer`]. If `f` fails, its error is returned
/// unchanged and no measurement is produced.
///
/// # Examples
///
/// ```
/// use std::fs;
///
/// let result = lap_time::try_latency(|| fs::read("/this/path/does/not/exist"));
///
/// assert!(result.is_err());
/// ```
pub fn try_latency<F, T, E>(f: F) -> Result<f64, E>
where
    F: FnOnce() -> Result<T, E>,
{
    DefaultTimer::try_latency(f)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_timer_matches_timer_defaults() {
        let timer: DefaultTimer = Timer::default();

        assert!(!timer.is_running());
        assert!(timer.elapsed().abs() < f64::EPSILON);
    }

    #[test]
    fn aliases_accept_other_representations() {
        let timer = MillisecondsTimer::<u64>::new();
        assert_eq!(timer.elapsed(), 0);

        let timer = NanosecondsTimer::<u128>::new();
        assert_eq!(timer.elapsed(), 0);

        let timer = MicrosecondsTimer::<i64>::new();
        assert_eq!(timer.elapsed(), 0);

        let timer = SecondsTimer::<u32>::new();
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn latency_is_non_negative() {
        let seconds = latency(|| std::hint::black_box(21) * 2);

        assert!(seconds >= 0.0);
    }

    #[test]
    fn try_latency_returns_callable_error() {
        let result = try_latency(|| Err::<u8, _>(Error::NotRunning));

        assert_eq!(result, Err(Error::NotRunning));
    }

    #[test]
    fn try_latency_measures_success() {
        let result = try_latency(|| Ok::<_, Error>("done"));

        assert!(result.is_ok_and(|seconds| seconds >= 0.0));
    }
}
