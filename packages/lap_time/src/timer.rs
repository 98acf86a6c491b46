use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::{Error, Representation, Result, Seconds, StdClock, Steady, TimeUnit};

/// An accumulating stopwatch.
///
/// The timer starts out paused with nothing accumulated. Each [`start()`][Self::start] begins an
/// interval and each [`stop()`][Self::stop] ends it, adding the length of the interval to the
/// accumulator. [`elapsed()`][Self::elapsed] reads the accumulator and [`zero()`][Self::zero]
/// clears it.
///
/// The accumulator only covers completed intervals. Time spent in an interval that has been
/// started but not yet stopped is not visible through `elapsed()` until the interval is stopped.
///
/// The timer is configured entirely through its type parameters:
///
/// * `U` - the [`TimeUnit`] that accumulated time is expressed in. Defaults to [`Seconds`].
/// * `R` - the [`Representation`] that accumulated time is stored as. Defaults to `f64`.
/// * `C` - the [`Steady`] clock that instants are sampled from. Defaults to [`StdClock`].
///
/// # Examples
///
/// ```
/// use std::thread;
/// use std::time::Duration;
///
/// use lap_time::Timer;
///
/// let mut timer = Timer::<lap_time::Milliseconds>::new();
///
/// timer.start();
/// thread::sleep(Duration::from_millis(20));
/// timer.stop();
///
/// // Paused time is not counted.
/// thread::sleep(Duration::from_millis(100));
///
/// timer.start();
/// thread::sleep(Duration::from_millis(30));
/// let total = timer.stop();
///
/// assert!(total >= 50.0);
/// assert_eq!(total, timer.elapsed());
/// ```
///
/// # Misuse
///
/// Every `start()` must be followed by a `stop()` before the next `start()`. Starting a running
/// timer or stopping a paused one panics. Use [`try_start()`][Self::try_start] and
/// [`try_stop()`][Self::try_stop] to receive an [`Error`] instead.
///
/// # Thread safety
///
/// A timer is a plain value. Mutating operations take `&mut self`, so sharing one timer between
/// threads requires external synchronization. One timer per thread is the expected usage.
#[derive(Clone, Copy, Debug)]
pub struct Timer<U = Seconds, R = f64, C = StdClock>
where
    U: TimeUnit,
    R: Representation,
    C: Steady,
{
    accumulated: R,

    // Some while an interval is being recorded.
    started_at: Option<C::Instant>,

    clock: C,

    _unit: PhantomData<U>,
}

impl<U, R, C> Timer<U, R, C>
where
    U: TimeUnit,
    R: Representation,
    C: Steady,
{
    /// Creates a paused timer with nothing accumulated, using a default instance of the clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use lap_time::Timer;
    ///
    /// let timer = Timer::<lap_time::Seconds, f64>::new();
    ///
    /// assert!(!timer.is_running());
    /// assert_eq!(timer.elapsed(), 0.0);
    /// ```
    #[must_use]
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_clock(C::default())
    }

    /// Creates a paused timer with nothing accumulated, sampling instants from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            accumulated: R::ZERO,
            started_at: None,
            clock,
            _unit: PhantomData,
        }
    }

    /// Starts recording an interval.
    ///
    /// # Panics
    ///
    /// Panics if the timer is already running.
    pub fn start(&mut self) {
        if let Err(e) = self.try_start() {
            panic!("{e}");
        }
    }

    /// Starts recording an interval, or returns [`Error::AlreadyRunning`] if the timer is already
    /// running.
    ///
    /// On error the timer is left unchanged, so the interval in progress keeps its original start.
    pub fn try_start(&mut self) -> Result<()> {
        if self.started_at.is_some() {
            debug!("refusing to start a timer that is already running");
            return Err(Error::AlreadyRunning);
        }

        self.started_at = Some(self.clock.now());
        trace!("timer started");

        Ok(())
    }

    /// Stops recording the current interval, adds its length to the accumulator and returns the
    /// new accumulated total.
    ///
    /// # Panics
    ///
    /// Panics if the timer is not running.
    pub fn stop(&mut self) -> R {
        match self.try_stop() {
            Ok(accumulated) => accumulated,
            Err(e) => panic!("{e}"),
        }
    }

    /// Stops recording the current interval, adds its length to the accumulator and returns the
    /// new accumulated total, or returns [`Error::NotRunning`] if the timer is not running.
    ///
    /// On error the timer is left unchanged.
    pub fn try_stop(&mut self) -> Result<R> {
        let Some(started_at) = self.started_at.take() else {
            debug!("refusing to stop a timer that is not running");
            return Err(Error::NotRunning);
        };

        let stopped_at = self.clock.now();
        let interval = self.clock.duration_between(started_at, stopped_at);

        self.accumulated = self.accumulated.accumulate(R::from_interval::<U>(interval));
        trace!(?interval, accumulated = ?self.accumulated, "timer stopped");

        Ok(self.accumulated)
    }

    /// Clears the accumulator.
    ///
    /// A running timer keeps running: the interval in progress is still added to the accumulator
    /// in full when it is stopped.
    pub fn zero(&mut self) {
        self.accumulated = R::ZERO;
        trace!("timer zeroed");
    }

    /// Returns the total length of all intervals completed since the timer was created or last
    /// zeroed.
    #[must_use]
    pub fn elapsed(&self) -> R {
        self.accumulated
    }

    /// Returns whether an interval is currently being recorded.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Measures how long one call of `f` takes, discarding whatever `f` returns.
    ///
    /// Captures are the way to pass arguments to the measured function: `move || work(a, b)`.
    ///
    /// If `f` panics, the panic unwinds to the caller and no measurement is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use lap_time::{Microseconds, Timer};
    ///
    /// let micros = Timer::<Microseconds, u64>::latency(|| {
    ///     std::thread::sleep(std::time::Duration::from_millis(1));
    /// });
    ///
    /// assert!(micros >= 1_000);
    /// ```
    pub fn latency<F, T>(f: F) -> R
    where
        F: FnOnce() -> T,
        C: Default,
    {
        let (_, elapsed) = Self::measure(f);
        elapsed
    }

    /// Measures how long one call of the fallible `f` takes.
    ///
    /// If `f` fails, its error is returned unchanged and no measurement is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use lap_time::Timer;
    ///
    /// let result = Timer::<lap_time::Seconds, f64>::try_latency(|| "12".parse::<u32>());
    /// assert!(result.is_ok());
    ///
    /// let result = Timer::<lap_time::Seconds, f64>::try_latency(|| "twelve".parse::<u32>());
    /// assert!(result.is_err());
    /// ```
    pub fn try_latency<F, T, E>(f: F) -> std::result::Result<R, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        C: Default,
    {
        let (result, elapsed) = Self::measure(f);
        result.map(|_| elapsed)
    }

    /// Measures how long one call of `f` takes and returns its result along with the measurement.
    ///
    /// If `f` panics, the panic unwinds to the caller and no measurement is produced.
    pub fn measure<F, T>(f: F) -> (T, R)
    where
        F: FnOnce() -> T,
        C: Default,
    {
        let mut timer = Self::new();

        timer.start();
        let result = f();
        let elapsed = timer.stop();

        (result, elapsed)
    }
}

impl<U, R, C> Default for Timer<U, R, C>
where
    U: TimeUnit,
    R: Representation,
    C: Steady + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
