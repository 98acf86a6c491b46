#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! An accumulating stopwatch and a helper for measuring the latency of a single call.
//!
//! The core of this package is [`Timer`], which records time only while it is running. It can be
//! started and stopped any number of times, adding up the length of every completed interval.
//!
//! ```
//! use lap_time::DefaultTimer;
//!
//! let mut timer = DefaultTimer::new();
//!
//! for _ in 0..3 {
//!     timer.start();
//!     // Work that should be counted.
//!     std::hint::black_box((0..1_000).sum::<u64>());
//!     timer.stop();
//!
//!     // Work that should not be counted.
//! }
//!
//! println!("counted work took {} seconds", timer.elapsed());
//! ```
//!
//! To time one call without managing a timer, use [`latency()`]:
//!
//! ```
//! let seconds = lap_time::latency(|| std::thread::sleep(std::time::Duration::from_millis(5)));
//!
//! assert!(seconds >= 0.005);
//! ```
//!
//! # Configuration
//!
//! A timer is configured through its type parameters:
//!
//! | Parameter | Trait              | Default      |
//! |-----------|--------------------|--------------|
//! | Unit      | [`TimeUnit`]       | [`Seconds`]  |
//! | Storage   | [`Representation`] | `f64`        |
//! | Clock     | [`Steady`]         | [`StdClock`] |
//!
//! ```
//! use lap_time::{Milliseconds, Timer};
//!
//! // Whole milliseconds stored as u64.
//! let millis = Timer::<Milliseconds, u64>::latency(|| {
//!     std::thread::sleep(std::time::Duration::from_millis(2));
//! });
//!
//! assert!(millis >= 2);
//! ```
//!
//! Only steady clocks can drive a timer. A clock that follows wall-clock adjustments, such as
//! [`SystemClock`], is rejected at compile time.
//!
//! # Misuse
//!
//! Starting a running timer or stopping a paused one panics. [`Timer::try_start()`] and
//! [`Timer::try_stop()`] report the same conditions as an [`Error`] instead.
//!
//! # Logging
//!
//! Timers emit `tracing` events at the `trace` level when they are started, stopped or zeroed,
//! and at the `debug` level when a start or stop is rejected.

mod clock;
mod defaults;
mod error;
mod representation;
mod timer;
mod unit;

#[cfg(test)]
mod fake_clock;

pub use clock::*;
pub use defaults::*;
pub use error::Error;
pub(crate) use error::Result;
pub use representation::*;
pub use timer::*;
pub use unit::*;
