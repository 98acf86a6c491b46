use std::fmt::Debug;

/// A unit in which a [`Timer`][crate::Timer] expresses accumulated time.
///
/// The unit is a compile-time ratio: one unit lasts `NUMERATOR / DENOMINATOR` seconds.
/// Implementations are zero-sized marker types that only ever appear as type parameters.
///
/// You can define your own unit if none of the provided ones fit:
///
/// ```
/// use lap_time::{TimeUnit, Timer};
///
/// /// One frame at 60 frames per second.
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Frames;
///
/// impl TimeUnit for Frames {
///     const NUMERATOR: u64 = 1;
///     const DENOMINATOR: u64 = 60;
/// }
///
/// let timer = Timer::<Frames>::new();
/// assert_eq!(timer.elapsed(), 0.0);
/// ```
///
/// Both parts of the ratio must be non-zero. A unit that violates this fails to compile as soon
/// as a timer converts an interval into it.
///
/// Integer representations reduce the ratio before converting, so large ratio parts with a large
/// common factor are fine. An interval is only reported as the maximum value of an integer
/// representation when `nanoseconds * DENOMINATOR` still exceeds `u128` after that reduction.
pub trait TimeUnit: Clone + Copy + Debug + Default + Send + Sync + 'static {
    /// Numerator of the unit's length in seconds.
    const NUMERATOR: u64;

    /// Denominator of the unit's length in seconds.
    const DENOMINATOR: u64;
}

/// Declares a marker type for a unit with a fixed ratio to the second.
macro_rules! time_unit {
    ($(#[$meta:meta])* $name:ident = $numerator:literal / $denominator:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub struct $name;

        impl TimeUnit for $name {
            const NUMERATOR: u64 = $numerator;
            const DENOMINATOR: u64 = $denominator;
        }
    };
}

time_unit!(
    /// One billionth of a second.
    Nanoseconds = 1 / 1_000_000_000
);
time_unit!(
    /// One millionth of a second.
    Microseconds = 1 / 1_000_000
);
time_unit!(
    /// One thousandth of a second.
    Milliseconds = 1 / 1_000
);
time_unit!(
    /// The SI second. This is the default unit of a [`Timer`][crate::Timer].
    Seconds = 1 / 1
);
time_unit!(
    /// Sixty seconds.
    Minutes = 60 / 1
);
time_unit!(
    /// Sixty minutes.
    Hours = 3_600 / 1
);
