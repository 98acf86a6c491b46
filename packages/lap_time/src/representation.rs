use std::fmt::Debug;
use std::time::Duration;

use num_integer::gcd;
use num_traits::{Bounded, NumCast};

use crate::TimeUnit;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// A numeric type that a [`Timer`][crate::Timer] stores and reports accumulated time as.
///
/// Floating-point representations convert intervals exactly (within the precision of the type).
/// Integer representations truncate each interval toward zero, in the same way a duration cast to
/// a coarser unit would, and saturate at the maximum value of the type instead of overflowing.
///
/// Note that truncation applies to each stopped interval separately, so a `u64` millisecond timer
/// that records ten intervals of 1.9 ms reports 10, not 19.
pub trait Representation: Copy + Debug + PartialOrd + Send + Sync + 'static {
    /// The value of an empty accumulator.
    const ZERO: Self;

    /// Expresses `interval` as a quantity of `U`.
    fn from_interval<U: TimeUnit>(interval: Duration) -> Self;

    /// Adds `delta` to an accumulated value.
    #[must_use]
    fn accumulate(self, delta: Self) -> Self;
}

/// Returns the ratio of `U`, rejecting a zero numerator or denominator at compile time.
fn unit_ratio<U: TimeUnit>() -> (u64, u64) {
    const {
        assert!(
            U::NUMERATOR != 0 && U::DENOMINATOR != 0,
            "time unit ratio must have a non-zero numerator and denominator"
        );
    }

    (U::NUMERATOR, U::DENOMINATOR)
}

fn fractional_units<T, U>(interval: Duration) -> T
where
    T: NumCast + Bounded,
    U: TimeUnit,
{
    let (numerator, denominator) = unit_ratio::<U>();

    #[expect(
        clippy::cast_precision_loss,
        reason = "floating-point representations are approximate by nature"
    )]
    let units = interval.as_secs_f64() * denominator as f64 / numerator as f64;

    <T as NumCast>::from(units).unwrap_or_else(T::max_value)
}

fn whole_units<T, U>(interval: Duration) -> T
where
    T: NumCast + Bounded,
    U: TimeUnit,
{
    let (numerator, denominator) = unit_ratio::<U>();

    // units = nanos * denominator / (numerator * 10^9), with the fraction reduced first so that
    // units with large but similar ratio parts do not overflow the intermediate product.
    let multiplier = <u128 as From<u64>>::from(denominator);
    let divisor = <u128 as From<u64>>::from(numerator).saturating_mul(NANOS_PER_SECOND);
    let common = gcd(multiplier, divisor);

    let multiplier = multiplier.checked_div(common).unwrap_or(multiplier);
    let divisor = divisor.checked_div(common).unwrap_or(divisor);

    interval
        .as_nanos()
        .checked_mul(multiplier)
        .and_then(|scaled| scaled.checked_div(divisor))
        .and_then(<T as NumCast>::from)
        .unwrap_or_else(T::max_value)
}

macro_rules! float_representation {
    ($($t:ty),*) => {$(
        impl Representation for $t {
            const ZERO: Self = 0.0;

            fn from_interval<U: TimeUnit>(interval: Duration) -> Self {
                fractional_units::<Self, U>(interval)
            }

            fn accumulate(self, delta: Self) -> Self {
                self + delta
            }
        }
    )*};
}

macro_rules! integer_representation {
    ($($t:ty),*) => {$(
        impl Representation for $t {
            const ZERO: Self = 0;

            fn from_interval<U: TimeUnit>(interval: Duration) -> Self {
                whole_units::<Self, U>(interval)
            }

            fn accumulate(self, delta: Self) -> Self {
                self.saturating_add(delta)
            }
        }
    )*};
}

float_representation!(f32, f64);
integer_representation!(u32, u64, u128, i64);
