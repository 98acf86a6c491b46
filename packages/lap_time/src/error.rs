use thiserror::Error;

/// Errors that can occur when a [`Timer`][crate::Timer] is used out of sequence.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// `start()` was called on a timer that is already recording an interval.
    ///
    /// Accepting the call would silently discard the time recorded since the earlier start.
    #[error("timer is already running: stop it before starting a new interval")]
    AlreadyRunning,

    /// `stop()` was called on a timer that is not recording an interval.
    #[error("timer is not running: start it before stopping")]
    NotRunning,
}

/// A specialized `Result` type for timer operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, Copy);

    #[test]
    fn messages_name_the_expected_state() {
        assert!(Error::AlreadyRunning.to_string().contains("already running"));
        assert!(Error::NotRunning.to_string().contains("not running"));
    }

    #[test]
    fn usable_as_result_error() {
        let result: Result<()> = Err(Error::NotRunning);
        assert_eq!(result, Err(Error::NotRunning));
    }
}
