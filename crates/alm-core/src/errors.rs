//! Error types for almanac.
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`Error`].  None of them stem from I/O: they are deterministic and the
//! caller recovers by supplying valid input.

use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A malformed year, month or day, or a value outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The country code is not registered.
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// Settings could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Return `true` for [`Error::UnknownCountry`].
    ///
    /// UI callers surface this as an "unsupported region" message.
    pub fn is_unknown_country(&self) -> bool {
        matches!(self, Error::UnknownCountry(_))
    }
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use alm_core::{ensure, errors::Error};
/// fn month(m: u8) -> alm_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidArgument("month 13 out of range [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use alm_core::{fail, errors::Error};
/// fn always_err() -> alm_core::errors::Result<()> {
///     fail!("cannot parse {:?}", "2024-13-01");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
