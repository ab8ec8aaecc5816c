//! Error types for almanac.
//!
//! Every public operation in the workspace reports failure through the single
//! `thiserror`-derived [`Error`] enum below.  The `ensure!` and
//! `ensure_in_range!` macros are the short-hand used at public boundaries.

use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric or enum argument fell outside its valid domain.
    #[error("{name} ({value}) out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending argument.
        name: String,
        /// The value that was supplied.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A `Custom` variant was selected without the provider it needs.
    #[error("missing capability: {0}")]
    MissingCapability(String),

    /// A required argument was absent.
    #[error("argument `{0}` must not be null")]
    NullArgument(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Build an [`Error::OutOfRange`].
    pub fn out_of_range(name: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Return `true` for [`Error::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use almanac_core::{ensure, errors::Error};
/// fn positive(x: i32) -> almanac_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::OutOfRange { .. })` unless `$min <= $value <= $max`.
///
/// The argument name reported in the error is the stringified `$value`
/// expression.
///
/// # Example
/// ```
/// use almanac_core::ensure_in_range;
/// fn month(m: u8) -> almanac_core::errors::Result<u8> {
///     ensure_in_range!(m, 1, 12);
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(month(13).unwrap_err().is_out_of_range());
/// ```
#[macro_export]
macro_rules! ensure_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        $crate::guard::check_in_range(stringify!($value), $value, $min, $max)?
    };
}
