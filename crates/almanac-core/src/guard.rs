//! Guard clauses for public boundaries.
//!
//! Internal helpers in `almanac-time` trust their input; every public entry
//! point validates with one of the functions here first.

use crate::errors::{Error, Result};
use num_traits::ToPrimitive;

/// Return `value` if `min <= value <= max`, otherwise [`Error::OutOfRange`].
///
/// # Example
/// ```
/// use almanac_core::guard::check_in_range;
/// assert_eq!(check_in_range("week", 53u8, 1u8, 53u8), Ok(53));
/// assert!(check_in_range("week", 54u8, 1u8, 53u8).is_err());
/// ```
pub fn check_in_range<T>(name: &str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + ToPrimitive + Copy,
{
    if value < min || value > max {
        return Err(Error::out_of_range(
            name,
            widen(value),
            widen(min),
            widen(max),
        ));
    }
    Ok(value)
}

/// Unwrap the result of an ordinal-to-enum conversion.
///
/// `ordinal` is the raw value that was converted; `max` is the largest defined
/// ordinal (the smallest is assumed to be zero).  A `None` conversion means
/// the ordinal names no variant and yields [`Error::OutOfRange`].
pub fn check_defined<T>(name: &str, converted: Option<T>, ordinal: i64, max: i64) -> Result<T> {
    converted.ok_or_else(|| Error::out_of_range(name, ordinal, 0, max))
}

/// Unwrap a required argument, failing with [`Error::NullArgument`].
pub fn require<T>(name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::NullArgument(name.to_string()))
}

/// Lossy widening used only for error reporting.
fn widen<T: ToPrimitive>(v: T) -> i64 {
    v.to_i64().unwrap_or(i64::MAX)
}
