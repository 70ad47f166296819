/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if it is a finite whole number
/// within the exactly representable range.
///
/// ## Errors
/// Returns `Err(error)` for fractional, non-finite or out-of-range values.
///
/// ## Example
/// ```
/// use pedmas::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(-42.0, ()), Ok(-42));
/// assert!(f64_to_i64_checked(2.5, ()).is_err());
/// assert!(f64_to_i64_checked(f64::INFINITY, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Formats a result for display.
///
/// Whole numbers are printed without a fractional part; everything else,
/// infinities and NaN included, uses the `f64` representation.
///
/// ## Example
/// ```
/// use pedmas::util::num::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(7.25), "7.25");
/// assert_eq!(format_result(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    f64_to_i64_checked(value, ()).map_or_else(|()| value.to_string(), |n| n.to_string())
}
