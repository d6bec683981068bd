/// `2^63` as an `f64`, the first whole float above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Values up to `2^53` in magnitude convert exactly; larger ones round to
/// nearest, matching native integer-to-float promotion.
///
/// ## Example
/// ```
/// use calcrs::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if the value is finite, whole and within range.
///
/// ## Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: For non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use calcrs::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // Range check (-2^63 is representable, 2^63 is not)
    if !(-I64_BOUND..I64_BOUND).contains(&value) {
        return None;
    }
    Some(value as i64)
}
