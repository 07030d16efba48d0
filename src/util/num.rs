/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, within range, and not
/// fractional.
///
/// ## Returns
/// - `Some(i64)`: The converted value.
/// - `None`: For non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use arden_ops::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `f64` to `i32` if the value is integral and within range.
///
/// ## Example
/// ```
/// use arden_ops::util::num::f64_to_i32_exact;
///
/// assert_eq!(f64_to_i32_exact(-7.0), Some(-7));
/// assert_eq!(f64_to_i32_exact(3e9), None);
/// assert_eq!(f64_to_i32_exact(0.5), None);
/// ```
#[must_use]
pub fn f64_to_i32_exact(value: f64) -> Option<i32> {
    i32::try_from(f64_to_i64_exact(value)?).ok()
}

/// Rounds an `f64` to the nearest `i64`.
///
/// Returns `None` if the value is not finite or does not fit.
///
/// ## Example
/// ```
/// use arden_ops::util::num::f64_to_i64_rounded;
///
/// assert_eq!(f64_to_i64_rounded(2.5), Some(3));
/// assert_eq!(f64_to_i64_rounded(-0.4), Some(0));
/// assert_eq!(f64_to_i64_rounded(f64::INFINITY), None);
/// ```
#[must_use]
pub fn f64_to_i64_rounded(value: f64) -> Option<i64> {
    f64_to_i64_exact(value.round())
}

/// Converts a `usize` count to `f64`.
///
/// Counts above `2^53` lose precision; no list in memory gets near that.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an `i64` to `f64`, or `None` if it is not exactly representable.
///
/// ## Example
/// ```
/// use arden_ops::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42), Some(42.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert_eq!(i64_to_f64_checked(big), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_checked(value: i64) -> Option<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return None;
    }
    Some(value as f64)
}

/// Converts an `i64` count to `usize`, clamping negative values to zero.
///
/// ## Example
/// ```
/// use arden_ops::util::num::i64_to_usize_clamped;
///
/// assert_eq!(i64_to_usize_clamped(7), 7);
/// assert_eq!(i64_to_usize_clamped(-2), 0);
/// ```
#[must_use]
pub fn i64_to_usize_clamped(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
