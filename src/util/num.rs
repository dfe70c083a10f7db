use crate::error::RuntimeError;

/// Converts a literal's source text to the interpreter's integer type.
///
/// Integer literals are parsed exactly. Fractional literals are truncated
/// toward zero, so `2.9` evaluates to `2` and `.5` to `0`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value does not fit in an
/// `i64`.
///
/// ## Example
/// ```
/// use volt::util::num::literal_to_i64;
///
/// assert_eq!(literal_to_i64("42").unwrap(), 42);
/// assert_eq!(literal_to_i64("2.9").unwrap(), 2);
/// assert_eq!(literal_to_i64(".5").unwrap(), 0);
/// assert!(literal_to_i64("99999999999999999999").is_err());
/// ```
pub fn literal_to_i64(text: &str) -> Result<i64, RuntimeError> {
    let too_large = || RuntimeError::LiteralTooLarge { literal: text.to_string() };

    if !text.contains('.') {
        return text.parse().map_err(|_| too_large());
    }

    let value: f64 = text.parse().map_err(|_| too_large())?;
    f64_to_i64_checked(value.trunc()).ok_or_else(too_large)
}

/// Safely converts an integral `f64` to `i64` if it is in range.
///
/// ## Returns
/// - `Some(i64)`: The converted value.
/// - `None`: If the value is not finite or lies outside the `i64` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
