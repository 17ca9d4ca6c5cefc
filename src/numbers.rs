//! Lenient scalar parsing and percentage helpers.
//!
//! Every numeric value we receive arrives as text. A value that fails to parse becomes the
//! type's default instead of an error.

use phf::phf_set;
use std::str::FromStr;

static TRUTHY: phf::Set<&'static str> = phf_set! {
    "true",
    "yes",
    "1",
};

/// Parse an integer, falling back to the default (zero) for anything unparseable.
///
/// Integral float text such as `"25.0"` is accepted as well.
#[must_use]
pub fn parse_int<T>(raw: &str) -> T
where
    T: FromStr + Default + TryFrom<i64>,
{
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<T>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => {
            T::try_from(value as i64).unwrap_or_default()
        }
        _ => T::default(),
    }
}

/// Parse a float, returning 0.0 for unparseable or non-finite text.
#[must_use]
pub fn parse_float(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// True iff the text is a finite number without a fractional part.
#[must_use]
pub fn is_integral(raw: &str) -> bool {
    matches!(raw.trim().parse::<f64>(), Ok(value) if value.is_finite() && value.fract() == 0.0)
}

/// True for `true`, `yes` or `1`, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    TRUTHY.contains(raw.trim().to_lowercase().as_str())
}

/// Trimmed text, or `fallback` when nothing is left after trimming.
#[must_use]
pub fn text_or(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// `part / whole * 100`, rounded to two decimals. A zero (or negative) whole yields 0.
#[must_use]
pub fn percent(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}
