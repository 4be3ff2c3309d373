//! Zero-default parsing helpers.
//!
//! Parse failures resolve to the type's zero value rather than propagating;
//! callers who need to distinguish failure from a literal zero should use
//! `str::parse` directly.

/// Parses a boolean ("true"/"false"), or `false` on failure.
#[must_use]
pub fn bool_or_default(value: &str) -> bool {
    value.parse().unwrap_or_default()
}

/// Parses a signed integer, or `0` on failure.
///
/// An optional sign may be followed by a `0x`, `0o`, or `0b` radix prefix;
/// bare digits parse as decimal.
///
/// # Examples
///
/// ```rust
/// use textseq::text::parse::i64_or_default;
///
/// assert_eq!(i64_or_default("42"), 42);
/// assert_eq!(i64_or_default("-0x10"), -16);
/// assert_eq!(i64_or_default("not a number"), 0);
/// ```
#[must_use]
pub fn i64_or_default(value: &str) -> i64 {
    let (sign, magnitude) = match value.strip_prefix('-') {
        Some(rest) => (-1_i64, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let (radix, digits) = split_radix(magnitude);
    i64::from_str_radix(digits, radix).map_or(0, |parsed| sign * parsed)
}

/// Parses an unsigned integer, or `0` on failure.
///
/// Accepts the same `0x`/`0o`/`0b` radix prefixes as
/// [`i64_or_default`], without a sign.
#[must_use]
pub fn u64_or_default(value: &str) -> u64 {
    let (radix, digits) = split_radix(value);
    u64::from_str_radix(digits, radix).unwrap_or(0)
}

/// Parses a floating-point number, or `0.0` on failure.
#[must_use]
pub fn f64_or_default(value: &str) -> f64 {
    value.parse().unwrap_or_default()
}

/// Parses every value as `f64`, in order, or `None` if any one of them
/// fails to parse.
///
/// # Examples
///
/// ```rust
/// use textseq::text::parse::f64s_all;
///
/// assert_eq!(f64s_all(["1.5", "2"]), Some(vec![1.5, 2.0]));
/// assert_eq!(f64s_all(["1.5", "x"]), None);
/// ```
#[must_use]
pub fn f64s_all<I, S>(values: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().parse().ok())
        .collect()
}

/// Splits an optional radix prefix off `digits`, defaulting to decimal.
fn split_radix(digits: &str) -> (u32, &str) {
    if let Some(rest) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = digits.strip_prefix("0o").or_else(|| digits.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        (2, rest)
    } else {
        (10, digits)
    }
}
