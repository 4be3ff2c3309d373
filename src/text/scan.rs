//! Search and segmentation helpers.
//!
//! Needles for the positional helpers are single characters, so "skip past
//! the needle" is always a well-defined step. Absence comes back as `None`
//! or as a defined split with one empty side, never as an error.

use crate::sequence::TextSequence;

/// Returns the text after the first occurrence of `needle`, or `None` when
/// the needle is absent.
///
/// # Examples
///
/// ```rust
/// use textseq::text::scan::after;
///
/// assert_eq!(after("key=value", '='), Some("value"));
/// assert_eq!(after("key", '='), None);
/// ```
#[must_use]
pub fn after(value: &str, needle: char) -> Option<&str> {
    value
        .find(needle)
        .map(|position| &value[position + needle.len_utf8()..])
}

/// Returns the text after the last occurrence of `needle`, or `None` when
/// the needle is absent.
#[must_use]
pub fn after_last(value: &str, needle: char) -> Option<&str> {
    value
        .rfind(needle)
        .map(|position| &value[position + needle.len_utf8()..])
}

/// Returns the text before the first occurrence of `needle`, or `None` when
/// the needle is absent.
#[must_use]
pub fn before(value: &str, needle: char) -> Option<&str> {
    value.find(needle).map(|position| &value[..position])
}

/// Returns the text before the last occurrence of `needle`, or `None` when
/// the needle is absent.
#[must_use]
pub fn before_last(value: &str, needle: char) -> Option<&str> {
    value.rfind(needle).map(|position| &value[..position])
}

/// Returns the text up to (excluding) the first occurrence of `stop`, or the
/// whole value when `stop` is absent.
#[must_use]
pub fn until(value: &str, stop: char) -> &str {
    value.find(stop).map_or(value, |position| &value[..position])
}

/// Splits `value` at byte offset `index` into `(left, right)`.
///
/// Returns `None` when `index` is past the end or does not fall on a
/// character boundary.
#[must_use]
pub fn break_at(value: &str, index: usize) -> Option<(&str, &str)> {
    value.split_at_checked(index)
}

/// Splits `value` around the first occurrence of `needle`.
///
/// The needle itself is dropped. When absent, the left side is empty and the
/// right side is the whole value.
///
/// # Examples
///
/// ```rust
/// use textseq::text::scan::break_on;
///
/// assert_eq!(break_on("key=value", '='), ("key", "value"));
/// assert_eq!(break_on("bare", '='), ("", "bare"));
/// ```
#[must_use]
pub fn break_on(value: &str, needle: char) -> (&str, &str) {
    value.find(needle).map_or(("", value), |position| {
        (&value[..position], &value[position + needle.len_utf8()..])
    })
}

/// Splits `value` around the last occurrence of `needle`.
///
/// The needle itself is dropped. When absent, the left side is empty and the
/// right side is the whole value.
#[must_use]
pub fn break_on_last(value: &str, needle: char) -> (&str, &str) {
    value.rfind(needle).map_or(("", value), |position| {
        (&value[..position], &value[position + needle.len_utf8()..])
    })
}

/// Splits `value` on `separator`, returning an empty sequence for empty
/// input instead of a single empty element.
///
/// # Examples
///
/// ```rust
/// use textseq::text::scan::split_non_empty;
///
/// assert_eq!(split_non_empty("a,b", ",").as_slice(), ["a", "b"]);
/// assert!(split_non_empty("", ",").is_empty());
/// ```
#[must_use]
pub fn split_non_empty(value: &str, separator: &str) -> TextSequence {
    if value.is_empty() {
        TextSequence::new()
    } else {
        value.split(separator).collect()
    }
}

/// Returns the smallest position at which any of `needles` first occurs in
/// `value`, or `None` when none occurs.
#[must_use]
pub fn index_any<I, S>(value: &str, needles: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut smallest: Option<usize> = None;
    for needle in needles {
        if let Some(position) = value.find(needle.as_ref()) {
            if smallest.is_none_or(|current| position < current) {
                smallest = Some(position);
            }
        }
    }
    smallest
}

/// Returns `true` if `value` contains any of the given substrings.
#[must_use]
pub fn contains_any_of<I, S>(value: &str, needles: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    needles
        .into_iter()
        .any(|needle| value.contains(needle.as_ref()))
}

/// Returns `true` if `needle` occurs in `value` exactly once.
#[must_use]
pub fn contains_once(value: &str, needle: &str) -> bool {
    match value.find(needle) {
        Some(first) => value.rfind(needle) == Some(first),
        None => false,
    }
}

/// Returns `true` if `value` contains `needle` as-is, or lower-cased `value`
/// contains lower-cased `needle`.
#[must_use]
pub fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value.contains(needle) || value.to_lowercase().contains(&needle.to_lowercase())
}

/// Collapses every run of multiple subsequent spaces into a single space.
///
/// # Examples
///
/// ```rust
/// use textseq::text::scan::reduce_spaces;
///
/// assert_eq!(reduce_spaces("a    b  c"), "a b c");
/// ```
#[must_use]
pub fn reduce_spaces(value: &str) -> String {
    let mut text = value.to_string();
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text
}

/// Replaces, in order, every occurrence of each `(from, to)` pair in
/// `replacements`.
///
/// Pairs apply sequentially, so a later pair sees the output of earlier
/// ones.
#[must_use]
pub fn replace_all(value: &str, replacements: &[(&str, &str)]) -> String {
    let mut text = value.to_string();
    for (from, to) in replacements {
        text = text.replace(from, to);
    }
    text
}

/// Collects the non-empty values from `values`, in order.
///
/// With `stop_at_first_empty` set, collection ends at the first empty value
/// instead of skipping over it.
///
/// # Examples
///
/// ```rust
/// use textseq::text::scan::non_empty_values;
///
/// let all = non_empty_values(["a", "", "b"], false);
/// assert_eq!(all.as_slice(), ["a", "b"]);
///
/// let truncated = non_empty_values(["a", "", "b"], true);
/// assert_eq!(truncated.as_slice(), ["a"]);
/// ```
#[must_use]
pub fn non_empty_values<I, S>(values: I, stop_at_first_empty: bool) -> TextSequence
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut collected = TextSequence::new();
    for value in values {
        let value = value.into();
        if value.is_empty() {
            if stop_at_first_empty {
                break;
            }
        } else {
            collected = collected.push(value);
        }
    }
    collected
}
