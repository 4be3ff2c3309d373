//! Prefix, suffix, and padding helpers.

/// Strips every leading repetition of `prefix` off `value`.
///
/// Stripping repeats until the value no longer starts with the prefix, so
/// `"--flag"` stripped of `"-"` yields `"flag"`. An empty prefix strips
/// nothing.
///
/// # Examples
///
/// ```rust
/// use textseq::text::affix::strip_prefix_all;
///
/// assert_eq!(strip_prefix_all("--flag", "-"), "flag");
/// assert_eq!(strip_prefix_all("flag", "-"), "flag");
/// ```
#[must_use]
pub fn strip_prefix_all<'a>(mut value: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return value;
    }
    while let Some(stripped) = value.strip_prefix(prefix) {
        value = stripped;
    }
    value
}

/// Strips every trailing repetition of `suffix` off `value`.
///
/// The mirror of [`strip_prefix_all`]; an empty suffix strips nothing.
#[must_use]
pub fn strip_suffix_all<'a>(mut value: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return value;
    }
    while let Some(stripped) = value.strip_suffix(suffix) {
        value = stripped;
    }
    value
}

/// Prepends `prefix` to `value` only if `value` does not already start
/// with it.
#[must_use]
pub fn ensure_prefix(value: &str, prefix: &str) -> String {
    if value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{prefix}{value}")
    }
}

/// Prepends `prefix` and `separator` to `value` only when `prefix` is
/// non-empty.
///
/// # Examples
///
/// ```rust
/// use textseq::text::affix::prefix_with_separator;
///
/// assert_eq!(prefix_with_separator("pkg", ".", "Name"), "pkg.Name");
/// assert_eq!(prefix_with_separator("", ".", "Name"), "Name");
/// ```
#[must_use]
pub fn prefix_with_separator(prefix: &str, separator: &str, value: &str) -> String {
    if prefix.is_empty() {
        value.to_string()
    } else {
        format!("{prefix}{separator}{value}")
    }
}

/// Joins `left` and `right` with `separator`, dropping the separator when
/// either side is empty.
///
/// # Examples
///
/// ```rust
/// use textseq::text::affix::join_non_empty;
///
/// assert_eq!(join_non_empty("a", "-", "b"), "a-b");
/// assert_eq!(join_non_empty("a", "-", ""), "a");
/// assert_eq!(join_non_empty("", "-", "b"), "b");
/// ```
#[must_use]
pub fn join_non_empty(left: &str, separator: &str, right: &str) -> String {
    if !left.is_empty() && !right.is_empty() {
        format!("{left}{separator}{right}")
    } else if left.is_empty() {
        right.to_string()
    } else {
        left.to_string()
    }
}

/// Pads `value` with trailing spaces up to `width` bytes.
///
/// Values already at least `width` bytes long come back unchanged. Width is
/// measured in bytes, which matches display width for ASCII only.
#[must_use]
pub fn pad_right(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.len());
    if padding == 0 {
        value.to_string()
    } else {
        format!("{value}{}", " ".repeat(padding))
    }
}

/// Returns `true` if `value` starts with any one of `prefixes`.
#[must_use]
pub fn has_any_prefix<I, S>(value: &str, prefixes: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prefixes
        .into_iter()
        .any(|prefix| value.starts_with(prefix.as_ref()))
}

/// Returns `true` if `value` ends with any one of `suffixes`.
#[must_use]
pub fn has_any_suffix<I, S>(value: &str, suffixes: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixes
        .into_iter()
        .any(|suffix| value.ends_with(suffix.as_ref()))
}
