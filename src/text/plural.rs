//! A most simplistic English pluralizer.

/// Pluralizes `value` with three rules, useful for code or doc generation
/// rather than linguistic correctness.
///
/// - Trailing "s" appends "es": bus -> buses, mess -> messes
/// - Trailing "y" not preceded by a, e, o, u, or i becomes "ies":
///   dictionary -> dictionaries
/// - Everything else appends "s": laptop -> laptops
///
/// # Examples
///
/// ```rust
/// use textseq::text::plural::pluralize;
///
/// assert_eq!(pluralize("bus"), "buses");
/// assert_eq!(pluralize("dictionary"), "dictionaries");
/// assert_eq!(pluralize("day"), "days");
/// assert_eq!(pluralize("laptop"), "laptops");
/// ```
#[must_use]
pub fn pluralize(value: &str) -> String {
    if value.ends_with('s') {
        return format!("{value}es");
    }
    if value.len() > 1 && value.ends_with('y') {
        let stem = &value[..value.len() - 1];
        if !matches!(stem.chars().next_back(), Some('a' | 'e' | 'o' | 'u' | 'i')) {
            return format!("{stem}ies");
        }
    }
    format!("{value}s")
}
