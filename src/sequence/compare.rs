//! Comparison strategies for sequence lookup.
//!
//! Lookup operations on [`TextSequence`](crate::sequence::TextSequence) are
//! parameterized by a [`CaseMatching`] strategy instead of being duplicated
//! per case-sensitivity mode.

/// How two string values are compared during lookup.
///
/// # Examples
///
/// ```rust
/// use textseq::sequence::CaseMatching;
///
/// assert!(CaseMatching::Exact.matches("alpha", "alpha"));
/// assert!(!CaseMatching::Exact.matches("Alpha", "alpha"));
/// assert!(CaseMatching::Ignore.matches("Alpha", "alpha"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseMatching {
    /// Byte-for-byte equality, locale-independent.
    #[default]
    Exact,
    /// Case-insensitive equality via Unicode lowercasing of both operands.
    Ignore,
}

impl CaseMatching {
    /// Returns `true` if `left` and `right` are equal under this strategy.
    ///
    /// [`Ignore`](Self::Ignore) checks exact equality first so that the
    /// common already-equal case pays no allocation.
    #[must_use]
    pub fn matches(self, left: &str, right: &str) -> bool {
        match self {
            Self::Exact => left == right,
            Self::Ignore => left == right || left.to_lowercase() == right.to_lowercase(),
        }
    }
}
