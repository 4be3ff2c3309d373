//! Conversion from heterogeneous dynamic values to a string sequence.
//!
//! Available with the `convert` feature. Input is a slice of
//! [`serde_json::Value`], the ecosystem's tagged dynamic value; only string
//! entries are convertible, and what happens to the rest is selected by an
//! explicit [`FillPolicy`] rather than two overloaded behaviors.

use serde_json::Value;

use super::TextSequence;

/// What to do with non-convertible entries during conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillPolicy {
    /// Produce a sequence of the same length as the input, with empty
    /// strings in the slots of non-convertible entries.
    ZeroFill,
    /// Produce a possibly shorter sequence holding only the convertible
    /// entries, in input order; indices do not correspond to the input.
    Sparse,
}

impl TextSequence {
    /// Converts a slice of dynamic values into a string sequence.
    ///
    /// Only [`Value::String`] entries are convertible; numbers, booleans,
    /// nulls, arrays, and objects are not rendered into text. The conversion
    /// is total: nothing fails, the policy decides what non-convertible
    /// entries become.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use textseq::sequence::{FillPolicy, TextSequence};
    ///
    /// let values = [json!("a"), json!(1), json!("b"), json!(null)];
    ///
    /// let padded = TextSequence::from_json_values(&values, FillPolicy::ZeroFill);
    /// assert_eq!(padded.as_slice(), ["a", "", "b", ""]);
    ///
    /// let sparse = TextSequence::from_json_values(&values, FillPolicy::Sparse);
    /// assert_eq!(sparse.as_slice(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn from_json_values(values: &[Value], policy: FillPolicy) -> Self {
        match policy {
            FillPolicy::ZeroFill => values
                .iter()
                .map(|value| match value {
                    Value::String(text) => text.clone(),
                    _ => String::new(),
                })
                .collect(),
            FillPolicy::Sparse => values
                .iter()
                .filter_map(|value| match value {
                    Value::String(text) => Some(text.clone()),
                    _ => None,
                })
                .collect(),
        }
    }
}
