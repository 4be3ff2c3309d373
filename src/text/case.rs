//! Case predicates and transforms.

/// Which case [`set_char_case`] forces a character into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharCase {
    /// Lower-case the character.
    Lower,
    /// Upper-case the character.
    Upper,
}

/// Returns `true` if every character is an upper-case letter, whitespace, or
/// a numeric character.
///
/// Any lower-case letter or other character (punctuation included) makes
/// this `false`. Note the asymmetry with [`is_lower`], which ignores
/// non-letters entirely.
#[must_use]
pub fn is_upper(value: &str) -> bool {
    value.chars().all(|character| {
        (character.is_alphabetic() && character.is_uppercase())
            || character.is_whitespace()
            || character.is_numeric()
    })
}

/// Returns `true` if every letter in `value` is lower-case; non-letters are
/// ignored.
#[must_use]
pub fn is_lower(value: &str) -> bool {
    value
        .chars()
        .all(|character| !character.is_alphabetic() || character.is_lowercase())
}

/// Returns `true` if the first character of `value` is an upper-case letter.
///
/// Empty input is `false`.
#[must_use]
pub fn begins_upper(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_uppercase)
}

/// Lower-cases `value` only when it is currently fully upper-case as per
/// [`is_upper`]; otherwise returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use textseq::text::case::to_lower_if_upper;
///
/// assert_eq!(to_lower_if_upper("SHOUTING"), "shouting");
/// assert_eq!(to_lower_if_upper("MixedCase"), "MixedCase");
/// ```
#[must_use]
pub fn to_lower_if_upper(value: &str) -> String {
    if is_upper(value) {
        value.to_lowercase()
    } else {
        value.to_string()
    }
}

/// Upper-cases `value` only when it is currently fully lower-case as per
/// [`is_lower`]; otherwise returns it unchanged.
#[must_use]
pub fn to_upper_if_lower(value: &str) -> String {
    if is_lower(value) {
        value.to_uppercase()
    } else {
        value.to_string()
    }
}

/// Returns `value` with every non-letter character removed.
#[must_use]
pub fn letters_only(value: &str) -> String {
    value.chars().filter(|character| character.is_alphabetic()).collect()
}

/// Forces the character at character-position `index` into the given case.
///
/// Positions count characters, not bytes. An index past the end leaves the
/// value unchanged.
///
/// # Examples
///
/// ```rust
/// use textseq::text::case::{CharCase, set_char_case};
///
/// assert_eq!(set_char_case("hello", 0, CharCase::Upper), "Hello");
/// assert_eq!(set_char_case("HELLO", 4, CharCase::Lower), "HELLo");
/// assert_eq!(set_char_case("hi", 9, CharCase::Upper), "hi");
/// ```
#[must_use]
pub fn set_char_case(value: &str, index: usize, case: CharCase) -> String {
    let mut result = String::with_capacity(value.len());
    for (position, character) in value.chars().enumerate() {
        if position == index {
            match case {
                CharCase::Lower => result.extend(character.to_lowercase()),
                CharCase::Upper => result.extend(character.to_uppercase()),
            }
        } else {
            result.push(character);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::all_upper("ABC", true)]
    #[case::with_digits_and_spaces("ABC 123", true)]
    #[case::one_lower("ABc", false)]
    #[case::punctuation("ABC!", false)]
    #[case::empty("", true)]
    fn is_upper_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_upper(value), expected);
    }

    #[rstest]
    #[case::all_lower("abc", true)]
    #[case::punctuation_ignored("abc-def!", true)]
    #[case::one_upper("abC", false)]
    #[case::empty("", true)]
    fn is_lower_cases(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_lower(value), expected);
    }

    #[rstest]
    fn begins_upper_checks_only_the_first_character() {
        assert!(begins_upper("Abc"));
        assert!(!begins_upper("aBC"));
        assert!(!begins_upper(""));
        assert!(!begins_upper("1BC"));
    }

    #[rstest]
    fn conditional_case_changes_are_guarded() {
        assert_eq!(to_lower_if_upper("ABC"), "abc");
        assert_eq!(to_lower_if_upper("AbC"), "AbC");
        assert_eq!(to_upper_if_lower("abc"), "ABC");
        assert_eq!(to_upper_if_lower("aBc"), "aBc");
    }

    #[rstest]
    fn letters_only_drops_everything_else() {
        assert_eq!(letters_only("a1b-2c!"), "abc");
        assert_eq!(letters_only("123"), "");
    }

    #[rstest]
    fn set_char_case_counts_characters_not_bytes() {
        assert_eq!(set_char_case("ée", 1, CharCase::Upper), "éE");
        assert_eq!(set_char_case("ée", 0, CharCase::Upper), "Ée");
    }
}
