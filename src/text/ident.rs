//! Identifier extraction from free text.
//!
//! An "identifier" is a maximal run of alphanumeric characters and
//! underscores beginning with a caller-supplied prefix. Extraction of all
//! identifiers deduplicates through the sequence algebra's unique append,
//! so results carry no duplicates and keep first-occurrence order.

use crate::sequence::TextSequence;

/// Returns `true` for characters that may appear inside an identifier.
fn is_identifier_char(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// Locates the first identifier starting with `prefix` at or after byte
/// offset `from`, returning its absolute start position and text.
fn locate_identifier<'a>(source: &'a str, prefix: &str, from: usize) -> Option<(usize, &'a str)> {
    let window = source.get(from..)?;
    let start = window.find(prefix)?;
    let tail = &window[start..];
    let end = tail
        .char_indices()
        .find(|&(_, character)| !is_identifier_char(character))
        .map_or(tail.len(), |(position, _)| position);
    if end == 0 {
        return None;
    }
    Some((from + start, &tail[..end]))
}

/// Extracts the first identifier starting with `prefix` at or after byte
/// offset `from` in `source`.
///
/// Returns `None` when no occurrence of `prefix` begins an identifier at or
/// after `from`, or when `from` is past the end or not a character boundary.
/// The prefix must itself start with an identifier character for anything
/// to be found.
///
/// # Examples
///
/// ```rust
/// use textseq::text::ident::first_identifier;
///
/// let source = "calls go_fetch and go_store";
/// assert_eq!(first_identifier(source, "go_", 0), Some("go_fetch"));
/// assert_eq!(first_identifier(source, "go_", 10), Some("go_store"));
/// assert_eq!(first_identifier(source, "py_", 0), None);
/// ```
#[must_use]
pub fn first_identifier<'a>(source: &'a str, prefix: &str, from: usize) -> Option<&'a str> {
    locate_identifier(source, prefix, from).map(|(_, identifier)| identifier)
}

/// Extracts every identifier in `source` starting with `prefix`, without
/// duplicates, ordered by first occurrence.
///
/// # Examples
///
/// ```rust
/// use textseq::text::ident::extract_identifiers;
///
/// let source = "go_a calls go_b, go_b calls go_a";
/// let identifiers = extract_identifiers(source, "go_");
/// assert_eq!(identifiers.as_slice(), ["go_a", "go_b"]);
/// ```
#[must_use]
pub fn extract_identifiers(source: &str, prefix: &str) -> TextSequence {
    let mut identifiers = TextSequence::new();
    let mut from = 0;
    while let Some((position, identifier)) = locate_identifier(source, prefix, from) {
        identifiers = identifiers.append_unique(identifier);
        from = position + 1;
    }
    identifiers
}

/// Creates a Pascal-cased identifier version of `value`.
///
/// Letters and digits are kept; every other character, and every boundary
/// between a letter run and a digit run, starts a new word. A leading
/// underscore survives. Words that are fully upper-case are re-capitalized
/// from lower-case so acronyms do not shout through.
///
/// # Examples
///
/// ```rust
/// use textseq::text::ident::safe_identifier;
///
/// assert_eq!(safe_identifier("some field-name"), "SomeFieldName");
/// assert_eq!(safe_identifier("HTTP status"), "HttpStatus");
/// assert_eq!(safe_identifier("point3d"), "Point3D");
/// assert_eq!(safe_identifier("_private"), "_Private");
/// ```
#[must_use]
pub fn safe_identifier(value: &str) -> String {
    let mut spaced = String::with_capacity(value.len());
    let mut last_was_letter = false;
    for (index, character) in value.chars().enumerate() {
        let is_letter = character.is_alphabetic();
        let keep = is_letter || character.is_numeric() || (character == '_' && index == 0);
        if keep {
            if index > 0 && is_letter != last_was_letter {
                spaced.push(' ');
            }
            spaced.push(character);
        } else {
            spaced.push(' ');
        }
        last_was_letter = is_letter;
    }

    let mut identifier = String::with_capacity(spaced.len());
    for word in spaced.split_whitespace() {
        if word.chars().count() > 1 && super::case::is_upper(word) {
            identifier.push_str(&capitalized(&word.to_lowercase()));
        } else {
            identifier.push_str(&capitalized(word));
        }
    }
    identifier
}

/// Upper-cases the first character of `word`, leaving the rest untouched.
fn capitalized(word: &str) -> String {
    let mut characters = word.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_identifier_scans_from_the_given_offset() {
        let source = "see $ok go_one(go_two)";
        assert_eq!(first_identifier(source, "go_", 0), Some("go_one"));
        assert_eq!(first_identifier(source, "go_", 9), Some("go_two"));
        assert_eq!(first_identifier(source, "go_", 20), None);
    }

    #[rstest]
    fn first_identifier_runs_to_end_of_source() {
        assert_eq!(first_identifier("use go_last", "go_", 0), Some("go_last"));
    }

    #[rstest]
    fn first_identifier_requires_identifier_prefix() {
        // '$' cannot start an identifier, so nothing is ever found.
        assert_eq!(first_identifier("$var more", "$", 0), None);
    }

    #[rstest]
    fn extract_identifiers_deduplicates_in_occurrence_order() {
        let source = "go_b then go_a then go_b again and go_c";
        let identifiers = extract_identifiers(source, "go_");
        assert_eq!(identifiers.as_slice(), ["go_b", "go_a", "go_c"]);
    }

    #[rstest]
    fn extract_identifiers_handles_adjacent_duplicates() {
        let identifiers = extract_identifiers("xx go_a go_a more", "go_");
        assert_eq!(identifiers.as_slice(), ["go_a"]);
    }

    #[rstest]
    fn extract_identifiers_on_prefix_free_source_is_empty() {
        assert!(extract_identifiers("nothing here", "go_").is_empty());
    }

    #[rstest]
    #[case::spaces("some field name", "SomeFieldName")]
    #[case::punctuation("a-b.c", "ABC")]
    #[case::acronym("XML parser", "XmlParser")]
    #[case::digits("point3d", "Point3D")]
    #[case::mixed_word("XMLHttp", "XMLHttp")]
    #[case::leading_underscore("_private", "_Private")]
    #[case::empty("", "")]
    fn safe_identifier_cases(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(safe_identifier(value), expected);
    }
}
