//! Lightweight text-scanning helpers.
//!
//! Pure, single-pass functions over individual strings: prefix/suffix
//! handling, delimiter splitting and segmentation, case predicates,
//! identifier extraction from free text, simplistic English pluralization,
//! and zero-default parsing.
//!
//! Helpers that produce multiple values return a
//! [`TextSequence`](crate::sequence::TextSequence); identifier extraction
//! additionally deduplicates through the sequence's unique-append family.
//!
//! Every function here is total: absence comes back as `None` or an empty
//! result, parse failures as the zero value, never as an error.

pub mod affix;
pub mod case;
pub mod ident;
pub mod parse;
pub mod plural;
pub mod scan;
