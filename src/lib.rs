//! # textseq
//!
//! Set-like operations over ordered string sequences, plus lightweight
//! text-scanning utilities.
//!
//! ## Overview
//!
//! The heart of the crate is [`sequence::TextSequence`]: an ordered,
//! resizable sequence of owned strings that can be treated as a set-like
//! container with insertion-order semantics. It provides:
//!
//! - **Unique append**: add a value only when no equal element exists
//! - **Removal**: order-preserving or swap-with-last, first or all occurrences
//! - **Set equivalence**: membership equality regardless of arrangement
//! - **Reshaping**: explicit length and capacity management
//! - **Lookup**: exact or case-insensitive, selected by a comparison strategy
//!
//! Around it sit small, pure text helpers: delimiter splitting, prefix and
//! suffix stripping, identifier extraction from free text, and a simplistic
//! English pluralizer.
//!
//! Mutating operations consume the sequence and return the new value, so a
//! call site reads as a plain reassignment:
//!
//! ```rust
//! use textseq::sequence::TextSequence;
//!
//! let mut tags = TextSequence::new();
//! tags = tags.append_unique("alpha");
//! tags = tags.append_unique("beta");
//! tags = tags.append_unique("alpha"); // already present, unchanged
//! assert_eq!(tags.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `sequence`: the core [`sequence`] module (enabled by default)
//! - `text`: text-scanning helpers (enabled by default)
//! - `convert`: heterogeneous-value conversion via `serde_json`
//! - `full`: everything

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use textseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{CaseMatching, Removal, RemovalOrder, TextSequence};

    #[cfg(feature = "convert")]
    pub use crate::sequence::FillPolicy;

    #[cfg(feature = "text")]
    pub use crate::text::{affix, case, ident, parse, plural, scan};
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "text")]
pub mod text;
