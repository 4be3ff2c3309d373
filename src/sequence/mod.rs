//! The core sequence algebra.
//!
//! This module provides [`TextSequence`], an ordered, resizable sequence of
//! owned strings with set-like operations layered on top: unique append,
//! order-preserving and swap-based removal, equivalence under permutation,
//! and explicit length/capacity reshaping.
//!
//! # Calling Convention
//!
//! Mutating operations consume the sequence and return the new value; the
//! caller reassigns its own binding. Queries borrow. No operation ever
//! retains a reference past the call, and no operation fails: absence is an
//! `Option`, and reshape conflicts resolve by documented clamp/pad rules.
//!
//! # Examples
//!
//! ```rust
//! use textseq::sequence::{Removal, TextSequence};
//!
//! let mut seen = TextSequence::from_values(["a", "b", "a", "c"]);
//! seen = seen.remove("a", Removal::All);
//! assert_eq!(seen.as_slice(), ["b", "c"]);
//! ```

mod compare;
mod text_sequence;

#[cfg(feature = "convert")]
mod convert;

pub use compare::CaseMatching;
pub use text_sequence::{Iter, Removal, RemovalOrder, TextSequence};

#[cfg(feature = "convert")]
pub use convert::FillPolicy;
