//! Property-based tests for the TextSequence algebra.
//!
//! Verifies the algebraic laws of the unique-append family, the two removal
//! disciplines, and the reshaping operations using proptest.

#![cfg(feature = "sequence")]

use proptest::prelude::*;
use textseq::sequence::{Removal, RemovalOrder, TextSequence};

/// Short alphanumeric values collide often, which is what the set-like
/// operations care about.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-c]{0,2}"
}

fn values_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(value_strategy(), 0..24)
}

proptest! {
    /// Appending the same value twice adds it at most once.
    #[test]
    fn prop_append_unique_idempotent(values in values_strategy(), value in value_strategy()) {
        let once = TextSequence::from_values(values).append_unique(value.clone());
        let twice = once.clone().append_unique(value.clone());

        prop_assert_eq!(&once, &twice);

        let count = once.iter().filter(|element| **element == *value).count();
        let count_after = twice.iter().filter(|element| **element == *value).count();
        prop_assert_eq!(count, count_after);
    }

    /// A unique append never introduces a duplicate of the appended value
    /// beyond what the input already held.
    #[test]
    fn prop_append_unique_bounds_multiplicity(values in values_strategy(), value in value_strategy()) {
        let before = values.iter().filter(|element| **element == value).count();
        let sequence = TextSequence::from_values(values).append_unique(value.clone());
        let after = sequence.iter().filter(|element| *element == value).count();

        prop_assert_eq!(after, before.max(1));
    }

    /// Removing the first occurrence deletes exactly one element and keeps
    /// every other element in its original relative order.
    #[test]
    fn prop_remove_first_preserves_order(values in values_strategy(), value in value_strategy()) {
        let original = TextSequence::from_values(values.clone());
        let removed = original.clone().remove(&value, Removal::First);

        match values.iter().position(|element| *element == value) {
            Some(position) => {
                prop_assert_eq!(removed.len(), original.len() - 1);
                let mut expected = values;
                expected.remove(position);
                prop_assert_eq!(removed.into_values(), expected);
            }
            None => prop_assert_eq!(removed, original),
        }
    }

    /// Removing every occurrence leaves no trace of the value and keeps
    /// survivor order.
    #[test]
    fn prop_remove_all_is_exhaustive(values in values_strategy(), value in value_strategy()) {
        let removed = TextSequence::from_values(values.clone()).remove(&value, Removal::All);

        prop_assert!(!removed.contains(&value));

        let expected: Vec<String> = values.into_iter().filter(|element| *element != value).collect();
        prop_assert_eq!(removed.into_values(), expected);
    }

    /// Swap removal yields a sequence set-equal to order-preserving removal
    /// of the same values.
    #[test]
    fn prop_without_swap_matches_preserve_as_set(
        values in values_strategy(),
        excluded in prop::collection::vec(value_strategy(), 0..4),
    ) {
        let original = TextSequence::from_values(values);
        let preserved = original.clone().without(RemovalOrder::Preserve, &excluded);
        let swapped = original.without(RemovalOrder::Swap, &excluded);

        prop_assert_eq!(preserved.len(), swapped.len());
        prop_assert!(preserved.set_equivalent(&swapped));
        for value in &excluded {
            prop_assert!(!swapped.contains(value));
        }
    }

    /// Growing then restoring the length keeps the original elements and
    /// zero-pads nothing that was there before.
    #[test]
    fn prop_set_length_round_trip(values in values_strategy(), extra in 0usize..16) {
        let original = TextSequence::from_values(values);
        let length = original.len();
        let reshaped = original.clone().set_length(length + extra).set_length(length);

        prop_assert_eq!(reshaped, original);
    }

    /// Truncation keeps exactly the first n elements.
    #[test]
    fn prop_set_length_truncates_to_prefix(values in values_strategy(), keep in 0usize..24) {
        let keep = keep.min(values.len());
        let truncated = TextSequence::from_values(values.clone()).set_length(keep);

        prop_assert_eq!(truncated.into_values(), values[..keep].to_vec());
    }

    /// Capacity growth is monotonic and invisible to the elements.
    #[test]
    fn prop_ensure_capacity_monotonic(values in values_strategy(), wanted in 0usize..64) {
        let original = TextSequence::from_values(values);
        let grown = original.clone().ensure_capacity(wanted);

        prop_assert!(grown.capacity() >= wanted);
        prop_assert!(grown.capacity() >= grown.len());
        prop_assert_eq!(grown, original);
    }

    /// Set equivalence is reflexive and symmetric.
    #[test]
    fn prop_set_equivalent_reflexive_symmetric(values in values_strategy()) {
        let left = TextSequence::from_values(values.clone());
        prop_assert!(left.set_equivalent(&left));

        let mut shuffled = values;
        shuffled.reverse();
        let right = TextSequence::from_values(shuffled);
        prop_assert!(left.set_equivalent(&right));
        prop_assert!(right.set_equivalent(&left));
    }
}
