//! Item set helpers
//!
//! Items are an unordered set, always emitted as a sorted, duplicate-free
//! sequence.

use std::collections::BTreeSet;

use super::list::List;

/// Collapses duplicates and returns the items in ascending order
pub fn dedup_sort<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Returns the sorted union of both item collections
pub fn merge(existing: &[String], new: &[String]) -> Vec<String> {
    dedup_sort(existing.iter().chain(new).cloned())
}

/// Returns true if two list states are equal in the fields this tool rewrites
///
/// Only the description and the canonical item sequence are compared; name
/// and external ID never change during resolution.
pub fn states_equal(a: &List, b: &List) -> bool {
    a.description == b.description
        && dedup_sort(a.items.iter().cloned()) == dedup_sort(b.items.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedup_sort_orders_and_collapses() {
        assert_eq!(dedup_sort(["3", "1", "2", "1"]), strings(&["1", "2", "3"]));
        assert!(dedup_sort(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn dedup_sort_is_lexicographic() {
        assert_eq!(dedup_sort(["10", "9", "1"]), strings(&["1", "10", "9"]));
    }

    #[test]
    fn merge_unions() {
        let merged = merge(&strings(&["4", "5"]), &strings(&["1", "5", "2"]));
        assert_eq!(merged, strings(&["1", "2", "4", "5"]));
    }

    #[test]
    fn equal_ignores_name_and_id() {
        let a = List::new("nameA")
            .with_description("desc A")
            .with_items(["7", "8", "9"])
            .with_id(1);
        let b = List::new("nameB")
            .with_description("desc A")
            .with_items(["7", "8", "9"])
            .with_id(2);

        assert!(states_equal(&a, &b));
    }

    #[test]
    fn equal_detects_description_change() {
        let a = List::new("A").with_description("desc A");
        let b = List::new("A").with_description("desc A ");

        assert!(!states_equal(&a, &b));
    }

    #[test]
    fn equal_detects_item_change() {
        let a = List::new("A").with_items(["1", "2"]);
        let b = List::new("A").with_items(["1", "2", "3"]);

        assert!(!states_equal(&a, &b));
    }

    #[test]
    fn equal_compares_canonical_items() {
        let a = List::new("A").with_items(["3", "2", "1"]);
        let b = List::new("A").with_items(["1", "2", "3"]);

        assert!(states_equal(&a, &b));
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(a in prop::collection::vec("[a-z0-9]{0,4}", 0..20),
                               b in prop::collection::vec("[a-z0-9]{0,4}", 0..20)) {
            let once = merge(&a, &b);
            let twice = merge(&once, &b);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn dedup_sort_is_sorted_and_unique(values in prop::collection::vec("[a-z]{0,3}", 0..30)) {
            let result = dedup_sort(values.clone());
            prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
            for value in &values {
                prop_assert!(result.contains(value));
            }
        }

        #[test]
        fn merge_is_commutative(a in prop::collection::vec("[a-z]{0,3}", 0..10),
                                b in prop::collection::vec("[a-z]{0,3}", 0..10)) {
            prop_assert_eq!(merge(&a, &b), merge(&b, &a));
        }
    }
}
