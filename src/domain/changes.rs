//! Change projection
//!
//! After resolution, only the lists whose description or items differ from
//! the snapshot need to be written back.

use std::iter::{Enumerate, Zip};
use std::slice::Iter;

use super::items::states_equal;
use super::list::{List, ListUpdate};
use super::resolve::{Batch, BatchState};

/// A list whose resolved state differs from its input state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change<'a> {
    /// Position in the input batch
    pub index: usize,

    /// The resolved list
    pub list: &'a List,
}

impl Change<'_> {
    /// The (external ID, description, items) triple to persist
    pub fn update(&self) -> ListUpdate {
        self.list.to_update()
    }
}

/// Lazy iterator over changed lists, in input order
#[derive(Debug, Clone)]
pub struct Changes<'a> {
    pairs: Enumerate<Zip<Iter<'a, List>, Iter<'a, List>>>,
}

impl<'a> Iterator for Changes<'a> {
    type Item = Change<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.find_map(|(index, (before, after))| {
            if states_equal(before, after) {
                None
            } else {
                Some(Change { index, list: after })
            }
        })
    }
}

impl Batch {
    /// Returns the lists changed by the last successful resolution
    ///
    /// Yields nothing if the batch has not been resolved or resolution failed.
    pub fn changes(&self) -> Changes<'_> {
        let (snapshot, working): (&[List], &[List]) = match self.state {
            BatchState::Resolved => (self.snapshot.as_slice(), self.working.as_slice()),
            BatchState::Pending | BatchState::Failed => (&[], &[]),
        };

        Changes {
            pairs: snapshot.iter().zip(working.iter()).enumerate(),
        }
    }

    /// Returns true if the last successful resolution changed any list
    pub fn has_changes(&self) -> bool {
        self.changes().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directive::DEPENDENCY_PREFIX;

    fn names<'a>(changes: impl Iterator<Item = Change<'a>>) -> Vec<&'a str> {
        changes.map(|c| c.list.name.as_str()).collect()
    }

    #[test]
    fn no_includes_means_no_changes() {
        let mut batch = Batch::new(vec![
            List::new("nameA")
                .with_description("desc A")
                .with_items(["1", "2", "3"]),
            List::new("nameB")
                .with_description("desc B")
                .with_items(["4", "5", "6"]),
            List::new("nameC")
                .with_description("desc C")
                .with_items(["7", "8", "9"]),
        ]);
        batch.resolve().unwrap();

        assert!(!batch.has_changes());
    }

    #[test]
    fn all_lists_in_chain_change() {
        let mut batch = Batch::new(vec![
            List::new("nameA")
                .with_description("desc A\n")
                .with_items(["3", "2", "1"])
                .with_id(1),
            List::new("nameB")
                .with_description("desc B\ninclude: nameA")
                .with_items(["4", "5", "6"])
                .with_id(2),
            List::new("nameC")
                .with_description("desc B\ninclude: nameB")
                .with_items(["7", "8", "9"])
                .with_id(3),
            List::new("nameD")
                .with_description("desc B\ninclude: nameA\ninclude: nameC")
                .with_items(["7", "8", "9"])
                .with_id(4),
        ]);
        batch.resolve().unwrap();

        let changes: Vec<_> = batch.changes().collect();
        assert_eq!(
            names(changes.iter().copied()),
            vec!["nameA", "nameB", "nameC", "nameD"]
        );
        assert_eq!(
            changes.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );

        let a = changes[0].update();
        assert_eq!(a.external_id.0, 1);
        assert!(a.description.contains("nameB"));
        assert!(a.description.contains("nameC"));
        assert!(a.description.contains("nameD"));

        for change in &changes[1..] {
            assert_eq!(change.list.items, vec!["1", "2", "3"]);
        }
    }

    #[test]
    fn only_changed_lists_yielded() {
        let mut batch = Batch::new(vec![
            List::new("lonely").with_items(["x"]),
            List::new("A").with_items(["1"]),
            List::new("B").with_description("include: A"),
        ]);
        batch.resolve().unwrap();

        assert_eq!(names(batch.changes()), vec!["A", "B"]);
    }

    #[test]
    fn changes_can_be_iterated_repeatedly() {
        let mut batch = Batch::new(vec![
            List::new("A").with_items(["1"]),
            List::new("B").with_description("include: A"),
        ]);
        batch.resolve().unwrap();

        let changes = batch.changes();
        assert_eq!(changes.clone().count(), 2);
        assert_eq!(changes.count(), 2);
        assert_eq!(batch.changes().count(), 2);
    }

    #[test]
    fn failed_batch_reports_nothing() {
        let mut batch = Batch::new(vec![
            List::new("A").with_items(["1"]),
            List::new("B").with_description("include: A"),
            List::new("nameA").with_description("include: nameA").with_items(["1"]),
        ]);
        assert!(batch.resolve().is_err());

        assert_eq!(batch.changes().count(), 0);
    }

    #[test]
    fn unresolved_batch_reports_nothing() {
        let batch = Batch::new(vec![
            List::new("B").with_description("include: A").with_items(["stale"]),
        ]);

        assert_eq!(batch.changes().count(), 0);
    }

    #[test]
    fn resolved_output_is_a_fixed_point() {
        let mut batch = Batch::new(vec![
            List::new("A").with_items(["1"]),
            List::new("B").with_description("include: A").with_items(["2"]),
            List::new("C").with_description("include: B"),
        ]);
        batch.resolve().unwrap();

        let mut again = Batch::new(batch.working().to_vec());
        again.resolve().unwrap();

        assert!(!again.has_changes());
    }

    #[test]
    fn annotation_only_change_is_reported() {
        let annotated = format!("desc\n{} B", DEPENDENCY_PREFIX);
        let mut batch = Batch::new(vec![
            List::new("A").with_description(annotated).with_items(["1"]),
            List::new("B").with_description("include: A").with_items(["1"]),
            List::new("C").with_description("include: B").with_items(["1"]),
        ]);
        batch.resolve().unwrap();

        assert_eq!(names(batch.changes()), vec!["A", "B"]);
    }

    #[test]
    fn unreferenced_annotated_list_is_not_rewritten() {
        let mid_line = format!("desc\n{} Old\nowner: ops", DEPENDENCY_PREFIX);
        let trailing_newline = format!("desc\n{} Old\n", DEPENDENCY_PREFIX);
        let mut batch = Batch::new(vec![
            List::new("A").with_description(mid_line.clone()).with_items(["1"]),
            List::new("B").with_description(trailing_newline.clone()),
        ]);
        batch.resolve().unwrap();

        assert!(!batch.has_changes());
        assert_eq!(batch.find("A").unwrap().description, mid_line);
        assert_eq!(batch.find("B").unwrap().description, trailing_newline);
    }
}
