//! Include resolution for a category batch
//!
//! Every list whose description includes other lists gets its items
//! rebuilt from the (recursively expanded) items of those lists. Every list
//! reached during expansion records the lists on the path above it in its
//! dependency annotation.
//!
//! Cycle detection is scoped to the current path: the same list may be
//! reached through several branches (diamonds), but never twice within one
//! chain of includes.

use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use super::directive;
use super::items;
use super::list::List;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("List not found: \"{name}\" included in \"{referenced_by}\" list")]
    ListNotFound { name: String, referenced_by: String },

    #[error("Cycle dependence: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Which kind of resolution failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    ListNotFound,
    CycleDetected,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::ListNotFound { .. } => ResolveErrorKind::ListNotFound,
            ResolveError::CycleDetected { .. } => ResolveErrorKind::CycleDetected,
        }
    }
}

/// Names of the lists currently being expanded, outermost first
#[derive(Debug, Default)]
pub struct ActivePath {
    names: Vec<String>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn push(&mut self, name: String) {
        self.names.push(name);
    }

    fn pop(&mut self) {
        self.names.pop();
    }

    /// The path closed by `name`, for error reporting
    fn closed_by(&self, name: &str) -> Vec<String> {
        let mut path = self.names.clone();
        path.push(name.to_string());
        path
    }
}

/// Outcome of the last call to [`Batch::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BatchState {
    Pending,
    Resolved,
    Failed,
}

/// All lists of one category, with the input snapshot and a working copy
///
/// Working copy entries correspond to snapshot entries by position.
#[derive(Debug)]
pub struct Batch {
    pub(super) snapshot: Vec<List>,
    pub(super) working: Vec<List>,
    pub(super) state: BatchState,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl Batch {
    /// Builds a batch from lists in store order
    ///
    /// When several lists share a name, includes resolve to the first one.
    pub fn new(lists: Vec<List>) -> Self {
        let mut index = HashMap::with_capacity(lists.len());
        let mut duplicates = Vec::new();

        for (i, list) in lists.iter().enumerate() {
            if index.contains_key(&list.name) {
                warn!(name = %list.name, "duplicate list name, first match wins");
                duplicates.push(list.name.clone());
            } else {
                index.insert(list.name.clone(), i);
            }
        }

        let working = Self::working_copy(&lists);

        Self {
            snapshot: lists,
            working,
            state: BatchState::Pending,
            index,
            duplicates,
        }
    }

    /// Clone of the snapshot with items cleared on every list that includes others
    fn working_copy(snapshot: &[List]) -> Vec<List> {
        snapshot
            .iter()
            .map(|list| {
                let mut list = list.clone();
                if directive::has_includes(&list.description) {
                    list.items.clear();
                }
                list
            })
            .collect()
    }

    /// The lists as supplied
    pub fn snapshot(&self) -> &[List] {
        &self.snapshot
    }

    /// The lists after resolution
    pub fn working(&self) -> &[List] {
        &self.working
    }

    /// Names that occur more than once in the batch
    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicates
    }

    /// Returns the first list with the given name
    pub fn find(&self, name: &str) -> Option<&List> {
        self.index.get(name).map(|&i| &self.working[i])
    }

    /// Expands every list in input order
    ///
    /// Stops at the first missing reference or cycle; a failed batch reports
    /// no changes.
    pub fn resolve(&mut self) -> Result<(), ResolveError> {
        self.working = Self::working_copy(&self.snapshot);
        self.state = BatchState::Pending;

        for i in 0..self.working.len() {
            if let Err(e) = self.expand(i, &mut ActivePath::new()) {
                self.state = BatchState::Failed;
                return Err(e);
            }
        }

        self.state = BatchState::Resolved;
        Ok(())
    }

    fn expand(&mut self, idx: usize, path: &mut ActivePath) -> Result<(), ResolveError> {
        let list = &mut self.working[idx];
        // Top-level visits have no dependents to record
        if !path.names().is_empty() {
            list.description =
                directive::append_dependency_annotation(&list.description, path.names());
        }

        let includes = directive::extract_includes(&list.description);
        if includes.is_empty() {
            return Ok(());
        }

        let name = list.name.clone();
        debug!(list = %name, includes = ?includes, depth = path.names().len(), "expanding");
        path.push(name.clone());

        for include in includes {
            let target = *self.index.get(&include).ok_or_else(|| ResolveError::ListNotFound {
                name: include.clone(),
                referenced_by: name.clone(),
            })?;

            if path.contains(&include) {
                return Err(ResolveError::CycleDetected {
                    path: path.closed_by(&include),
                });
            }

            self.expand(target, path)?;

            let merged = items::merge(&self.working[idx].items, &self.working[target].items);
            self.working[idx].items = merged;
        }

        path.pop();
        Ok(())
    }
}
