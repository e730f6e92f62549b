//! Domain models for TMList
//!
//! Contains the resolution logic without any I/O concerns.

mod list;
mod items;
mod resolve;
mod changes;
mod graph;
pub mod directive;

pub use list::{CategoryError, ExternalId, List, ListCategory, ListUpdate};
pub use items::{dedup_sort, merge, states_equal};
pub use resolve::{ActivePath, Batch, ResolveError, ResolveErrorKind};
pub use changes::{Change, Changes};
pub use graph::IncludeGraph;
