//! TMList - Include one exclusion list into another
//!
//! Exclusion lists (directories, file extensions, files) can pull in the
//! items of other lists of the same category with `include: <name>` lines
//! in their description. TMList expands those includes, records on every
//! included list which lists depend on it, and writes back only the lists
//! that actually changed.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Batch, List, ListCategory, ListUpdate, ResolveError};
