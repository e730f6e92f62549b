//! List domain model
//!
//! A list is a named set of items (directories, file extensions, or files)
//! whose description may carry include directives and a dependency
//! annotation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CategoryError {
    #[error("Unknown list category: '{0}' (expected dir, ext or file)")]
    Unknown(String),
}

/// Identifier assigned by the external store, never used for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ExternalId(pub u64);

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExternalId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Kind of list; includes only resolve within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    #[value(name = "dir")]
    Directory,
    #[value(name = "ext")]
    FileExtension,
    #[value(name = "file")]
    File,
}

impl ListCategory {
    /// All categories in processing order
    pub const ALL: [ListCategory; 3] = [
        ListCategory::Directory,
        ListCategory::FileExtension,
        ListCategory::File,
    ];

    /// Human-readable label used in logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            ListCategory::Directory => "Directory Lists",
            ListCategory::FileExtension => "File Extension Lists",
            ListCategory::File => "File Lists",
        }
    }

    /// Key used by the store (matches the remote endpoint name)
    pub fn store_key(&self) -> &'static str {
        match self {
            ListCategory::Directory => "directorylists",
            ListCategory::FileExtension => "fileextensionlists",
            ListCategory::File => "filelists",
        }
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ListCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dir" | "directory" | "directorylists" => Ok(ListCategory::Directory),
            "ext" | "file_extension" | "fileextensionlists" => Ok(ListCategory::FileExtension),
            "file" | "filelists" => Ok(ListCategory::File),
            _ => Err(CategoryError::Unknown(s.to_string())),
        }
    }
}

/// A list as supplied by the external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct List {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub items: Vec<String>,

    #[serde(rename = "ID", default)]
    pub external_id: ExternalId,
}

impl List {
    /// Creates a list with no description and no external ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the items
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the external ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.external_id = ExternalId(id);
        self
    }

    /// Returns the write-back payload for this list
    pub fn to_update(&self) -> ListUpdate {
        ListUpdate {
            external_id: self.external_id,
            description: self.description.clone(),
            items: self.items.clone(),
        }
    }
}

/// The fields a caller persists for a changed list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUpdate {
    pub external_id: ExternalId,
    pub description: String,
    pub items: Vec<String>,
}
