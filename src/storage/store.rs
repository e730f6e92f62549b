//! List storage
//!
//! [`ListStore`] is the seam between resolution and wherever lists actually
//! live. [`JsonListStore`] keeps each category in `<dir>/<key>.json` as a
//! JSON array of list records. Readers and writers of a category coordinate
//! through `<dir>/<key>.json.lock`, held for the whole read-modify-write of
//! an update.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ExternalId, List, ListCategory, ListUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read lists")]
    Unreadable { category: ListCategory },

    #[error("{category}: no list with ID {id}")]
    UnknownId {
        category: ListCategory,
        id: ExternalId,
    },
}

/// Source and destination of the lists of each category
pub trait ListStore {
    /// Returns all lists of a category in store order
    fn fetch(&self, category: ListCategory) -> Result<Vec<List>>;

    /// Persists the description and items of one list
    fn update(&self, category: ListCategory, update: &ListUpdate) -> Result<()>;
}

/// Store backed by one JSON file per category
pub struct JsonListStore {
    dir: PathBuf,
}

impl JsonListStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the file for a category
    pub fn path(&self, category: ListCategory) -> PathBuf {
        self.dir.join(format!("{}.json", category.store_key()))
    }

    fn lock_path(&self, category: ListCategory) -> PathBuf {
        self.dir.join(format!("{}.json.lock", category.store_key()))
    }

    /// Locks a category until the returned file is dropped
    fn lock(&self, category: ListCategory, exclusive: bool) -> Result<File> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = self.lock_path(category);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        if exclusive {
            file.lock_exclusive()
                .context("Failed to acquire write lock on list store")?;
        } else {
            file.lock_shared()
                .context("Failed to acquire read lock on list store")?;
        }
        Ok(file)
    }

    fn read_all(&self, path: &Path) -> Result<Vec<List>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open list store: {}", path.display()))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse lists in {}", path.display()))
    }

    fn write_all(&self, path: &Path, lists: &[List]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, lists).context("Failed to serialize lists")?;
            writeln!(writer).context("Failed to write lists")?;
            writer.flush().context("Failed to flush list store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }

    /// Replaces all lists of a category
    pub fn replace(&self, category: ListCategory, lists: &[List]) -> Result<()> {
        let _lock = self.lock(category, true)?;
        self.write_all(&self.path(category), lists)
    }
}

impl ListStore for JsonListStore {
    fn fetch(&self, category: ListCategory) -> Result<Vec<List>> {
        let path = self.path(category);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let lists = self
            .lock(category, false)
            .and_then(|_lock| self.read_all(&path))
            .with_context(|| StoreError::Unreadable { category })?;
        debug!(category = %category, count = lists.len(), path = %path.display(), "fetched lists");
        Ok(lists)
    }

    fn update(&self, category: ListCategory, update: &ListUpdate) -> Result<()> {
        let path = self.path(category);
        let _lock = self.lock(category, true)?;
        let mut lists = self.read_all(&path)?;

        let list = lists
            .iter_mut()
            .find(|list| list.external_id == update.external_id)
            .ok_or(StoreError::UnknownId {
                category,
                id: update.external_id,
            })?;

        list.description = update.description.clone();
        list.items = update.items.clone();
        debug!(category = %category, id = %update.external_id, name = %list.name, "updating list");

        self.write_all(&path, &lists)
    }
}
