//! # Storage Layer
//!
//! Configuration and list persistence for TMList.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Directory lists | JSON array | `{data_dir}/directorylists.json` |
//! | File extension lists | JSON array | `{data_dir}/fileextensionlists.json` |
//! | File lists | JSON array | `{data_dir}/filelists.json` |
//! | Config | YAML or TOML | `config.yaml` / `config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`JsonListStore`] uses file locking (`fs2`) for concurrent access
//! - All writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`ListStore`] - Where lists are fetched from and written back to
//! - [`JsonListStore`] - File-backed [`ListStore`]
//! - [`Config`] - Settings loaded from file

mod config;
mod store;

pub use config::{Config, ConfigError, OutputFormat};
pub use store::{JsonListStore, ListStore, StoreError};
