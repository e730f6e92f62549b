//! Configuration handling for TMList
//!
//! Configuration is read from `config.yaml` or `config.toml`, looked up in
//! the current directory, next to the executable, and in the global config
//! directory, in that order. Command-line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ListCategory;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format: {0} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

const CONFIG_FILE_NAMES: [&str; 2] = ["config.yaml", "config.toml"];

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by all commands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the category files of the list store
    pub data_dir: PathBuf,

    /// Report changes without writing them back
    pub dry_run: bool,

    /// Categories processed when none is selected on the command line
    pub categories: Vec<ListCategory>,

    /// Default output format
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            dry_run: false,
            categories: ListCategory::ALL.to_vec(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from an explicit path, or from the first default location found
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::find_config_file() {
                Some(path) => Self::load_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tmlist", "tmlist").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Directories searched for a config file, in order
    fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        if let Ok(current) = std::env::current_dir() {
            dirs.push(current);
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            dirs.push(exe_dir);
        }
        if let Some(global) = Self::global_config_dir() {
            dirs.push(global);
        }

        dirs
    }

    /// Finds the first existing config file in the search directories
    pub fn find_config_file() -> Option<PathBuf> {
        Self::search_dirs().into_iter().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Loads configuration from a file, choosing the format by extension
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let config: Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("toml") => toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        config.with_context(|| format!("Failed to load config: {}", path.display()))
    }
}
