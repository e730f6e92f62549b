//! Output formatting for CLI commands
//!
//! Commands either emit one JSON document on stdout or human-readable lines.
//! Logs go to stderr and never mix with either.

use serde::Serialize;

use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a status line (text mode)
    pub fn success(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a failure line to stderr (text mode)
    pub fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Prints a JSON document; callers check [`Output::is_json`] first
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Prints a tab-separated table row, skipped in JSON mode
    pub fn row(&self, columns: &[&str]) {
        if !self.is_json() {
            println!("{}", columns.join("\t"));
        }
    }
}
