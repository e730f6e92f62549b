//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `run` | Resolve includes and write changed lists back |
//! | `check` | Same as `run` without writing anything |
//! | `graph` | Show which lists include which |
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 3 | Other error |
//! | 4 | List store error |
//! | 5 | Cycle in includes |
//! | 6 | Included list not found |
//!
//! When several categories are processed, the most severe code wins.
//!
//! ## Logging
//!
//! Progress is logged to stderr through `tracing`. Set `RUST_LOG` or pass
//! `--verbose` for debug output.

mod app;
mod exit;
mod output;
mod run_cmd;
mod graph_cmd;

pub use app::{Cli, Commands, run};
pub use exit::ExitStatus;
pub use output::Output;
pub use run_cmd::{process_category, CategoryReport, RunArgs};
