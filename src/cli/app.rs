//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::exit::ExitStatus;
use super::output::Output;
use super::run_cmd::{self, RunArgs};
use super::graph_cmd;
use crate::domain::ListCategory;
use crate::storage::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "tmlist")]
#[command(author, version, about = "Include exclusion lists one into another")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (YAML or TOML)
    #[arg(long, short = 'c', global = true, env = "TMLIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve includes and write changed lists back
    Run(RunArgs),

    /// Resolve includes and report changes without writing
    Check(RunArgs),

    /// Show the include graph of a category
    Graph {
        /// Category to show (dir, ext or file)
        category: ListCategory,

        /// Directory holding the list store files
        #[arg(long, env = "TMLIST_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tmlist=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tmlist=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitStatus> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let output = Output::new(cli.format.unwrap_or(config.format));

    let status = match cli.command {
        Commands::Run(args) => run_cmd::run(args, &config, false, &output)?,
        Commands::Check(args) => run_cmd::run(args, &config, true, &output)?,
        Commands::Graph { category, data_dir } => {
            let data_dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
            graph_cmd::run(&output, &data_dir, category)?
        }
    };

    debug!(code = status.code(), "command completed");
    Ok(status)
}
