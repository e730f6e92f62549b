//! Resolve and write back commands

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

use super::exit::ExitStatus;
use super::output::Output;
use crate::domain::{Batch, ListCategory};
use crate::storage::{Config, JsonListStore, ListStore};

/// Options shared by `run` and `check`
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Process directory lists
    #[arg(long)]
    pub dir: bool,

    /// Process file extension lists
    #[arg(long)]
    pub ext: bool,

    /// Process file lists
    #[arg(long)]
    pub file: bool,

    /// Do not modify existing lists
    #[arg(long, env = "TMLIST_DRY_RUN")]
    pub dry_run: bool,

    /// Directory holding the list store files
    #[arg(long, env = "TMLIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl RunArgs {
    /// Selected categories; all configured ones when no flag is given
    pub fn categories(&self, config: &Config) -> Vec<ListCategory> {
        let selected: Vec<_> = [
            (self.dir, ListCategory::Directory),
            (self.ext, ListCategory::FileExtension),
            (self.file, ListCategory::File),
        ]
        .into_iter()
        .filter_map(|(flag, category)| flag.then_some(category))
        .collect();

        if selected.is_empty() {
            ListCategory::ALL
                .into_iter()
                .filter(|category| config.categories.contains(category))
                .collect()
        } else {
            selected
        }
    }
}

/// Result of processing one category
#[derive(Debug, Serialize)]
pub struct CategoryReport {
    pub category: ListCategory,

    /// Names of the lists whose resolved state differs from the store
    pub changed: Vec<String>,

    /// Whether the changes were written back
    pub written: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    pub status: ExitStatus,
}

impl CategoryReport {
    fn new(category: ListCategory) -> Self {
        Self {
            category,
            changed: Vec::new(),
            written: false,
            error: None,
            status: ExitStatus::Success,
        }
    }

    fn fail(mut self, status: ExitStatus, error: &anyhow::Error) -> Self {
        error!("{}: {:#}", self.category.label(), error);
        self.status = status;
        self.error = Some(format!("{:#}", error));
        self
    }
}

/// Fetches, resolves and writes back one category
///
/// Nothing is written when resolution fails. A failed write stops the
/// remaining writes of the category.
pub fn process_category(
    store: &dyn ListStore,
    category: ListCategory,
    dry_run: bool,
) -> CategoryReport {
    let label = category.label();
    let mut report = CategoryReport::new(category);
    info!("{}: Start", label);

    let lists = match store.fetch(category) {
        Ok(lists) => lists,
        Err(e) => return report.fail(ExitStatus::StoreFailure, &e),
    };

    let mut batch = Batch::new(lists);
    if let Err(e) = batch.resolve() {
        let status = ExitStatus::from_resolve(&e);
        return report.fail(status, &anyhow::Error::from(e));
    }

    if !batch.has_changes() {
        info!("{}: No modifications", label);
        return report;
    }

    for change in batch.changes() {
        info!("{}: modify {}", label, change.list.name);
        report.changed.push(change.list.name.clone());

        if dry_run {
            continue;
        }
        if let Err(e) = store.update(category, &change.update()) {
            return report.fail(ExitStatus::StoreFailure, &e);
        }
    }

    report.written = !dry_run;
    report
}

/// Runs the selected categories and reports each one
pub fn run(
    args: RunArgs,
    config: &Config,
    force_dry_run: bool,
    output: &Output,
) -> Result<ExitStatus> {
    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
    let dry_run = force_dry_run || args.dry_run || config.dry_run;
    let store = JsonListStore::new(data_dir);

    let reports: Vec<CategoryReport> = args
        .categories(config)
        .into_iter()
        .map(|category| process_category(&store, category, dry_run))
        .collect();

    let status = reports
        .iter()
        .fold(ExitStatus::Success, |acc, report| acc.worst(report.status));

    if output.is_json() {
        output.data(&reports);
    } else {
        for report in &reports {
            print_report(output, report, dry_run);
        }
    }

    Ok(status)
}

fn print_report(output: &Output, report: &CategoryReport, dry_run: bool) {
    let label = report.category.label();

    if let Some(error) = &report.error {
        output.error(&format!("{}: {}", label, error));
    } else if report.changed.is_empty() {
        output.success(&format!("{}: no modifications", label));
    } else if dry_run {
        output.success(&format!(
            "{}: would modify {} (dry run)",
            label,
            report.changed.join(", ")
        ));
    } else {
        output.success(&format!("{}: modified {}", label, report.changed.join(", ")));
    }
}
