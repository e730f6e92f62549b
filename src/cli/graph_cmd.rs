//! Include graph command

use anyhow::{Context, Result};
use std::path::Path;

use super::exit::ExitStatus;
use super::output::Output;
use crate::domain::{IncludeGraph, ListCategory};
use crate::storage::{JsonListStore, ListStore};

/// Prints every list of a category, included lists first
pub fn run(output: &Output, data_dir: &Path, category: ListCategory) -> Result<ExitStatus> {
    let store = JsonListStore::new(data_dir);
    let lists = store.fetch(category)?;

    let graph = IncludeGraph::from_lists(&lists)
        .with_context(|| format!("{}: invalid include graph", category.label()))?;
    let order = graph
        .resolution_order()
        .with_context(|| format!("{}: invalid include graph", category.label()))?;

    if output.is_json() {
        let nodes: Vec<_> = order
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "includes": graph.includes(name),
                    "dependents": graph.dependents(name),
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "category": category,
            "lists": nodes,
        }));
    } else {
        println!("{} ({} lists)", category.label(), graph.len());
        output.row(&["NAME", "INCLUDES", "DEPENDENTS"]);
        for name in &order {
            let includes = graph.includes(name).join(", ");
            let dependents = graph.dependents(name).join(", ");
            output.row(&[name.as_str(), or_dash(&includes), or_dash(&dependents)]);
        }
    }

    Ok(ExitStatus::Success)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
