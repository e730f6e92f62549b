//! Directive parsing for list descriptions
//!
//! Descriptions are free text that may carry two kinds of machine-readable
//! lines:
//!
//! - Include directives: `include: <name>` (keyword is case-insensitive,
//!   whitespace around keyword and value is ignored)
//! - A dependency annotation: [`DEPENDENCY_PREFIX`] followed by a
//!   comma-separated list of the lists that are populated from this one
//!
//! Everything else is prose and is left alone. All functions here are pure.

use std::collections::BTreeSet;

/// Fixed prefix of the dependency annotation line
pub const DEPENDENCY_PREFIX: &str =
    "Do not delete this list! It is used to populate the following lists:";

const INCLUDE_KEYWORD: &str = "include";

/// Returns the names referenced by include directives, in order of appearance
pub fn extract_includes(description: &str) -> Vec<String> {
    description
        .split('\n')
        .filter_map(|line| {
            let (keyword, value) = line.split_once(':')?;
            if keyword.trim().to_lowercase() != INCLUDE_KEYWORD {
                return None;
            }
            Some(value.trim().to_string())
        })
        .collect()
}

/// Returns true if the description has at least one include directive
pub fn has_includes(description: &str) -> bool {
    !extract_includes(description).is_empty()
}

fn is_dependency_line(line: &str) -> bool {
    line.starts_with(DEPENDENCY_PREFIX)
}

/// Returns the names listed in the dependency annotation
pub fn extract_dependency_names(description: &str) -> BTreeSet<String> {
    description
        .split('\n')
        .filter_map(|line| line.strip_prefix(DEPENDENCY_PREFIX))
        .flat_map(|names| names.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes the dependency annotation, keeping every other line in order
pub fn strip_dependency_line(description: &str) -> String {
    description
        .split('\n')
        .filter(|line| !is_dependency_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records `names` as dependents of the list carrying `description`
///
/// The annotation lists the sorted union of the names already recorded and
/// the new ones, and is always the last line. An empty union leaves no
/// annotation at all.
pub fn append_dependency_annotation<I, S>(description: &str, names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dependents = extract_dependency_names(description);
    dependents.extend(
        names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty()),
    );

    let stripped = strip_dependency_line(description);
    if dependents.is_empty() {
        return stripped;
    }

    let annotation = format!(
        "{} {}",
        DEPENDENCY_PREFIX,
        dependents.into_iter().collect::<Vec<_>>().join(", ")
    );

    if stripped.is_empty() {
        annotation
    } else {
        format!("{}\n{}", stripped, annotation)
    }
}
