//! Project keyword files.
//!
//! A project file is a JSON array of projects as exported from the survey
//! spreadsheet: each project lists the keywords it answered "yes" to, and
//! optionally its deliverables with their own keyword lists. Any other
//! field (metadata, acronyms of deliverables, ...) is ignored.

use crate::catalog::NameCase;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Deliverable of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Keywords tagged on the deliverable
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A project and the keywords it is tagged with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    #[serde(default)]
    pub name: Option<String>,
    /// Project acronym
    #[serde(default)]
    pub acronym: Option<String>,
    /// Keywords tagged on the project itself
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Deliverables with their own keywords
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
}

impl Project {
    /// Display label: acronym, then name, then `Project <n>` (1-based).
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.acronym
            .as_deref()
            .or(self.name.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| format!("Project {}", index + 1), str::to_string)
    }

    /// Keywords to select for this project, normalized like catalog names.
    ///
    /// Order is preserved and duplicates are kept; deliverable keywords
    /// follow the project's own when `include_deliverables` is set.
    #[must_use]
    pub fn selection(&self, name_case: NameCase, include_deliverables: bool) -> Vec<String> {
        let deliverables = self
            .deliverables
            .iter()
            .filter(|_| include_deliverables)
            .flat_map(|d| d.keywords.iter());

        self.keywords
            .iter()
            .chain(deliverables)
            .map(|kw| name_case.apply(kw.trim()))
            .collect()
    }
}

/// Loads a project file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// projects.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse project file: {}", path.display()))
}

/// How well a project's keywords match the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMatch {
    /// Project label
    pub project: String,
    /// Distinct keywords the project selects
    pub total: usize,
    /// Distinct keywords present in the catalog
    pub matched: Vec<String>,
    /// Distinct keywords absent from the catalog
    pub unknown: Vec<String>,
}

/// Matches every project's selection against the known keyword names.
pub fn match_projects(
    projects: &[Project],
    known: &BTreeSet<&str>,
    name_case: NameCase,
    include_deliverables: bool,
) -> Vec<ProjectMatch> {
    projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let distinct: BTreeSet<String> = project
                .selection(name_case, include_deliverables)
                .into_iter()
                .collect();
            let (matched, unknown): (Vec<String>, Vec<String>) = distinct
                .iter()
                .cloned()
                .partition(|kw| known.contains(kw.as_str()));

            ProjectMatch {
                project: project.label(idx),
                total: distinct.len(),
                matched,
                unknown,
            }
        })
        .collect()
}
