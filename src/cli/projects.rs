//! Project diagnostics: which project keywords exist in the catalog.

use crate::cli::common::{print_json, read_projects, scan_assets, CliError, CliResult, GlobalArgs};
use crate::projects::{match_projects, ProjectMatch};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Report matched and unknown keywords per project
#[derive(Debug, Clone, Args)]
pub struct ProjectsArgs {
    /// Project file (defaults to the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Include deliverable keywords in each project's selection
    #[arg(long)]
    pub deliverables: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProjectsResponse {
    projects: Vec<ProjectMatch>,
    unknown_total: usize,
}

impl ProjectsArgs {
    /// Execute the projects command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let config = global.config()?;
        let path = self
            .file
            .clone()
            .or_else(|| config.paths.projects.clone())
            .ok_or_else(|| {
                CliError::validation("No project file: pass --file or set paths.projects")
            })?;

        let projects = read_projects(&path)?;
        let report = scan_assets(&config)?;
        let flat = report.catalog.flatten();
        let known: BTreeSet<&str> = flat.entries.keys().map(String::as_str).collect();

        let matches = match_projects(
            &projects,
            &known,
            config.catalog.name_case,
            self.deliverables || config.selection.include_deliverables,
        );
        let response = ProjectsResponse {
            unknown_total: matches.iter().map(|m| m.unknown.len()).sum(),
            projects: matches,
        };

        if self.json {
            return print_json(&response);
        }

        for (idx, project) in response.projects.iter().enumerate() {
            println!(
                "{}. {} ({} of {} keywords found)",
                idx + 1,
                project.project,
                project.matched.len(),
                project.total
            );
            for name in &project.unknown {
                println!("   ⚠ {name}");
            }
        }

        Ok(())
    }
}
