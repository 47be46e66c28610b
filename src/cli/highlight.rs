//! Highlight command: applies a selection and prints the resulting flags.

use crate::cli::common::{open_landscape, print_json, CliError, CliResult, GlobalArgs};
use crate::landscape::Command;
use crate::selection::HighlightMode;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Highlight a selection of keywords
#[derive(Debug, Clone, Args)]
pub struct HighlightArgs {
    /// Keyword names to select (repeatable or comma separated, normalized like
    /// catalog names)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Select the keywords of a project (1-based)
    #[arg(long, value_name = "N", conflicts_with = "select")]
    pub project: Option<usize>,

    /// Project file (overrides the configured one)
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    /// Hide labels of highlighted keywords
    #[arg(long)]
    pub no_labels: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HighlightResponse {
    highlighted: Vec<String>,
    dimmed: Vec<String>,
    labels: Vec<String>,
    matched: Vec<String>,
    unknown: Vec<String>,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let config = global.config()?;
        let name_case = config.catalog.name_case;

        let command = match self.project {
            Some(slot) => Command::SelectProject(slot),
            None if !self.select.is_empty() => Command::SetSelection(
                self.select
                    .iter()
                    .map(|name| name_case.apply(name.trim()))
                    .collect(),
            ),
            None => {
                return Err(CliError::validation(
                    "Nothing to highlight: pass --select NAME or --project N",
                ))
            }
        };

        let mut landscape = open_landscape(&config, self.projects.as_deref())?;

        let outcome = landscape
            .apply(command)
            .map_err(|e| CliError::validation(e.to_string()))?;
        if landscape.selection().mode() == HighlightMode::ShowAll {
            landscape
                .apply(Command::ToggleHighlightMode)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if self.no_labels {
            landscape
                .apply(Command::SetLabelsVisible(false))
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        let report = outcome.selection.unwrap_or_default();
        let (highlighted, dimmed): (Vec<_>, Vec<_>) =
            landscape.keywords().partition(|k| k.highlighted);

        let response = HighlightResponse {
            highlighted: highlighted.iter().map(|k| k.name.clone()).collect(),
            dimmed: dimmed.iter().map(|k| k.name.clone()).collect(),
            labels: landscape
                .keywords()
                .filter(|k| k.label_visible)
                .map(|k| k.name.clone())
                .collect(),
            matched: report.matched,
            unknown: report.unknown,
        };

        if self.json {
            return print_json(&response);
        }

        println!(
            "{} of {} keywords highlighted",
            response.highlighted.len(),
            response.highlighted.len() + response.dimmed.len()
        );
        for name in &response.highlighted {
            println!("  ✓ {name}");
        }
        if !response.unknown.is_empty() {
            println!("\nUnknown keywords:");
            for name in &response.unknown {
                println!("  ⚠ {name}");
            }
        }

        Ok(())
    }
}
