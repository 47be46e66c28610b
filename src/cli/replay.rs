//! Replay command: drives a landscape with a sequence of key presses.

use crate::cli::common::{open_landscape, print_json, CliError, CliResult, GlobalArgs};
use crate::landscape::{Assignment, Snapshot};
use crate::selection::SelectionReport;
use crate::shortcuts::ShortcutRegistry;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Replay key presses against the landscape
#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Keys to press, one per character (e.g. "pal1q")
    #[arg(short, long, value_name = "KEYS")]
    pub keys: String,

    /// Project file (overrides the configured one)
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ReplayStep {
    key: char,
    action: &'static str,
    assignments: Vec<Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<SelectionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReplayResponse {
    steps: Vec<ReplayStep>,
    ignored: Vec<char>,
    quit: bool,
    state: Snapshot,
}

impl ReplayArgs {
    /// Execute the replay command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        if self.keys.is_empty() {
            return Err(CliError::validation("No keys to replay"));
        }

        let config = global.config()?;
        let mut landscape = open_landscape(&config, self.projects.as_deref())?;
        let registry = ShortcutRegistry::new();

        let mut steps = Vec::new();
        let mut ignored = Vec::new();
        let mut quit = false;

        for key in self.keys.chars() {
            let Some(action) = registry.lookup_char(key) else {
                warn!("No action bound to key '{key}'");
                ignored.push(key);
                continue;
            };

            let step = match landscape.apply(action.command()) {
                Ok(outcome) => {
                    quit = outcome.quit;
                    ReplayStep {
                        key,
                        action: action.id(),
                        assignments: outcome.assignments,
                        selection: outcome.selection,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("Key '{key}' rejected: {e}");
                    ReplayStep {
                        key,
                        action: action.id(),
                        assignments: Vec::new(),
                        selection: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            steps.push(step);

            if quit {
                break;
            }
        }

        let response = ReplayResponse {
            steps,
            ignored,
            quit,
            state: landscape.snapshot(),
        };

        if self.json {
            return print_json(&response);
        }

        for step in &response.steps {
            match &step.error {
                Some(error) => println!("{} {:<22} ✗ {error}", step.key, step.action),
                None => println!(
                    "{} {:<22} {} assignments",
                    step.key,
                    step.action,
                    step.assignments.len()
                ),
            }
        }

        let state = &response.state;
        println!();
        println!("Strategy: {}", state.strategy);
        println!("Mode:     {:?}", state.mode);
        println!("Labels:   {}", on_off(state.labels_visible));
        println!("Headers:  {}", on_off(state.headers_visible));
        println!("Debug:    {}", on_off(state.debug));
        println!(
            "Highlighted: {} of {}",
            state.keywords.iter().filter(|k| k.highlighted).count(),
            state.keywords.len()
        );

        Ok(())
    }
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
