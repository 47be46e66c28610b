//! Configuration management CLI commands.

use crate::catalog::NameCase;
use crate::cli::common::{print_json, CliError, CliResult, GlobalArgs};
use crate::config::Config;
use crate::error::LandscapeError;
use crate::models::LayoutStrategy;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
///
/// The asset root is taken from the global `--assets` option.
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Project keyword file
    #[arg(long = "projects", value_name = "FILE")]
    projects_file: Option<PathBuf>,

    /// Startup layout strategy
    #[arg(long, value_name = "STRATEGY")]
    strategy: Option<String>,

    /// Keyword name case (upper or raw)
    #[arg(long, value_name = "CASE")]
    name_case: Option<String>,

    /// Keywords picked by a random selection
    #[arg(long, value_name = "N")]
    sample_size: Option<usize>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    catalog: CatalogOutput,
    layout: LayoutOutput,
    selection: SelectionOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    assets: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    projects: Option<String>,
}

#[derive(Serialize, Debug)]
struct CatalogOutput {
    name_case: NameCase,
    fill_missing_anchors: bool,
}

#[derive(Serialize, Debug)]
struct LayoutOutput {
    strategy: LayoutStrategy,
    cycle: Vec<LayoutStrategy>,
    orbit_radius: f64,
}

#[derive(Serialize, Debug)]
struct SelectionOutput {
    sample_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    include_deliverables: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(global),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&build_output(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        if global.assets.is_none()
            && self.projects_file.is_none()
            && self.strategy.is_none()
            && self.name_case.is_none()
            && self.sample_size.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --assets, --projects, --strategy, --name-case, or --sample-size",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &global.assets {
            if !path.is_dir() {
                return Err(CliError::validation(format!(
                    "Asset directory does not exist: {}",
                    path.display()
                )));
            }
            config.paths.assets.clone_from(path);
        }

        if let Some(path) = &self.projects_file {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Project file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.projects = Some(path.clone());
        }

        if let Some(name) = &self.strategy {
            config.layout.strategy = name
                .parse()
                .map_err(|e: LandscapeError| CliError::validation(e.to_string()))?;
        }

        if let Some(case) = &self.name_case {
            config.catalog.name_case = match case.to_lowercase().as_str() {
                "upper" => NameCase::Upper,
                "raw" => NameCase::Raw,
                _ => {
                    return Err(CliError::validation(
                        "Invalid name case. Must be 'upper' or 'raw'",
                    ))
                }
            };
        }

        if let Some(size) = self.sample_size {
            config.selection.sample_size = size;
        }

        config.validate().map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        config_file: Config::config_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        paths: PathsOutput {
            assets: config.paths.assets.display().to_string(),
            projects: config
                .paths
                .projects
                .as_ref()
                .map(|p| p.display().to_string()),
        },
        catalog: CatalogOutput {
            name_case: config.catalog.name_case,
            fill_missing_anchors: config.catalog.fill_missing_anchors,
        },
        layout: LayoutOutput {
            strategy: config.layout.strategy,
            cycle: config.layout.cycle.clone(),
            orbit_radius: config.layout.orbit_radius,
        },
        selection: SelectionOutput {
            sample_size: config.selection.sample_size,
            seed: config.selection.seed,
            include_deliverables: config.selection.include_deliverables,
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Keyscape Configuration");
    println!("======================");
    println!();

    println!("Paths:");
    println!("  Assets:   {}", config.paths.assets.display());
    match &config.paths.projects {
        Some(path) => println!("  Projects: {}", path.display()),
        None => println!("  Projects: (not configured)"),
    }
    println!();

    println!("Layout:");
    println!("  Strategy: {}", config.layout.strategy);
    let cycle: Vec<&str> = config.layout.cycle.iter().map(LayoutStrategy::name).collect();
    println!("  Cycle:    {}", cycle.join(" → "));
    println!();

    println!("Selection:");
    println!("  Sample size: {}", config.selection.sample_size);
    println!(
        "  Name case:   {}",
        format!("{:?}", config.catalog.name_case).to_lowercase()
    );
    println!();
}
