//! Shared CLI types: errors, exit codes and the landscape loading pipeline.

use crate::catalog::{AssetCatalog, ScanReport};
use crate::config::Config;
use crate::landscape::Landscape;
use crate::projects::{load_projects, Project};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or failed checks
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process ends with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or failed checks (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Options accepted by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Asset root (overrides the configured one)
    #[arg(long, global = true, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Keep keyword names as they appear in file names
    #[arg(long, global = true)]
    pub raw_case: bool,

    /// Seed for random selections
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,
}

impl GlobalArgs {
    /// Loads the configuration and applies the command line overrides.
    pub fn config(&self) -> CliResult<Config> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(assets) = &self.assets {
            config.paths.assets.clone_from(assets);
        }
        if self.raw_case {
            config.catalog.name_case = crate::catalog::NameCase::Raw;
        }
        if self.seed.is_some() {
            config.selection.seed = self.seed;
        }

        Ok(config)
    }
}

/// Scans the configured asset root and logs its warnings.
pub fn scan_assets(config: &Config) -> CliResult<ScanReport> {
    let report = AssetCatalog::scan(&config.paths.assets, &config.scan_options())
        .map_err(|e| CliError::io(format!("Failed to scan assets: {e:#}")))?;
    report.log_warnings();
    Ok(report)
}

/// Loads a project file.
pub fn read_projects(path: &Path) -> CliResult<Vec<Project>> {
    load_projects(path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Scans the assets and builds a landscape with the configured projects.
///
/// `projects` overrides the configured project file.
pub fn open_landscape(config: &Config, projects: Option<&Path>) -> CliResult<Landscape> {
    let report = scan_assets(config)?;
    let mut landscape = Landscape::new(report.catalog, config.landscape_settings())
        .map_err(|e| CliError::validation(e.to_string()))?;

    if let Some(path) = projects.or(config.paths.projects.as_deref()) {
        let projects = read_projects(path)?;
        landscape.load_projects(
            &projects,
            config.catalog.name_case,
            config.selection.include_deliverables,
        );
    }

    Ok(landscape)
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("disk").exit_code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::io("disk").to_string(), "disk");
    }
}
