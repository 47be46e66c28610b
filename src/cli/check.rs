//! Check command: validates the catalog against every layout strategy.

use crate::catalog::CatalogWarning;
use crate::cli::common::{print_json, scan_assets, CliError, CliResult, GlobalArgs};
use crate::layout::compute_layout;
use crate::models::LayoutStrategy;
use clap::Args;
use serde::Serialize;

/// Check that every strategy can lay out the catalog
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    strategies: Vec<StrategyCheck>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StrategyCheck {
    strategy: LayoutStrategy,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let config = global.config()?;
        let report = scan_assets(&config)?;
        let catalog = &report.catalog;
        let options = config.layout.options();

        let mut anchors = config.anchors.clone();
        if config.catalog.fill_missing_anchors {
            for strategy in LayoutStrategy::ALL {
                anchors.fill_missing(
                    strategy,
                    catalog.category_names(),
                    options.fallback_spacing(strategy),
                );
            }
        }

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let strategies: Vec<StrategyCheck> = LayoutStrategy::ALL
            .into_iter()
            .map(|strategy| match compute_layout(catalog, &anchors, strategy, &options) {
                Ok(_) => StrategyCheck {
                    strategy,
                    status: "passed",
                    message: None,
                },
                Err(e) => {
                    errors.push(e.to_string());
                    StrategyCheck {
                        strategy,
                        status: "failed",
                        message: Some(e.to_string()),
                    }
                }
            })
            .collect();

        for warning in &report.warnings {
            match warning {
                CatalogWarning::DuplicateKeyword { .. } => errors.push(warning.to_string()),
                _ => warnings.push(warning.to_string()),
            }
        }
        warnings.extend(catalog.flatten().collisions.iter().map(ToString::to_string));

        let response = CheckResponse {
            valid: errors.is_empty(),
            strategies,
            errors,
            warnings,
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Check passed");
            } else {
                println!("✗ Check failed");
            }

            println!("\nStrategies:");
            for check in &response.strategies {
                println!("  {:<16} {}", check.strategy.name(), check.status);
            }

            for error in &response.errors {
                println!("  ✗ {error}");
            }
            for warning in &response.warnings {
                println!("  ⚠ {warning}");
            }
        }

        if !response.valid {
            return Err(CliError::validation("Check failed"));
        }

        Ok(())
    }
}
