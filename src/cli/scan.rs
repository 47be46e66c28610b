//! Asset scanning command.

use crate::catalog::{CatalogWarning, KeywordCollision};
use crate::cli::common::{print_json, scan_assets, CliResult, GlobalArgs};
use clap::Args;
use serde::Serialize;

/// Scan the asset tree and summarize the catalog
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// List every flattened keyword with its asset path
    #[arg(long)]
    pub keywords: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScanResponse {
    root: String,
    category_count: usize,
    keyword_count: usize,
    categories: Vec<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<KeywordEntry>>,
    warnings: Vec<CatalogWarning>,
    collisions: Vec<KeywordCollision>,
}

#[derive(Debug, Serialize)]
struct KeywordEntry {
    keyword: String,
    category: String,
    path: String,
}

#[derive(Debug, Serialize)]
struct CategorySummary {
    name: String,
    count: usize,
    keywords: Vec<String>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let config = global.config()?;
        let report = scan_assets(&config)?;
        let catalog = &report.catalog;
        let flat = catalog.flatten();

        let keywords = self.keywords.then(|| {
            flat.entries
                .iter()
                .map(|(name, asset)| KeywordEntry {
                    keyword: name.clone(),
                    category: asset.category.clone(),
                    path: asset.path.clone(),
                })
                .collect()
        });

        let response = ScanResponse {
            root: config.paths.assets.display().to_string(),
            category_count: catalog.category_count(),
            keyword_count: catalog.keyword_count(),
            categories: catalog
                .categories()
                .map(|(name, keywords)| CategorySummary {
                    name: name.to_string(),
                    count: keywords.len(),
                    keywords: keywords.keys().cloned().collect(),
                })
                .collect(),
            keywords,
            warnings: report.warnings.clone(),
            collisions: flat.collisions,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Asset root: {}", response.root);
        println!(
            "{} categories, {} keywords",
            response.category_count, response.keyword_count
        );
        println!();

        for category in &response.categories {
            println!("  {:<24} {:>3}", category.name, category.count);
        }

        if let Some(keywords) = &response.keywords {
            println!("\nKeywords:");
            for entry in keywords {
                println!("  {:<24} {}", entry.keyword, entry.path);
            }
        }

        if !response.warnings.is_empty() {
            println!("\nWarnings:");
            for warning in &response.warnings {
                println!("  ⚠ {warning}");
            }
        }

        if !response.collisions.is_empty() {
            println!("\nCollisions:");
            for collision in &response.collisions {
                println!("  ⚠ {collision}");
            }
        }

        Ok(())
    }
}
