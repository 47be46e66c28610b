//! Layout command: prints tile and header positions for a strategy.

use crate::cli::common::{open_landscape, print_json, CliError, CliResult, GlobalArgs};
use crate::models::{Coord, LayoutStrategy, RgbColor};
use clap::Args;
use serde::Serialize;

/// Compute the landscape layout
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Layout strategy (clustered-block, diagonal-line, radial-orbit)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutResponse {
    strategy: LayoutStrategy,
    tiles: Vec<TileInfo>,
    headers: Vec<HeaderInfo>,
}

#[derive(Debug, Serialize)]
struct TileInfo {
    keyword: String,
    category: String,
    position: Coord,
    label_position: Coord,
}

#[derive(Debug, Serialize)]
struct HeaderInfo {
    category: String,
    position: Coord,
    color: RgbColor,
    background: RgbColor,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut config = global.config()?;
        if let Some(name) = &self.strategy {
            config.layout.strategy = name
                .parse()
                .map_err(|e: crate::error::LandscapeError| CliError::validation(e.to_string()))?;
        }

        let landscape = open_landscape(&config, None)?;

        let response = LayoutResponse {
            strategy: landscape.strategy(),
            tiles: landscape
                .keywords()
                .map(|k| TileInfo {
                    keyword: k.name.clone(),
                    category: k.category.clone(),
                    position: k.position,
                    label_position: k.label_position,
                })
                .collect(),
            headers: landscape
                .headers()
                .into_iter()
                .map(|h| {
                    let style = landscape.style(&h.category);
                    HeaderInfo {
                        category: h.category,
                        position: h.position,
                        color: style.color,
                        background: style.background,
                    }
                })
                .collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Strategy: {}", response.strategy);
        println!("\nHeaders:");
        for header in &response.headers {
            println!("  {:<24} {}", header.category, header.position);
        }
        println!("\nTiles:");
        for tile in &response.tiles {
            println!(
                "  {:<32} {:<16} {}",
                tile.keyword, tile.category, tile.position
            );
        }

        Ok(())
    }
}
