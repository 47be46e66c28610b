//! Shared test fixtures for E2E CLI and API tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use keyscape::catalog::{AssetCatalog, ScanOptions};
use keyscape::config::Config;
use keyscape::landscape::{Landscape, LandscapeSettings};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Writes an asset tree: one directory per category holding empty image files.
pub fn write_asset_tree(root: &Path, categories: &[(&str, &[&str])]) {
    for (category, files) in categories {
        let dir = root.join(category);
        fs::create_dir_all(&dir).expect("Failed to create category dir");
        for file in *files {
            fs::write(dir.join(file), b"").expect("Failed to write asset");
        }
    }
}

/// Small landscape with three known categories and one stray root file.
///
/// Keywords (upper case): AFFORDABILITY, BUSINESS MODELS (Economic),
/// POLICY (Legal), HERITAGE, MOBILITY (Social).
pub fn sample_assets() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_asset_tree(
        temp_dir.path(),
        &[
            ("Economic", &["Affordability.png", "Business Models.png"]),
            ("Legal", &["Policy.png"]),
            ("Social", &["Heritage.jpg", "Mobility.png", "notes.txt"]),
        ],
    );
    fs::write(temp_dir.path().join("readme.txt"), b"stray").expect("Failed to write stray file");
    temp_dir
}

/// Asset tree whose single category overflows the clustered block.
pub fn oversized_assets() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let files: Vec<String> = (0..15).map(|i| format!("Keyword {i:02}.png")).collect();
    let names: Vec<&str> = files.iter().map(String::as_str).collect();
    write_asset_tree(temp_dir.path(), &[("Economic", &names)]);
    temp_dir
}

/// Writes a project file next to the assets and returns its path.
pub fn write_projects(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("projects.json");
    fs::write(&path, json).expect("Failed to write project file");
    path
}

/// Two projects as exported from the survey spreadsheet.
pub const SAMPLE_PROJECTS: &str = r#"[
  {
    "name": "Positive District",
    "acronym": "PD",
    "metadata": {"country": "AT"},
    "keywords": ["Heritage", "Unknown Thing"],
    "deliverables": [{"metadata": {}, "keywords": ["Policy"]}]
  },
  {
    "name": "Green Blocks",
    "acronym": null,
    "keywords": ["Mobility", "Affordability"]
  }
]"#;

/// Builds a landscape over `root` with default settings and a fixed seed.
pub fn sample_landscape(root: &Path) -> Landscape {
    let report = AssetCatalog::scan(root, &ScanOptions::default()).expect("Failed to scan");
    let settings = LandscapeSettings {
        seed: Some(7),
        ..LandscapeSettings::default()
    };
    Landscape::new(report.catalog, settings).expect("Failed to build landscape")
}

/// Default configuration pointing at `root`.
pub fn config_for(root: &Path) -> Config {
    let mut config = Config::new();
    config.paths.assets = root.to_path_buf();
    config.selection.seed = Some(7);
    config
}

/// Path to the keyscape binary
pub fn keyscape_bin() -> String {
    std::env::var("CARGO_BIN_EXE_keyscape").unwrap_or_else(|_| "target/debug/keyscape".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(keyscape_bin());
    cmd.env("KEYSCAPE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs keyscape against `assets` with an isolated config and parses JSON stdout.
pub fn run_json(args: &[&str], assets: &Path) -> (Option<i32>, serde_json::Value) {
    let config_dir = TempDir::new().expect("Failed to create config dir");
    let mut full: Vec<&str> = vec!["--assets", assets.to_str().expect("utf-8 path")];
    full.extend_from_slice(args);

    let output = isolated_command(&full, config_dir.path())
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json = serde_json::from_str(&stdout).unwrap_or(serde_json::Value::Null);
    (output.status.code(), json)
}
