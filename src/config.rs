//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::catalog::{NameCase, ScanOptions};
use crate::constants::{APP_NAME, CONFIG_DIR_ENV, DEFAULT_ASSET_DIR};
use crate::landscape::LandscapeSettings;
use crate::layout::generators::DIAGONAL_PERIOD;
use crate::layout::{AnchorTable, LayoutOptions};
use crate::models::{default_palette, CategoryStyle, Coord, LayoutStrategy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Asset root holding one directory per category
    pub assets: PathBuf,
    /// Project keyword file (JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<PathBuf>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from(DEFAULT_ASSET_DIR),
            projects: None,
        }
    }
}

/// Asset scanning settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// How keyword names are derived from file names
    pub name_case: NameCase,
    /// Generate anchors for categories found on disk but not configured
    pub fill_missing_anchors: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name_case: NameCase::default(),
            fill_missing_anchors: true,
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Strategy used at startup
    pub strategy: LayoutStrategy,
    /// Strategies the layout toggle rotates through
    pub cycle: Vec<LayoutStrategy>,
    /// Radius of the radial orbit
    pub orbit_radius: f64,
    /// Header position relative to the category anchor
    pub header_offset: Coord,
    /// Label position relative to its tile
    pub label_offset: Coord,
    /// Step of the diagonal line
    pub line_offset: (i64, i64),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let options = LayoutOptions::default();
        Self {
            strategy: LayoutStrategy::default(),
            cycle: vec![LayoutStrategy::ClusteredBlock, LayoutStrategy::DiagonalLine],
            orbit_radius: options.orbit_radius,
            header_offset: options.header_offset,
            label_offset: options.label_offset,
            line_offset: options.line_offset,
        }
    }
}

impl LayoutConfig {
    /// Layout tunables derived from this section.
    #[must_use]
    pub const fn options(&self) -> LayoutOptions {
        LayoutOptions {
            line_offset: self.line_offset,
            orbit_radius: self.orbit_radius,
            header_offset: self.header_offset,
            label_offset: self.label_offset,
        }
    }
}

/// Random and project selection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Keywords picked by a random selection
    pub sample_size: usize,
    /// Seed for reproducible random selections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Add deliverable keywords to a project's selection
    pub include_deliverables: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            seed: None,
            include_deliverables: false,
        }
    }
}

/// Display switches at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show keyword labels
    pub labels_visible: bool,
    /// Show category headers
    pub headers_visible: bool,
    /// Start with the debug switch on
    pub debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            labels_visible: true,
            headers_visible: true,
            debug: false,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Keyscape/config.toml`
/// - macOS: `~/Library/Application Support/Keyscape/config.toml`
/// - Windows: `%APPDATA%\Keyscape\config.toml`
///
/// `KEYSCAPE_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - the layout cycle must not be empty
/// - `orbit_radius` must be a positive finite number
/// - `sample_size` must be at least 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Asset scanning
    pub catalog: CatalogConfig,
    /// Layout settings
    pub layout: LayoutConfig,
    /// Anchors per strategy
    pub anchors: AnchorTable,
    /// Selection settings
    pub selection: SelectionConfig,
    /// Display switches
    pub ui: UiConfig,
    /// Category colors
    pub palette: BTreeMap<String, CategoryStyle>,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: PathConfig::default(),
            catalog: CatalogConfig::default(),
            layout: LayoutConfig::default(),
            anchors: AnchorTable::with_defaults(),
            selection: SelectionConfig::default(),
            ui: UiConfig::default(),
            palette: default_palette(),
        }
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `KEYSCAPE_CONFIG_DIR` wins when set; otherwise:
    ///
    /// - Linux: `~/.config/Keyscape/`
    /// - macOS: `~/Library/Application Support/Keyscape/`
    /// - Windows: `%APPDATA%\Keyscape\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.layout.cycle.is_empty() {
            anyhow::bail!("Layout cycle must name at least one strategy");
        }

        if !self.layout.orbit_radius.is_finite() || self.layout.orbit_radius <= 0.0 {
            anyhow::bail!(
                "Orbit radius must be a positive number, got {}",
                self.layout.orbit_radius
            );
        }

        let (ox, oy) = self.layout.line_offset;
        let limit = DIAGONAL_PERIOD.unsigned_abs();
        if ox.unsigned_abs() > limit || oy.unsigned_abs() > limit || (ox, oy) == (0, 0) {
            anyhow::bail!(
                "Line offset must be a non-zero step within ±{DIAGONAL_PERIOD} per axis, got [{ox}, {oy}]"
            );
        }

        if self.selection.sample_size == 0 {
            anyhow::bail!("Selection sample size must be at least 1");
        }

        Ok(())
    }

    /// Scan options for the asset catalog.
    #[must_use]
    pub const fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            name_case: self.catalog.name_case,
        }
    }

    /// Settings for building a landscape.
    #[must_use]
    pub fn landscape_settings(&self) -> LandscapeSettings {
        LandscapeSettings {
            anchors: self.anchors.clone(),
            options: self.layout.options(),
            strategy: self.layout.strategy,
            cycle: self.layout.cycle.clone(),
            fill_missing_anchors: self.catalog.fill_missing_anchors,
            labels_visible: self.ui.labels_visible,
            headers_visible: self.ui.headers_visible,
            sample_size: self.selection.sample_size,
            seed: self.selection.seed,
            palette: self.palette.clone(),
            debug: self.ui.debug,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
