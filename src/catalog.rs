//! Asset catalog built from a category/keyword folder tree.
//!
//! The expected layout is one directory per category under the asset root,
//! each holding `<keyword>.png` or `<keyword>.jpg` files:
//!
//! ```text
//! assets/img/
//! ├── Economic/
//! │   ├── Affordability.png
//! │   └── Business Models.png
//! └── Social/
//!     └── Heritage.jpg
//! ```
//!
//! Scanning never prints. Noise in the tree (stray files, non-image assets,
//! unreadable directories) is returned as [`CatalogWarning`]s next to the
//! catalog so callers decide how to report it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted as keyword assets (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// How keyword names are derived from asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// Upper-case the file stem (`Heritage.png` → `HERITAGE`)
    #[default]
    Upper,
    /// Keep the file stem as written
    Raw,
}

impl NameCase {
    /// Applies this normalization to a keyword name.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Upper => name.to_uppercase(),
            Self::Raw => name.to_string(),
        }
    }
}

/// Options controlling a catalog scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Keyword name normalization
    pub name_case: NameCase,
}

/// Non-fatal problem found while scanning the asset tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// A top-level entry that is not a directory
    NonDirectoryCategory {
        /// Offending path
        path: PathBuf,
    },
    /// A category entry that is not a `.png`/`.jpg` file
    NonImageAsset {
        /// Category the entry was found in
        category: String,
        /// Offending path
        path: PathBuf,
    },
    /// A category directory that could not be listed
    UnreadableCategory {
        /// Category directory
        path: PathBuf,
        /// I/O error description
        reason: String,
    },
    /// Two assets in one category normalize to the same keyword name
    DuplicateKeyword {
        /// Category holding both assets
        category: String,
        /// Normalized keyword name
        keyword: String,
        /// Asset that replaced the earlier one
        path: PathBuf,
    },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDirectoryCategory { path } => {
                write!(f, "Non categorized file {}", path.display())
            }
            Self::NonImageAsset { category, path } => {
                write!(f, "Non-image file {} in category '{category}'", path.display())
            }
            Self::UnreadableCategory { path, reason } => {
                write!(f, "Cannot read category directory {}: {reason}", path.display())
            }
            Self::DuplicateKeyword {
                category,
                keyword,
                path,
            } => write!(
                f,
                "Keyword '{keyword}' appears twice in category '{category}', keeping {}",
                path.display()
            ),
        }
    }
}

/// Catalog entry for one keyword after flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Asset file path
    pub path: String,
    /// Owning category
    pub category: String,
}

/// A keyword name present in more than one category.
///
/// Flattening keeps the entry from the later category (in category name
/// order) and drops the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCollision {
    /// Colliding keyword name
    pub keyword: String,
    /// Category whose entry was dropped
    pub dropped_category: String,
    /// Category whose entry was kept
    pub kept_category: String,
}

impl fmt::Display for KeywordCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Keyword '{}' exists in '{}' and '{}'; keeping '{}'",
            self.keyword, self.dropped_category, self.kept_category, self.kept_category
        )
    }
}

/// All keywords in one namespace, plus the collisions that merging produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatCatalog {
    /// Keyword name → descriptor
    pub entries: BTreeMap<String, AssetDescriptor>,
    /// Names that appeared in more than one category
    pub collisions: Vec<KeywordCollision>,
}

/// Result of scanning an asset tree.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Catalog built from every valid entry
    pub catalog: AssetCatalog,
    /// Entries that were skipped
    pub warnings: Vec<CatalogWarning>,
}

impl ScanReport {
    /// Emits every warning through `tracing`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

/// Two-level mapping category → keyword → asset path.
///
/// Both levels are ordered by name, which fixes the iteration order the
/// layout engine relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    categories: BTreeMap<String, BTreeMap<String, String>>,
}

impl AssetCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `root` for category directories and keyword assets.
    ///
    /// Entries are visited in file name order so repeated scans of the same
    /// tree yield identical catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error only if `root` itself cannot be listed. Every other
    /// problem is reported as a [`CatalogWarning`].
    pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for category_path in sorted_entries(root)
            .with_context(|| format!("Failed to read asset directory: {}", root.display()))?
        {
            if !category_path.is_dir() {
                report.warnings.push(CatalogWarning::NonDirectoryCategory {
                    path: category_path,
                });
                continue;
            }

            let category = file_name(&category_path);
            report.catalog.ensure_category(&category);

            let assets = match sorted_entries(&category_path) {
                Ok(assets) => assets,
                Err(e) => {
                    report.warnings.push(CatalogWarning::UnreadableCategory {
                        path: category_path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for asset_path in assets {
                if !asset_path.is_file() || !has_image_extension(&asset_path) {
                    report.warnings.push(CatalogWarning::NonImageAsset {
                        category: category.clone(),
                        path: asset_path,
                    });
                    continue;
                }

                let stem = asset_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let keyword = options.name_case.apply(&stem);
                let path = asset_path.display().to_string();

                if report.catalog.insert(&category, &keyword, path).is_some() {
                    report.warnings.push(CatalogWarning::DuplicateKeyword {
                        category: category.clone(),
                        keyword,
                        path: asset_path,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Adds a keyword to a category, creating the category if needed.
    ///
    /// Returns the previous path if the keyword already existed in that
    /// category.
    pub fn insert(&mut self, category: &str, keyword: &str, path: impl Into<String>) -> Option<String> {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(keyword.to_string(), path.into())
    }

    /// Registers a category without keywords.
    pub fn ensure_category(&mut self, category: &str) {
        self.categories.entry(category.to_string()).or_default();
    }

    /// Iterates categories and their keyword → path maps in name order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.categories.iter().map(|(name, kws)| (name.as_str(), kws))
    }

    /// Category names in order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Keyword names of one category in order.
    pub fn keywords(&self, category: &str) -> impl Iterator<Item = &str> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|kws| kws.keys().map(String::as_str))
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of keyword entries summed over all categories.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no category holds any keyword.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyword_count() == 0
    }

    /// Merges all categories into one keyword namespace.
    ///
    /// A keyword present in several categories keeps the entry of the last
    /// category in name order; every overwrite is listed in
    /// [`FlatCatalog::collisions`].
    #[must_use]
    pub fn flatten(&self) -> FlatCatalog {
        let mut flat = FlatCatalog::default();

        for (category, keywords) in &self.categories {
            for (keyword, path) in keywords {
                let descriptor = AssetDescriptor {
                    path: path.clone(),
                    category: category.clone(),
                };
                if let Some(previous) = flat.entries.insert(keyword.clone(), descriptor) {
                    flat.collisions.push(KeywordCollision {
                        keyword: keyword.clone(),
                        dropped_category: previous.category,
                        kept_category: category.clone(),
                    });
                }
            }
        }

        flat
    }
}

/// Lists a directory's entries sorted by file name.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
