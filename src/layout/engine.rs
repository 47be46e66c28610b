//! Layout engine: turns a catalog and anchors into tile positions.

use crate::catalog::AssetCatalog;
use crate::error::LandscapeError;
use crate::layout::anchors::AnchorTable;
use crate::layout::generators::{self, DEFAULT_LINE_OFFSET};
use crate::models::{Coord, LayoutStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tunables shared by all layout computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Step of the diagonal line generator
    pub line_offset: (i64, i64),
    /// Circle radius of the radial orbit generator
    pub orbit_radius: f64,
    /// Header position relative to the category anchor
    pub header_offset: Coord,
    /// Label position relative to its tile
    pub label_offset: Coord,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_offset: DEFAULT_LINE_OFFSET,
            orbit_radius: 3.0,
            header_offset: Coord::new(-1.0, -1.0),
            label_offset: Coord::new(0.75, 0.0),
        }
    }
}

impl LayoutOptions {
    /// Distance between anchors generated for categories without one.
    ///
    /// Wide enough that a full category under `strategy` does not reach the
    /// next generated anchor.
    #[must_use]
    pub fn fallback_spacing(&self, strategy: LayoutStrategy) -> f64 {
        match strategy {
            LayoutStrategy::ClusteredBlock => 5.0,
            LayoutStrategy::DiagonalLine => 8.0,
            LayoutStrategy::RadialOrbit => 2.0f64.mul_add(self.orbit_radius, 2.0),
        }
    }
}

/// Positions computed for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Strategy the plan was computed with
    pub strategy: LayoutStrategy,
    /// Keyword name → tile position
    pub positions: BTreeMap<String, Coord>,
    /// Category name → header position
    pub headers: BTreeMap<String, Coord>,
    /// Offset from a tile to its label
    pub label_offset: Coord,
}

impl LayoutPlan {
    /// Position of a keyword's tile.
    #[must_use]
    pub fn position(&self, keyword: &str) -> Option<Coord> {
        self.positions.get(keyword).copied()
    }

    /// Position of a keyword's label.
    #[must_use]
    pub fn label_position(&self, keyword: &str) -> Option<Coord> {
        self.position(keyword).map(|p| p + self.label_offset)
    }
}

/// Runs the generator for `strategy`.
///
/// # Errors
///
/// Propagates [`LandscapeError::CapacityExceeded`] from capped generators.
pub fn generate(
    strategy: LayoutStrategy,
    anchor: Coord,
    count: usize,
    options: &LayoutOptions,
) -> Result<Vec<Coord>, LandscapeError> {
    match strategy {
        LayoutStrategy::ClusteredBlock => generators::clustered_block(anchor, count),
        LayoutStrategy::DiagonalLine => {
            Ok(generators::diagonal_line(anchor, count, options.line_offset))
        }
        LayoutStrategy::RadialOrbit => {
            Ok(generators::radial_orbit(anchor, options.orbit_radius, count))
        }
    }
}

/// Computes tile and header positions for every category in `catalog`.
///
/// Keywords of a category are visited in name order and take positions from
/// the end of the generated list: the first keyword receives the last
/// generated position. Categories without keywords never invoke a generator
/// and only contribute a header when they have an anchor.
///
/// # Errors
///
/// - [`LandscapeError::MissingAnchor`] if a populated category has no anchor
///   for `strategy`
/// - [`LandscapeError::CapacityExceeded`] if a category does not fit
pub fn compute_layout(
    catalog: &AssetCatalog,
    anchors: &AnchorTable,
    strategy: LayoutStrategy,
    options: &LayoutOptions,
) -> Result<LayoutPlan, LandscapeError> {
    let mut plan = LayoutPlan {
        strategy,
        positions: BTreeMap::new(),
        headers: BTreeMap::new(),
        label_offset: options.label_offset,
    };

    for (category, keywords) in catalog.categories() {
        let anchor = anchors.get(strategy, category);
        if let Some(anchor) = anchor {
            plan.headers
                .insert(category.to_string(), anchor + options.header_offset);
        }

        if keywords.is_empty() {
            continue;
        }

        let anchor = anchor.ok_or_else(|| LandscapeError::MissingAnchor {
            category: category.to_string(),
            strategy,
        })?;

        let positions = generate(strategy, anchor, keywords.len(), options)
            .map_err(|e| e.in_category(category))?;

        for (name, position) in keywords.keys().zip(positions.into_iter().rev()) {
            plan.positions.insert(name.clone(), position);
        }
    }

    tracing::debug!(
        strategy = %strategy,
        keywords = plan.positions.len(),
        headers = plan.headers.len(),
        "computed layout"
    );

    Ok(plan)
}
