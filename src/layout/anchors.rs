//! Per-strategy category anchors.

use crate::models::{Coord, LayoutStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anchor positions, one table per layout strategy.
///
/// Each category may have a different anchor under every strategy. The
/// tables are plain data; which categories exist is decided by the catalog.
/// A strategy missing from serialized data keeps its default table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default = "AnchorTable::with_defaults")]
pub struct AnchorTable {
    /// Anchors for [`LayoutStrategy::ClusteredBlock`]
    pub clustered_block: BTreeMap<String, Coord>,
    /// Anchors for [`LayoutStrategy::DiagonalLine`]
    pub diagonal_line: BTreeMap<String, Coord>,
    /// Anchors for [`LayoutStrategy::RadialOrbit`]
    pub radial_orbit: BTreeMap<String, Coord>,
}

impl AnchorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors of the eight PED landscape categories.
    ///
    /// The block anchors form the PESTEL arrangement, the line anchors march
    /// down a diagonal, and the orbit anchors sit on a 4×2 grid wide enough
    /// for the default orbit radius.
    #[must_use]
    pub fn with_defaults() -> Self {
        fn table(entries: &[(&str, f64, f64)]) -> BTreeMap<String, Coord> {
            entries
                .iter()
                .map(|&(name, x, y)| (name.to_string(), Coord::new(x, y)))
                .collect()
        }

        Self {
            clustered_block: table(&[
                ("Political", -4.0, 2.5),
                ("Spatial", -1.0, 1.0),
                ("Economic", -1.0, 4.0),
                ("Social", 2.0, 2.5),
                ("Legal", -4.0, -0.5),
                ("Environmental", 2.0, -0.5),
                ("Technological", -1.0, -2.0),
                ("Process+Methods", 2.5, -4.0),
            ]),
            diagonal_line: table(&[
                ("Economic", 0.0, 0.0),
                ("Legal", 2.0, -2.0),
                ("Social", 4.0, -4.0),
                ("Spatial", 6.0, -6.0),
                ("Process+Methods", 8.0, -8.0),
                ("Environmental", 10.0, -10.0),
                ("Political", 12.0, -12.0),
                ("Technological", 14.0, -14.0),
            ]),
            radial_orbit: table(&[
                ("Economic", 0.0, 0.0),
                ("Environmental", 8.0, 0.0),
                ("Legal", 16.0, 0.0),
                ("Political", 24.0, 0.0),
                ("Social", 0.0, -8.0),
                ("Technological", 8.0, -8.0),
                ("Spatial", 16.0, -8.0),
                ("Process+Methods", 24.0, -8.0),
            ]),
        }
    }

    /// Returns the anchor table for one strategy.
    #[must_use]
    pub const fn for_strategy(&self, strategy: LayoutStrategy) -> &BTreeMap<String, Coord> {
        match strategy {
            LayoutStrategy::ClusteredBlock => &self.clustered_block,
            LayoutStrategy::DiagonalLine => &self.diagonal_line,
            LayoutStrategy::RadialOrbit => &self.radial_orbit,
        }
    }

    fn for_strategy_mut(&mut self, strategy: LayoutStrategy) -> &mut BTreeMap<String, Coord> {
        match strategy {
            LayoutStrategy::ClusteredBlock => &mut self.clustered_block,
            LayoutStrategy::DiagonalLine => &mut self.diagonal_line,
            LayoutStrategy::RadialOrbit => &mut self.radial_orbit,
        }
    }

    /// Looks up a category's anchor under a strategy.
    #[must_use]
    pub fn get(&self, strategy: LayoutStrategy, category: &str) -> Option<Coord> {
        self.for_strategy(strategy).get(category).copied()
    }

    /// Sets a category's anchor under a strategy.
    pub fn set(&mut self, strategy: LayoutStrategy, category: &str, anchor: Coord) {
        self.for_strategy_mut(strategy)
            .insert(category.to_string(), anchor);
    }

    /// Gives every category in `categories` without an anchor one.
    ///
    /// New anchors are placed left to right on a row `spacing` below the
    /// lowest existing anchor. Returns the names that were filled in.
    pub fn fill_missing<'a>(
        &mut self,
        strategy: LayoutStrategy,
        categories: impl IntoIterator<Item = &'a str>,
        spacing: f64,
    ) -> Vec<String> {
        let table = self.for_strategy_mut(strategy);
        let missing: Vec<String> = categories
            .into_iter()
            .filter(|name| !table.contains_key(*name))
            .map(str::to_string)
            .collect();

        let row = table
            .values()
            .map(|anchor| anchor.y)
            .reduce(f64::min)
            .map_or(0.0, |lowest| lowest - spacing);

        let mut x = 0.0;
        for name in &missing {
            table.insert(name.clone(), Coord::new(x, row));
            x += spacing;
        }

        missing
    }
}
