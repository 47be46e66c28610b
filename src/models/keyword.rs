//! Keyword tile records.

use crate::models::Coord;
use serde::{Deserialize, Serialize};

/// One keyword tile on the landscape.
///
/// Identity (`name`, `category`, `path`) comes from the asset catalog and
/// never changes. Layout commands rewrite `position`/`label_position`;
/// selection commands rewrite `highlighted`/`label_visible`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Globally unique keyword name
    pub name: String,
    /// Name of the owning category
    pub category: String,
    /// Asset file backing the tile
    pub path: String,
    /// Whether the tile is drawn highlighted
    pub highlighted: bool,
    /// Whether the tile's label is shown
    pub label_visible: bool,
    /// Current tile position
    pub position: Coord,
    /// Current label position (tile position plus label offset)
    pub label_position: Coord,
}

impl Keyword {
    /// Creates a keyword at the origin, highlighted with its label shown.
    pub fn new(name: impl Into<String>, category: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            path: path.into(),
            highlighted: true,
            label_visible: true,
            position: Coord::default(),
            label_position: Coord::default(),
        }
    }
}
