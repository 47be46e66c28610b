//! Category styling and header records.

use crate::models::{Coord, RgbColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colors used for a category's header and its keyword labels.
///
/// Labels use `background` as text color outlined with `color`; headers
/// use the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Dark foreground color
    pub color: RgbColor,
    /// Light background color
    pub background: RgbColor,
}

impl CategoryStyle {
    /// Creates a style from foreground and background colors.
    #[must_use]
    pub const fn new(color: RgbColor, background: RgbColor) -> Self {
        Self { color, background }
    }
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self::new(RgbColor::new(40, 40, 40), RgbColor::new(230, 221, 204))
    }
}

/// Built-in palette for the eight PED landscape categories.
#[must_use]
pub fn default_palette() -> BTreeMap<String, CategoryStyle> {
    [
        ("Economic", (58, 73, 42), (224, 233, 198)),
        ("Environmental", (34, 75, 94), (161, 219, 246)),
        ("Legal", (83, 43, 38), (243, 200, 192)),
        ("Political", (81, 58, 28), (246, 219, 184)),
        ("Social", (43, 54, 74), (199, 212, 235)),
        ("Technological", (63, 56, 15), (221, 213, 170)),
        ("Spatial", (74, 42, 60), (235, 199, 218)),
        ("Process+Methods", (31, 62, 54), (184, 222, 212)),
    ]
    .into_iter()
    .map(|(name, (r, g, b), (br, bg, bb))| {
        (
            name.to_string(),
            CategoryStyle::new(RgbColor::new(r, g, b), RgbColor::new(br, bg, bb)),
        )
    })
    .collect()
}

/// Header label placed next to a category's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHeader {
    /// Category name shown as header text
    pub category: String,
    /// Header position (anchor plus header offset)
    pub position: Coord,
    /// Whether the header is shown
    pub visible: bool,
}
