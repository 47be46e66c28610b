//! Grid coordinates for tiles, labels and category anchors.

// Generated coordinates are compared exactly; they are sums of small integers
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A point on the landscape plane.
///
/// Anchors may sit on half cells (e.g. `(-4, 2.5)`), so both axes are `f64`.
/// Every generator offsets an anchor by whole steps, which keeps generated
/// positions exactly comparable.
///
/// Serialized as a two-element array `[x, y]`, which keeps anchor tables in
/// `config.toml` compact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coord {
    /// Horizontal grid position
    pub x: f64,
    /// Vertical grid position
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate moved by whole grid steps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx as f64, self.y + dy as f64)
    }

    /// Rounds both axes to the nearest grid cell, ties to even.
    #[must_use]
    pub fn snapped(self) -> Self {
        Self::new(self.x.round_ties_even(), self.y.round_ties_even())
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (f64, f64) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_whole_steps() {
        let anchor = Coord::new(-4.0, 2.5);
        assert_eq!(anchor.offset(2, -1), Coord::new(-2.0, 1.5));
    }

    #[test]
    fn test_snapped_ties_to_even() {
        assert_eq!(Coord::new(0.5, 1.5).snapped(), Coord::new(0.0, 2.0));
        assert_eq!(Coord::new(-2.5, 2.6).snapped(), Coord::new(-2.0, 3.0));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Coord::new(1.0, -0.5)).unwrap();
        assert_eq!(json, "[1.0,-0.5]");

        let parsed: Coord = serde_json::from_str("[2, 3]").unwrap();
        assert_eq!(parsed, Coord::new(2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(1.0, 2.5).to_string(), "(1, 2.5)");
    }
}
