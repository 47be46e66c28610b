//! Position generators.
//!
//! Each generator maps an anchor and a count to an ordered list of grid
//! positions. They are pure and deterministic; the layout engine decides
//! which keyword receives which position.

use crate::error::LandscapeError;
use crate::models::{Coord, LayoutStrategy};
use std::f64::consts::TAU;

/// Number of slots a clustered block offers per category.
pub const CLUSTERED_BLOCK_CAPACITY: usize = 14;

/// Steps after which the diagonal line wraps back and advances one column.
pub const DIAGONAL_PERIOD: i64 = 5;

/// Default step of the diagonal line.
pub const DEFAULT_LINE_OFFSET: (i64, i64) = (1, 1);

/// Offsets of the block extension, enumerated after the 3×3 core.
const BLOCK_EXTENSION: [(i64, i64); 5] = [(0, 2), (1, 2), (2, 2), (2, 1), (2, 0)];

/// Returns the first `n` cells of the clustered block around `anchor`.
///
/// The candidates are the 3×3 block centered on the anchor, walked column by
/// column (x outer, y inner), followed by `(x,y+2)`, `(x+1,y+2)`,
/// `(x+2,y+2)`, `(x+2,y+1)` and `(x+2,y)`.
///
/// # Errors
///
/// Returns [`LandscapeError::CapacityExceeded`] when `n` exceeds
/// [`CLUSTERED_BLOCK_CAPACITY`]. No partial result is produced.
pub fn clustered_block(anchor: Coord, n: usize) -> Result<Vec<Coord>, LandscapeError> {
    if n > CLUSTERED_BLOCK_CAPACITY {
        return Err(LandscapeError::CapacityExceeded {
            category: String::new(),
            strategy: LayoutStrategy::ClusteredBlock,
            requested: n,
            capacity: CLUSTERED_BLOCK_CAPACITY,
        });
    }

    let core = (-1..=1).flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)));
    Ok(core
        .chain(BLOCK_EXTENSION)
        .take(n)
        .map(|(dx, dy)| anchor.offset(dx, dy))
        .collect())
}

/// Returns `n` cells along a diagonal sawtooth starting at `anchor`.
///
/// Cell `i` is `(x + (ox*i) mod 5 + i div 5, y + (oy*i) mod 5)`. With the
/// default `(1, 1)` step the first 25 cells are pairwise distinct; other
/// steps and much longer runs are not checked for overlaps.
///
/// Both factors are reduced modulo the period before multiplying, so any
/// step is accepted without overflow.
#[must_use]
pub fn diagonal_line(anchor: Coord, n: usize, offset: (i64, i64)) -> Vec<Coord> {
    let ox = offset.0.rem_euclid(DIAGONAL_PERIOD);
    let oy = offset.1.rem_euclid(DIAGONAL_PERIOD);
    (0..n as i64)
        .map(|i| {
            let phase = i % DIAGONAL_PERIOD;
            let dx = (ox * phase) % DIAGONAL_PERIOD + i / DIAGONAL_PERIOD;
            let dy = (oy * phase) % DIAGONAL_PERIOD;
            anchor.offset(dx, dy)
        })
        .collect()
}

/// Returns `n + 1` cells evenly spaced by angle on a circle around `center`.
///
/// Angles run from 0 to 2π inclusive, so the first and last points land on
/// the same cell. Each point is snapped to the nearest grid cell; small
/// radii therefore produce duplicates, which is accepted.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn radial_orbit(center: Coord, distance: f64, n: usize) -> Vec<Coord> {
    (0..=n)
        .map(|k| {
            let angle = if n == 0 { 0.0 } else { TAU * k as f64 / n as f64 };
            Coord::new(
                distance.mul_add(angle.cos(), center.x),
                distance.mul_add(angle.sin(), center.y),
            )
            .snapped()
        })
        .collect()
}
