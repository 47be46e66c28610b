//! Data models for keyword landscapes.
//!
//! This module contains the plain data structures shared by the catalog,
//! the layout engine and the selection state. Models are independent of
//! any rendering or input handling.

pub mod category;
pub mod coord;
pub mod keyword;
pub mod rgb;
pub mod strategy;

// Re-export all model types
pub use category::{default_palette, CategoryHeader, CategoryStyle};
pub use coord::Coord;
pub use keyword::Keyword;
pub use rgb::RgbColor;
pub use strategy::LayoutStrategy;
