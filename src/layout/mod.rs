//! Keyword placement.
//!
//! The `generators` module holds the pure position generators, `anchors`
//! the per-strategy category anchors, and `engine` combines both with the
//! asset catalog into a [`LayoutPlan`].

pub mod anchors;
pub mod engine;
pub mod generators;

pub use anchors::AnchorTable;
pub use engine::{compute_layout, generate, LayoutOptions, LayoutPlan};
