//! Keyscape Library
//!
//! Builds a keyword landscape from a folder of category/keyword images:
//! scanning the asset tree into a catalog, placing keyword tiles with one of
//! several layout strategies around per-category anchors, and tracking which
//! keywords are highlighted for the active selection.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod landscape;
pub mod layout;
pub mod models;
pub mod projects;
pub mod selection;
pub mod shortcuts;
#[cfg(feature = "web")]
pub mod web;

pub use error::LandscapeError;
pub use landscape::{Assignment, Command, Landscape, LandscapeSettings, Outcome};
