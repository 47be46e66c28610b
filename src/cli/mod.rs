//! CLI command handlers for Keyscape.
//!
//! This module provides headless, scriptable access to the landscape:
//! scanning assets, computing layouts, applying selections and replaying
//! key presses, with human-readable or JSON output.

pub mod check;
pub mod common;
pub mod config;
pub mod highlight;
pub mod layout;
pub mod projects;
pub mod replay;
pub mod scan;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode, GlobalArgs};
pub use config::ConfigArgs;
pub use highlight::HighlightArgs;
pub use layout::LayoutArgs;
pub use projects::ProjectsArgs;
pub use replay::ReplayArgs;
pub use scan::ScanArgs;
