//! Domain errors raised by layout and landscape commands.
//!
//! Every variant is raised before any state is touched, so a failed command
//! leaves the previous layout and selection in effect.

use crate::models::LayoutStrategy;

/// Errors returned by the layout engine and landscape commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandscapeError {
    /// A category has more keywords than the strategy has slots.
    CapacityExceeded {
        /// Offending category (empty when raised by a bare generator call)
        category: String,
        /// Strategy whose ceiling was hit
        strategy: LayoutStrategy,
        /// Number of positions requested
        requested: usize,
        /// Fixed number of available positions
        capacity: usize,
    },
    /// An unrecognized layout strategy name was requested.
    UnknownStrategy(String),
    /// A populated category has no anchor for the strategy.
    MissingAnchor {
        /// Category without an anchor
        category: String,
        /// Strategy being laid out
        strategy: LayoutStrategy,
    },
    /// A project slot was selected that no project file provided.
    UnknownProject(usize),
}

impl LandscapeError {
    /// Attaches the category name to a capacity error raised by a generator.
    #[must_use]
    pub fn in_category(self, name: &str) -> Self {
        match self {
            Self::CapacityExceeded {
                strategy,
                requested,
                capacity,
                ..
            } => Self::CapacityExceeded {
                category: name.to_string(),
                strategy,
                requested,
                capacity,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for LandscapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded {
                category,
                strategy,
                requested,
                capacity,
            } => {
                if category.is_empty() {
                    write!(
                        f,
                        "{strategy}: only {capacity} positions available, {requested} requested"
                    )
                } else {
                    write!(
                        f,
                        "{strategy}: category '{category}' has {requested} keywords but only {capacity} positions are available"
                    )
                }
            }
            Self::UnknownStrategy(name) => write!(
                f,
                "Unknown layout strategy '{name}'. Expected one of: clustered-block, diagonal-line, radial-orbit"
            ),
            Self::MissingAnchor { category, strategy } => {
                write!(f, "{strategy}: no anchor defined for category '{category}'")
            }
            Self::UnknownProject(slot) => write!(f, "No project loaded for slot {slot}"),
        }
    }
}

impl std::error::Error for LandscapeError {}
