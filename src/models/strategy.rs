//! Layout strategy selection.

use crate::error::LandscapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout strategies the engine can place keywords with.
///
/// Exactly one strategy is active at a time. Names are parsed once at the
/// boundary (CLI flags, config files, web requests), so everything past it
/// only ever sees a valid variant. Serde goes through [`FromStr`], so the
/// aliases accepted on the command line also work in `config.toml` and
/// JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutStrategy {
    /// 3×3 block around the anchor plus a five-cell extension (PESTEL view)
    #[default]
    ClusteredBlock,
    /// Sawtooth diagonal that wraps every five steps (line view)
    DiagonalLine,
    /// Evenly spaced points on a circle around the anchor
    RadialOrbit,
}

impl LayoutStrategy {
    /// All strategies in declaration order.
    pub const ALL: [Self; 3] = [Self::ClusteredBlock, Self::DiagonalLine, Self::RadialOrbit];

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClusteredBlock => "clustered-block",
            Self::DiagonalLine => "diagonal-line",
            Self::RadialOrbit => "radial-orbit",
        }
    }

    /// Returns the strategy after `self` in `cycle`.
    ///
    /// Wraps around at the end. If `self` is not part of the cycle, the first
    /// entry is returned; an empty cycle leaves the strategy unchanged.
    #[must_use]
    pub fn next_in(&self, cycle: &[Self]) -> Self {
        match cycle.iter().position(|s| s == self) {
            Some(idx) => cycle[(idx + 1) % cycle.len()],
            None => cycle.first().copied().unwrap_or(*self),
        }
    }
}

impl FromStr for LayoutStrategy {
    type Err = LandscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "clustered-block" | "block" | "pestel" => Ok(Self::ClusteredBlock),
            "diagonal-line" | "line" | "row" => Ok(Self::DiagonalLine),
            "radial-orbit" | "orbit" => Ok(Self::RadialOrbit),
            _ => Err(LandscapeError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for LayoutStrategy {
    type Error = LandscapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayoutStrategy> for String {
    fn from(strategy: LayoutStrategy) -> Self {
        strategy.name().to_string()
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for strategy in LayoutStrategy::ALL {
            assert_eq!(strategy.name().parse::<LayoutStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("pestel".parse::<LayoutStrategy>().unwrap(), LayoutStrategy::ClusteredBlock);
        assert_eq!("Line".parse::<LayoutStrategy>().unwrap(), LayoutStrategy::DiagonalLine);
        assert_eq!("radial_orbit".parse::<LayoutStrategy>().unwrap(), LayoutStrategy::RadialOrbit);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "spiral".parse::<LayoutStrategy>().unwrap_err();
        assert!(matches!(err, LandscapeError::UnknownStrategy(ref name) if name == "spiral"));
    }

    #[test]
    fn test_next_in_cycle() {
        let cycle = [LayoutStrategy::ClusteredBlock, LayoutStrategy::DiagonalLine];
        assert_eq!(LayoutStrategy::ClusteredBlock.next_in(&cycle), LayoutStrategy::DiagonalLine);
        assert_eq!(LayoutStrategy::DiagonalLine.next_in(&cycle), LayoutStrategy::ClusteredBlock);
        assert_eq!(LayoutStrategy::RadialOrbit.next_in(&cycle), LayoutStrategy::ClusteredBlock);
        assert_eq!(LayoutStrategy::RadialOrbit.next_in(&[]), LayoutStrategy::RadialOrbit);
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&LayoutStrategy::DiagonalLine).unwrap();
        assert_eq!(json, "\"diagonal-line\"");
    }

    #[test]
    fn test_serde_accepts_aliases() {
        let parsed: Vec<LayoutStrategy> = serde_json::from_str(r#"["line", "pestel", "orbit"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                LayoutStrategy::DiagonalLine,
                LayoutStrategy::ClusteredBlock,
                LayoutStrategy::RadialOrbit
            ]
        );
    }

    #[test]
    fn test_serde_rejects_unknown_name() {
        let err = serde_json::from_str::<LayoutStrategy>("\"spiral\"").unwrap_err();
        assert!(err.to_string().contains("Unknown layout strategy 'spiral'"));
    }
}
