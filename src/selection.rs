//! Selection and highlight state.
//!
//! The landscape is either showing every keyword ([`HighlightMode::ShowAll`])
//! or only the keywords of the active selection
//! ([`HighlightMode::ShowSelection`]). Label and header visibility are
//! independent switches layered on top of that mode.
//!
//! Per-keyword flags are always a pure function of the mode, the selection
//! and the label switch, which makes every toggle an involution.

use crate::models::Keyword;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Which keywords are drawn highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Every keyword is highlighted
    #[default]
    ShowAll,
    /// Only keywords in the selection are highlighted
    ShowSelection,
}

impl HighlightMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ShowAll => Self::ShowSelection,
            Self::ShowSelection => Self::ShowAll,
        }
    }
}

/// Outcome of matching a selection against the known keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    /// Distinct selected names that exist, in selection order
    pub matched: Vec<String>,
    /// Distinct selected names with no keyword, in selection order
    pub unknown: Vec<String>,
}

/// Highlight mode, active selection and visibility switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    mode: HighlightMode,
    selection: Vec<String>,
    labels_visible: bool,
    headers_visible: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl SelectionState {
    /// Creates a state in [`HighlightMode::ShowAll`] with an empty selection.
    #[must_use]
    pub const fn new(labels_visible: bool, headers_visible: bool) -> Self {
        Self {
            mode: HighlightMode::ShowAll,
            selection: Vec::new(),
            labels_visible,
            headers_visible,
        }
    }

    /// Current highlight mode.
    #[must_use]
    pub const fn mode(&self) -> HighlightMode {
        self.mode
    }

    /// Active selection as given by the caller.
    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Global label switch.
    #[must_use]
    pub const fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Global header switch.
    #[must_use]
    pub const fn headers_visible(&self) -> bool {
        self.headers_visible
    }

    /// Whether a keyword is highlighted under the current mode.
    #[must_use]
    pub fn is_highlighted(&self, keyword: &str) -> bool {
        match self.mode {
            HighlightMode::ShowAll => true,
            HighlightMode::ShowSelection => self.selection.iter().any(|s| s == keyword),
        }
    }

    /// Replaces the selection wholesale.
    ///
    /// In [`HighlightMode::ShowAll`] the new selection has no visible effect
    /// until the mode is toggled.
    pub fn set_selection(&mut self, names: Vec<String>) {
        self.selection = names;
    }

    /// Switches between showing everything and showing the selection.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Sets the global label switch.
    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    /// Sets the global header switch.
    pub fn set_headers_visible(&mut self, visible: bool) {
        self.headers_visible = visible;
    }

    /// Matches the selection against `known` keyword names.
    ///
    /// Matching is exact and case-sensitive. Duplicates are reported once.
    pub fn report(&self, known: impl Fn(&str) -> bool) -> SelectionReport {
        let mut seen = HashSet::new();
        let mut report = SelectionReport::default();

        for name in &self.selection {
            if !seen.insert(name.as_str()) {
                continue;
            }
            if known(name) {
                report.matched.push(name.clone());
            } else {
                report.unknown.push(name.clone());
            }
        }

        report
    }

    /// Derives `highlighted`/`label_visible` for every keyword.
    ///
    /// Highlighted keywords show their label iff labels are switched on;
    /// the others never show it.
    pub fn apply(&self, keywords: &mut BTreeMap<String, Keyword>) {
        let selected: HashSet<&str> = self.selection.iter().map(String::as_str).collect();

        for (name, keyword) in keywords.iter_mut() {
            let highlighted = match self.mode {
                HighlightMode::ShowAll => true,
                HighlightMode::ShowSelection => selected.contains(name.as_str()),
            };
            keyword.highlighted = highlighted;
            keyword.label_visible = highlighted && self.labels_visible;
        }
    }
}
