//! The keyword landscape: keyword records plus the commands that change them.
//!
//! A [`Landscape`] owns every [`Keyword`] record built from the asset
//! catalog. Input surfaces (key bindings, the CLI, the web API) translate
//! their events into [`Command`]s; [`Landscape::apply`] runs each command to
//! completion and returns the [`Assignment`]s a presentation layer needs to
//! mirror the change. A command that fails leaves the landscape untouched.

use crate::catalog::{AssetCatalog, KeywordCollision};
use crate::error::LandscapeError;
use crate::layout::{compute_layout, AnchorTable, LayoutOptions, LayoutPlan};
use crate::models::{CategoryHeader, CategoryStyle, Coord, Keyword, LayoutStrategy};
use crate::projects::Project;
use crate::selection::{HighlightMode, SelectionReport, SelectionState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Settings a landscape is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct LandscapeSettings {
    /// Anchors per strategy
    pub anchors: AnchorTable,
    /// Layout tunables
    pub options: LayoutOptions,
    /// Strategy active after creation
    pub strategy: LayoutStrategy,
    /// Strategies [`Command::ToggleStrategy`] rotates through
    pub cycle: Vec<LayoutStrategy>,
    /// Generate anchors for categories the tables do not mention
    pub fill_missing_anchors: bool,
    /// Initial label switch
    pub labels_visible: bool,
    /// Initial header switch
    pub headers_visible: bool,
    /// Number of keywords a random selection picks
    pub sample_size: usize,
    /// Seed for random selections (OS entropy when unset)
    pub seed: Option<u64>,
    /// Category colors
    pub palette: BTreeMap<String, CategoryStyle>,
    /// Initial debug switch
    pub debug: bool,
}

impl Default for LandscapeSettings {
    fn default() -> Self {
        Self {
            anchors: AnchorTable::with_defaults(),
            options: LayoutOptions::default(),
            strategy: LayoutStrategy::ClusteredBlock,
            cycle: vec![LayoutStrategy::ClusteredBlock, LayoutStrategy::DiagonalLine],
            fill_missing_anchors: true,
            labels_visible: true,
            headers_visible: true,
            sample_size: 10,
            seed: None,
            palette: crate::models::default_palette(),
            debug: false,
        }
    }
}

/// A discrete request to change the landscape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    /// Replace the selection with these keyword names
    SetSelection(Vec<String>),
    /// Replace the selection with a random sample of keywords
    RandomSelection,
    /// Replace the selection with a loaded project's keywords (1-based slot)
    SelectProject(usize),
    /// Switch between showing all keywords and showing the selection
    ToggleHighlightMode,
    /// Set the label switch
    SetLabelsVisible(bool),
    /// Flip the label switch
    ToggleLabels,
    /// Set the header switch
    SetHeadersVisible(bool),
    /// Flip the header switch
    ToggleHeaders,
    /// Lay out with a specific strategy
    SetStrategy(LayoutStrategy),
    /// Lay out with the next strategy of the cycle
    ToggleStrategy,
    /// Flip the debug switch
    ToggleDebug,
    /// Ask the driving loop to stop
    Quit,
}

/// A change a presentation layer must mirror.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assignment {
    /// New tile and label position of a keyword
    TilePosition {
        /// Keyword name
        keyword: String,
        /// Tile position
        position: Coord,
        /// Label position
        label_position: Coord,
    },
    /// New highlight/label flags of a keyword
    TileFlags {
        /// Keyword name
        keyword: String,
        /// Whether the tile is highlighted
        highlighted: bool,
        /// Whether the label is shown
        label_visible: bool,
    },
    /// New position/visibility of a category header
    Header {
        /// Category name
        category: String,
        /// Header position
        position: Coord,
        /// Whether the header is shown
        visible: bool,
    },
}

/// Result of applying one command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    /// Changes to push to the presentation layer
    pub assignments: Vec<Assignment>,
    /// Selection diagnostics, for commands that replace the selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionReport>,
    /// Whether the driving loop should stop
    pub quit: bool,
}

/// Serializable view of the whole landscape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Active strategy
    pub strategy: LayoutStrategy,
    /// Active highlight mode
    pub mode: HighlightMode,
    /// Label switch
    pub labels_visible: bool,
    /// Header switch
    pub headers_visible: bool,
    /// Debug switch
    pub debug: bool,
    /// Active selection
    pub selection: Vec<String>,
    /// Keyword records in name order
    pub keywords: Vec<Keyword>,
    /// Category headers in name order
    pub headers: Vec<CategoryHeader>,
}

/// Keyword records, layout and selection state of one landscape.
#[derive(Debug, Clone)]
pub struct Landscape {
    catalog: AssetCatalog,
    collisions: Vec<KeywordCollision>,
    keywords: BTreeMap<String, Keyword>,
    anchors: AnchorTable,
    options: LayoutOptions,
    cycle: Vec<LayoutStrategy>,
    plan: LayoutPlan,
    selection: SelectionState,
    palette: BTreeMap<String, CategoryStyle>,
    projects: Vec<Vec<String>>,
    sample_size: usize,
    rng: StdRng,
    debug: bool,
}

impl Landscape {
    /// Builds a landscape from a catalog and lays it out.
    ///
    /// The initial selection is a random sample of `sample_size` keywords;
    /// the highlight mode starts at [`HighlightMode::ShowAll`].
    ///
    /// # Errors
    ///
    /// Fails if the initial strategy cannot lay out the catalog.
    pub fn new(catalog: AssetCatalog, settings: LandscapeSettings) -> Result<Self, LandscapeError> {
        let LandscapeSettings {
            mut anchors,
            options,
            strategy,
            cycle,
            fill_missing_anchors,
            labels_visible,
            headers_visible,
            sample_size,
            seed,
            palette,
            debug,
        } = settings;

        if fill_missing_anchors {
            for s in LayoutStrategy::ALL {
                let filled =
                    anchors.fill_missing(s, catalog.category_names(), options.fallback_spacing(s));
                if !filled.is_empty() {
                    warn!("{s}: generated anchors for categories {}", filled.join(", "));
                }
            }
        }

        let flat = catalog.flatten();
        for collision in &flat.collisions {
            warn!("{}", collision);
        }

        let keywords = flat
            .entries
            .into_iter()
            .map(|(name, asset)| {
                let keyword = Keyword::new(name.clone(), asset.category, asset.path);
                (name, keyword)
            })
            .collect();

        let plan = compute_layout(&catalog, &anchors, strategy, &options)?;

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut landscape = Self {
            catalog,
            collisions: flat.collisions,
            keywords,
            anchors,
            options,
            cycle,
            plan,
            selection: SelectionState::new(labels_visible, headers_visible),
            palette,
            projects: Vec::new(),
            sample_size,
            rng,
            debug,
        };

        let initial = landscape.random_sample();
        landscape.selection.set_selection(initial);
        landscape.place_tiles();
        landscape.selection.apply(&mut landscape.keywords);

        info!(
            keywords = landscape.keywords.len(),
            categories = landscape.catalog.category_count(),
            strategy = %strategy,
            "landscape ready"
        );

        Ok(landscape)
    }

    /// Registers the selections of loaded projects for [`Command::SelectProject`].
    ///
    /// Each entry is a ready-to-use selection, already normalized to the
    /// catalog's name case.
    pub fn set_projects(&mut self, projects: Vec<Vec<String>>) {
        self.projects = projects;
    }

    /// Convenience wrapper over [`Landscape::set_projects`] for parsed project files.
    pub fn load_projects(
        &mut self,
        projects: &[Project],
        name_case: crate::catalog::NameCase,
        include_deliverables: bool,
    ) {
        self.set_projects(
            projects
                .iter()
                .map(|p| p.selection(name_case, include_deliverables))
                .collect(),
        );
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns the layout error of a strategy switch that cannot be laid out,
    /// or [`LandscapeError::UnknownProject`] for an empty project slot. In
    /// both cases nothing changes.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, LandscapeError> {
        info!(?command, "applying command");

        let mut outcome = Outcome::default();
        match command {
            Command::SetSelection(names) => {
                outcome.selection = Some(self.replace_selection(names));
                outcome.assignments = self.selection_assignments();
            }
            Command::RandomSelection => {
                let names = self.random_sample();
                outcome.selection = Some(self.replace_selection(names));
                outcome.assignments = self.selection_assignments();
            }
            Command::SelectProject(slot) => {
                let names = slot
                    .checked_sub(1)
                    .and_then(|idx| self.projects.get(idx))
                    .cloned()
                    .ok_or(LandscapeError::UnknownProject(slot))?;
                outcome.selection = Some(self.replace_selection(names));
                outcome.assignments = self.selection_assignments();
            }
            Command::ToggleHighlightMode => {
                self.selection.toggle_mode();
                self.selection.apply(&mut self.keywords);
                outcome.assignments = self.flag_assignments();
            }
            Command::SetLabelsVisible(visible) => {
                self.selection.set_labels_visible(visible);
                self.selection.apply(&mut self.keywords);
                outcome.assignments = self.flag_assignments();
            }
            Command::ToggleLabels => {
                return self.apply(Command::SetLabelsVisible(!self.selection.labels_visible()));
            }
            Command::SetHeadersVisible(visible) => {
                self.selection.set_headers_visible(visible);
                outcome.assignments = self.header_assignments();
            }
            Command::ToggleHeaders => {
                return self.apply(Command::SetHeadersVisible(!self.selection.headers_visible()));
            }
            Command::SetStrategy(strategy) => {
                self.plan = compute_layout(&self.catalog, &self.anchors, strategy, &self.options)?;
                self.place_tiles();
                outcome.assignments = self.position_assignments();
                outcome.assignments.extend(self.header_assignments());
            }
            Command::ToggleStrategy => {
                let next = self.plan.strategy.next_in(&self.cycle);
                return self.apply(Command::SetStrategy(next));
            }
            Command::ToggleDebug => {
                self.debug = !self.debug;
            }
            Command::Quit => {
                outcome.quit = true;
            }
        }

        Ok(outcome)
    }

    /// Every assignment needed to draw the landscape from scratch.
    #[must_use]
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut all = self.position_assignments();
        all.extend(self.flag_assignments());
        all.extend(self.header_assignments());
        all
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            strategy: self.plan.strategy,
            mode: self.selection.mode(),
            labels_visible: self.selection.labels_visible(),
            headers_visible: self.selection.headers_visible(),
            debug: self.debug,
            selection: self.selection.selection().to_vec(),
            keywords: self.keywords.values().cloned().collect(),
            headers: self.headers(),
        }
    }

    /// Computes the layout for `strategy` without switching to it.
    ///
    /// # Errors
    ///
    /// Returns the layout error for `strategy`.
    pub fn preview(&self, strategy: LayoutStrategy) -> Result<LayoutPlan, LandscapeError> {
        compute_layout(&self.catalog, &self.anchors, strategy, &self.options)
    }

    /// Category headers at their current positions.
    #[must_use]
    pub fn headers(&self) -> Vec<CategoryHeader> {
        self.plan
            .headers
            .iter()
            .map(|(category, position)| CategoryHeader {
                category: category.clone(),
                position: *position,
                visible: self.selection.headers_visible(),
            })
            .collect()
    }

    /// Keyword record by name.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&Keyword> {
        self.keywords.get(name)
    }

    /// All keyword records in name order.
    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.values()
    }

    /// The asset catalog the landscape was built from.
    #[must_use]
    pub const fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Keyword names that exist in more than one category.
    #[must_use]
    pub fn collisions(&self) -> &[KeywordCollision] {
        &self.collisions
    }

    /// Active layout strategy.
    #[must_use]
    pub const fn strategy(&self) -> LayoutStrategy {
        self.plan.strategy
    }

    /// Current layout.
    #[must_use]
    pub const fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// Selection and visibility state.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Anchor tables, including generated anchors.
    #[must_use]
    pub const fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// Colors of a category, falling back to the neutral default.
    #[must_use]
    pub fn style(&self, category: &str) -> CategoryStyle {
        self.palette.get(category).copied().unwrap_or_default()
    }

    /// Debug switch.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Number of loaded project selections.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    fn replace_selection(&mut self, names: Vec<String>) -> SelectionReport {
        self.selection.set_selection(names);
        let report = self
            .selection
            .report(|name| self.keywords.contains_key(name));
        if !report.unknown.is_empty() {
            warn!(
                "{} selected keywords are not in the catalog: {}",
                report.unknown.len(),
                report.unknown.join(", ")
            );
        }
        report
    }

    /// Flags only change on selection replacement while showing the selection.
    fn selection_assignments(&mut self) -> Vec<Assignment> {
        if self.selection.mode() == HighlightMode::ShowSelection {
            self.selection.apply(&mut self.keywords);
            self.flag_assignments()
        } else {
            Vec::new()
        }
    }

    fn random_sample(&mut self) -> Vec<String> {
        let names: Vec<&String> = self.keywords.keys().collect();
        let amount = self.sample_size.min(names.len());
        rand::seq::index::sample(&mut self.rng, names.len(), amount)
            .into_iter()
            .map(|idx| names[idx].clone())
            .collect()
    }

    fn place_tiles(&mut self) {
        for (name, keyword) in &mut self.keywords {
            if let Some(position) = self.plan.position(name) {
                keyword.position = position;
                keyword.label_position = position + self.plan.label_offset;
            }
        }
    }

    fn position_assignments(&self) -> Vec<Assignment> {
        self.keywords
            .values()
            .map(|k| Assignment::TilePosition {
                keyword: k.name.clone(),
                position: k.position,
                label_position: k.label_position,
            })
            .collect()
    }

    fn flag_assignments(&self) -> Vec<Assignment> {
        self.keywords
            .values()
            .map(|k| Assignment::TileFlags {
                keyword: k.name.clone(),
                highlighted: k.highlighted,
                label_visible: k.label_visible,
            })
            .collect()
    }

    fn header_assignments(&self) -> Vec<Assignment> {
        self.headers()
            .into_iter()
            .map(|h| Assignment::Header {
                category: h.category,
                position: h.position,
                visible: h.visible,
            })
            .collect()
    }
}
