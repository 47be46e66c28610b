//! Integration tests for building and driving a landscape from an asset tree.

use keyscape::catalog::{AssetCatalog, NameCase, ScanOptions};
use keyscape::landscape::{Assignment, Command, Landscape};
use keyscape::models::{Coord, LayoutStrategy};
use keyscape::projects::load_projects;
use keyscape::selection::HighlightMode;
use keyscape::shortcuts::ShortcutRegistry;

mod fixtures;
use fixtures::*;

#[test]
fn test_scan_is_deterministic() {
    let assets = sample_assets();
    let first = AssetCatalog::scan(assets.path(), &ScanOptions::default()).unwrap();
    let second = AssetCatalog::scan(assets.path(), &ScanOptions::default()).unwrap();

    assert_eq!(first.catalog, second.catalog);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.catalog.keyword_count(), 5);
}

#[test]
fn test_landscape_from_config() {
    let assets = sample_assets();
    let config = config_for(assets.path());
    let report = AssetCatalog::scan(assets.path(), &config.scan_options()).unwrap();
    let landscape = Landscape::new(report.catalog, config.landscape_settings()).unwrap();

    assert_eq!(landscape.strategy(), LayoutStrategy::ClusteredBlock);
    assert_eq!(landscape.selection().mode(), HighlightMode::ShowAll);
    assert_eq!(
        landscape.keyword("HERITAGE").unwrap().position,
        // Social anchor (2, 2.5), second of two slots
        Coord::new(1.0, 2.5)
    );
    assert_eq!(landscape.keyword("MOBILITY").unwrap().position, Coord::new(1.0, 1.5));
}

#[test]
fn test_full_redraw_assignments() {
    let assets = sample_assets();
    let landscape = sample_landscape(assets.path());
    let all = landscape.assignments();

    let positions = all
        .iter()
        .filter(|a| matches!(a, Assignment::TilePosition { .. }))
        .count();
    let flags = all
        .iter()
        .filter(|a| matches!(a, Assignment::TileFlags { .. }))
        .count();
    let headers = all
        .iter()
        .filter(|a| matches!(a, Assignment::Header { .. }))
        .count();
    assert_eq!((positions, flags, headers), (5, 5, 3));
}

#[test]
fn test_every_strategy_keeps_identity() {
    let assets = sample_assets();
    let mut landscape = sample_landscape(assets.path());
    let paths: Vec<String> = landscape.keywords().map(|k| k.path.clone()).collect();

    for strategy in LayoutStrategy::ALL {
        landscape.apply(Command::SetStrategy(strategy)).unwrap();
        assert_eq!(landscape.strategy(), strategy);
        let now: Vec<String> = landscape.keywords().map(|k| k.path.clone()).collect();
        assert_eq!(now, paths);
    }
}

#[test]
fn test_keys_drive_landscape() {
    let assets = sample_assets();
    let mut landscape = sample_landscape(assets.path());
    landscape
        .apply(Command::SetSelection(vec!["POLICY".to_string()]))
        .unwrap();

    let registry = ShortcutRegistry::new();
    for key in "pl".chars() {
        let action = registry.lookup_char(key).unwrap();
        landscape.apply(action.command()).unwrap();
    }

    let policy = landscape.keyword("POLICY").unwrap();
    assert!(policy.highlighted);
    assert!(!policy.label_visible);
    assert!(!landscape.keyword("HERITAGE").unwrap().highlighted);
}

#[test]
fn test_projects_feed_selection() {
    let assets = sample_assets();
    let path = write_projects(assets.path(), SAMPLE_PROJECTS);
    let projects = load_projects(&path).unwrap();

    let mut landscape = sample_landscape(assets.path());
    landscape.load_projects(&projects, NameCase::Upper, true);
    assert_eq!(landscape.project_count(), 2);

    let outcome = landscape.apply(Command::SelectProject(1)).unwrap();
    let report = outcome.selection.unwrap();
    assert_eq!(report.matched, vec!["HERITAGE".to_string(), "POLICY".to_string()]);
    assert_eq!(report.unknown, vec!["UNKNOWN THING".to_string()]);
}

#[test]
fn test_collision_keeps_later_category() {
    let assets = sample_assets();
    write_asset_tree(assets.path(), &[("Spatial", &["Heritage.png"])]);
    let landscape = sample_landscape(assets.path());

    assert_eq!(landscape.collisions().len(), 1);
    let heritage = landscape.keyword("HERITAGE").unwrap();
    assert_eq!(heritage.category, "Spatial");
    assert_eq!(landscape.keywords().count(), 5);
}
