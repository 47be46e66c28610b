//! End-to-end tests for `keyscape replay`.

mod fixtures;
use fixtures::*;

#[test]
fn test_replay_toggles() {
    let assets = sample_assets();
    let (code, json) = run_json(&["replay", "--keys", "pa", "--json"], assets.path());

    assert_eq!(code, Some(0));
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);

    assert_eq!(steps[0]["action"], "toggle_highlight_mode");
    let flags = steps[0]["assignments"].as_array().unwrap();
    assert_eq!(flags.len(), 5);
    assert!(flags.iter().all(|a| a["type"] == "tile_flags"));

    // Five tile positions followed by three headers
    assert_eq!(steps[1]["action"], "toggle_layout");
    let moves = steps[1]["assignments"].as_array().unwrap();
    assert_eq!(moves.len(), 8);
    assert_eq!(moves[0]["type"], "tile_position");
    assert_eq!(moves[7]["type"], "header");

    assert_eq!(json["state"]["strategy"], "diagonal-line");
    assert_eq!(json["state"]["mode"], "show_selection");
    assert_eq!(json["quit"], false);
}

#[test]
fn test_replay_layout_round_trip() {
    let assets = sample_assets();
    let (_, before) = run_json(&["replay", "--keys", "d", "--json"], assets.path());
    let (_, after) = run_json(&["replay", "--keys", "aa", "--json"], assets.path());

    assert_eq!(after["state"]["strategy"], "clustered-block");
    assert_eq!(before["state"]["keywords"], after["state"]["keywords"]);
}

#[test]
fn test_replay_stops_at_quit() {
    let assets = sample_assets();
    let (code, json) = run_json(&["replay", "--keys", "hqd", "--json"], assets.path());

    assert_eq!(code, Some(0));
    assert_eq!(json["steps"].as_array().unwrap().len(), 2);
    assert_eq!(json["quit"], true);
    assert_eq!(json["state"]["debug"], false);
    assert_eq!(json["state"]["headers_visible"], false);
}

#[test]
fn test_replay_ignores_unbound_keys() {
    let assets = sample_assets();
    let (code, json) = run_json(&["replay", "--keys", "xlz", "--json"], assets.path());

    assert_eq!(code, Some(0));
    assert_eq!(json["ignored"], serde_json::json!(["x", "z"]));
    assert_eq!(json["state"]["labels_visible"], false);
}

#[test]
fn test_replay_project_keys() {
    let assets = sample_assets();
    let projects = write_projects(assets.path(), SAMPLE_PROJECTS);
    let (code, json) = run_json(
        &[
            "replay",
            "--keys",
            "2p3",
            "--projects",
            projects.to_str().unwrap(),
            "--json",
        ],
        assets.path(),
    );

    assert_eq!(code, Some(0));
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["action"], "select_project");
    assert_eq!(
        steps[0]["selection"]["matched"],
        serde_json::json!(["MOBILITY", "AFFORDABILITY"])
    );

    // Slot 3 is empty: reported, state unchanged
    assert!(steps[2]["error"].as_str().unwrap().contains('3'));
    let highlighted: Vec<&str> = json["state"]["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|k| k["highlighted"] == true)
        .map(|k| k["name"].as_str().unwrap())
        .collect();
    assert_eq!(highlighted, vec!["AFFORDABILITY", "MOBILITY"]);
}

#[test]
fn test_replay_new_selection_is_seeded() {
    let assets = sample_assets();
    let (_, first) = run_json(&["--seed", "11", "replay", "--keys", "np", "--json"], assets.path());
    let (_, second) = run_json(&["--seed", "11", "replay", "--keys", "np", "--json"], assets.path());

    assert_eq!(first["state"]["selection"], second["state"]["selection"]);
    // Sample size 10 clamps to the five keywords
    assert_eq!(first["state"]["selection"].as_array().unwrap().len(), 5);
}

#[test]
fn test_replay_requires_keys() {
    let assets = sample_assets();
    let (code, _) = run_json(&["replay", "--keys", "", "--json"], assets.path());
    assert_eq!(code, Some(1));
}
