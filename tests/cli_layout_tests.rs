//! End-to-end tests for `keyscape layout`.

use serde_json::{json, Value};

mod fixtures;
use fixtures::*;

fn tile<'a>(json: &'a Value, keyword: &str) -> &'a Value {
    json["tiles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["keyword"] == keyword)
        .unwrap_or_else(|| panic!("no tile for {keyword}"))
}

#[test]
fn test_layout_default_strategy() {
    let assets = sample_assets();
    let (code, json) = run_json(&["layout", "--json"], assets.path());

    assert_eq!(code, Some(0));
    assert_eq!(json["strategy"], "clustered-block");
    assert_eq!(json["tiles"].as_array().unwrap().len(), 5);
    assert_eq!(json["headers"].as_array().unwrap().len(), 3);

    // Economic anchor (-1, 4): two slots, first keyword takes the last one
    assert_eq!(tile(&json, "AFFORDABILITY")["position"], json!([-2.0, 4.0]));
    assert_eq!(tile(&json, "BUSINESS MODELS")["position"], json!([-2.0, 3.0]));
    assert_eq!(tile(&json, "POLICY")["position"], json!([-5.0, -1.5]));
    assert_eq!(tile(&json, "POLICY")["label_position"], json!([-4.25, -1.5]));
}

#[test]
fn test_layout_headers_carry_colors() {
    let assets = sample_assets();
    let (_, json) = run_json(&["layout", "--json"], assets.path());

    let header = &json["headers"][1];
    assert_eq!(header["category"], "Legal");
    assert_eq!(header["position"], json!([-5.0, -1.5]));
    assert_eq!(header["color"], "#532B26");
}

#[test]
fn test_layout_diagonal_line_alias() {
    let assets = sample_assets();
    let (code, json) = run_json(&["layout", "--strategy", "line", "--json"], assets.path());

    assert_eq!(code, Some(0));
    assert_eq!(json["strategy"], "diagonal-line");
    assert_eq!(tile(&json, "POLICY")["position"], json!([2.0, -2.0]));
    assert_eq!(tile(&json, "AFFORDABILITY")["position"], json!([1.0, 1.0]));
}

#[test]
fn test_layout_unknown_strategy() {
    let assets = sample_assets();
    let (code, _) = run_json(&["layout", "--strategy", "spiral", "--json"], assets.path());
    assert_eq!(code, Some(1));
}

#[test]
fn test_layout_capacity_exceeded() {
    let assets = oversized_assets();
    let (code, _) = run_json(&["layout", "--json"], assets.path());
    assert_eq!(code, Some(1));

    let (code, json) = run_json(
        &["layout", "--strategy", "diagonal-line", "--json"],
        assets.path(),
    );
    assert_eq!(code, Some(0));
    assert_eq!(json["tiles"].as_array().unwrap().len(), 15);
}

#[test]
fn test_layout_generates_missing_anchors() {
    let assets = sample_assets();
    write_asset_tree(assets.path(), &[("Unlisted", &["Extra.png"])]);

    let (code, json) = run_json(&["layout", "--json"], assets.path());
    assert_eq!(code, Some(0));
    let headers: Vec<&str> = json["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["category"].as_str().unwrap())
        .collect();
    assert!(headers.contains(&"Unlisted"));
}
