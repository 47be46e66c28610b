//! Integration tests for the Keyscape Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use keyscape::web::{create_router, AppState};

mod fixtures;
use fixtures::{config_for, sample_assets, sample_landscape, write_projects, SAMPLE_PROJECTS};

/// Creates a test router over the sample asset tree.
fn create_test_app() -> (axum::Router, TempDir) {
    let assets = sample_assets();
    let state = AppState::new(sample_landscape(assets.path()));
    (create_router(state), assets)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with a JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

// ============================================================================
// Read Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_list_tiles() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/api/tiles").await;

    assert_eq!(status, StatusCode::OK);
    let tiles = json["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 5);
    assert_eq!(tiles[0]["keyword"], "AFFORDABILITY");
    assert_eq!(tiles[0]["category"], "Economic");
    assert!(tiles[0]["path"].as_str().unwrap().ends_with("Affordability.png"));

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0]["count"], 2);
    assert_eq!(categories[0]["color"], "#3A492A");
}

#[tokio::test]
async fn test_get_landscape_snapshot() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/api/landscape").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["strategy"], "clustered-block");
    assert_eq!(json["mode"], "show_all");
    assert_eq!(json["keywords"].as_array().unwrap().len(), 5);
    assert_eq!(json["headers"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_assignments() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/api/assignments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assignments"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_preview_layout_does_not_switch() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/api/layouts/line").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["strategy"], "diagonal-line");
    assert_eq!(json["positions"]["POLICY"], json!([2.0, -2.0]));

    let (_, snapshot) = get_json(&app, "/api/landscape").await;
    assert_eq!(snapshot["strategy"], "clustered-block");
}

#[tokio::test]
async fn test_preview_unknown_strategy() {
    let (app, _assets) = create_test_app();
    let (status, json) = get_json(&app, "/api/layouts/spiral").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["details"].as_str().unwrap().contains("spiral"));
}

// ============================================================================
// Command Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_command_selection_flow() {
    let (app, _assets) = create_test_app();

    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "set_selection", "value": ["HERITAGE", "NOPE"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["selection"]["unknown"], json!(["NOPE"]));
    assert!(json["assignments"].as_array().unwrap().is_empty());

    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "toggle_highlight_mode"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let highlighted: Vec<&str> = json["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["highlighted"] == true)
        .map(|a| a["keyword"].as_str().unwrap())
        .collect();
    assert_eq!(highlighted, vec!["HERITAGE"]);
}

#[tokio::test]
async fn test_command_set_strategy() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "set_strategy", "value": "radial-orbit"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assignments"].as_array().unwrap().len(), 8);

    let (_, snapshot) = get_json(&app, "/api/landscape").await;
    assert_eq!(snapshot["strategy"], "radial-orbit");
}

#[tokio::test]
async fn test_command_quit() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(&app, "/api/commands", &json!({"command": "quit"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["quit"], true);
}

#[tokio::test]
async fn test_command_unknown_project() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "select_project", "value": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Command rejected");
}

#[tokio::test]
async fn test_command_strategy_alias() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "set_strategy", "value": "line"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assignments"].as_array().unwrap().len(), 8);

    let (_, snapshot) = get_json(&app, "/api/landscape").await;
    assert_eq!(snapshot["strategy"], "diagonal-line");
}

#[tokio::test]
async fn test_command_unknown_strategy() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "set_strategy", "value": "spiral"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid command");
    assert!(json["details"].as_str().unwrap().contains("spiral"));

    let (_, snapshot) = get_json(&app, "/api/landscape").await;
    assert_eq!(snapshot["strategy"], "clustered-block");
}

#[tokio::test]
async fn test_command_invalid_body() {
    let (app, _assets) = create_test_app();
    let (status, json) = post_json(&app, "/api/commands", &json!({"command": "explode"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid command");
}

// ============================================================================
// Startup From Config
// ============================================================================

#[tokio::test]
async fn test_state_from_config_loads_projects() {
    let assets = sample_assets();
    let mut config = config_for(assets.path());
    config.paths.projects = Some(write_projects(assets.path(), SAMPLE_PROJECTS));

    let app = create_router(AppState::from_config(&config).unwrap());
    let (status, json) = post_json(
        &app,
        "/api/commands",
        &json!({"command": "select_project", "value": 2}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["selection"]["matched"],
        json!(["MOBILITY", "AFFORDABILITY"])
    );
}

#[test]
fn test_state_from_config_missing_assets() {
    let assets = sample_assets();
    let config = config_for(&assets.path().join("missing"));
    assert!(AppState::from_config(&config).is_err());
}
