//! Web API module for Keyscape.
//!
//! Exposes one shared [`Landscape`] over HTTP so a browser frontend can draw
//! the tiles and send commands.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/tiles` - Flattened catalog with category colors
//! - `GET /api/landscape` - Snapshot of keywords, headers and switches
//! - `GET /api/assignments` - Every assignment needed to draw from scratch
//! - `GET /api/layouts/{strategy}` - Layout preview (state is not changed)
//! - `POST /api/commands` - Apply a command, returns the emitted assignments

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::AssetCatalog;
use crate::config::Config;
use crate::error::LandscapeError;
use crate::landscape::{Assignment, Command, Landscape, Outcome, Snapshot};
use crate::layout::LayoutPlan;
use crate::models::{LayoutStrategy, RgbColor};
use crate::projects::load_projects;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    landscape: Arc<Mutex<Landscape>>,
}

impl AppState {
    /// Wraps a landscape for sharing between requests.
    #[must_use]
    pub fn new(landscape: Landscape) -> Self {
        Self {
            landscape: Arc::new(Mutex::new(landscape)),
        }
    }

    /// Scans the configured assets and builds the landscape.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset root or project file cannot be read, or
    /// the startup layout fails.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let report = AssetCatalog::scan(&config.paths.assets, &config.scan_options())?;
        report.log_warnings();

        let mut landscape = Landscape::new(report.catalog, config.landscape_settings())?;
        if let Some(path) = &config.paths.projects {
            let projects = load_projects(path)?;
            landscape.load_projects(
                &projects,
                config.catalog.name_case,
                config.selection.include_deliverables,
            );
        }

        Ok(Self::new(landscape))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Landscape>, ApiFailure> {
        self.landscape.lock().map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Landscape state is unavailable")),
            )
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Tile list response.
#[derive(Debug, Serialize)]
pub struct TilesResponse {
    /// One entry per keyword, in name order.
    pub tiles: Vec<TileInfo>,
    /// One entry per category, in name order.
    pub categories: Vec<CategoryInfo>,
}

/// Keyword tile for API response.
#[derive(Debug, Serialize)]
pub struct TileInfo {
    /// Keyword name.
    pub keyword: String,
    /// Owning category.
    pub category: String,
    /// Asset path.
    pub path: String,
}

/// Category for API response.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Category name.
    pub name: String,
    /// Number of keywords.
    pub count: usize,
    /// Foreground color.
    pub color: RgbColor,
    /// Background color.
    pub background: RgbColor,
}

/// Assignment list response.
#[derive(Debug, Serialize)]
pub struct AssignmentsResponse {
    /// Assignments in emission order.
    pub assignments: Vec<Assignment>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiFailure = (StatusCode, Json<ApiError>);

/// Maps a domain error onto an HTTP status.
fn landscape_failure(context: &str, err: &LandscapeError) -> ApiFailure {
    let status = match err {
        LandscapeError::UnknownStrategy(_) => StatusCode::BAD_REQUEST,
        LandscapeError::CapacityExceeded { .. }
        | LandscapeError::MissingAnchor { .. }
        | LandscapeError::UnknownProject(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(ApiError::with_details(context, err.to_string())))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/tiles - Flattened catalog with colors.
async fn list_tiles(State(state): State<AppState>) -> Result<Json<TilesResponse>, ApiFailure> {
    let landscape = state.lock()?;

    let tiles = landscape
        .keywords()
        .map(|k| TileInfo {
            keyword: k.name.clone(),
            category: k.category.clone(),
            path: k.path.clone(),
        })
        .collect();

    let categories = landscape
        .catalog()
        .categories()
        .map(|(name, keywords)| {
            let style = landscape.style(name);
            CategoryInfo {
                name: name.to_string(),
                count: keywords.len(),
                color: style.color,
                background: style.background,
            }
        })
        .collect();

    Ok(Json(TilesResponse { tiles, categories }))
}

/// GET /api/landscape - Full state snapshot.
async fn get_landscape(State(state): State<AppState>) -> Result<Json<Snapshot>, ApiFailure> {
    Ok(Json(state.lock()?.snapshot()))
}

/// GET /api/assignments - Assignments for a full redraw.
async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<AssignmentsResponse>, ApiFailure> {
    Ok(Json(AssignmentsResponse {
        assignments: state.lock()?.assignments(),
    }))
}

/// GET /api/layouts/{strategy} - Layout preview without switching.
async fn preview_layout(
    State(state): State<AppState>,
    Path(strategy): Path<String>,
) -> Result<Json<LayoutPlan>, ApiFailure> {
    let strategy: LayoutStrategy = strategy
        .parse()
        .map_err(|e| landscape_failure("Invalid strategy", &e))?;

    let plan = state
        .lock()?
        .preview(strategy)
        .map_err(|e| landscape_failure("Layout failed", &e))?;

    Ok(Json(plan))
}

/// POST /api/commands - Apply a command.
///
/// A body that does not decode to a [`Command`], including one naming an
/// unknown strategy, is answered with `400` and the decoder's message.
async fn apply_command(
    State(state): State<AppState>,
    payload: Result<Json<Command>, JsonRejection>,
) -> Result<Json<Outcome>, ApiFailure> {
    let Json(command) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid command", rejection.body_text())),
        )
    })?;

    let outcome = state
        .lock()?
        .apply(command)
        .map_err(|e| landscape_failure("Command rejected", &e))?;

    Ok(Json(outcome))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server runs locally next to the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/tiles", get(list_tiles))
        .route("/api/landscape", get(get_landscape))
        .route("/api/assignments", get(list_assignments))
        .route("/api/layouts/{strategy}", get(preview_layout))
        .route("/api/commands", post(apply_command))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the landscape cannot be built or the server fails to
/// start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    info!("Starting Keyscape web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
