//! HTTP surface: JSON API for the map state plus the embedded dashboard.
//!
//! The dashboard page polls `GET /api/map` on the configured interval and
//! rebuilds its marker layer from the response each time.

use crate::config::TrackerConfig;
use crate::map::MapView;
use crate::position::Position;
use crate::tracker::SharedState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rust_embed::RustEmbed;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

#[derive(RustEmbed)]
#[folder = "../../dashboard/dist/"]
struct Assets;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub tracker: SharedState,
    pub config: TrackerConfig,
}

/// JSON response for the current map view
#[derive(Serialize)]
pub struct MapResponse {
    pub map: MapView,
    pub error: Option<String>,
    pub updated_at: Option<String>,
    pub cycles: u64,
}

/// JSON response for the latest position
#[derive(Serialize)]
pub struct PositionResponse {
    pub position: Option<Position>,
    pub error: Option<String>,
}

/// JSON response for page configuration
#[derive(Serialize)]
pub struct ConfigResponse {
    pub refresh_interval_ms: u64,
    pub map_width: u32,
    pub map_height: u32,
    pub title: String,
}

/// GET /api/map - Current map view with cycle metadata
async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    let tracker = state.tracker.read().await;
    Json(MapResponse {
        map: tracker.map.clone(),
        error: tracker.last_error.clone(),
        updated_at: tracker.updated_at.map(|t| t.to_rfc3339()),
        cycles: tracker.cycles,
    })
}

/// GET /api/position - Latest position, or null after a failed cycle
async fn get_position(State(state): State<AppState>) -> Json<PositionResponse> {
    let tracker = state.tracker.read().await;
    Json(PositionResponse {
        position: tracker.position,
        error: tracker.last_error.clone(),
    })
}

/// GET /api/config - Refresh interval and map dimensions for the page
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        refresh_interval_ms: state.config.refresh_interval_ms,
        map_width: state.config.map_width,
        map_height: state.config.map_height,
        title: "ISS Real-Time Tracking System".to_string(),
    })
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Static file handler: serve embedded dashboard files with MIME types,
/// falling back to index.html.
async fn static_handler(uri: Uri) -> Response {
    let mut path = uri.path().trim_start_matches('/');

    if path.is_empty() {
        path = "index.html";
    }

    if let Some(file) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            file.data.into_owned(),
        )
            .into_response();
    }

    if let Some(file) = Assets::get("index.html") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            file.data.into_owned(),
        )
            .into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/map", get(get_map))
        .route("/api/position", get(get_position))
        .route("/api/config", get(get_config))
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until the shutdown signal fires.
pub async fn run_http_server(
    state: AppState,
    port: u16,
    mut shutdown: tokio::sync::watch::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    log::info!("Dashboard listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await?;

    log::info!("HTTP server shut down gracefully");
    Ok(())
}
