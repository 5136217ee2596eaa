//! HTTP surface.
//!
//! `GET /api/movie` runs one resolution, `GET /health` answers liveness, and
//! every other path is served from the static directory.

use std::path::Path;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use sources::SearchCandidate;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::classify::ClassifiedFailure;
use crate::orchestrator::{MovieQuery, MovieResolver, Resolution};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub resolver: MovieResolver,
}

/// Build the application router.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/movie", get(movie_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct MovieParams {
    pub title: Option<String>,
    #[serde(rename = "tmdbId")]
    pub tmdb_id: Option<String>,
}

/// Errors returned by the API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Neither a title nor an id was supplied
    MissingQuery,
    Resolve(ClassifiedFailure),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing title or tmdbId." })),
            )
                .into_response(),
            ApiError::Resolve(failure) => failure.into_response(),
        }
    }
}

impl From<ClassifiedFailure> for ApiError {
    fn from(failure: ClassifiedFailure) -> Self {
        ApiError::Resolve(failure)
    }
}

async fn movie_handler(
    State(state): State<AppState>,
    Query(params): Query<MovieParams>,
) -> Result<Json<Value>, ApiError> {
    let query = MovieQuery::from_params(params.title.as_deref(), params.tmdb_id.as_deref())
        .ok_or(ApiError::MissingQuery)?;
    debug!("GET /api/movie {:?}", query);

    let body = match state.resolver.resolve(&query).await? {
        Resolution::Resolved(movie) => json!(movie),
        Resolution::Multiple(results) => disambiguation_body(&results),
    };

    Ok(Json(body))
}

/// Body returned when a title matches more than one movie.
pub fn disambiguation_body(results: &[SearchCandidate]) -> Value {
    json!({
        "multiple": true,
        "results": results,
    })
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
