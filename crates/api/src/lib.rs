//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes (health, balances, transactions, admin refresh)
//! - The admin shared-secret middleware
//! - Static dashboard serving

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use perch_core::teller::TellerClient;
use perch_shared::{AppConfig, AppError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Teller client, absent when no credentials are configured. Live
    /// endpoints degrade to demo payloads and refresh reports a
    /// configuration error while this is `None`.
    pub teller: Option<Arc<TellerClient>>,
}

/// Creates the main application router.
///
/// API routes are merged first; everything else falls through to the static
/// dashboard under `public/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes_with_state(state.clone()))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Renders an `AppError` as its JSON error body.
pub(crate) fn error_response(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string()
        })),
    )
        .into_response()
}

#[cfg(test)]
pub(crate) mod test_support;
