//! Admin refresh endpoint.

use axum::extract::State;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, error_response};
use perch_db::SnapshotRepository;
use perch_shared::AppError;

/// POST `/admin/refresh` - pull current remote state and persist one
/// snapshot per account, all-or-nothing.
///
/// The admin shared-secret middleware has already vetted the request by the
/// time this handler runs.
async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    let Some(client) = &state.teller else {
        return error_response(&AppError::Configuration(
            "Teller credentials are not configured".to_string(),
        ));
    };

    let repo = SnapshotRepository::new((*state.db).clone());
    match repo.refresh(client.as_ref()).await {
        Ok(count) => {
            info!(accounts = count, "admin refresh complete");
            (
                StatusCode::OK,
                Json(json!({ "status": "ok", "accounts": count })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "admin refresh failed");
            error_response(&AppError::from(e))
        }
    }
}

/// Creates the refresh routes (the admin middleware is applied by the
/// caller).
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/refresh", post(refresh))
}
