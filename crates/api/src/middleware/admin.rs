//! Shared-secret middleware for admin routes.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Header carrying the admin shared secret.
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Rejects admin requests whose `X-Admin-Secret` header does not exactly
/// match the configured secret.
///
/// While no secret is configured every request is rejected, which keeps the
/// refresh route disabled rather than open.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|h| h.to_str().ok());

    match (state.config.admin_refresh_secret.as_deref(), provided) {
        (Some(expected), Some(given)) if expected == given => next.run(request).await,
        _ => {
            warn!("admin request rejected: missing or invalid shared secret");
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "unauthorized",
                    "message": "missing or invalid X-Admin-Secret header"
                })),
            )
                .into_response()
        }
    }
}
