//! Live transactions pass-through endpoint.

use axum::extract::State;
use axum::{Json, Router, response::IntoResponse, routing::get};
use tracing::{info, warn};

use crate::AppState;
use perch_core::teller::sample;

/// GET `/api/transactions` - upstream transactions JSON, untouched.
///
/// Without configured credentials and a live account id, or when the
/// upstream call fails, a fixed demonstration payload is served instead so
/// the dashboard still renders.
async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    let Some((client, account_id)) = state
        .teller
        .as_ref()
        .zip(state.config.teller_account_id.as_ref())
    else {
        info!("Teller not configured; serving demo transactions");
        return Json(sample::demo_transactions());
    };

    match client.transactions(account_id).await {
        Ok(body) => Json(body),
        Err(e) => {
            warn!(error = %e, "transactions fetch failed; serving demo payload");
            Json(sample::demo_transactions())
        }
    }
}

/// Creates the transactions routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/transactions", get(list_transactions))
}
