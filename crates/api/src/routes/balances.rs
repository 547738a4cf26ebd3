//! Latest-balances read endpoint.

use axum::extract::State;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::AppState;
use perch_db::repositories::snapshot::{LatestBalanceRow, SnapshotRepository};

/// One account with its most recent balance snapshot.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Account id.
    pub account_id: String,
    /// Account display name.
    pub name: Option<String>,
    /// Account type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Account subtype.
    pub subtype: Option<String>,
    /// Available balance, null when no snapshot exists yet.
    pub available: Option<Decimal>,
    /// Ledger balance, null when no snapshot exists yet.
    pub ledger: Option<Decimal>,
    /// Snapshot timestamp, null when no snapshot exists yet.
    pub as_of: Option<DateTime<FixedOffset>>,
}

impl From<LatestBalanceRow> for BalanceResponse {
    fn from(row: LatestBalanceRow) -> Self {
        Self {
            account_id: row.account_id,
            name: row.name,
            kind: row.kind,
            subtype: row.subtype,
            available: row.available,
            ledger: row.ledger,
            as_of: row.as_of,
        }
    }
}

/// GET `/api/balances` - latest balance per account, 204 when no accounts
/// exist.
async fn list_balances(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SnapshotRepository::new((*state.db).clone());

    match repo.latest_balances().await {
        Ok(rows) if rows.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(rows) => {
            let response: Vec<BalanceResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "latest-balances query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "query_failed",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}

/// Creates the balances routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/balances", get(list_balances))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};
    use tower::ServiceExt;

    use perch_db::entities::{accounts, balances, institutions};

    use crate::test_support::{db_guard, test_state};

    async fn wipe_tables(db: &sea_orm::DatabaseConnection) {
        balances::Entity::delete_many().exec(db).await.expect("wipe balances");
        accounts::Entity::delete_many().exec(db).await.expect("wipe accounts");
        institutions::Entity::delete_many().exec(db).await.expect("wipe institutions");
    }

    #[tokio::test]
    async fn test_balances_with_no_accounts_returns_204() {
        let _guard = db_guard().await;
        let state = test_state(None, None).await;
        wipe_tables(&state.db).await;

        let app = Router::new().merge(super::routes()).with_state(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/balances")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_balances_returns_latest_snapshot_as_json() {
        let _guard = db_guard().await;
        let state = test_state(None, None).await;
        wipe_tables(&state.db).await;

        accounts::ActiveModel {
            id: Set("api_acc".to_string()),
            institution_id: Set(None),
            name: Set(Some("Api Checking".to_string())),
            kind: Set(Some("depository".to_string())),
            subtype: Set(Some("checking".to_string())),
        }
        .insert(state.db.as_ref())
        .await
        .expect("insert account");

        balances::ActiveModel {
            account_id: Set("api_acc".to_string()),
            available: Set(Some(dec!(12.34))),
            ledger: Set(Some(dec!(56.78))),
            ..Default::default()
        }
        .insert(state.db.as_ref())
        .await
        .expect("insert snapshot");

        let app = Router::new().merge(super::routes()).with_state(state);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/balances")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let rows: serde_json::Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(rows[0]["account_id"], "api_acc");
        assert_eq!(rows[0]["name"], "Api Checking");
        assert_eq!(rows[0]["type"], "depository");
        assert_eq!(rows[0]["available"], "12.34");
        assert_eq!(rows[0]["ledger"], "56.78");
        assert!(rows[0]["as_of"].is_string());
    }
}
