//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::admin_auth_middleware};

pub mod balances;
pub mod health;
pub mod refresh;
pub mod transactions;

/// Creates the API router: public read routes plus the secret-protected
/// admin refresh route.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let admin_routes = refresh::routes().layer(middleware::from_fn_with_state(
        state,
        admin_auth_middleware,
    ));

    Router::new()
        .merge(health::routes())
        .merge(balances::routes())
        .merge(transactions::routes())
        .merge(admin_routes)
}
