//! Perch API Server
//!
//! Main entry point for the Perch aggregator service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perch_api::{AppState, create_router};
use perch_core::teller::{TellerClient, TellerError};
use perch_db::{bootstrap, connect};
use perch_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; DATABASE_URL is required
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database and bring the schema up
    let db = connect(&config.database_url).await?;
    info!("Connected to database");

    bootstrap(&db).await?;
    info!("Schema bootstrap complete");

    // Build the Teller client once; without credentials the server still
    // runs with live endpoints degraded to demo payloads
    let teller = match TellerClient::from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(TellerError::NotConfigured) => {
            warn!("Teller credentials not configured; serving demo data and refusing refreshes");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let addr = format!("{}:{}", config.host, config.port);

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config),
        teller,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
