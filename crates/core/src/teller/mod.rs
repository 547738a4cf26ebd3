//! Teller API integration.
//!
//! The upstream surface is three GET endpoints: account listing, per-account
//! balances, and per-account transactions. Authentication is one
//! `Authorization` header resolved once at startup from the environment;
//! production deployments additionally present a client certificate (mTLS).

pub mod client;
pub mod credentials;
pub mod sample;
pub mod types;

pub use client::TellerClient;
pub use credentials::TellerCredentials;
pub use types::{Account, Balance, Institution};

use async_trait::async_trait;
use thiserror::Error;

/// Error types for Teller operations.
#[derive(Debug, Error)]
pub enum TellerError {
    /// No recognized credential combination is present in the environment.
    #[error("teller_auth_not_configured: no recognized credential combination")]
    NotConfigured,

    /// A client identity (mTLS) file could not be read.
    #[error("failed to read client identity file: {0}")]
    Identity(#[from] std::io::Error),

    /// The request could not be built or sent, or the body failed to decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("teller_http_{status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },
}

/// Source of remote accounts and balances.
///
/// The refresh transaction is written against this seam so it can be driven
/// by a stub in tests; `TellerClient` is the production implementation.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Lists all accounts visible to the configured credentials.
    async fn list_accounts(&self) -> Result<Vec<Account>, TellerError>;

    /// Fetches the current balance of one account.
    async fn balances(&self, account_id: &str) -> Result<Balance, TellerError>;
}
