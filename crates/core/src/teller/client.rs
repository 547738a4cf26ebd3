//! HTTP client for the Teller API.

use async_trait::async_trait;
use perch_shared::AppConfig;
use tracing::debug;

use super::types::{Account, Balance};
use super::{AccountSource, TellerCredentials, TellerError};

/// Authenticated client for the Teller API.
///
/// Built once at startup and shared for the process lifetime. Every call is
/// a single attempt: no retry, no timeout, no rate limiting.
pub struct TellerClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl TellerClient {
    /// Builds a client from configuration.
    ///
    /// When both `teller_client_cert_path` and `teller_client_key_path` are
    /// set, the underlying connection presents that PEM identity (mutual
    /// TLS).
    ///
    /// # Errors
    ///
    /// Returns [`TellerError::NotConfigured`] when no credential combination
    /// is present, [`TellerError::Identity`] when an identity file cannot be
    /// read, and [`TellerError::Transport`] when the identity is malformed
    /// or the client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, TellerError> {
        let credentials = TellerCredentials::resolve(config)?;

        let mut builder = reqwest::Client::builder();
        if let (Some(cert_path), Some(key_path)) = (
            &config.teller_client_cert_path,
            &config.teller_client_key_path,
        ) {
            let mut pem = std::fs::read(cert_path)?;
            pem.extend(std::fs::read(key_path)?);
            builder = builder.identity(reqwest::Identity::from_pem(&pem)?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.teller_base_url.trim_end_matches('/').to_string(),
            auth_header: credentials.authorization_header(),
        })
    }

    /// Fetches the raw transactions JSON for one account, untouched.
    pub async fn transactions(&self, account_id: &str) -> Result<serde_json::Value, TellerError> {
        Ok(self
            .get(&format!("/accounts/{account_id}/transactions"))
            .await?
            .json()
            .await?)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, TellerError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "requesting Teller endpoint");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TellerError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AccountSource for TellerClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, TellerError> {
        Ok(self.get("/accounts").await?.json().await?)
    }

    async fn balances(&self, account_id: &str) -> Result<Balance, TellerError> {
        Ok(self
            .get(&format!("/accounts/{account_id}/balances"))
            .await?
            .json()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://unused".to_string(),
            admin_refresh_secret: None,
            teller_base_url: base_url.to_string(),
            teller_access_token: Some("token_abc".to_string()),
            teller_api_key: None,
            teller_token: None,
            teller_application_id: None,
            teller_application_secret: None,
            teller_account_id: None,
            teller_client_cert_path: None,
            teller_client_key_path: None,
        }
    }

    #[tokio::test]
    async fn test_list_accounts_sends_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(header("authorization", "Basic dG9rZW5fYWJjOg=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "acc_1",
                    "name": "Checking",
                    "type": "depository",
                    "subtype": "checking",
                    "institution": {"id": "chase", "name": "Chase"}
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = TellerClient::from_config(&test_config(&server.uri())).expect("client");
        let accounts = client.list_accounts().await.expect("should list");

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "acc_1");
        assert_eq!(
            accounts[0].institution.as_ref().map(|i| i.id.as_str()),
            Some("chase")
        );
    }

    #[tokio::test]
    async fn test_balances_decodes_amounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts/acc_1/balances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "account_id": "acc_1",
                "available": "42.10",
                "ledger": "50.00"
            })))
            .mount(&server)
            .await;

        let client = TellerClient::from_config(&test_config(&server.uri())).expect("client");
        let balance = client.balances("acc_1").await.expect("should fetch");

        assert_eq!(balance.available, Some(dec!(42.10)));
        assert_eq!(balance.ledger, Some(dec!(50.00)));
    }

    #[tokio::test]
    async fn test_transactions_pass_through_unchanged() {
        let body = json!([
            {"id": "txn_1", "date": "2026-07-01", "description": "Coffee", "amount": "-4.50"}
        ]);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts/acc_1/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = TellerClient::from_config(&test_config(&server.uri())).expect("client");
        let transactions = client.transactions("acc_1").await.expect("should fetch");

        assert_eq!(transactions, body);
    }

    #[tokio::test]
    async fn test_non_success_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&server)
            .await;

        let client = TellerClient::from_config(&test_config(&server.uri())).expect("client");
        let error = client.list_accounts().await.expect_err("should fail");

        assert!(error.to_string().starts_with("teller_http_401"));
        match error {
            TellerError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
