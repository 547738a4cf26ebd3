//! Credential resolution for the Teller API.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use perch_shared::AppConfig;

use super::TellerError;

/// One resolved Teller authentication scheme.
///
/// Historically this service existed as several copies differing only in
/// which of these schemes they hard-coded. Resolution happens exactly once
/// at startup with the precedence documented on [`resolve`](Self::resolve);
/// the selected variant produces exactly one `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TellerCredentials {
    /// `Authorization: Bearer {token}`.
    Bearer(String),
    /// `Authorization: Basic base64("{token}:")` - access token as username,
    /// empty password.
    AccessToken(String),
    /// `Authorization: Basic base64("{api_key}:{access_token}")`.
    KeyAndToken {
        /// API key used as the Basic username.
        api_key: String,
        /// Access token used as the Basic password.
        access_token: String,
    },
    /// `Authorization: Basic base64("{application_id}:{application_secret}")`.
    AppIdAndSecret {
        /// Application id used as the Basic username.
        application_id: String,
        /// Application secret used as the Basic password.
        application_secret: String,
    },
}

impl TellerCredentials {
    /// Resolves one scheme from configuration.
    ///
    /// Precedence: api-key + access-token pair, then access token alone,
    /// then application id + secret, then bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`TellerError::NotConfigured`] when no recognized combination
    /// is present.
    pub fn resolve(config: &AppConfig) -> Result<Self, TellerError> {
        if let (Some(api_key), Some(access_token)) =
            (&config.teller_api_key, &config.teller_access_token)
        {
            return Ok(Self::KeyAndToken {
                api_key: api_key.clone(),
                access_token: access_token.clone(),
            });
        }
        if let Some(access_token) = &config.teller_access_token {
            return Ok(Self::AccessToken(access_token.clone()));
        }
        if let (Some(application_id), Some(application_secret)) = (
            &config.teller_application_id,
            &config.teller_application_secret,
        ) {
            return Ok(Self::AppIdAndSecret {
                application_id: application_id.clone(),
                application_secret: application_secret.clone(),
            });
        }
        if let Some(token) = &config.teller_token {
            return Ok(Self::Bearer(token.clone()));
        }
        Err(TellerError::NotConfigured)
    }

    /// Produces the `Authorization` header value for this scheme.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::AccessToken(token) => basic(token, ""),
            Self::KeyAndToken {
                api_key,
                access_token,
            } => basic(api_key, access_token),
            Self::AppIdAndSecret {
                application_id,
                application_secret,
            } => basic(application_id, application_secret),
        }
    }
}

fn basic(username: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config_with(
        access_token: Option<&str>,
        api_key: Option<&str>,
        token: Option<&str>,
        application_id: Option<&str>,
        application_secret: Option<&str>,
    ) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://unused".to_string(),
            admin_refresh_secret: None,
            teller_base_url: "https://api.teller.io".to_string(),
            teller_access_token: access_token.map(str::to_string),
            teller_api_key: api_key.map(str::to_string),
            teller_token: token.map(str::to_string),
            teller_application_id: application_id.map(str::to_string),
            teller_application_secret: application_secret.map(str::to_string),
            teller_account_id: None,
            teller_client_cert_path: None,
            teller_client_key_path: None,
        }
    }

    #[test]
    fn test_access_token_header() {
        let creds = TellerCredentials::AccessToken("token_abc".to_string());
        // base64("token_abc:")
        assert_eq!(creds.authorization_header(), "Basic dG9rZW5fYWJjOg==");
    }

    #[test]
    fn test_key_and_token_header() {
        let creds = TellerCredentials::KeyAndToken {
            api_key: "key".to_string(),
            access_token: "tok".to_string(),
        };
        // base64("key:tok")
        assert_eq!(creds.authorization_header(), "Basic a2V5OnRvaw==");
    }

    #[test]
    fn test_app_id_and_secret_header() {
        let creds = TellerCredentials::AppIdAndSecret {
            application_id: "app_1".to_string(),
            application_secret: "shh".to_string(),
        };
        // base64("app_1:shh")
        assert_eq!(creds.authorization_header(), "Basic YXBwXzE6c2ho");
    }

    #[test]
    fn test_bearer_header() {
        let creds = TellerCredentials::Bearer("tok_xyz".to_string());
        assert_eq!(creds.authorization_header(), "Bearer tok_xyz");
    }

    #[rstest]
    #[case(
        config_with(Some("tok"), Some("key"), Some("bearer"), Some("id"), Some("sec")),
        TellerCredentials::KeyAndToken { api_key: "key".to_string(), access_token: "tok".to_string() }
    )]
    #[case(
        config_with(Some("tok"), None, Some("bearer"), Some("id"), Some("sec")),
        TellerCredentials::AccessToken("tok".to_string())
    )]
    #[case(
        config_with(None, None, Some("bearer"), Some("id"), Some("sec")),
        TellerCredentials::AppIdAndSecret {
            application_id: "id".to_string(),
            application_secret: "sec".to_string(),
        }
    )]
    #[case(
        config_with(None, None, Some("bearer"), None, None),
        TellerCredentials::Bearer("bearer".to_string())
    )]
    fn test_resolution_precedence(#[case] config: AppConfig, #[case] expected: TellerCredentials) {
        let resolved = TellerCredentials::resolve(&config).expect("should resolve");
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_resolution_fails_without_credentials() {
        let config = config_with(None, None, None, None, None);
        assert!(matches!(
            TellerCredentials::resolve(&config),
            Err(TellerError::NotConfigured)
        ));
    }

    #[test]
    fn test_api_key_alone_is_not_enough() {
        // An API key is only meaningful paired with an access token.
        let config = config_with(None, Some("key"), None, None, None);
        assert!(matches!(
            TellerCredentials::resolve(&config),
            Err(TellerError::NotConfigured)
        ));
    }
}
