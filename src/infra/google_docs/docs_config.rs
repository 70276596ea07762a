// Environment-driven configuration for the Docs client.
//
// **Environment Variables:**
// - `GOOGLE_DOCS_API_BASE` - API root (default `https://docs.googleapis.com/v1`)
// - `GOOGLE_DOCS_ACCESS_TOKEN` - OAuth access token supplied by the host integration
// - `GOOGLE_SERVICE_ACCOUNT_KEY` - Path to a service account JSON key file
// - `GOOGLE_SERVICE_ACCOUNT_JSON` - The same JSON content inline (for deployment)
// - `GOOGLE_DOCS_TIMEOUT_SECS` - Per-request timeout (default 30)
//
// When several credential variables are set the access token wins, then the
// key file, then the inline JSON.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::docs::DocsError;

use super::service_account::{AccessTokenProvider, ServiceAccountAuth, StaticTokenProvider};

pub const DEFAULT_API_BASE: &str = "https://docs.googleapis.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    AccessToken(String),
    ServiceAccountFile(PathBuf),
    ServiceAccountJson(String),
}

impl Credentials {
    /// Log-safe label. Never includes the token or key material.
    pub fn describe(&self) -> String {
        match self {
            Credentials::AccessToken(_) => "static access token".to_string(),
            Credentials::ServiceAccountFile(path) => {
                format!("service account key file {}", path.display())
            }
            Credentials::ServiceAccountJson(_) => "inline service account JSON".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocsConfig {
    pub api_base: String,
    pub timeout: Duration,
    pub credentials: Credentials,
}

impl DocsConfig {
    pub fn from_env() -> Result<Self, DocsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DocsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let credentials = if let Some(token) = get("GOOGLE_DOCS_ACCESS_TOKEN") {
            Credentials::AccessToken(token)
        } else if let Some(path) = get("GOOGLE_SERVICE_ACCOUNT_KEY") {
            Credentials::ServiceAccountFile(PathBuf::from(path))
        } else if let Some(json) = get("GOOGLE_SERVICE_ACCOUNT_JSON") {
            Credentials::ServiceAccountJson(json)
        } else {
            return Err(DocsError::Config(
                "Set GOOGLE_DOCS_ACCESS_TOKEN, GOOGLE_SERVICE_ACCOUNT_KEY or GOOGLE_SERVICE_ACCOUNT_JSON."
                    .to_string(),
            ));
        };

        let timeout_secs = match get("GOOGLE_DOCS_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                DocsError::Config(format!("GOOGLE_DOCS_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let api_base = get("GOOGLE_DOCS_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            credentials,
        })
    }

    /// Turns the configured credentials into a token provider.
    pub async fn token_provider(&self) -> Result<Box<dyn AccessTokenProvider>, DocsError> {
        let provider: Box<dyn AccessTokenProvider> = match &self.credentials {
            Credentials::AccessToken(token) => Box::new(StaticTokenProvider::new(token.clone())),
            Credentials::ServiceAccountFile(path) => {
                let auth = ServiceAccountAuth::from_file(path).await?;
                tracing::info!("Using service account {}", auth.client_email());
                Box::new(auth)
            }
            Credentials::ServiceAccountJson(json) => {
                let auth = ServiceAccountAuth::from_json(json)?;
                tracing::info!("Using service account {}", auth.client_email());
                Box::new(auth)
            }
        };
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_access_token() {
        let config = DocsConfig::from_lookup(lookup(&[("GOOGLE_DOCS_ACCESS_TOKEN", "tok")])).unwrap();

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.credentials, Credentials::AccessToken("tok".to_string()));
    }

    #[test]
    fn test_access_token_takes_precedence() {
        let config = DocsConfig::from_lookup(lookup(&[
            ("GOOGLE_SERVICE_ACCOUNT_KEY", "/keys/sa.json"),
            ("GOOGLE_DOCS_ACCESS_TOKEN", "tok"),
        ]))
        .unwrap();

        assert_eq!(config.credentials, Credentials::AccessToken("tok".to_string()));
    }

    #[test]
    fn test_key_file_before_inline_json() {
        let config = DocsConfig::from_lookup(lookup(&[
            ("GOOGLE_SERVICE_ACCOUNT_JSON", "{}"),
            ("GOOGLE_SERVICE_ACCOUNT_KEY", "/keys/sa.json"),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials,
            Credentials::ServiceAccountFile(PathBuf::from("/keys/sa.json"))
        );
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = DocsConfig::from_lookup(lookup(&[
            ("GOOGLE_DOCS_ACCESS_TOKEN", "tok"),
            ("GOOGLE_DOCS_API_BASE", "http://localhost:8080/v1/"),
            ("GOOGLE_DOCS_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_credentials() {
        let err = DocsConfig::from_lookup(lookup(&[("GOOGLE_DOCS_ACCESS_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, DocsError::Config(_)));
    }

    #[test]
    fn test_bad_timeout() {
        let err = DocsConfig::from_lookup(lookup(&[
            ("GOOGLE_DOCS_ACCESS_TOKEN", "tok"),
            ("GOOGLE_DOCS_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, DocsError::Config(_)));
    }

    #[test]
    fn test_describe_hides_secrets() {
        let label = Credentials::AccessToken("ya29.secret".to_string()).describe();
        assert!(!label.contains("ya29"));
        let label = Credentials::ServiceAccountJson("{\"private_key\":\"k\"}".to_string()).describe();
        assert!(!label.contains("private_key"));
    }

    #[tokio::test]
    async fn test_token_provider_from_access_token() {
        let config = DocsConfig::from_lookup(lookup(&[("GOOGLE_DOCS_ACCESS_TOKEN", "tok")])).unwrap();
        let provider = config.token_provider().await.unwrap();
        assert_eq!(provider.access_token().await.unwrap(), "tok");
    }
}
