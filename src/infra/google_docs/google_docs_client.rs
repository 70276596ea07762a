// =============================================================================
// GOOGLE DOCS API CLIENT
// =============================================================================
//
// `reqwest` implementation of the core `DocsApi` trait against the Docs REST
// API (https://developers.google.com/docs/api/reference/rest).
//
// **Endpoints used:**
// - `POST {base}/documents` - create a blank document
// - `GET {base}/documents/{id}` - fetch the full document structure
// - `POST {base}/documents/{id}:batchUpdate` - apply edit requests
//
// Non-2xx responses are returned as `DocsError::Http` with the status and the
// raw response body. Nothing is retried.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::core::docs::{DocsApi, DocsError};

use super::docs_config::DocsConfig;
use super::service_account::AccessTokenProvider;

/// Client for the Google Docs REST API.
pub struct GoogleDocsApiClient {
    client: Client,
    base_url: String,
    auth: Box<dyn AccessTokenProvider>,
}

impl GoogleDocsApiClient {
    pub fn new(config: &DocsConfig, auth: Box<dyn AccessTokenProvider>) -> Result<Self, DocsError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("google-docs-tools/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DocsError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Extracts the document ID from a Google Docs URL, or passes a bare ID through.
    ///
    /// IDs are limited to `[A-Za-z0-9_-]` since they are spliced into the request path.
    pub fn extract_doc_id(url_or_id: &str) -> Option<String> {
        let url_or_id = url_or_id.trim();
        let candidate = if url_or_id.contains("docs.google.com") {
            let start = url_or_id.find("/document/d/")?;
            let after_d = &url_or_id[start + "/document/d/".len()..];
            let end = after_d
                .find(|c: char| c == '/' || c == '?' || c == '#')
                .unwrap_or(after_d.len());
            &after_d[..end]
        } else {
            url_or_id
        };

        let valid = !candidate.is_empty()
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| candidate.to_string())
    }

    fn document_url(&self, doc_id_or_url: &str, suffix: &str) -> Result<String, DocsError> {
        let doc_id = Self::extract_doc_id(doc_id_or_url)
            .ok_or_else(|| DocsError::InvalidDocumentId(doc_id_or_url.to_string()))?;
        Ok(format!("{}/documents/{}{}", self.base_url, doc_id, suffix))
    }

    /// Attaches the bearer token, sends, and decodes the JSON body.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, DocsError> {
        let token = self.auth.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Google Docs API returned {}: {}", status, body);
            return Err(DocsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocsApi for GoogleDocsApiClient {
    async fn create_document(&self, body: Value) -> Result<Value, DocsError> {
        let url = format!("{}/documents", self.base_url);
        tracing::debug!("POST {}", url);
        self.execute(self.client.post(&url).json(&body)).await
    }

    async fn get_document(&self, document_id: &str) -> Result<Value, DocsError> {
        let url = self.document_url(document_id, "")?;
        tracing::debug!("GET {}", url);
        self.execute(self.client.get(&url)).await
    }

    async fn batch_update(&self, document_id: &str, body: Value) -> Result<Value, DocsError> {
        let url = self.document_url(document_id, ":batchUpdate")?;
        tracing::debug!(
            "POST {} ({} request(s))",
            url,
            body["requests"].as_array().map(|r| r.len()).unwrap_or(0)
        );
        self.execute(self.client.post(&url).json(&body)).await
    }
}
