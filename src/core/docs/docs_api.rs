use async_trait::async_trait;
use serde_json::Value;

/// Everything that can go wrong between a tool call and the Docs API.
///
/// Upstream failures are carried through as-is: no retries, no reinterpretation.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Google Docs API error ({status}): {body}")]
    Http { status: u16, body: String },
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Could not extract document ID from: {0}")]
    InvalidDocumentId(String),
}

impl From<reqwest::Error> for DocsError {
    fn from(err: reqwest::Error) -> Self {
        DocsError::Transport(err.to_string())
    }
}

/// The three upstream endpoints this crate talks to.
#[async_trait]
pub trait DocsApi: Send + Sync {
    /// `POST /documents`.
    async fn create_document(&self, body: Value) -> Result<Value, DocsError>;

    /// `GET /documents/{id}`.
    async fn get_document(&self, document_id: &str) -> Result<Value, DocsError>;

    /// `POST /documents/{id}:batchUpdate`.
    async fn batch_update(&self, document_id: &str, body: Value) -> Result<Value, DocsError>;
}
