// =============================================================================
// GOOGLE DOCS MODULE
// =============================================================================
//
// Everything that talks to Google lives here: configuration, access tokens
// and the HTTP client behind the core `DocsApi` trait. The core layer only
// builds request bodies; it never sees `reqwest`.

pub mod docs_config;
pub mod google_docs_client;
pub mod service_account;

pub use docs_config::DocsConfig;
pub use google_docs_client::GoogleDocsApiClient;
