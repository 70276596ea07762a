// This is the entry point of the Google Docs tool server.
//
// **Architecture Overview:**
// - `core/` = Document logic (request builders, the `DocsApi` seam, tool traits)
// - `infra/` = Implementations of core traits (the Google Docs HTTP client, auth)
// - `host/` = Agent-host adapters (tool schemas, argument parsing, MCP over stdio)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Serve tool calls on stdin/stdout until the host closes the pipe

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "host/host_layer.rs"]
mod host;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::docs::DocsService;
use crate::core::tools::ToolHandler;
use crate::host::mcp_server;
use crate::host::DocsToolHandler;
use crate::infra::google_docs::{DocsConfig, GoogleDocsApiClient};

async fn run() -> anyhow::Result<()> {
    let config = DocsConfig::from_env()?;
    tracing::info!(
        "Using Google Docs API at {} ({})",
        config.api_base,
        config.credentials.describe()
    );

    let auth = config.token_provider().await?;
    let client = GoogleDocsApiClient::new(&config, auth)?;
    let handler = DocsToolHandler::new(DocsService::new(client));
    tracing::info!("Serving {} tools on stdio", handler.supported_tools().len());

    mcp_server::serve_stdio(handler).await
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; real environment variables still apply.
    dotenv::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Google Docs tool server failed: {:#}", e);
        std::process::exit(1);
    }
}
