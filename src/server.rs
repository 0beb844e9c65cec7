//! MCP server initialization for stdio and SSE transports.
//!
//! Provides [`serve_stdio`] and [`serve_sse`] entry points that build the
//! seeded directory and wire the MCP tool handler into a running server.

use crate::config::KithConfig;
use crate::directory::Directory;
use crate::tools::KithTools;
use anyhow::{Context, Result};
use rmcp::ServiceExt;
use std::sync::Arc;

/// Shared setup: build the directory from the seed data.
/// A dangling relation edge is fatal here — malformed startup data must
/// not be swallowed.
fn setup_directory() -> Result<Arc<Directory>> {
    let directory = Directory::seeded().context("seed dataset failed integrity check")?;
    tracing::info!(
        people = directory.store().len(),
        "directory ready"
    );
    Ok(Arc::new(directory))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(_config: KithConfig) -> Result<()> {
    tracing::info!("starting kith MCP server on stdio");

    let directory = setup_directory()?;

    let tools = KithTools::new(directory);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running — waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP (SSE) transport.
pub async fn serve_sse(config: KithConfig) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    tracing::info!(addr = %bind_addr, "starting kith MCP server on SSE/HTTP");

    let directory = setup_directory()?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(KithTools::new(directory.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down SSE server");
        })
        .await?;

    Ok(())
}
