//! Server startup - the composition root's runtime entry.
//!
//! Assumes a valid configuration and a constructed documentation server; it
//! performs no validation of its own. Bind/serve/run failures are not
//! caught or translated here — they propagate to the process boundary.

use std::sync::Arc;

use anyhow::Result;
use mcpdoc_core::{ServerSettings, Transport};
use mcpdoc_mcp::DocServerPort;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the documentation server until process termination.
///
/// Streamable HTTP composes the sub-application with the auxiliary routes
/// and binds `host:port`; every other transport delegates entirely to the
/// server's own run loop (no auxiliary endpoints). Exactly one diagnostic
/// line is emitted before the blocking call, in both branches.
pub async fn start_server(
    settings: ServerSettings,
    server: Arc<dyn DocServerPort>,
) -> Result<()> {
    info!(
        host = %settings.host,
        port = settings.port,
        transport = %settings.transport,
        doc_sources = settings.doc_sources.len(),
        "Starting mcpdoc"
    );

    match &settings.transport {
        Transport::StreamableHttp => {
            let (app, lifecycle) = crate::routes::compose_app(
                server.streamable_http_app(),
                settings.doc_sources.len(),
            );

            lifecycle.startup().await?;
            let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
            let served = axum::serve(listener, app).await;
            lifecycle.shutdown().await?;
            served?;
            Ok(())
        }
        transport @ Transport::Other(_) => Ok(server.run(transport).await?),
    }
}
