//! Production documentation server built on rmcp.

use std::sync::Arc;

use async_trait::async_trait;
use mcpdoc_core::{ServerSettings, Transport};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{ServiceExt, transport::stdio};
use tower_http::trace::TraceLayer;

use crate::fetch::{DocFetcher, FetchPolicy};
use crate::port::{DocServerError, DocServerPort, SubApp, SubAppLifecycle};
use crate::tools::DocTools;

/// The rmcp-backed documentation server.
///
/// Holds the validated doc sources and the shared fetcher; both transports
/// (streamable HTTP sub-application, stdio run loop) serve the same tool
/// handler.
pub struct McpDocServer {
    tools: DocTools,
    fetcher: Arc<DocFetcher>,
}

impl McpDocServer {
    /// Build the server from assembled settings.
    ///
    /// Timeout, redirect and domain-policy settings flow into the fetcher;
    /// the settings' host/port/transport are the caller's concern.
    pub fn new(settings: &ServerSettings) -> Self {
        let fetcher = DocFetcher::new(
            FetchPolicy::from_settings(settings),
            &settings.doc_sources,
        );
        let tools = DocTools::new(settings.doc_sources.clone(), Arc::clone(&fetcher));
        Self { tools, fetcher }
    }
}

#[async_trait]
impl DocServerPort for McpDocServer {
    fn streamable_http_app(&self) -> SubApp {
        let tools = self.tools.clone();
        let service = StreamableHttpService::new(
            move || Ok(tools.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        );
        let router = axum::Router::new()
            .nest_service("/mcp", service)
            .layer(TraceLayer::new_for_http());
        SubApp {
            router,
            lifecycle: self.fetcher.clone(),
        }
    }

    async fn run(&self, transport: &Transport) -> Result<(), DocServerError> {
        match transport.as_str() {
            "stdio" => {
                // The engine brackets its own run loop with the same
                // lifecycle the composed application would use.
                self.fetcher.startup().await?;
                let service = self
                    .tools
                    .clone()
                    .serve(stdio())
                    .await
                    .map_err(|e| DocServerError::Internal(e.to_string()))?;
                let quit = service
                    .waiting()
                    .await
                    .map_err(|e| DocServerError::Internal(e.to_string()));
                self.fetcher.shutdown().await?;
                quit.map(|_| ())
            }
            other => Err(DocServerError::UnsupportedTransport(other.to_owned())),
        }
    }
}
