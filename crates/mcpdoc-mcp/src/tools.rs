//! MCP tool surface of the documentation server.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};

use mcpdoc_core::DocSource;

use crate::fetch::DocFetcher;

/// Parameters for the `fetch_docs` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FetchDocsRequest {
    /// URL to fetch — an `llms.txt` index or a page it links to.
    pub url: String,
}

/// Tool handler backing both the streamable-HTTP and stdio transports.
#[derive(Clone)]
pub struct DocTools {
    doc_sources: Arc<Vec<DocSource>>,
    fetcher: Arc<DocFetcher>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocTools {
    pub fn new(doc_sources: Vec<DocSource>, fetcher: Arc<DocFetcher>) -> Self {
        Self {
            doc_sources: Arc::new(doc_sources),
            fetcher,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List the configured documentation sources and their llms.txt URLs. Call this before fetching documentation."
    )]
    async fn list_doc_sources(&self) -> Result<CallToolResult, McpError> {
        let listing = render_source_listing(&self.doc_sources);
        Ok(CallToolResult::success(vec![Content::text(listing)]))
    }

    #[tool(
        description = "Fetch a documentation URL as plain text, subject to the server's domain policy."
    )]
    async fn fetch_docs(
        &self,
        Parameters(request): Parameters<FetchDocsRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.fetcher.fetch(&request.url).await {
            Ok(body) => Ok(CallToolResult::success(vec![Content::text(body)])),
            // Policy and transport failures are tool-level errors, not
            // protocol errors: the client sees a readable message.
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }
}

#[tool_handler]
impl ServerHandler for DocTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "mcpdoc serves llms.txt documentation indexes. \
                 Use list_doc_sources to discover sources, then fetch_docs to read them."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

/// One line per source: `Name: url` when named, the bare URL otherwise.
fn render_source_listing(sources: &[DocSource]) -> String {
    sources
        .iter()
        .map(|source| match &source.name {
            Some(name) => format!("{name}: {}", source.llms_txt),
            None => source.llms_txt.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_names_sources_when_named() {
        let sources = vec![
            DocSource::new("https://a.example/llms.txt").with_name("A"),
            DocSource::new("https://b.example/llms.txt"),
        ];
        assert_eq!(
            render_source_listing(&sources),
            "A: https://a.example/llms.txt\nhttps://b.example/llms.txt"
        );
    }

    #[test]
    fn listing_is_empty_for_no_sources() {
        assert_eq!(render_source_listing(&[]), "");
    }
}
