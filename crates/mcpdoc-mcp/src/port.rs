//! The documentation-server capability surface.
//!
//! The composition layer depends only on [`DocServerPort`]: a way to obtain
//! a streamable-HTTP sub-application, and a generic run entry point for
//! every other transport. Fakes implement the same trait in tests.

use std::sync::Arc;

use async_trait::async_trait;
use mcpdoc_core::Transport;
use thiserror::Error;

/// Errors surfaced by the documentation server's own run loop.
#[derive(Debug, Error)]
pub enum DocServerError {
    /// The requested transport is not supported by this engine.
    #[error("unsupported transport {0:?} (supported: streamable-http, stdio)")]
    UnsupportedTransport(String),

    /// Transport-level I/O failure.
    #[error("documentation server I/O error")]
    Io(#[from] std::io::Error),

    /// Any other engine failure.
    #[error("documentation server failed: {0}")]
    Internal(String),
}

/// Startup/shutdown hook owned by the documentation server.
///
/// The hook may acquire process-lifetime resources (the shared outbound
/// HTTP client lives here). Whoever serves the sub-application must invoke
/// `startup` before accepting requests and `shutdown` after the serve loop
/// exits, and must forward the hook unmodified — replacing it breaks the
/// acquire/release pairing.
#[async_trait]
pub trait SubAppLifecycle: Send + Sync {
    /// Acquire resources before the first request.
    async fn startup(&self) -> Result<(), DocServerError>;

    /// Release resources after the last request.
    async fn shutdown(&self) -> Result<(), DocServerError>;
}

/// The documentation server's HTTP bundle, treated as an opaque unit.
///
/// `router` already carries the server's own middleware; the lifecycle hook
/// is shared, not cloned per embedding.
pub struct SubApp {
    /// Route set (middleware layered in) to merge into a larger application.
    pub router: axum::Router,
    /// Startup/shutdown hook bracketing the serve loop.
    pub lifecycle: Arc<dyn SubAppLifecycle>,
}

/// Capability set exposed by a documentation-protocol server.
#[async_trait]
pub trait DocServerPort: Send + Sync {
    /// Obtain the streamable-HTTP sub-application.
    fn streamable_http_app(&self) -> SubApp;

    /// Run the server on a non-composed transport until termination.
    async fn run(&self, transport: &Transport) -> Result<(), DocServerError>;
}
