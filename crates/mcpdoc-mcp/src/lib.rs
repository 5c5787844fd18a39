//! MCP documentation-protocol engine for mcpdoc.
//!
//! This crate owns everything behind the documentation protocol: the
//! [`DocServerPort`] capability trait the composition layer depends on, the
//! [`SubApp`] bundle it embeds, and the production [`McpDocServer`] built on
//! `rmcp`. The composition layer never sees protocol internals — it obtains
//! a sub-application (router + lifecycle hook) or delegates to [`run`].
//!
//! [`run`]: DocServerPort::run

#![deny(unsafe_code)]

mod fetch;
mod port;
mod service;
mod tools;

pub use fetch::{DocFetcher, FetchError, FetchPolicy};
pub use port::{DocServerError, DocServerPort, SubApp, SubAppLifecycle};
pub use service::McpDocServer;
