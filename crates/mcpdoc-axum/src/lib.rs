//! Axum composition layer for mcpdoc.
//!
//! Joins two independently constructed route sets — the local root and
//! health endpoints, and the documentation server's sub-application — into
//! the application that actually binds a socket, or delegates entirely to
//! the server's own run loop for non-HTTP transports.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod routes;

pub use bootstrap::start_server;
pub use routes::compose_app;
