//! Domain types and configuration pipeline for mcpdoc.
//!
//! This crate contains the pure domain layer: the [`DocSource`] record, the
//! transport and domain-policy types, and the environment-driven
//! configuration pipeline. It has no HTTP or runtime dependencies; all
//! environment access goes through the injectable [`EnvSource`] trait so the
//! pipeline is testable without touching process globals.

#![deny(unsafe_code)]

pub mod config;
pub mod doc_source;

// Re-export commonly used types for convenience
pub use config::{
    AllowedDomains, ConfigError, EnvSource, ServerSettings, SystemEnv, Transport, parse_bool,
    parse_doc_sources,
};
pub use doc_source::{DocSource, default_doc_sources};
