//! Environment-driven configuration pipeline.
//!
//! Deployment configuration comes exclusively from environment variables.
//! The pipeline reads them through the injectable [`EnvSource`] trait,
//! validates strictly where a bad value would be dangerous to ignore
//! (doc-source JSON, `PORT`, `MCPDOC_TIMEOUT`) and substitutes documented
//! defaults everywhere else.

mod env;
mod error;
mod settings;
mod sources;

pub use env::{EnvSource, SystemEnv};
pub use error::ConfigError;
pub use settings::{
    AllowedDomains, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    ServerSettings, Transport, parse_bool,
};
pub use sources::parse_doc_sources;
