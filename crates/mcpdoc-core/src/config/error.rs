//! Configuration error types.

use thiserror::Error;

/// Startup-fatal configuration errors.
///
/// Every variant names the offending environment variable and, for
/// doc-source list elements, the failing index. These surface through the
/// binary before any socket is bound; unset variables and unrecognized
/// boolean tokens are not errors — they resolve to documented defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `MCPDOC_SOURCES_JSON` could not be decoded at all.
    #[error("MCPDOC_SOURCES_JSON must be valid JSON")]
    SourcesNotJson(#[source] serde_json::Error),

    /// `MCPDOC_SOURCES_JSON` decoded, but the top level is not an array.
    #[error("MCPDOC_SOURCES_JSON must be a JSON list")]
    SourcesNotList,

    /// A doc-source element is not a JSON object.
    #[error("MCPDOC_SOURCES_JSON[{index}] must be an object with llms_txt")]
    SourceNotObject { index: usize },

    /// A doc-source element lacks a usable `llms_txt` value.
    #[error("MCPDOC_SOURCES_JSON[{index}] is missing a non-empty llms_txt")]
    SourceMissingLlmsTxt { index: usize },

    /// `PORT` is set but does not parse as a port number.
    #[error("PORT must be an integer, got {value:?}")]
    InvalidPort { value: String },

    /// `MCPDOC_TIMEOUT` is set but does not parse as positive seconds.
    #[error("MCPDOC_TIMEOUT must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { value: String },
}
