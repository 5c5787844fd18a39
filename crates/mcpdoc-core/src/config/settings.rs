//! Server settings assembly.
//!
//! [`ServerSettings::from_env`] is the single place deployment configuration
//! is read. It resolves every variable to a value or a documented default,
//! failing fast only where the value is set but unusable (`PORT`,
//! `MCPDOC_TIMEOUT`, `MCPDOC_SOURCES_JSON`).

use std::time::Duration;

use super::env::EnvSource;
use super::sources::parse_doc_sources;
use super::ConfigError;
use crate::doc_source::DocSource;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default outbound fetch timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 15.0;

/// Default log verbosity.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Tokens accepted as "true" by boolean environment flags.
const TRUTHY_TOKENS: [&str; 4] = ["1", "true", "yes", "on"];

/// Interpret an environment string as a boolean flag.
///
/// This is an exact, case-insensitive membership test against
/// `{"1","true","yes","on"}`, not a general truthiness coercion: any other
/// non-empty value yields `false`, and absent input yields the default.
/// Never errors.
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(value) => {
            let token = value.trim().to_lowercase();
            TRUTHY_TOKENS.contains(&token.as_str())
        }
    }
}

/// Wire-level transport the documentation server is exposed over.
///
/// `StreamableHttp` composes with the Axum application; any other value
/// delegates entirely to the server's own run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Streamable HTTP, the composed default.
    StreamableHttp,
    /// Any other transport string, handed to the server verbatim.
    Other(String),
}

impl Transport {
    /// String form of the streamable-HTTP transport.
    pub const STREAMABLE_HTTP: &'static str = "streamable-http";

    /// Parse a transport string; absent input selects the default.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some(Self::STREAMABLE_HTTP) => Self::StreamableHttp,
            Some(other) => Self::Other(other.to_owned()),
        }
    }

    /// The transport's wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::StreamableHttp => Self::STREAMABLE_HTTP,
            Self::Other(name) => name,
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::StreamableHttp
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound domain restriction for documentation fetches.
///
/// An empty restriction list is unrepresentable: parsing input with no
/// substantive entries yields `Unrestricted`, keeping "nothing supplied"
/// distinct from "nothing allowed".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedDomains {
    /// No domain filtering.
    #[default]
    Unrestricted,
    /// Only the listed domains are permitted.
    Restricted(Vec<String>),
}

impl AllowedDomains {
    /// Parse a comma-separated domain list.
    ///
    /// Pieces are trimmed and empty pieces discarded, preserving order.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unrestricted;
        };
        let domains: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        if domains.is_empty() {
            Self::Unrestricted
        } else {
            Self::Restricted(domains)
        }
    }

    /// Whether the policy restricts anything at all.
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }
}

/// Immutable server settings, built once at startup and consumed once.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Transport selection for the composition branch.
    pub transport: Transport,
    /// Outbound fetch timeout, forwarded opaquely to the engine.
    pub timeout: Duration,
    /// Whether outbound fetches follow redirects.
    pub follow_redirects: bool,
    /// Outbound domain restriction, forwarded opaquely to the engine.
    pub allowed_domains: AllowedDomains,
    /// Log verbosity name; lowercased by the runtime that consumes it.
    pub log_level: String,
    /// Validated documentation sources.
    pub doc_sources: Vec<DocSource>,
}

impl ServerSettings {
    /// Assemble settings from an environment source.
    ///
    /// Unset variables resolve to defaults; set-but-unusable values for
    /// `PORT`, `MCPDOC_TIMEOUT` and `MCPDOC_SOURCES_JSON` fail the whole
    /// assembly with a [`ConfigError`] naming the variable.
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let doc_sources = parse_doc_sources(env.get("MCPDOC_SOURCES_JSON").as_deref())?;

        let host = env.get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match env.get("PORT") {
            None => DEFAULT_PORT,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
        };

        let timeout_secs = match env.get("MCPDOC_TIMEOUT") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(value) => value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .ok_or(ConfigError::InvalidTimeout { value })?,
        };

        Ok(Self {
            host,
            port,
            transport: Transport::parse(env.get("MCPDOC_TRANSPORT").as_deref()),
            timeout: Duration::from_secs_f64(timeout_secs),
            follow_redirects: parse_bool(env.get("MCPDOC_FOLLOW_REDIRECTS").as_deref(), false),
            allowed_domains: AllowedDomains::parse(env.get("MCPDOC_ALLOWED_DOMAINS").as_deref()),
            log_level: env
                .get("LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
            doc_sources,
        })
    }
}
