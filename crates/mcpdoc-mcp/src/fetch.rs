//! Outbound documentation fetching.
//!
//! One shared `reqwest` client serves every tool call. It is built when the
//! sub-application lifecycle starts (so the timeout and redirect policy from
//! the deployment configuration are applied exactly once) and released when
//! the lifecycle shuts down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mcpdoc_core::{AllowedDomains, DocSource, ServerSettings};
use thiserror::Error;
use tokio::sync::RwLock;
use url::Url;

use crate::port::{DocServerError, SubAppLifecycle};

/// Outbound fetch behavior, forwarded opaquely from the deployment
/// configuration.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether to follow HTTP redirects.
    pub follow_redirects: bool,
    /// Domain restriction for fetched URLs.
    pub allowed_domains: AllowedDomains,
}

impl FetchPolicy {
    /// Extract the fetch-relevant slice of the server settings.
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            timeout: settings.timeout,
            follow_redirects: settings.follow_redirects,
            allowed_domains: settings.allowed_domains.clone(),
        }
    }
}

/// Errors from the fetch layer, reported back through tool results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL did not parse.
    #[error("invalid URL {0:?}")]
    InvalidUrl(String),

    /// The URL's host is outside the configured domain policy.
    #[error("domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// The shared client has not been started (lifecycle not run).
    #[error("fetch client not started")]
    NotStarted,

    /// Transport-level HTTP failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Shared fetcher for documentation content.
///
/// Also the engine's [`SubAppLifecycle`]: startup builds the client,
/// shutdown drops it.
pub struct DocFetcher {
    policy: FetchPolicy,
    /// Hosts of the configured `llms_txt` URLs, always permitted under a
    /// restricted policy.
    source_hosts: Vec<String>,
    client: RwLock<Option<reqwest::Client>>,
}

impl DocFetcher {
    /// Create a fetcher for the given sources and policy.
    pub fn new(policy: FetchPolicy, sources: &[DocSource]) -> Arc<Self> {
        let source_hosts = sources
            .iter()
            .filter_map(|source| Url::parse(&source.llms_txt).ok())
            .filter_map(|url| url.host_str().map(str::to_lowercase))
            .collect();
        Arc::new(Self {
            policy,
            source_hosts,
            client: RwLock::new(None),
        })
    }

    /// Whether the policy permits fetching from `host`.
    ///
    /// Unrestricted deployments permit everything. Restricted ones permit
    /// the hosts of configured sources plus the explicit allowlist.
    pub fn permits(&self, host: &str) -> bool {
        match &self.policy.allowed_domains {
            AllowedDomains::Unrestricted => true,
            AllowedDomains::Restricted(domains) => {
                let host = host.to_lowercase();
                self.source_hosts.iter().any(|allowed| *allowed == host)
                    || domains.iter().any(|domain| domain.to_lowercase() == host)
            }
        }
    }

    /// Fetch a URL as text, subject to the domain policy.
    pub async fn fetch(&self, raw_url: &str) -> Result<String, FetchError> {
        let url =
            Url::parse(raw_url).map_err(|_| FetchError::InvalidUrl(raw_url.to_owned()))?;
        let host = url
            .host_str()
            .ok_or_else(|| FetchError::InvalidUrl(raw_url.to_owned()))?;
        if !self.permits(host) {
            return Err(FetchError::DomainNotAllowed(host.to_owned()));
        }

        let client = self
            .client
            .read()
            .await
            .clone()
            .ok_or(FetchError::NotStarted)?;
        let response = client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SubAppLifecycle for DocFetcher {
    async fn startup(&self) -> Result<(), DocServerError> {
        let redirect = if self.policy.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        };
        let client = reqwest::Client::builder()
            .timeout(self.policy.timeout)
            .redirect(redirect)
            .build()
            .map_err(|e| DocServerError::Internal(e.to_string()))?;

        *self.client.write().await = Some(client);
        tracing::debug!(
            timeout_secs = self.policy.timeout.as_secs_f64(),
            follow_redirects = self.policy.follow_redirects,
            "Fetch client started"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), DocServerError> {
        self.client.write().await.take();
        tracing::debug!("Fetch client released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdoc_core::default_doc_sources;

    fn policy(allowed: AllowedDomains) -> FetchPolicy {
        FetchPolicy {
            timeout: Duration::from_secs(15),
            follow_redirects: false,
            allowed_domains: allowed,
        }
    }

    #[test]
    fn unrestricted_policy_permits_any_host() {
        let fetcher = DocFetcher::new(policy(AllowedDomains::Unrestricted), &[]);
        assert!(fetcher.permits("anything.example"));
    }

    #[test]
    fn restricted_policy_permits_allowlisted_hosts_case_insensitively() {
        let fetcher = DocFetcher::new(
            policy(AllowedDomains::Restricted(vec!["Docs.Example.com".to_owned()])),
            &[],
        );
        assert!(fetcher.permits("docs.example.com"));
        assert!(!fetcher.permits("evil.example.com"));
    }

    #[test]
    fn restricted_policy_always_permits_configured_source_hosts() {
        let sources = default_doc_sources();
        let fetcher = DocFetcher::new(
            policy(AllowedDomains::Restricted(vec!["docs.example.com".to_owned()])),
            &sources,
        );
        assert!(fetcher.permits("langchain-ai.github.io"));
        assert!(fetcher.permits("python.langchain.com"));
        assert!(!fetcher.permits("github.com"));
    }

    #[tokio::test]
    async fn fetch_refuses_disallowed_domains_before_touching_the_network() {
        let fetcher = DocFetcher::new(
            policy(AllowedDomains::Restricted(vec!["docs.example.com".to_owned()])),
            &[],
        );
        let err = fetcher.fetch("https://evil.example.com/llms.txt").await;
        assert!(matches!(err, Err(FetchError::DomainNotAllowed(_))));
    }

    #[tokio::test]
    async fn fetch_requires_lifecycle_startup() {
        let fetcher = DocFetcher::new(policy(AllowedDomains::Unrestricted), &[]);
        let err = fetcher.fetch("https://docs.example.com/llms.txt").await;
        assert!(matches!(err, Err(FetchError::NotStarted)));
    }

    #[tokio::test]
    async fn lifecycle_startup_and_shutdown_toggle_the_client() {
        let fetcher = DocFetcher::new(policy(AllowedDomains::Unrestricted), &[]);
        fetcher.startup().await.unwrap();
        assert!(fetcher.client.read().await.is_some());
        fetcher.shutdown().await.unwrap();
        assert!(fetcher.client.read().await.is_none());
    }

    #[tokio::test]
    async fn invalid_urls_are_rejected() {
        let fetcher = DocFetcher::new(policy(AllowedDomains::Unrestricted), &[]);
        let err = fetcher.fetch("not a url").await;
        assert!(matches!(err, Err(FetchError::InvalidUrl(_))));
    }
}
