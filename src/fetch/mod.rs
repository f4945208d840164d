//! Injected HTTP fetch capability.
//!
//! Every component that reaches the network does so through the [`HttpFetch`]
//! trait rather than a concrete client, so probes and the registry client can
//! be unit-tested without live network access. The production implementation
//! ([`ReqwestFetcher`]) wraps a shared `reqwest::Client` built by
//! [`crate::initialization::init_client`] with the configured timeout and
//! User-Agent.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::error_handling::categorize_reqwest_error;
use crate::initialization::init_client;

/// A completed HTTP response: status code plus the full body as text.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

/// Transport-level fetch failures.
///
/// Timeouts are distinguished from connection failures only for logging;
/// probes treat every variant identically (recorded as an error, zero
/// contribution, no retry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport or decoding failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Capability to issue a single GET request.
///
/// Implementations must be cheap to share (`Arc<dyn HttpFetch>`) and must not
/// retry internally; retry policy is owned by callers (and the callers here
/// perform none).
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Issues one GET request and returns the status code and body text.
    ///
    /// `headers` are request-specific additions; implementation-level default
    /// headers (User-Agent, Accept) are applied underneath them.
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<FetchedResponse, FetchError>;
}

/// Production [`HttpFetch`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Arc<reqwest::Client>,
}

impl ReqwestFetcher {
    /// Wraps an already-initialized client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<FetchedResponse, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        Ok(FetchedResponse { status, body })
    }
}

/// Fetcher that fails every request with a fixed message.
///
/// Used when client initialization itself failed: the lookup pipelines are
/// total, so instead of aborting, every probe is still consulted and records
/// the initialization failure as its error.
pub struct UnavailableFetcher {
    reason: String,
}

impl UnavailableFetcher {
    /// Creates a fetcher that reports `reason` for every request.
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl HttpFetch for UnavailableFetcher {
    async fn get(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
    ) -> Result<FetchedResponse, FetchError> {
        Err(FetchError::Transport(self.reason.clone()))
    }
}

/// Builds the production fetcher from a configuration.
///
/// Falls back to an [`UnavailableFetcher`] if the HTTP client cannot be
/// constructed, keeping the public lookup operations total.
pub fn fetcher_from_config(config: &Config) -> Arc<dyn HttpFetch> {
    match init_client(config) {
        Ok(client) => Arc::new(ReqwestFetcher::new(client)),
        Err(e) => {
            log::warn!("Failed to initialize HTTP client, all probes will report errors: {e}");
            Arc::new(UnavailableFetcher::new(e.to_string()))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned fetchers shared by the probe unit tests.

    use std::collections::HashMap;

    use super::*;

    /// Returns a fixed `(status, body)` per URL substring; errors on any URL
    /// with no matching route.
    pub struct CannedFetcher {
        routes: HashMap<&'static str, (u16, String)>,
    }

    impl CannedFetcher {
        pub fn new() -> Self {
            Self {
                routes: HashMap::new(),
            }
        }

        pub fn route(mut self, url_fragment: &'static str, status: u16, body: &str) -> Self {
            self.routes.insert(url_fragment, (status, body.to_string()));
            self
        }
    }

    #[async_trait]
    impl HttpFetch for CannedFetcher {
        async fn get(
            &self,
            url: &str,
            _headers: &[(&str, &str)],
        ) -> Result<FetchedResponse, FetchError> {
            for (fragment, (status, body)) in &self.routes {
                if url.contains(fragment) {
                    return Ok(FetchedResponse {
                        status: *status,
                        body: body.clone(),
                    });
                }
            }
            Err(FetchError::Connect(format!("no route for {url}")))
        }
    }

    /// Fails every request, for exercising degrade-to-clean behavior.
    pub struct FailingFetcher;

    #[async_trait]
    impl HttpFetch for FailingFetcher {
        async fn get(
            &self,
            _url: &str,
            _headers: &[(&str, &str)],
        ) -> Result<FetchedResponse, FetchError> {
            Err(FetchError::Timeout)
        }
    }
}
