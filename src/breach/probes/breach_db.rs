//! Breach-database probe.
//!
//! Consults the structured breach-database API, preferring the authenticated
//! endpoint when an API key is configured and falling back to the
//! unauthenticated legacy endpoint when it is not, or when the
//! authenticated attempt recorded an error.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::breach::models::{BreachRecord, SourceProbeResult, SourceTag};
use crate::breach::probes::Probe;
use crate::config::{
    BREACH_API_ENDPOINT, BREACH_API_KEY_HEADER, BREACH_LEGACY_ENDPOINT, Config,
};
use crate::error_handling::ProbeFailure;
use crate::fetch::HttpFetch;
use crate::utils::quote_plus;

/// Probe for the structured breach-database API.
///
/// Response contract:
/// - 200 → the account matched; the body is a JSON list of breach entries.
///   `compromised` is set even if the list happens to be empty.
/// - 404 → the account is unknown to the source: not compromised, no error.
/// - 429 → rate limited: error recorded, `compromised` stays false and zero
///   records are reported. This is a known false-negative risk; the
///   aggregator neither retries nor distinguishes it from "clean".
/// - 401/403 → the credential was rejected; the fallback path runs.
pub struct BreachDbProbe {
    fetcher: Arc<dyn HttpFetch>,
    api_key: Option<String>,
    auth_endpoint: String,
    legacy_endpoint: String,
}

impl BreachDbProbe {
    /// Creates the probe with the production endpoints.
    pub fn new(fetcher: Arc<dyn HttpFetch>, config: &Config) -> Self {
        Self {
            fetcher,
            api_key: config.breach_api_key.clone(),
            auth_endpoint: BREACH_API_ENDPOINT.to_string(),
            legacy_endpoint: BREACH_LEGACY_ENDPOINT.to_string(),
        }
    }

    /// Overrides the service endpoints (tests and self-hosted mirrors).
    pub fn with_endpoints(mut self, auth: &str, legacy: &str) -> Self {
        self.auth_endpoint = auth.trim_end_matches('/').to_string();
        self.legacy_endpoint = legacy.trim_end_matches('/').to_string();
        self
    }

    async fn check_authenticated(&self, email: &str, key: &str, result: &mut SourceProbeResult) {
        let url = format!(
            "{}/{}?truncateResponse=false",
            self.auth_endpoint,
            quote_plus(email)
        );
        match self.fetcher.get(&url, &[(BREACH_API_KEY_HEADER, key)]).await {
            Ok(response) => match response.status {
                200 => {
                    apply_breach_body(&response.body, result);
                }
                404 => {}
                429 => result.error = Some(ProbeFailure::RateLimited.to_string()),
                401 | 403 => result.error = Some(ProbeFailure::AuthFailure.to_string()),
                other => {
                    result.error = Some(ProbeFailure::UnexpectedStatus(other).to_string());
                }
            },
            Err(e) => result.error = Some(ProbeFailure::from(e).to_string()),
        }
    }

    async fn check_legacy(&self, email: &str, result: &mut SourceProbeResult) {
        let url = format!("{}/{}", self.legacy_endpoint, quote_plus(email));
        match self.fetcher.get(&url, &[]).await {
            Ok(response) if response.status == 200 => {
                let parsed = apply_breach_body(&response.body, result);
                // Legacy success supersedes any error from the
                // authenticated attempt.
                if parsed {
                    result.error = None;
                }
            }
            // Any other status leaves the prior state untouched; a 404 here
            // is still a legitimate negative.
            Ok(_) => {}
            Err(e) => result.error = Some(ProbeFailure::from(e).to_string()),
        }
    }
}

/// Parses a breach-list body into `result`, marking the source compromised
/// on success (a 200 implies a match existed at query time, even with an
/// empty list). Returns whether parsing succeeded.
fn apply_breach_body(body: &str, result: &mut SourceProbeResult) -> bool {
    match serde_json::from_str::<Vec<BreachRecord>>(body) {
        Ok(records) => {
            result.compromised = true;
            result.breaches.extend(records);
            true
        }
        Err(e) => {
            result.error = Some(ProbeFailure::MalformedPayload(e.to_string()).to_string());
            false
        }
    }
}

#[async_trait]
impl Probe for BreachDbProbe {
    fn source(&self) -> SourceTag {
        SourceTag::BreachDatabase
    }

    async fn check(&self, email: &str) -> SourceProbeResult {
        let mut result = SourceProbeResult::new(self.source());

        if let Some(key) = self.api_key.clone() {
            debug!("checking breach database (authenticated) for {email}");
            self.check_authenticated(email, &key, &mut result).await;
        }

        if self.api_key.is_none() || result.error.is_some() {
            debug!("checking breach database (legacy endpoint) for {email}");
            self.check_legacy(email, &mut result).await;
        }

        result
    }
}
