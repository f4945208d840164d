//! Tax-registry client.
//!
//! A thin wrapper over one or more external registry APIs: endpoints are
//! tried in order and the first successful structured result wins. There is
//! deliberately no retry and no response enrichment here; the registry data
//! is forwarded as an opaque key/value map.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::config::{Config, REGISTRY_PUBLIC_ENDPOINT};
use crate::fetch::HttpFetch;

/// One registry API endpoint.
pub struct RegistryEndpoint {
    /// Display name of the registry source.
    pub name: String,
    /// Base URL; the bare tax-ID digits are appended as a path segment.
    pub base_url: String,
    /// Optional `(header, value)` credential pair.
    pub auth_header: Option<(String, String)>,
}

/// A successful registry lookup.
#[derive(Debug, Clone)]
pub struct RegistryData {
    /// Which endpoint produced the data.
    pub source: String,
    /// Flattened key/value view of the registry response.
    pub info: BTreeMap<String, String>,
}

/// Total registry unavailability: every configured endpoint failed.
#[derive(Error, Debug)]
#[error("no registry endpoint available: {0}")]
pub struct RegistryUnavailable(pub String);

/// Client that queries the configured registry endpoints in order.
pub struct RegistryClient {
    fetcher: Arc<dyn HttpFetch>,
    endpoints: Vec<RegistryEndpoint>,
}

impl RegistryClient {
    /// Builds the standard endpoint list: the authenticated endpoint first
    /// when a token is configured, then the public one.
    pub fn from_config(fetcher: Arc<dyn HttpFetch>, config: &Config) -> Self {
        let mut endpoints = Vec::new();
        if let Some(token) = &config.registry_api_token {
            endpoints.push(RegistryEndpoint {
                name: "Authorized registry API".to_string(),
                base_url: REGISTRY_PUBLIC_ENDPOINT.to_string(),
                auth_header: Some(("Authorization".to_string(), format!("Bearer {token}"))),
            });
        }
        endpoints.push(RegistryEndpoint {
            name: "BrasilAPI".to_string(),
            base_url: REGISTRY_PUBLIC_ENDPOINT.to_string(),
            auth_header: None,
        });
        Self { fetcher, endpoints }
    }

    /// Builds a client over an explicit endpoint list (tests).
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Vec<RegistryEndpoint>) -> Self {
        Self { fetcher, endpoints }
    }

    /// Looks up the bare tax-ID digits against each endpoint in order,
    /// returning the first successful structured result.
    pub async fn lookup(&self, digits: &str) -> Result<RegistryData, RegistryUnavailable> {
        let mut last_failure = "no registry endpoints configured".to_string();

        for endpoint in &self.endpoints {
            let url = format!("{}/{}", endpoint.base_url.trim_end_matches('/'), digits);
            let headers: Vec<(&str, &str)> = endpoint
                .auth_header
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();

            debug!("querying registry endpoint: {}", endpoint.name);
            match self.fetcher.get(&url, &headers).await {
                Ok(response) if response.status == 200 => {
                    match serde_json::from_str::<Value>(&response.body) {
                        Ok(Value::Object(map)) => {
                            return Ok(RegistryData {
                                source: endpoint.name.clone(),
                                info: flatten_object(&map),
                            });
                        }
                        Ok(_) | Err(_) => {
                            last_failure =
                                format!("{} returned an unparseable payload", endpoint.name);
                            warn!("{last_failure}");
                        }
                    }
                }
                Ok(response) => {
                    last_failure =
                        format!("{} returned status {}", endpoint.name, response.status);
                    debug!("{last_failure}");
                }
                Err(e) => {
                    last_failure = format!("{}: {e}", endpoint.name);
                    debug!("{last_failure}");
                }
            }
        }

        Err(RegistryUnavailable(last_failure))
    }
}

/// Flattens a JSON object into string key/value pairs. Nested values are
/// rendered as compact JSON.
fn flatten_object(map: &serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
