//! Indirect site-scoped search probes.
//!
//! These probes use a general search engine as an oracle: the query is
//! scoped to the target site plus the exact email string, and a "hit" is
//! decided by a coarse substring heuristic over the raw response body. No
//! structured detail is extracted; a hit yields a single supplementary
//! occurrence record pointing at the search URL.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::breach::models::{OccurrenceRecord, SourceProbeResult, SourceTag};
use crate::breach::probes::Probe;
use crate::config::SEARCH_ENGINE_ENDPOINT;
use crate::error_handling::ProbeFailure;
use crate::fetch::HttpFetch;
use crate::utils::quote_plus;

/// Decides whether a raw search-response body indicates the email appears on
/// the target site.
///
/// Kept as a seam so the substring check can later be replaced with
/// structured result parsing without touching the probe or the aggregator.
pub trait HitHeuristic: Send + Sync {
    /// Returns true when `body` indicates a hit for `email` on `site`.
    fn is_hit(&self, body: &str, site: &str, email: &str) -> bool;
}

/// The original presence heuristic: the lowercased body contains both the
/// site's domain and the lowercased email.
///
/// Coarse and fragile against encoding and locale variations, but
/// preserved for behavioral parity.
pub struct SubstringHeuristic;

impl HitHeuristic for SubstringHeuristic {
    fn is_hit(&self, body: &str, site: &str, email: &str) -> bool {
        let body = body.to_lowercase();
        body.contains(site) && body.contains(&email.to_lowercase())
    }
}

/// Probe that searches one target site for the exact email string.
pub struct SiteSearchProbe {
    fetcher: Arc<dyn HttpFetch>,
    source: SourceTag,
    site: &'static str,
    hit_description: &'static str,
    occurrence_tag: &'static str,
    search_endpoint: String,
    heuristic: Box<dyn HitHeuristic>,
}

impl SiteSearchProbe {
    /// Probe scoped to the social code host.
    pub fn github(fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            fetcher,
            source: SourceTag::GithubSearch,
            site: "github.com",
            hit_description: "Email found in public GitHub repositories",
            occurrence_tag: "GitHub Leak",
            search_endpoint: SEARCH_ENGINE_ENDPOINT.to_string(),
            heuristic: Box::new(SubstringHeuristic),
        }
    }

    /// Probe scoped to the paste archive.
    pub fn pastebin(fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            fetcher,
            source: SourceTag::PastebinSearch,
            site: "pastebin.com",
            hit_description: "Email found in Pastebin posts",
            occurrence_tag: "Pastebin Leak",
            search_endpoint: SEARCH_ENGINE_ENDPOINT.to_string(),
            heuristic: Box::new(SubstringHeuristic),
        }
    }

    /// Overrides the search-engine endpoint (tests).
    pub fn with_search_endpoint(mut self, endpoint: &str) -> Self {
        self.search_endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Swaps the hit heuristic.
    pub fn with_heuristic(mut self, heuristic: Box<dyn HitHeuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }
}

#[async_trait]
impl Probe for SiteSearchProbe {
    fn source(&self) -> SourceTag {
        self.source
    }

    async fn check(&self, email: &str) -> SourceProbeResult {
        let mut result = SourceProbeResult::new(self.source);

        let query = format!("site:{} \"{}\"", self.site, email);
        let url = format!("{}?q={}", self.search_endpoint, quote_plus(&query));
        debug!("searching {} for {email}", self.site);

        match self.fetcher.get(&url, &[]).await {
            Ok(response) if response.status == 200 => {
                if self.heuristic.is_hit(&response.body, self.site, email) {
                    result.compromised = true;
                    result.occurrences.push(OccurrenceRecord {
                        url,
                        description: self.hit_description.to_string(),
                        tag: self.occurrence_tag.to_string(),
                    });
                }
            }
            // Any non-200 (blocked, captcha page, throttling redirect) is a
            // silent miss, matching the original behavior.
            Ok(_) => {}
            Err(e) => result.error = Some(ProbeFailure::from(e).to_string()),
        }

        result
    }
}
