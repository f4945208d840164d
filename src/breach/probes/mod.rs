//! Breach-source probes.
//!
//! A probe is one independent check of a single breach-intelligence source
//! for one email. Probes are polymorphic over the [`Probe`] trait, never
//! fail, and never panic: every outcome, including auth failures, rate
//! limits, and transport errors, is folded into the returned
//! [`SourceProbeResult`].

mod breach_db;
mod site_search;

use async_trait::async_trait;

use crate::breach::models::{SourceProbeResult, SourceTag};

pub use breach_db::BreachDbProbe;
pub use site_search::{HitHeuristic, SiteSearchProbe, SubstringHeuristic};

/// Capability to check one email against one breach-intelligence source.
#[async_trait]
pub trait Probe: Send + Sync {
    /// The source this probe consults.
    fn source(&self) -> SourceTag;

    /// Checks `email` against the source. Infallible by contract: failures
    /// are recorded on the result's `error` field.
    async fn check(&self, email: &str) -> SourceProbeResult;
}
