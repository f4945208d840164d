//! Email breach verification.
//!
//! This module provides:
//! - The breach-source probes (structured breach database plus two indirect
//!   search-engine oracles)
//! - The aggregator that consolidates probe results into one verdict
//! - The frontend formatter that projects the verdict into the stable public
//!   shape
//!
//! The public pipeline is total: for any input string, including empty,
//! malformed, or non-ASCII, it returns a well-formed [`FrontendVerdict`]
//! and never fails.

mod aggregator;
mod frontend;
mod models;
pub mod probes;

use std::sync::Arc;

use crate::config::Config;
use crate::fetch::{fetcher_from_config, HttpFetch};

pub use aggregator::BreachAggregator;
pub use frontend::format_for_frontend;
pub use models::{
    AggregatedVerdict, BreachRecord, FrontendBreach, FrontendVerdict, OccurrenceRecord,
    SourceProbeResult, SourceTag,
};

/// Checks an email against every configured breach-intelligence source and
/// returns the consolidated, display-ready verdict.
///
/// This is the aggregator + formatter pipeline, the system's one high-value
/// public operation. It is total: every probe failure is captured inside the
/// verdict's audit list, and a verdict is produced even when no source could
/// be consulted at all.
pub async fn check_email_breaches(email: &str, config: &Config) -> FrontendVerdict {
    let fetcher = fetcher_from_config(config);
    check_email_breaches_with(email, fetcher, config).await
}

/// Same as [`check_email_breaches`], with an injected fetch capability.
///
/// Used by tests and by callers that manage their own HTTP client.
pub async fn check_email_breaches_with(
    email: &str,
    fetcher: Arc<dyn HttpFetch>,
    config: &Config,
) -> FrontendVerdict {
    let aggregator = BreachAggregator::with_default_probes(fetcher, config);
    format_for_frontend(aggregator.check(email).await)
}
