//! Breach aggregator.
//!
//! Orchestrates the configured probes and folds their results into one
//! [`AggregatedVerdict`]. The aggregator never fails as a whole: a verdict is
//! always produced, even when every probe errors (in which case the verdict
//! is "clean" and the errors are visible only inside the per-source audit
//! list).

use std::sync::Arc;

use log::debug;

use crate::breach::models::{AggregatedVerdict, SourceTag};
use crate::breach::probes::{BreachDbProbe, Probe, SiteSearchProbe};
use crate::config::Config;
use crate::fetch::HttpFetch;

/// Aggregates breach verdicts across an ordered set of probes.
pub struct BreachAggregator {
    probes: Vec<Box<dyn Probe>>,
}

impl BreachAggregator {
    /// Builds an aggregator over an explicit probe set.
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// Builds the standard probe set: the breach database first, then the
    /// paste-archive and code-host search oracles.
    pub fn with_default_probes(fetcher: Arc<dyn HttpFetch>, config: &Config) -> Self {
        Self::new(vec![
            Box::new(BreachDbProbe::new(Arc::clone(&fetcher), config)),
            Box::new(SiteSearchProbe::pastebin(Arc::clone(&fetcher))),
            Box::new(SiteSearchProbe::github(fetcher)),
        ])
    }

    /// Checks `email` against every configured probe and consolidates the
    /// results.
    ///
    /// Probes run sequentially; the fold (OR over compromised flags,
    /// concatenation of record lists) is commutative and associative, so the
    /// order affects only the order of the audit list, never the verdict.
    /// All probes are consulted even after one reports compromised.
    pub async fn check(&self, email: &str) -> AggregatedVerdict {
        let mut compromised = false;
        let mut breaches = Vec::new();
        let mut occurrences = Vec::new();
        let mut sources = Vec::with_capacity(self.probes.len());

        for probe in &self.probes {
            debug!("consulting source: {}", probe.source());
            let result = probe.check(email).await;
            if result.compromised {
                compromised = true;
                breaches.extend(result.breaches.iter().cloned());
                occurrences.extend(result.occurrences.iter().cloned());
            }
            sources.push(result);
        }

        let total_breaches = breaches.len();
        let summary = if compromised {
            format!(
                "Email '{email}' was found in {total_breaches} confirmed breach(es) and {} additional occurrence(s).",
                occurrences.len()
            )
        } else {
            format!("Email '{email}' was not found in known breaches across the verified sources.")
        };

        AggregatedVerdict {
            email: email.to_string(),
            compromised,
            total_breaches,
            breaches,
            occurrences,
            sources,
            summary,
        }
    }

    /// The source tags this aggregator will consult, in order.
    pub fn source_tags(&self) -> Vec<SourceTag> {
        self.probes.iter().map(|p| p.source()).collect()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::breach::models::{BreachRecord, OccurrenceRecord, SourceProbeResult};

    /// Probe returning a fixed, pre-built result.
    struct FixedProbe {
        source: SourceTag,
        result: SourceProbeResult,
    }

    impl FixedProbe {
        fn clean(source: SourceTag) -> Self {
            Self {
                source,
                result: SourceProbeResult::new(source),
            }
        }

        fn failing(source: SourceTag) -> Self {
            let mut result = SourceProbeResult::new(source);
            result.error = Some("network failure: request timed out".into());
            Self { source, result }
        }

        fn with_breaches(source: SourceTag, names: &[&str]) -> Self {
            let mut result = SourceProbeResult::new(source);
            result.compromised = true;
            result.breaches = names
                .iter()
                .map(|n| BreachRecord {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect();
            Self { source, result }
        }

        fn with_occurrence(source: SourceTag, tag: &str) -> Self {
            let mut result = SourceProbeResult::new(source);
            result.compromised = true;
            result.occurrences.push(OccurrenceRecord {
                url: "https://search.example/q".into(),
                description: "found".into(),
                tag: tag.into(),
            });
            Self { source, result }
        }
    }

    #[async_trait]
    impl Probe for FixedProbe {
        fn source(&self) -> SourceTag {
            self.source
        }

        async fn check(&self, _email: &str) -> SourceProbeResult {
            self.result.clone()
        }
    }

    fn breach_names(verdict: &AggregatedVerdict) -> Vec<String> {
        let mut names: Vec<String> =
            verdict.breaches.iter().map(|b| b.name.clone()).collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_all_probes_clean_yields_clean_verdict() {
        let aggregator = BreachAggregator::new(vec![
            Box::new(FixedProbe::clean(SourceTag::BreachDatabase)),
            Box::new(FixedProbe::clean(SourceTag::PastebinSearch)),
            Box::new(FixedProbe::clean(SourceTag::GithubSearch)),
        ]);
        let verdict = aggregator.check("x@example.com").await;
        assert!(!verdict.compromised);
        assert_eq!(verdict.total_breaches, 0);
        assert_eq!(verdict.sources.len(), 3);
        assert!(verdict.summary.contains("was not found in known breaches"));
    }

    #[tokio::test]
    async fn test_all_probes_failing_degrades_to_clean() {
        // Degrade-to-clean is a known characteristic: when no source can be
        // consulted, the verdict still reads "not found", with the failures
        // visible only inside the audit list.
        let aggregator = BreachAggregator::new(vec![
            Box::new(FixedProbe::failing(SourceTag::BreachDatabase)),
            Box::new(FixedProbe::failing(SourceTag::PastebinSearch)),
            Box::new(FixedProbe::failing(SourceTag::GithubSearch)),
        ]);
        let verdict = aggregator.check("x@example.com").await;
        assert!(!verdict.compromised);
        assert_eq!(verdict.total_breaches, 0);
        assert_eq!(verdict.sources.len(), 3);
        assert!(verdict.sources.iter().all(|s| s.error.is_some()));
        assert!(verdict.summary.contains("was not found in known breaches"));
    }

    #[tokio::test]
    async fn test_fold_combines_breaches_and_occurrences() {
        let aggregator = BreachAggregator::new(vec![
            Box::new(FixedProbe::with_breaches(
                SourceTag::BreachDatabase,
                &["Adobe", "LinkedIn"],
            )),
            Box::new(FixedProbe::with_occurrence(
                SourceTag::PastebinSearch,
                "Pastebin Leak",
            )),
            Box::new(FixedProbe::clean(SourceTag::GithubSearch)),
        ]);
        let verdict = aggregator.check("alice@example.com").await;
        assert!(verdict.compromised);
        assert_eq!(verdict.total_breaches, 2);
        assert_eq!(verdict.breaches.len(), verdict.total_breaches);
        assert_eq!(verdict.occurrences.len(), 1);
        assert!(verdict
            .summary
            .contains("found in 2 confirmed breach(es) and 1 additional occurrence(s)"));
    }

    #[tokio::test]
    async fn test_aggregation_is_order_independent() {
        let build = |order: [usize; 3]| {
            let probes: Vec<Box<dyn Probe>> = order
                .into_iter()
                .map(|i| -> Box<dyn Probe> {
                    match i {
                        0 => Box::new(FixedProbe::with_breaches(
                            SourceTag::BreachDatabase,
                            &["Adobe", "LinkedIn"],
                        )),
                        1 => Box::new(FixedProbe::with_occurrence(
                            SourceTag::PastebinSearch,
                            "Pastebin Leak",
                        )),
                        _ => Box::new(FixedProbe::failing(SourceTag::GithubSearch)),
                    }
                })
                .collect();
            BreachAggregator::new(probes)
        };

        let baseline = build([0, 1, 2]).check("a@b.cc").await;
        for order in [[0, 1, 2], [2, 1, 0], [1, 0, 2], [2, 0, 1]] {
            let verdict = build(order).check("a@b.cc").await;
            assert_eq!(verdict.compromised, baseline.compromised);
            assert_eq!(verdict.total_breaches, baseline.total_breaches);
            assert_eq!(breach_names(&verdict), breach_names(&baseline));
            assert_eq!(verdict.sources.len(), baseline.sources.len());
        }
    }

    #[tokio::test]
    async fn test_no_short_circuit_after_first_hit() {
        // Every probe must be consulted even once one reports compromised.
        let aggregator = BreachAggregator::new(vec![
            Box::new(FixedProbe::with_breaches(SourceTag::BreachDatabase, &["Adobe"])),
            Box::new(FixedProbe::with_occurrence(
                SourceTag::PastebinSearch,
                "Pastebin Leak",
            )),
            Box::new(FixedProbe::with_occurrence(
                SourceTag::GithubSearch,
                "GitHub Leak",
            )),
        ]);
        let verdict = aggregator.check("a@b.cc").await;
        assert_eq!(verdict.sources.len(), 3);
        assert_eq!(verdict.occurrences.len(), 2);
    }

    #[test]
    fn test_source_tags_reports_declaration_order() {
        let aggregator = BreachAggregator::new(vec![
            Box::new(FixedProbe::clean(SourceTag::BreachDatabase)),
            Box::new(FixedProbe::clean(SourceTag::PastebinSearch)),
        ]);
        assert_eq!(
            aggregator.source_tags(),
            vec![SourceTag::BreachDatabase, SourceTag::PastebinSearch]
        );
    }
}
