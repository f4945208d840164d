//! Breach-verification data model.
//!
//! All entities here are created fresh per call, never persisted, and never
//! mutated after construction. Response shapes from the breach-database API
//! are deserialized with every field defaulted, so a partial upstream payload
//! still yields a well-formed record.

use serde::{Deserialize, Serialize};

/// One confirmed historical data breach affecting an email.
///
/// Deserialized from the breach-database response shape (PascalCase field
/// names accepted via aliases); serialized in snake_case. The breach date is
/// an opaque string whose format is not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreachRecord {
    /// Machine name of the breach.
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Human-readable title; may be empty, in which case the frontend
    /// formatter falls back to `name`.
    #[serde(default, alias = "Title")]
    pub title: String,
    /// Date the breach occurred (opaque string).
    #[serde(default, alias = "BreachDate")]
    pub breach_date: String,
    /// Domain of the affected service.
    #[serde(default, alias = "Domain")]
    pub domain: String,
    /// Number of affected accounts.
    #[serde(default, alias = "PwnCount")]
    pub pwn_count: u64,
    /// Ordered list of compromised data categories (e.g. "Passwords").
    #[serde(default, alias = "DataClasses")]
    pub data_classes: Vec<String>,
    /// Free-text description of the incident.
    #[serde(default, alias = "Description")]
    pub description: String,
    /// Whether the source has verified the breach.
    #[serde(default, alias = "IsVerified")]
    pub is_verified: bool,
    /// Logo reference for the affected service, if any.
    #[serde(default, alias = "LogoPath")]
    pub logo_path: String,
}

/// A supplementary occurrence reported by an indirect source.
///
/// Indirect sources only report that the email shows up somewhere; they carry
/// no structured breach detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// The search URL where the occurrence can be inspected.
    pub url: String,
    /// Fixed description of what was found.
    pub description: String,
    /// Source tag (e.g. "GitHub Leak").
    pub tag: String,
}

/// Tag identifying one breach-intelligence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceTag {
    /// The structured breach-database API.
    #[serde(rename = "Have I Been Pwned")]
    BreachDatabase,
    /// Search-engine check scoped to the paste archive.
    #[serde(rename = "Pastebin (via Google)")]
    PastebinSearch,
    /// Search-engine check scoped to the social code host.
    #[serde(rename = "GitHub (via Google)")]
    GithubSearch,
}

impl SourceTag {
    /// Returns the human-readable source name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::BreachDatabase => "Have I Been Pwned",
            SourceTag::PastebinSearch => "Pastebin (via Google)",
            SourceTag::GithubSearch => "GitHub (via Google)",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of checking one breach-intelligence source for one email.
///
/// A failed probe still produces one of these: `error` is populated and the
/// data fields stay empty. A 404 from a source is "not compromised, no
/// error"; a rate-limit sets `error` and leaves `compromised` false.
#[derive(Debug, Clone, Serialize)]
pub struct SourceProbeResult {
    /// Which source was consulted.
    pub source: SourceTag,
    /// Whether this source reports the email as compromised.
    pub compromised: bool,
    /// Structured breach records; may be empty even when `compromised` is
    /// true, for sources that only report occurrence.
    pub breaches: Vec<BreachRecord>,
    /// Supplementary occurrence records from indirect sources.
    pub occurrences: Vec<OccurrenceRecord>,
    /// Failure description, when the probe could not complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceProbeResult {
    /// A fresh zero-result for `source`: not compromised, no records, no
    /// error.
    pub fn new(source: SourceTag) -> Self {
        Self {
            source,
            compromised: false,
            breaches: Vec::new(),
            occurrences: Vec::new(),
            error: None,
        }
    }
}

/// Consolidation across all probe results for one email.
///
/// Invariants:
/// - `compromised` is true iff at least one consulted source reports
///   compromised.
/// - `total_breaches == breaches.len()`; records are concatenated across
///   sources without cross-source deduplication (see DESIGN.md).
/// - Every probe attempt appears exactly once in `sources`, even on failure.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedVerdict {
    /// The email that was checked.
    pub email: String,
    /// Logical OR of the per-source compromised flags.
    pub compromised: bool,
    /// Count of confirmed breach records.
    pub total_breaches: usize,
    /// All breach records across sources.
    pub breaches: Vec<BreachRecord>,
    /// All supplementary occurrences across sources.
    pub occurrences: Vec<OccurrenceRecord>,
    /// Every source consulted, including failed ones, for auditability.
    pub sources: Vec<SourceProbeResult>,
    /// Generated summary sentence.
    pub summary: String,
}

/// Simplified breach entry exposed to the frontend.
///
/// Every field is display-ready: the formatter substitutes defaults for
/// anything the source left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontendBreach {
    /// Breach name ("Unknown" when the source provided none).
    pub name: String,
    /// Breach title (falls back to `name`, then "Untitled").
    pub title: String,
    /// Breach date ("N/A" when missing).
    pub breach_date: String,
    /// Affected domain ("N/A" when missing).
    pub domain: String,
    /// Number of affected accounts.
    pub pwn_count: u64,
    /// Compromised data categories.
    pub data_classes: Vec<String>,
    /// Free-text description.
    pub description: String,
    /// Whether the source verified the breach.
    pub is_verified: bool,
    /// Logo reference, possibly empty.
    pub logo_path: String,
}

/// The externally exposed projection of an [`AggregatedVerdict`].
#[derive(Debug, Clone, Serialize)]
pub struct FrontendVerdict {
    /// The email that was checked.
    pub email: String,
    /// Consolidated compromised flag.
    pub compromised: bool,
    /// Count of confirmed breach records.
    pub total_breaches: usize,
    /// Display-ready breach entries.
    pub breaches: Vec<FrontendBreach>,
    /// Supplementary occurrences, passed through unchanged.
    pub occurrences: Vec<OccurrenceRecord>,
    /// Summary sentence from the aggregator.
    pub summary: String,
    /// Warning banner chosen solely by the compromised flag.
    pub warning: String,
}
