//! Link-catalog result shapes.

use serde::Serialize;

/// Distinguishes clickable links from informational notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A clickable lookup link.
    Link,
    /// An informational note with no URL.
    Info,
}

/// One entry in a link catalog: a third-party service plus either a
/// pre-built lookup URL or an informational note.
#[derive(Debug, Clone, Serialize)]
pub struct LinkEntry {
    /// Service name (e.g. "Shodan").
    pub service: String,
    /// What following the entry will show.
    pub description: String,
    /// Pre-built lookup URL; absent for informational notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Entry kind.
    pub kind: EntryKind,
}

impl LinkEntry {
    /// A clickable link entry.
    pub fn link(
        service: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            description: description.into(),
            url: Some(url.into()),
            kind: EntryKind::Link,
        }
    }

    /// An informational note without a URL.
    pub fn info(service: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            description: description.into(),
            url: None,
            kind: EntryKind::Info,
        }
    }
}

/// A bare `(name, url)` pair: the url-bearing subset of a catalog, kept in
/// entry order for callers that only render links.
#[derive(Debug, Clone, Serialize)]
pub struct NamedLink {
    /// Service name.
    pub name: String,
    /// Lookup URL.
    pub url: String,
}

/// The result of one link-catalog build.
///
/// `entries` preserves insertion order (callers may rely on the first
/// entries being the most relevant), `links` is the url-bearing subset, and
/// `total_results == entries.len()`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// The identifier as supplied by the caller.
    pub identifier: String,
    /// Kind-specific normalized form (stripped digits, uppercased plate, …),
    /// when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// All entries, in insertion order.
    pub entries: Vec<LinkEntry>,
    /// The url-bearing subset of `entries`, in the same order.
    pub links: Vec<NamedLink>,
    /// Number of entries.
    pub total_results: usize,
    /// Human-readable summary of the catalog.
    pub summary: String,
}

impl CatalogReport {
    /// Assembles a report from ordered entries, deriving the link list and
    /// the total.
    pub fn assemble(
        identifier: impl Into<String>,
        normalized: Option<String>,
        entries: Vec<LinkEntry>,
        summary: impl Into<String>,
    ) -> Self {
        let links = entries
            .iter()
            .filter_map(|entry| {
                entry.url.as_ref().map(|url| NamedLink {
                    name: entry.service.clone(),
                    url: url.clone(),
                })
            })
            .collect();
        let total_results = entries.len();
        Self {
            identifier: identifier.into(),
            normalized,
            entries,
            links,
            total_results,
            summary: summary.into(),
        }
    }
}
