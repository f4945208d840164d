//! National tax-ID (CPF) validation and registry lookup.
//!
//! This module provides:
//! - The pure checksum validators (tax ID, judicial process number)
//! - The thin registry client (first successful endpoint wins)
//! - The total `lookup_tax_id` pipeline that combines both

mod checksum;
mod registry;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::catalog::builders::tax_id_services;
use crate::catalog::{LinkEntry, NamedLink};
use crate::config::Config;
use crate::fetch::{fetcher_from_config, HttpFetch};

pub use checksum::{format_tax_id, validate_process_number, validate_tax_id};
pub use registry::{RegistryClient, RegistryData, RegistryEndpoint, RegistryUnavailable};

use crate::utils::strip_non_digits;

/// Lookup status for a tax-ID registry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryStatus {
    /// Registry data was retrieved.
    Found,
    /// The ID is valid but no registry endpoint could be consulted.
    Unavailable,
    /// The ID failed checksum validation; no network call was made.
    Invalid,
}

/// The result of a tax-ID lookup.
///
/// Always well-formed: validation failures and total registry unavailability
/// are carried in the `error`/`advisory` fields, never raised.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryReport {
    /// The ID formatted as `XXX.XXX.XXX-XX` (or the raw input when invalid).
    pub tax_id: String,
    /// Bare digits of the ID.
    pub digits: String,
    /// Lookup outcome.
    pub status: RegistryStatus,
    /// Registry data as a key/value map, when the lookup succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// Consulted or suggested services.
    pub sources: Vec<LinkEntry>,
    /// The url-bearing subset of `sources`.
    pub links: Vec<NamedLink>,
    /// Human-readable summary of the lookup.
    pub summary: String,
    /// Failure description, when the lookup could not complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// User-facing advisory (data-protection note or configuration hint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

/// Looks up a tax ID: checksum validation first, then the registry client.
///
/// Total by contract: every outcome is a well-formed [`RegistryReport`].
/// - invalid checksum → `Invalid`, no network call;
/// - registry success → `Found` with the forwarded key/value data;
/// - every endpoint failing → `Unavailable` with fallback links to the
///   official registry services.
pub async fn lookup_tax_id(input: &str, config: &Config) -> RegistryReport {
    let digits = strip_non_digits(input);

    if !validate_tax_id(&digits) {
        return RegistryReport {
            tax_id: input.to_string(),
            digits,
            status: RegistryStatus::Invalid,
            info: None,
            sources: Vec::new(),
            links: Vec::new(),
            summary: "The supplied tax ID is not valid.".to_string(),
            error: Some("invalid tax id: check the format".to_string()),
            advisory: None,
        };
    }

    let formatted = format_tax_id(&digits);
    let fetcher = fetcher_from_config(config);
    lookup_valid_tax_id(&formatted, &digits, fetcher, config).await
}

/// Registry half of the pipeline, with an injected fetch capability (tests).
pub async fn lookup_valid_tax_id(
    formatted: &str,
    digits: &str,
    fetcher: Arc<dyn HttpFetch>,
    config: &Config,
) -> RegistryReport {
    let client = RegistryClient::from_config(fetcher, config);

    match client.lookup(digits).await {
        Ok(data) => {
            info!("registry lookup for {formatted} answered by {}", data.source);
            let mut info_map = data.info;
            info_map.insert("tax_id".to_string(), formatted.to_string());
            let sources = vec![LinkEntry::info(
                data.source.clone(),
                format!("Registry data for {formatted} retrieved from {}", data.source),
            )];
            RegistryReport {
                tax_id: formatted.to_string(),
                digits: digits.to_string(),
                status: RegistryStatus::Found,
                info: Some(info_map),
                links: Vec::new(),
                sources,
                summary: format!(
                    "Lookup of tax ID {formatted} completed successfully via {}.",
                    data.source
                ),
                error: None,
                advisory: Some(
                    "Data obtained from an authorized API. Handling is subject to data-protection regulations."
                        .to_string(),
                ),
            }
        }
        Err(unavailable) => {
            let sources = tax_id_services(formatted, digits);
            let links = sources
                .iter()
                .filter_map(|entry| {
                    entry.url.as_ref().map(|url| NamedLink {
                        name: entry.service.clone(),
                        url: url.clone(),
                    })
                })
                .collect();
            RegistryReport {
                tax_id: formatted.to_string(),
                digits: digits.to_string(),
                status: RegistryStatus::Unavailable,
                info: None,
                sources,
                links,
                summary: format!("Lookup of tax ID {formatted} could not be completed."),
                error: Some(unavailable.to_string()),
                advisory: Some(
                    "Configure registry API credentials to enable live lookups; the official services below accept manual queries."
                        .to_string(),
                ),
            }
        }
    }
}
