//! osint_lookup library: OSINT aggregation helpers
//!
//! Given an identifier of a known kind (person name, phone number, email
//! address, username, physical address, vehicle plate, domain/IP, judicial
//! process number, photo search term, or national tax ID), this library
//! produces a structured bundle of candidate lookup links on third-party
//! public search services. Two identifier kinds additionally have live
//! flows: email breach verification (multiple leak-intelligence sources
//! consolidated into one verdict) and tax-ID registry lookup.
//!
//! # Example
//!
//! ```no_run
//! use osint_lookup::{check_email_breaches, Config};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config::from_env();
//! let verdict = check_email_breaches("alice@example.com", &config).await;
//! println!("{}", verdict.summary);
//! # }
//! ```
//!
//! # Requirements
//!
//! The live lookup flows require a Tokio runtime. Use `#[tokio::main]` in
//! your application or call them from within an async context. The link
//! catalogs are plain synchronous functions.

#![warn(missing_docs)]

mod breach;
pub mod catalog;
pub mod config;
mod error_handling;
pub mod fetch;
mod identifier;
pub mod initialization;
mod taxid;
mod utils;

// Re-export public API
pub use breach::{
    check_email_breaches, check_email_breaches_with, format_for_frontend, probes,
    AggregatedVerdict, BreachAggregator, BreachRecord, FrontendBreach, FrontendVerdict,
    OccurrenceRecord, SourceProbeResult, SourceTag,
};
pub use catalog::{build_catalog, lookup_links, CatalogReport};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError, ProbeFailure};
pub use identifier::{parse_kind, IdentifierKind};
pub use taxid::{
    format_tax_id, lookup_tax_id, validate_process_number, validate_tax_id, RegistryClient,
    RegistryData, RegistryEndpoint, RegistryReport, RegistryStatus, RegistryUnavailable,
};
