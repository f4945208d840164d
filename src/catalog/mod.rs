//! Link catalogs: fixed tables mapping an identifier to pre-built
//! third-party lookup URLs.
//!
//! This is deliberate string templating, not intelligence: no network calls,
//! no validation beyond kind-specific cleanup, insertion order preserved.
//! Callers may rely on the first entries being the most relevant.

pub mod builders;
mod report;

use crate::error_handling::LookupError;
use crate::identifier::{parse_kind, IdentifierKind};

pub use report::{CatalogReport, EntryKind, LinkEntry, NamedLink};

/// Builds the link catalog for a known identifier kind.
///
/// Never fails: every kind has a builder. The photo builder is invoked
/// without an image URL here; use [`builders::photo`] directly to enable
/// reverse-search entries.
pub fn build_catalog(kind: IdentifierKind, input: &str) -> CatalogReport {
    match kind {
        IdentifierKind::Name => builders::person_name(input),
        IdentifierKind::Email => builders::email(input),
        IdentifierKind::Phone => builders::phone(input),
        IdentifierKind::Username => builders::username(input),
        IdentifierKind::Address => builders::street_address(input),
        IdentifierKind::VehiclePlate => builders::vehicle_plate(input),
        IdentifierKind::DomainIp => builders::domain_or_ip(input),
        IdentifierKind::ProcessNumber => builders::process_number(input),
        IdentifierKind::Photo => builders::photo(input, None),
        IdentifierKind::TaxId => builders::tax_id(input),
    }
}

/// String-keyed dispatch: parses the kind, then builds the catalog.
///
/// An unrecognized kind yields a typed [`LookupError::UnknownKind`] rather
/// than invoking any builder.
pub fn lookup_links(kind: &str, input: &str) -> Result<CatalogReport, LookupError> {
    Ok(build_catalog(parse_kind(kind)?, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_build_catalog_is_total_over_kinds() {
        for kind in IdentifierKind::iter() {
            let report = build_catalog(kind, "sample input");
            assert!(
                report.total_results > 0,
                "{kind} catalog must not be empty"
            );
            assert_eq!(report.total_results, report.entries.len());
        }
    }

    #[test]
    fn test_lookup_links_dispatches_by_string() {
        let report = lookup_links("username", "alice").unwrap();
        assert_eq!(report.identifier, "alice");
        assert_eq!(report.total_results, 19);
    }

    #[test]
    fn test_lookup_links_rejects_unknown_kind() {
        let err = lookup_links("retina-scan", "whatever").unwrap_err();
        assert!(matches!(err, LookupError::UnknownKind(_)));
    }
}
