//! Link-catalog behavior across identifier kinds.

use strum::IntoEnumIterator;

use osint_lookup::catalog::{builders, EntryKind};
use osint_lookup::{build_catalog, lookup_links, IdentifierKind, LookupError};

#[test]
fn username_catalog_first_entry_carries_encoded_input() {
    let report = build_catalog(IdentifierKind::Username, "alice");
    assert!(!report.entries.is_empty());
    assert_eq!(report.total_results, 19);
    assert!(report.entries[0]
        .url
        .as_deref()
        .expect("first entry is a link")
        .contains("alice"));

    // Encoding is applied, not raw interpolation.
    let spaced = build_catalog(IdentifierKind::Username, "alice wonder");
    assert!(spaced.entries[0]
        .url
        .as_deref()
        .unwrap()
        .contains("alice+wonder"));
}

#[test]
fn entries_preserve_insertion_order_and_links_mirror_them() {
    let report = build_catalog(IdentifierKind::Name, "Jane Roe");
    let url_services: Vec<&str> = report
        .entries
        .iter()
        .filter(|entry| entry.url.is_some())
        .map(|entry| entry.service.as_str())
        .collect();
    let link_names: Vec<&str> = report.links.iter().map(|link| link.name.as_str()).collect();
    assert_eq!(url_services, link_names);
    assert_eq!(report.total_results, report.entries.len());
}

#[test]
fn every_kind_yields_a_non_empty_catalog() {
    for kind in IdentifierKind::iter() {
        let report = build_catalog(kind, "probe input");
        assert!(report.total_results > 0, "{kind} catalog must not be empty");
        assert!(!report.summary.is_empty());
    }
}

#[test]
fn process_catalog_is_informational() {
    let report = build_catalog(IdentifierKind::ProcessNumber, "0001234-56.2020.8.26.0100");
    assert!(report
        .entries
        .iter()
        .all(|entry| entry.kind == EntryKind::Info));
    assert!(report.links.is_empty());
}

#[test]
fn photo_catalog_grows_with_an_image_url() {
    let without = builders::photo("red bicycle", None);
    let with = builders::photo("red bicycle", Some("https://img.example/bike.jpg"));
    assert!(with.total_results > without.total_results);
    assert_eq!(with.entries[0].service, "Google Images (Reverse Search)");
}

#[test]
fn unknown_kind_is_a_typed_error() {
    match lookup_links("voiceprint", "hello") {
        Err(LookupError::UnknownKind(kind)) => assert_eq!(kind, "voiceprint"),
        other => panic!("expected UnknownKind, got {other:?}"),
    }
}

#[test]
fn builders_never_fail_on_hostile_input() {
    for input in ["", " ", "ação 🚀", "\"<script>\"", "a/b?c=d&e=f"] {
        for kind in IdentifierKind::iter() {
            let report = build_catalog(kind, input);
            assert_eq!(report.total_results, report.entries.len());
        }
    }
}
