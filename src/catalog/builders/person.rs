//! Catalog builders for person names and physical addresses.

use crate::catalog::report::{CatalogReport, LinkEntry};
use crate::utils::quote_plus;

/// Builds the lookup catalog for a person name.
pub fn person_name(name: &str) -> CatalogReport {
    let encoded = quote_plus(name);
    let entries = vec![
        LinkEntry::link(
            "Google Search",
            format!("Google search for \"{name}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Facebook",
            format!("Search for \"{name}\" on Facebook"),
            format!("https://www.facebook.com/search/people/?q={encoded}"),
        ),
        LinkEntry::link(
            "LinkedIn",
            format!("Search for \"{name}\" on LinkedIn"),
            format!("https://www.linkedin.com/search/results/people/?keywords={encoded}"),
        ),
        LinkEntry::link(
            "Twitter/X",
            format!("Search for \"{name}\" on Twitter/X"),
            format!("https://twitter.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Instagram",
            format!("Search for \"{name}\" on Instagram"),
            format!("https://www.instagram.com/explore/tags/{encoded}/"),
        ),
        LinkEntry::link(
            "Pipl",
            format!("People search for \"{name}\" on Pipl"),
            format!("https://pipl.com/search/?q={encoded}"),
        ),
        LinkEntry::link(
            "TruePeopleSearch",
            format!("Search for \"{name}\" on TruePeopleSearch"),
            format!("https://www.truepeoplesearch.com/results?name={encoded}"),
        ),
        LinkEntry::link(
            "Whitepages",
            format!("Search for \"{name}\" on Whitepages"),
            format!("https://www.whitepages.com/name/{encoded}"),
        ),
        LinkEntry::link(
            "Spokeo",
            format!("Search for \"{name}\" on Spokeo"),
            format!("https://www.spokeo.com/{encoded}"),
        ),
        LinkEntry::link(
            "Yandex",
            format!("Yandex search for \"{name}\""),
            format!("https://yandex.com/search/?text={encoded}"),
        ),
    ];

    let summary = format!(
        "Search for '{name}' returned {} information sources. Follow the links to access them.",
        entries.len()
    );
    CatalogReport::assemble(name, None, entries, summary)
}

/// Builds the lookup catalog for a physical street address.
pub fn street_address(address: &str) -> CatalogReport {
    let encoded = quote_plus(address);
    let entries = vec![
        LinkEntry::link(
            "Google Maps",
            format!("View \"{address}\" on Google Maps"),
            format!("https://www.google.com/maps/search/{encoded}"),
        ),
        LinkEntry::link(
            "Google Search",
            format!("Google search for address \"{address}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Street View",
            format!("Street-level view of \"{address}\""),
            format!("https://www.google.com/maps?q=&layer=c&cbll={encoded}"),
        ),
        LinkEntry::link(
            "TruePeopleSearch",
            format!("People registered at \"{address}\""),
            format!("https://www.truepeoplesearch.com/results?addresscitystatezip={encoded}"),
        ),
        LinkEntry::link(
            "Whitepages",
            format!("Search for \"{address}\" on Whitepages"),
            format!("https://www.whitepages.com/address/{encoded}"),
        ),
        LinkEntry::link(
            "FastPeopleSearch",
            format!("People registered at \"{address}\""),
            format!("https://www.fastpeoplesearch.com/address/{encoded}"),
        ),
        LinkEntry::link(
            "Spokeo",
            format!("Search for \"{address}\" on Spokeo"),
            format!("https://www.spokeo.com/{encoded}"),
        ),
        LinkEntry::link(
            "Pipl Address Search",
            format!("People search at \"{address}\" on Pipl"),
            format!("https://pipl.com/search/?q={encoded}"),
        ),
        LinkEntry::link(
            "Yandex Maps",
            format!("View \"{address}\" on Yandex Maps"),
            format!("https://yandex.com/maps/?text={encoded}"),
        ),
        LinkEntry::link(
            "Bing Maps",
            format!("View \"{address}\" on Bing Maps"),
            format!("https://www.bing.com/maps?q={encoded}"),
        ),
    ];

    let summary = format!(
        "Search for address '{address}' returned {} information sources.",
        entries.len()
    );
    CatalogReport::assemble(address, None, entries, summary)
}
