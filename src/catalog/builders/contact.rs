//! Catalog builders for email addresses and phone numbers.

use crate::catalog::report::{CatalogReport, LinkEntry};
use crate::utils::{quote_plus, strip_non_digits};

/// Builds the lookup catalog for an email address.
///
/// When the input carries a domain part, a WHOIS entry for the mail domain is
/// appended after the fixed table.
pub fn email(email: &str) -> CatalogReport {
    let encoded = quote_plus(email);
    let domain = email.split_once('@').map(|(_, domain)| domain).unwrap_or("");

    let mut entries = vec![
        LinkEntry::link(
            "Google Search",
            format!("Google search for email \"{email}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Have I Been Pwned",
            format!("Check whether \"{email}\" appears in known data breaches"),
            format!("https://haveibeenpwned.com/account/{encoded}"),
        ),
        LinkEntry::link(
            "Hunter.io (Email Finder)",
            format!("Verify \"{email}\" on Hunter.io"),
            format!("https://hunter.io/email-verifier/{encoded}"),
        ),
        LinkEntry::link(
            "EmailRep.io",
            format!("Reputation report for \"{email}\""),
            format!("https://emailrep.io/{encoded}"),
        ),
        LinkEntry::link(
            "Pipl - Email Search",
            format!("People search by email \"{email}\" on Pipl"),
            format!("https://pipl.com/search/?q={encoded}"),
        ),
        LinkEntry::link(
            "Social Catfish",
            format!("Search for \"{email}\" on Social Catfish"),
            format!("https://socialcatfish.com/search/?email={encoded}"),
        ),
        LinkEntry::link(
            "Truecaller",
            format!("Search for \"{email}\" on Truecaller"),
            format!("https://www.truecaller.com/search/br/{encoded}"),
        ),
        LinkEntry::link(
            "Yandex Email Search",
            format!("Yandex search for \"{email}\""),
            format!("https://yandex.com/search/?text={encoded}"),
        ),
        LinkEntry::link(
            "Google Groups",
            format!("Posts by \"{email}\" in Google Groups"),
            format!("https://groups.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Pastebin Search",
            format!("Search for \"{email}\" in Pastebin leaks"),
            format!("https://www.google.com/search?q=site:pastebin.com+{encoded}"),
        ),
        LinkEntry::link(
            "GitHub Search",
            format!("Search for \"{email}\" on GitHub"),
            format!("https://github.com/search?q={encoded}&type=Users"),
        ),
        LinkEntry::link(
            "DeHashed",
            format!("Check \"{email}\" against leaked datasets"),
            format!("https://www.dehashed.com/search?query={encoded}"),
        ),
        LinkEntry::link(
            "SpyTox",
            format!("Search for \"{email}\" on SpyTox"),
            format!("https://www.spytox.com/people/search?email={encoded}"),
        ),
    ];

    if !domain.is_empty() {
        entries.push(LinkEntry::link(
            "WHOIS Domain",
            format!("WHOIS information for the mail domain \"{domain}\""),
            format!("https://www.whois.com/whois/{domain}"),
        ));
    }

    let summary = format!(
        "Search for email '{email}' returned {} lookup tools. Check breaches and related accounts.",
        entries.len()
    );
    CatalogReport::assemble(email, None, entries, summary)
}

/// Builds the lookup catalog for a phone number.
///
/// The normalized form is the bare digit string; services differ on whether
/// they take the raw or the stripped number.
pub fn phone(phone: &str) -> CatalogReport {
    let digits = strip_non_digits(phone);
    let encoded = quote_plus(phone);

    let entries = vec![
        LinkEntry::link(
            "Truecaller",
            format!("Caller-ID lookup for \"{phone}\""),
            format!("https://www.truecaller.com/search/br/{digits}"),
        ),
        LinkEntry::link(
            "Google Search",
            format!("Google search for phone \"{phone}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Social Catfish",
            format!("Search for \"{phone}\" on Social Catfish"),
            format!("https://socialcatfish.com/search/?phone={encoded}"),
        ),
        LinkEntry::link(
            "Pipl - Phone Search",
            format!("People search by phone \"{phone}\" on Pipl"),
            format!("https://pipl.com/search/?q={encoded}"),
        ),
        LinkEntry::link(
            "Whitepages",
            format!("Search for \"{phone}\" on Whitepages"),
            format!("https://www.whitepages.com/phone/{digits}"),
        ),
        LinkEntry::link(
            "Spokeo",
            format!("Search for \"{phone}\" on Spokeo"),
            format!("https://www.spokeo.com/{encoded}"),
        ),
        LinkEntry::link(
            "TruePeopleSearch",
            format!("Search for \"{phone}\" on TruePeopleSearch"),
            format!("https://www.truepeoplesearch.com/results?phone={digits}"),
        ),
        LinkEntry::link(
            "FastPeopleSearch",
            format!("Search for \"{phone}\" on FastPeopleSearch"),
            format!("https://www.fastpeoplesearch.com/phone/{digits}"),
        ),
        LinkEntry::link(
            "WhatsApp Lookup",
            format!("Check whether \"{phone}\" is on WhatsApp"),
            format!("https://api.whatsapp.com/send?phone={digits}"),
        ),
        LinkEntry::link(
            "Yandex Phone Search",
            format!("Yandex search for \"{phone}\""),
            format!("https://yandex.com/search/?text={encoded}"),
        ),
        LinkEntry::link(
            "DuckDuckGo Search",
            format!("DuckDuckGo search for \"{phone}\""),
            format!("https://duckduckgo.com/?q={encoded}"),
        ),
        LinkEntry::link(
            "Pastebin Search",
            format!("Search for \"{phone}\" in Pastebin leaks"),
            format!("https://www.google.com/search?q=site:pastebin.com+{encoded}"),
        ),
    ];

    let summary = format!(
        "Search for phone '{phone}' returned {} lookup tools.",
        entries.len()
    );
    CatalogReport::assemble(phone, Some(digits), entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_with_domain_appends_whois_entry() {
        let report = email("alice@example.com");
        assert_eq!(report.total_results, 14);
        let last = report.entries.last().unwrap();
        assert_eq!(last.service, "WHOIS Domain");
        assert!(last.url.as_deref().unwrap().ends_with("example.com"));
    }

    #[test]
    fn test_email_without_domain_has_fixed_table_only() {
        let report = email("not-an-email");
        assert_eq!(report.total_results, 13);
        assert!(report
            .entries
            .iter()
            .all(|entry| entry.service != "WHOIS Domain"));
    }

    #[test]
    fn test_email_is_percent_encoded() {
        let report = email("alice@example.com");
        assert!(report.entries[0]
            .url
            .as_deref()
            .unwrap()
            .contains("alice%40example.com"));
    }

    #[test]
    fn test_phone_normalized_to_digits() {
        let report = phone("+55 (11) 91234-5678");
        assert_eq!(report.normalized.as_deref(), Some("5511912345678"));
        assert_eq!(report.total_results, 12);
        // Digit-taking services get the stripped form.
        assert!(report.entries[0]
            .url
            .as_deref()
            .unwrap()
            .ends_with("5511912345678"));
    }
}
