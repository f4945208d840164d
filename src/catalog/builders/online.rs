//! Catalog builders for usernames and domains/IP addresses.

use std::net::Ipv4Addr;

use crate::catalog::report::{CatalogReport, LinkEntry};
use crate::utils::quote_plus;

/// Builds the lookup catalog for a platform username.
pub fn username(username: &str) -> CatalogReport {
    let encoded = quote_plus(username);
    let entries = vec![
        LinkEntry::link(
            "Namechk",
            format!("Check availability of \"{username}\" across platforms"),
            format!("https://namechk.com/{encoded}"),
        ),
        LinkEntry::link(
            "KnowEm",
            format!("Check \"{username}\" across 500+ social networks"),
            format!("https://knowem.com/checkusernames.php?u={encoded}"),
        ),
        LinkEntry::link(
            "GitHub",
            format!("GitHub profile for \"{username}\""),
            format!("https://github.com/{encoded}"),
        ),
        LinkEntry::link(
            "Instagram",
            format!("Instagram profile @{username}"),
            format!("https://www.instagram.com/{encoded}/"),
        ),
        LinkEntry::link(
            "Twitter/X",
            format!("Twitter/X profile @{username}"),
            format!("https://twitter.com/{encoded}"),
        ),
        LinkEntry::link(
            "Facebook",
            format!("Search for \"{username}\" on Facebook"),
            format!("https://www.facebook.com/search/people/?q={encoded}"),
        ),
        LinkEntry::link(
            "LinkedIn",
            format!("LinkedIn profile for \"{username}\""),
            format!("https://www.linkedin.com/in/{encoded}"),
        ),
        LinkEntry::link(
            "TikTok",
            format!("TikTok profile @{username}"),
            format!("https://www.tiktok.com/@{encoded}"),
        ),
        LinkEntry::link(
            "YouTube",
            format!("YouTube channel \"{username}\""),
            format!("https://www.youtube.com/@{encoded}"),
        ),
        LinkEntry::link(
            "Reddit",
            format!("Reddit user u/{username}"),
            format!("https://www.reddit.com/user/{encoded}"),
        ),
        LinkEntry::link(
            "Twitch",
            format!("Twitch channel \"{username}\""),
            format!("https://www.twitch.tv/{encoded}"),
        ),
        LinkEntry::link(
            "Pinterest",
            format!("Search for \"{username}\" on Pinterest"),
            format!("https://www.pinterest.com/{encoded}/"),
        ),
        LinkEntry::link(
            "Snapchat",
            format!("Snapchat profile \"{username}\""),
            format!("https://www.snapchat.com/add/{encoded}"),
        ),
        LinkEntry::link(
            "Telegram",
            format!("Telegram handle \"{username}\""),
            format!("https://t.me/{encoded}"),
        ),
        LinkEntry::link(
            "Steam",
            format!("Steam profile \"{username}\""),
            format!("https://steamcommunity.com/id/{encoded}"),
        ),
        LinkEntry::link(
            "Discord",
            format!("Search for \"{username}\" mentions around Discord"),
            format!("https://www.google.com/search?q=discord+{encoded}"),
        ),
        LinkEntry::link(
            "Google Search",
            format!("Google search for username \"{username}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Sherlock (Username Search)",
            format!("Sherlock-style multi-platform search for \"{username}\""),
            format!("https://www.google.com/search?q=sherlock+{encoded}"),
        ),
        LinkEntry::link(
            "UserSearch",
            format!("Search for \"{username}\" on UserSearch"),
            format!("https://usersearch.org/index.php?nick={encoded}"),
        ),
    ];

    let summary = format!(
        "Search for username '{username}' returned {} platforms to check.",
        entries.len()
    );
    CatalogReport::assemble(username, None, entries, summary)
}

/// Builds the lookup catalog for a domain name or IPv4 address.
///
/// Several services have different URL shapes for IPs and domains; the
/// classification also appends an IP-geolocation entry for addresses.
pub fn domain_or_ip(target: &str) -> CatalogReport {
    let encoded = quote_plus(target);
    let is_ip = target.parse::<Ipv4Addr>().is_ok();
    let class = if is_ip { "IP" } else { "domain" };

    let mut entries = vec![
        LinkEntry::link(
            "WHOIS Lookup",
            format!("WHOIS information for \"{target}\""),
            format!("https://www.whois.com/whois/{encoded}"),
        ),
        LinkEntry::link(
            "Shodan",
            format!("Exposure data for \"{target}\" on Shodan"),
            if is_ip {
                format!("https://www.shodan.io/host/{encoded}")
            } else {
                format!("https://www.shodan.io/search?query={encoded}")
            },
        ),
        LinkEntry::link(
            "VirusTotal",
            format!("Analyze \"{target}\" on VirusTotal"),
            format!("https://www.virustotal.com/gui/search/{encoded}"),
        ),
        LinkEntry::link(
            "Google Search",
            format!("Google search for \"{target}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "AbuseIPDB",
            if is_ip {
                format!("Abuse reputation of IP \"{target}\"")
            } else {
                format!("Abuse reports mentioning \"{target}\"")
            },
            format!("https://www.abuseipdb.com/check/{encoded}"),
        ),
        LinkEntry::link(
            "URLVoid",
            format!("Safety analysis of \"{target}\" on URLVoid"),
            format!("https://www.urlvoid.com/scan/{encoded}/"),
        ),
        LinkEntry::link(
            "SecurityTrails",
            format!("Historical records for \"{target}\""),
            if is_ip {
                format!("https://securitytrails.com/list/ip/{encoded}")
            } else {
                format!("https://securitytrails.com/domain/{encoded}")
            },
        ),
        LinkEntry::link(
            "ViewDNS.info",
            format!("DNS records for \"{target}\""),
            if is_ip {
                format!("https://viewdns.info/iphistory/?ip={encoded}")
            } else {
                format!("https://viewdns.info/whois/?domain={encoded}")
            },
        ),
        LinkEntry::link(
            "MXToolbox",
            format!("Diagnostics for \"{target}\" on MXToolbox"),
            if is_ip {
                format!("https://mxtoolbox.com/SuperTool.aspx?action=ip:{encoded}")
            } else {
                format!("https://mxtoolbox.com/SuperTool.aspx?action=domain:{encoded}")
            },
        ),
        LinkEntry::link(
            "DNS Checker",
            format!("DNS propagation for \"{target}\""),
            format!("https://dnschecker.org/#A/{encoded}"),
        ),
        LinkEntry::link(
            "BuiltWith",
            format!("Technology profile of \"{target}\""),
            if is_ip {
                "https://builtwith.com/".to_string()
            } else {
                format!("https://builtwith.com/{encoded}")
            },
        ),
        LinkEntry::link(
            "Wappalyzer",
            format!("Technology fingerprint of \"{target}\""),
            if is_ip {
                "https://www.wappalyzer.com/".to_string()
            } else {
                format!("https://www.wappalyzer.com/lookup/{encoded}/")
            },
        ),
    ];

    if is_ip {
        entries.push(LinkEntry::link(
            "IP Geolocation",
            format!("Geographic location of IP \"{target}\""),
            format!("https://www.google.com/search?q=ip+geolocation+{encoded}"),
        ));
    }

    let summary = format!(
        "Search for {class} '{target}' returned {} analysis tools.",
        entries.len()
    );
    CatalogReport::assemble(target, None, entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_table_size_and_first_entry() {
        let report = username("alice");
        assert_eq!(report.total_results, 19);
        let first = &report.entries[0];
        assert_eq!(first.service, "Namechk");
        assert!(first.url.as_deref().unwrap().contains("alice"));
    }

    #[test]
    fn test_username_encoding_in_first_url() {
        let report = username("alice wonder");
        assert!(report.entries[0]
            .url
            .as_deref()
            .unwrap()
            .contains("alice+wonder"));
    }

    #[test]
    fn test_domain_gets_domain_shaped_urls() {
        let report = domain_or_ip("example.com");
        assert_eq!(report.total_results, 12);
        let security_trails = report
            .entries
            .iter()
            .find(|entry| entry.service == "SecurityTrails")
            .unwrap();
        assert!(security_trails
            .url
            .as_deref()
            .unwrap()
            .contains("/domain/"));
        assert!(report.summary.contains("domain 'example.com'"));
    }

    #[test]
    fn test_ip_gets_ip_shaped_urls_and_geolocation() {
        let report = domain_or_ip("8.8.8.8");
        assert_eq!(report.total_results, 13);
        let shodan = report
            .entries
            .iter()
            .find(|entry| entry.service == "Shodan")
            .unwrap();
        assert!(shodan.url.as_deref().unwrap().contains("/host/"));
        assert_eq!(report.entries.last().unwrap().service, "IP Geolocation");
        assert!(report.summary.contains("IP '8.8.8.8'"));
    }
}
