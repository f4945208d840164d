//! Frontend formatter.
//!
//! Pure, total mapping from the aggregator's internal verdict to the stable
//! public response shape. Every optional breach field gets a display default
//! so the projection is never missing a required field.

use crate::breach::models::{AggregatedVerdict, BreachRecord, FrontendBreach, FrontendVerdict};

/// Placeholder used when a breach record carries no name at all.
const UNKNOWN_NAME: &str = "Unknown";
/// Placeholder used when neither title nor name is available.
const UNTITLED: &str = "Untitled";
/// Placeholder for missing date/domain fields.
const NOT_AVAILABLE: &str = "N/A";

/// Projects an [`AggregatedVerdict`] into the simplified public shape,
/// adding the user-facing warning banner.
///
/// The banner is chosen solely by the compromised flag: two fixed
/// templates, no graduated severity.
pub fn format_for_frontend(verdict: AggregatedVerdict) -> FrontendVerdict {
    let breaches = verdict.breaches.iter().map(simplify_breach).collect();

    let warning = if verdict.compromised {
        format!(
            "⚠️ WARNING: this email was found in {} data breach(es)!",
            verdict.total_breaches
        )
    } else {
        "✅ This email was NOT found in known breaches.".to_string()
    };

    FrontendVerdict {
        email: verdict.email,
        compromised: verdict.compromised,
        total_breaches: verdict.total_breaches,
        breaches,
        occurrences: verdict.occurrences,
        summary: verdict.summary,
        warning,
    }
}

fn simplify_breach(record: &BreachRecord) -> FrontendBreach {
    let name = if record.name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        record.name.clone()
    };
    let title = if !record.title.is_empty() {
        record.title.clone()
    } else if !record.name.is_empty() {
        record.name.clone()
    } else {
        UNTITLED.to_string()
    };

    FrontendBreach {
        name,
        title,
        breach_date: non_empty_or(&record.breach_date, NOT_AVAILABLE),
        domain: non_empty_or(&record.domain, NOT_AVAILABLE),
        pwn_count: record.pwn_count,
        data_classes: record.data_classes.clone(),
        description: record.description.clone(),
        is_verified: record.is_verified,
        logo_path: record.logo_path.clone(),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::models::{OccurrenceRecord, SourceProbeResult, SourceTag};

    fn verdict_with(breaches: Vec<BreachRecord>) -> AggregatedVerdict {
        let compromised = !breaches.is_empty();
        AggregatedVerdict {
            email: "alice@example.com".into(),
            compromised,
            total_breaches: breaches.len(),
            breaches,
            occurrences: vec![],
            sources: vec![SourceProbeResult::new(SourceTag::BreachDatabase)],
            summary: "summary".into(),
        }
    }

    #[test]
    fn test_warning_banner_for_compromised() {
        let formatted = format_for_frontend(verdict_with(vec![
            BreachRecord {
                name: "Adobe".into(),
                ..Default::default()
            },
            BreachRecord {
                name: "LinkedIn".into(),
                ..Default::default()
            },
        ]));
        assert_eq!(
            formatted.warning,
            "⚠️ WARNING: this email was found in 2 data breach(es)!"
        );
        assert_eq!(formatted.total_breaches, 2);
        assert_eq!(formatted.breaches.len(), 2);
    }

    #[test]
    fn test_warning_banner_for_clean() {
        let formatted = format_for_frontend(verdict_with(vec![]));
        assert_eq!(
            formatted.warning,
            "✅ This email was NOT found in known breaches."
        );
        assert!(!formatted.compromised);
    }

    #[test]
    fn test_defaults_substituted_for_missing_fields() {
        let formatted = format_for_frontend(verdict_with(vec![BreachRecord::default()]));
        let breach = &formatted.breaches[0];
        assert_eq!(breach.name, "Unknown");
        assert_eq!(breach.title, "Untitled");
        assert_eq!(breach.breach_date, "N/A");
        assert_eq!(breach.domain, "N/A");
        assert_eq!(breach.pwn_count, 0);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let formatted = format_for_frontend(verdict_with(vec![BreachRecord {
            name: "Adobe".into(),
            title: String::new(),
            ..Default::default()
        }]));
        assert_eq!(formatted.breaches[0].title, "Adobe");
        assert_eq!(formatted.breaches[0].name, "Adobe");
    }

    #[test]
    fn test_occurrences_pass_through_unchanged() {
        let mut verdict = verdict_with(vec![]);
        verdict.occurrences.push(OccurrenceRecord {
            url: "https://search.example/q".into(),
            description: "found".into(),
            tag: "Pastebin Leak".into(),
        });
        let formatted = format_for_frontend(verdict);
        assert_eq!(formatted.occurrences.len(), 1);
        assert_eq!(formatted.occurrences[0].tag, "Pastebin Leak");
    }
}
