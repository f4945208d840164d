//! Catalog builders for vehicle plates, judicial process numbers, and the
//! official tax-registry services.

use crate::catalog::report::{CatalogReport, LinkEntry};
use crate::utils::{quote_plus, strip_non_digits};

/// Builds the lookup catalog for a vehicle license plate.
///
/// The normalized form uppercases the plate and strips separators.
pub fn vehicle_plate(plate: &str) -> CatalogReport {
    let normalized = plate.to_uppercase().replace(['-', ' '], "");
    let encoded = quote_plus(plate);

    let entries = vec![
        LinkEntry::link(
            "Google Search",
            format!("Google search for plate \"{plate}\""),
            format!("https://www.google.com/search?q={encoded}"),
        ),
        LinkEntry::link(
            "Sinesp Cidadão (Official)",
            format!("Official vehicle-status lookup for plate \"{plate}\""),
            "https://www.gov.br/prf/pt-br/acesso-a-informacao/acoes-e-programas/sinesp-cidadao",
        ),
        LinkEntry::link(
            "Olho no Carro",
            format!("Vehicle history lookup for plate \"{plate}\""),
            format!("https://www.google.com/search?q=olho+no+carro+{encoded}"),
        ),
        LinkEntry::link(
            "Yandex Search",
            format!("Yandex search for plate \"{plate}\""),
            format!("https://yandex.com/search/?text={encoded}"),
        ),
        LinkEntry::link(
            "DuckDuckGo Search",
            format!("DuckDuckGo search for \"{plate}\""),
            format!("https://duckduckgo.com/?q={encoded}"),
        ),
        LinkEntry::link(
            "Pastebin Search",
            format!("Search for plate \"{plate}\" in Pastebin leaks"),
            format!("https://www.google.com/search?q=site:pastebin.com+{encoded}"),
        ),
        LinkEntry::link(
            "Social Networks",
            format!("Search for plate \"{plate}\" on social networks"),
            format!("https://www.facebook.com/search/?q={encoded}"),
        ),
    ];

    let summary = format!(
        "Search for plate '{plate}' returned {} information sources.",
        entries.len()
    );
    CatalogReport::assemble(plate, Some(normalized), entries, summary)
}

/// Builds the catalog for a judicial process number.
///
/// Court systems have no stable deep-link scheme, so the entries are
/// informational pointers keyed to the digit-stripped case number.
pub fn process_number(process: &str) -> CatalogReport {
    let digits = strip_non_digits(process);

    let entries = vec![
        LinkEntry::info(
            "National court system",
            format!("Check case {digits} in the unified court-system portal."),
        ),
        LinkEntry::info(
            "Court of justice",
            format!("Case files for {digits} may be available from the issuing court."),
        ),
        LinkEntry::info(
            "Public records",
            format!("Public filings for case {digits} can be requested from the records office."),
        ),
    ];

    let summary = format!(
        "Process '{process}' has {} public lookup pointers.",
        entries.len()
    );
    CatalogReport::assemble(process, Some(digits), entries, summary)
}

/// Official registry services for a tax ID: the fallback catalog shown when
/// no registry API can be consulted, and the catalog for the tax-id kind.
pub fn tax_id_services(formatted: &str, digits: &str) -> Vec<LinkEntry> {
    vec![
        LinkEntry::link(
            "Receita Federal",
            format!("Official registry-status lookup for {formatted}"),
            "https://www.receita.fazenda.gov.br/Aplicacoes/ATCTA/CPF/ConsultaPublica.asp",
        ),
        LinkEntry::link(
            "BrasilAPI",
            "Free public API for tax-ID lookup",
            format!("https://brasilapi.com.br/api/cpf/v1/{digits}"),
        ),
    ]
}

/// Builds the catalog for a tax ID out of the official services table.
pub fn tax_id(input: &str) -> CatalogReport {
    let digits = strip_non_digits(input);
    let formatted = crate::taxid::format_tax_id(&digits);
    let entries = tax_id_services(&formatted, &digits);
    let summary = format!(
        "Tax ID '{formatted}' has {} official lookup services.",
        entries.len()
    );
    CatalogReport::assemble(input, Some(digits), entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::report::EntryKind;

    #[test]
    fn test_vehicle_plate_normalization() {
        let report = vehicle_plate("abc-1d23");
        assert_eq!(report.normalized.as_deref(), Some("ABC1D23"));
        assert_eq!(report.total_results, 7);
    }

    #[test]
    fn test_process_number_entries_are_informational() {
        let report = process_number("0001234-56.2020.8.26.0100");
        assert_eq!(report.total_results, 3);
        assert!(report
            .entries
            .iter()
            .all(|entry| entry.kind == EntryKind::Info));
        assert!(report.links.is_empty());
        assert_eq!(report.normalized.as_deref(), Some("00012345620208260100"));
    }

    #[test]
    fn test_tax_id_catalog_uses_official_services() {
        let report = tax_id("529.982.247-25");
        assert_eq!(report.total_results, 2);
        assert_eq!(report.entries[0].service, "Receita Federal");
        assert!(report.entries[1]
            .url
            .as_deref()
            .unwrap()
            .ends_with("52998224725"));
    }
}
