//! Catalog builder for photo search terms and reverse image search.

use crate::catalog::report::{CatalogReport, LinkEntry};
use crate::utils::quote_plus;

/// Builds the image-search catalog for a search term, optionally paired with
/// an image URL.
///
/// With an image URL the reverse-search tools come first; without one, only
/// the general term-based searches are emitted. Image content is never
/// analyzed here; EXIF and forensics are only ever links to external tools.
pub fn photo(term: &str, image_url: Option<&str>) -> CatalogReport {
    let term_encoded = quote_plus(term);
    let url_encoded = image_url.map(quote_plus).unwrap_or_default();

    let mut entries = Vec::new();

    if image_url.is_some() {
        entries.extend([
            LinkEntry::link(
                "Google Images (Reverse Search)",
                format!("Reverse image search on Google for \"{term}\""),
                format!(
                    "https://www.google.com/searchbyimage?image_url={url_encoded}&q={term_encoded}"
                ),
            ),
            LinkEntry::link(
                "TinEye",
                "Reverse image search on TinEye for other occurrences of the image",
                format!("https://www.tineye.com/search?url={url_encoded}"),
            ),
            LinkEntry::link(
                "Yandex Images",
                format!("Reverse image search on Yandex for \"{term}\""),
                format!("https://yandex.com/images/search?url={url_encoded}&rpt=imageview"),
            ),
            LinkEntry::link(
                "Bing Visual Search",
                format!("Visual search on Bing for \"{term}\""),
                format!("https://www.bing.com/images/search?q=imgurl:{url_encoded}"),
            ),
            LinkEntry::link(
                "Baidu Images",
                "Reverse image search on Baidu",
                format!("https://graph.baidu.com/details?image={url_encoded}"),
            ),
        ]);
    }

    entries.extend([
        LinkEntry::link(
            "Google Images",
            format!("Image search on Google for \"{term}\""),
            format!("https://www.google.com/search?tbm=isch&q={term_encoded}"),
        ),
        LinkEntry::link(
            "Bing Images",
            format!("Image search on Bing for \"{term}\""),
            format!("https://www.bing.com/images/search?q={term_encoded}"),
        ),
        LinkEntry::link(
            "Yandex Images Search",
            format!("Image search on Yandex for \"{term}\""),
            format!("https://yandex.com/images/search?text={term_encoded}"),
        ),
        LinkEntry::link(
            "DuckDuckGo Images",
            format!("Image search on DuckDuckGo for \"{term}\""),
            format!("https://duckduckgo.com/?q={term_encoded}&iax=images&ia=images"),
        ),
        LinkEntry::link(
            "Pinterest",
            format!("Search for \"{term}\" on Pinterest"),
            format!("https://www.pinterest.com/search/pins/?q={term_encoded}"),
        ),
        LinkEntry::link(
            "Flickr",
            format!("Photos of \"{term}\" on Flickr"),
            format!("https://www.flickr.com/search/?text={term_encoded}"),
        ),
        LinkEntry::link(
            "500px",
            format!("Photos of \"{term}\" on 500px"),
            format!("https://500px.com/search?q={term_encoded}"),
        ),
        LinkEntry::link(
            "Instagram Search",
            format!("Search for \"{term}\" on Instagram"),
            format!("https://www.instagram.com/explore/tags/{term_encoded}/"),
        ),
        LinkEntry::link(
            "Getty Images",
            format!("Professional imagery of \"{term}\""),
            format!("https://www.gettyimages.com/photos/{term_encoded}"),
        ),
        LinkEntry::link(
            "Shutterstock",
            format!("Stock imagery of \"{term}\""),
            format!("https://www.shutterstock.com/search/{term_encoded}"),
        ),
        LinkEntry::link(
            "Exif Data Viewer",
            "View EXIF metadata of the image (when available)",
            if image_url.is_some() {
                format!("https://exifdata.com/?url={url_encoded}")
            } else {
                "https://exifdata.com/".to_string()
            },
        ),
        LinkEntry::link(
            "FotoForensics",
            "Forensic analysis of the image for manipulation",
            if image_url.is_some() {
                format!("https://fotoforensics.com/?tgt={url_encoded}")
            } else {
                "https://fotoforensics.com/".to_string()
            },
        ),
        LinkEntry::link(
            "Reverse Image Search (SmallSEOTools)",
            "Online reverse image search tool",
            if image_url.is_some() {
                format!("https://smallseotools.com/reverse-image-search/?imgurl={url_encoded}")
            } else {
                "https://smallseotools.com/reverse-image-search/".to_string()
            },
        ),
    ]);

    entries.push(match image_url {
        Some(url) => LinkEntry::info(
            "Metadata analysis",
            format!("Image URL: {url}. Use the tools above for full EXIF metadata analysis."),
        ),
        None => LinkEntry::info(
            "Metadata analysis",
            "Provide an image URL to enable reverse search and metadata analysis.",
        ),
    });

    let summary = if image_url.is_some() {
        format!(
            "Reverse image search for '{term}' returned {} search tools, covering reverse and general lookup.",
            entries.len()
        )
    } else {
        format!(
            "Photo search for '{term}' returned {} search tools. Provide an image URL to enable reverse search.",
            entries.len()
        )
    };
    CatalogReport::assemble(term, None, entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::report::EntryKind;

    #[test]
    fn test_photo_without_image_url() {
        let report = photo("sunset bridge", None);
        // 13 general tools plus the metadata note.
        assert_eq!(report.total_results, 14);
        assert_eq!(report.entries[0].service, "Google Images");
        assert_eq!(report.entries.last().unwrap().kind, EntryKind::Info);
    }

    #[test]
    fn test_photo_with_image_url_adds_reverse_tools_first() {
        let report = photo("sunset bridge", Some("https://img.example/p.jpg"));
        assert_eq!(report.total_results, 19);
        assert_eq!(report.entries[0].service, "Google Images (Reverse Search)");
        assert!(report.entries[0]
            .url
            .as_deref()
            .unwrap()
            .contains("https%3A%2F%2Fimg.example%2Fp.jpg"));
        let note = report.entries.last().unwrap();
        assert_eq!(note.kind, EntryKind::Info);
        assert!(note.description.contains("https://img.example/p.jpg"));
    }
}
