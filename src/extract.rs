//! Link extraction from HTML documents.
//!
//! Extraction is a two-stage pipeline: a structural parse with `scraper`
//! collects every anchor element carrying an `href`, and a permissive
//! regex-based stage takes over when the structural stage comes up empty on
//! markup that plainly contains anchor fragments. The fallback is lossy (it
//! may miss or duplicate links) and is an accepted degradation, not an error.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

// CSS selector strings
const ANCHOR_SELECTOR_STR: &str = "a[href]";

// Regex patterns for the fallback stage
const ANCHOR_PATTERN: &str = r#"(?is)<a[^>]+href=["']([^"']+)["'][^>]*>(.*?)</a>"#;
const TAG_STRIP_PATTERN: &str = r"<[^>]+>";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("Failed to parse anchor selector - this is a bug")
});

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ANCHOR_PATTERN).expect("Failed to compile anchor pattern - this is a bug")
});

static TAG_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TAG_STRIP_PATTERN).expect("Failed to compile tag strip pattern - this is a bug")
});

/// One hyperlink found in a document: the (possibly resolved) URL and the
/// anchor's rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Absolute URL when a base was supplied and the href was relative,
    /// otherwise the href unchanged.
    pub url: String,
    /// Trimmed anchor text; falls back to the href when empty.
    pub text: String,
}

/// Resolves an href against an optional base URL.
///
/// Hrefs already carrying an absolute http/https scheme pass through
/// unchanged, as do hrefs when no base is supplied or resolution fails.
fn resolve_href(href: &str, base_url: Option<&str>) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(base) = base_url {
        if let Ok(parsed_base) = Url::parse(base) {
            if let Ok(joined) = parsed_base.join(href) {
                return joined.to_string();
            }
        }
    }
    href.to_string()
}

/// Structural extraction stage: parse the document and walk every `a[href]`.
fn extract_structural(html: &str, base_url: Option<&str>) -> Vec<LinkRecord> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR_SELECTOR)
        .map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or_default();
            let text = anchor.text().collect::<String>().trim().to_string();
            LinkRecord {
                url: resolve_href(href, base_url),
                text: if text.is_empty() { href.to_string() } else { text },
            }
        })
        .collect()
}

/// Fallback extraction stage: find `<a ... href="...">...</a>`-shaped
/// fragments with a case-insensitive pattern and strip inner tags from the
/// text.
fn extract_with_regex(html: &str, base_url: Option<&str>) -> Vec<LinkRecord> {
    ANCHOR_RE
        .captures_iter(html)
        .map(|caps| {
            let href = caps.get(1).map_or("", |m| m.as_str());
            let raw_text = caps.get(2).map_or("", |m| m.as_str());
            let text = TAG_STRIP_RE.replace_all(raw_text, "").trim().to_string();
            LinkRecord {
                url: resolve_href(href, base_url),
                text: if text.is_empty() { href.to_string() } else { text },
            }
        })
        .collect()
}

/// Quick recoverability check: does the markup contain anchor-shaped
/// fragments the structural parser might have lost?
fn looks_like_anchor_markup(html: &str) -> bool {
    let lowered = html.to_lowercase();
    lowered.contains("<a") && lowered.contains("href")
}

/// Extracts every hyperlink from an HTML document, in document order.
///
/// Relative hrefs are resolved against `base_url` when one is supplied.
/// Duplicate hrefs are kept; every anchor occurrence becomes its own record.
/// When the structural parse yields nothing for markup that still looks like
/// it contains anchors, a permissive regex stage produces best-effort records
/// instead of failing the scan.
pub fn extract_links(html: &str, base_url: Option<&str>) -> Vec<LinkRecord> {
    let records = extract_structural(html, base_url);
    if records.is_empty() && looks_like_anchor_markup(html) {
        warn!("Structural parse found no anchors in anchor-like markup; using pattern fallback");
        return extract_with_regex(html, base_url);
    }
    records
}
