//! Page-level link scanning and aggregation.
//!
//! Runs the link extraction pipeline over a document, analyzes every link,
//! buckets the results into trust tiers, and condenses them into one
//! page-level safety score and verdict.

use log::{debug, info};
use serde::Serialize;

use crate::analyzer::{analyze_url, StatusLabel, UrlAnalysis};
use crate::config::ScanConfig;
use crate::extract::extract_links;

// Bucketing thresholds over the final trust score. These are deliberately
// coarser than the four-way status-label thresholds in the analyzer; the two
// scales coexist and are not unified.
const TRUSTED_BUCKET_MIN: i32 = 80;
const SUSPICIOUS_BUCKET_MIN: i32 = 50;

// Page verdict thresholds over the safe/scam ratios.
const SCAM_RATIO_SCAM_SITE: f64 = 0.5;
const SCAM_RATIO_CAUTION: f64 = 0.2;
const SAFE_RATIO_SAFE: f64 = 0.7;

/// Qualitative verdict over a whole document's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageVerdict {
    /// More than half of the links look like scams.
    #[serde(rename = "LIKELY SCAM SITE")]
    LikelyScamSite,
    /// More than a fifth of the links look like scams.
    #[serde(rename = "CAUTION - Contains suspicious links")]
    Caution,
    /// More than 70% of the links are trusted.
    #[serde(rename = "LIKELY SAFE")]
    LikelySafe,
    /// No ratio threshold was met.
    #[serde(rename = "NEEDS REVIEW")]
    NeedsReview,
    /// The document contained no links to analyze.
    #[serde(rename = "NO LINKS FOUND")]
    NoLinksFound,
}

impl PageVerdict {
    /// Returns the verdict's display string, identical to its JSON form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVerdict::LikelyScamSite => "LIKELY SCAM SITE",
            PageVerdict::Caution => "CAUTION - Contains suspicious links",
            PageVerdict::LikelySafe => "LIKELY SAFE",
            PageVerdict::NeedsReview => "NEEDS REVIEW",
            PageVerdict::NoLinksFound => "NO LINKS FOUND",
        }
    }
}

/// One link as reported inside a scan bucket.
///
/// The suspicious and likely-scam buckets carry the risk indicator count;
/// only the likely-scam bucket carries the full detail strings.
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    /// Resolved link URL.
    pub url: String,
    /// Anchor text the link was rendered with.
    pub text: String,
    /// Final trust score of the link.
    pub trust_score: i32,
    /// Status label of the link.
    pub status: StatusLabel,
    /// Triggered negative check count (suspicious and scam buckets only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_indicators: Option<usize>,
    /// Explanation strings (scam bucket only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// One fully analyzed link with its document position.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedLink {
    /// The complete URL analysis.
    #[serde(flatten)]
    pub analysis: UrlAnalysis,
    /// Anchor text the link was rendered with.
    pub link_text: String,
    /// 1-based position of the link in document order.
    pub link_index: usize,
}

/// Aggregate result of scanning one document.
///
/// Computed once per scan call; no state is shared between scans.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Number of links extracted from the document.
    pub total_links: usize,
    /// Links with a trust score of 80 or above.
    pub trusted_links: Vec<LinkReport>,
    /// Links with a trust score in [50, 80).
    pub suspicious_links: Vec<LinkReport>,
    /// Links with a trust score below 50.
    pub likely_scam_links: Vec<LinkReport>,
    /// Every analyzed link in document order.
    pub all_links_analysis: Vec<AnalyzedLink>,
    /// Page safety score; may be negative, deliberately unclamped.
    pub overall_safety_score: i32,
    /// Qualitative verdict for the whole page.
    pub page_verdict: PageVerdict,
}

fn bucket_report(
    analysis: &UrlAnalysis,
    text: &str,
    with_risk_indicators: bool,
    with_details: bool,
) -> LinkReport {
    LinkReport {
        url: analysis.url.clone(),
        text: text.to_string(),
        trust_score: analysis.trust_score,
        status: analysis.status,
        risk_indicators: with_risk_indicators.then_some(analysis.risk_indicators),
        details: with_details.then(|| analysis.details.clone()),
    }
}

/// Scans every hyperlink in an HTML document and aggregates the results.
///
/// Extraction order is preserved in `all_links_analysis`; records whose
/// resolved URL is empty are skipped. Every input produces a result value:
/// unparseable markup degrades to the extraction fallback and unparseable
/// URLs degrade to zero-trust analyses.
///
/// # Arguments
///
/// * `html` - The document text to scan
/// * `base_url` - Base for resolving relative hrefs, when known
/// * `config` - Suffix and vocabulary lists to score against
pub fn scan_links(html: &str, base_url: Option<&str>, config: &ScanConfig) -> ScanResult {
    let links = extract_links(html, base_url);
    let total_links = links.len();
    debug!("Extracted {total_links} link(s)");

    let mut trusted_links = Vec::new();
    let mut suspicious_links = Vec::new();
    let mut likely_scam_links = Vec::new();
    let mut all_links_analysis = Vec::new();

    for (idx, link) in links.iter().enumerate() {
        if link.url.is_empty() {
            continue;
        }

        let analysis = analyze_url(Some(&link.url), config);

        if analysis.trust_score >= TRUSTED_BUCKET_MIN {
            trusted_links.push(bucket_report(&analysis, &link.text, false, false));
        } else if analysis.trust_score >= SUSPICIOUS_BUCKET_MIN {
            suspicious_links.push(bucket_report(&analysis, &link.text, true, false));
        } else {
            likely_scam_links.push(bucket_report(&analysis, &link.text, true, true));
        }

        all_links_analysis.push(AnalyzedLink {
            analysis,
            link_text: link.text.clone(),
            link_index: idx + 1,
        });
    }

    let (overall_safety_score, page_verdict) = if total_links > 0 {
        let safe_ratio = trusted_links.len() as f64 / total_links as f64;
        let scam_ratio = likely_scam_links.len() as f64 / total_links as f64;
        let score = (safe_ratio * 100.0 - scam_ratio * 50.0).floor() as i32;

        let verdict = if scam_ratio > SCAM_RATIO_SCAM_SITE {
            PageVerdict::LikelyScamSite
        } else if scam_ratio > SCAM_RATIO_CAUTION {
            PageVerdict::Caution
        } else if safe_ratio > SAFE_RATIO_SAFE {
            PageVerdict::LikelySafe
        } else {
            PageVerdict::NeedsReview
        };
        (score, verdict)
    } else {
        (0, PageVerdict::NoLinksFound)
    };

    info!(
        "Scanned {} link(s): {} trusted, {} suspicious, {} likely scam ({})",
        total_links,
        trusted_links.len(),
        suspicious_links.len(),
        likely_scam_links.len(),
        page_verdict.as_str()
    );

    ScanResult {
        total_links,
        trusted_links,
        suspicious_links,
        likely_scam_links,
        all_links_analysis,
        overall_safety_score,
        page_verdict,
    }
}

/// Scans HTML fetched from a known source URL, resolving relative links
/// against it. The fetch itself belongs to the collaborator layer.
pub fn scan_url_content(html: &str, source_url: &str, config: &ScanConfig) -> ScanResult {
    scan_links(html, Some(source_url), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let result = scan_links("", None, &ScanConfig::default());
        assert_eq!(result.total_links, 0);
        assert_eq!(result.overall_safety_score, 0);
        assert_eq!(result.page_verdict, PageVerdict::NoLinksFound);
    }

    #[test]
    fn test_all_trusted_page_is_likely_safe() {
        let html = r#"
            <a href="https://moe.gov.bn/admissions">Ministry of Education</a>
            <a href="https://www.example.bn/news">News</a>
            <a href="https://portal.edu.bn/">Portal</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        assert_eq!(result.total_links, 3);
        assert_eq!(result.trusted_links.len(), 3);
        assert!(result.likely_scam_links.is_empty());
        assert_eq!(result.page_verdict, PageVerdict::LikelySafe);
        assert_eq!(result.overall_safety_score, 100);
    }

    #[test]
    fn test_scam_majority_verdict_and_negative_score() {
        let html = r#"
            <a href="https://www.moe.gov.bn/">ok</a>
            <a href="http://free-prize-winner.tk/claim">one</a>
            <a href="http://verify-account-urgent.ml/login">two</a>
            <a href="http://crypto-refund-bonus.ga/now">three</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        assert_eq!(result.likely_scam_links.len(), 3);
        assert_eq!(result.page_verdict, PageVerdict::LikelyScamSite);
        // floor(0.25 * 100 - 0.75 * 50) = floor(-12.5) = -13, unclamped
        assert_eq!(result.overall_safety_score, -13);
    }

    #[test]
    fn test_caution_verdict_for_scam_minority() {
        let html = r#"
            <a href="https://a.example.com/">a</a>
            <a href="https://b.example.com/">b</a>
            <a href="https://c.example.com/">c</a>
            <a href="http://free-prize-winner.tk/claim">scam</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        assert_eq!(result.likely_scam_links.len(), 1);
        // scam_ratio 0.25 falls between the caution and scam-site thresholds
        assert_eq!(result.page_verdict, PageVerdict::Caution);
    }

    #[test]
    fn test_needs_review_when_no_threshold_met() {
        // Plain untrusted https links score 60: neither trusted nor scam
        let html = r#"
            <a href="https://a.example.com/">a</a>
            <a href="https://b.example.com/">b</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        assert_eq!(result.trusted_links.len(), 0);
        assert_eq!(result.suspicious_links.len(), 2);
        assert_eq!(result.page_verdict, PageVerdict::NeedsReview);
        assert_eq!(result.overall_safety_score, 0);
    }

    #[test]
    fn test_all_links_analysis_preserves_document_order() {
        let html = r#"
            <a href="https://a.example.com/">a</a>
            <a href="http://free-prize-winner.tk/claim">scam</a>
            <a href="https://b.example.com/">b</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        let indexed: Vec<(usize, &str)> = result
            .all_links_analysis
            .iter()
            .map(|l| (l.link_index, l.analysis.url.as_str()))
            .collect();
        assert_eq!(
            indexed,
            vec![
                (1, "https://a.example.com/"),
                (2, "http://free-prize-winner.tk/claim"),
                (3, "https://b.example.com/"),
            ]
        );
    }

    #[test]
    fn test_scam_bucket_carries_details() {
        let html = r#"<a href="http://free-prize-winner.tk/claim">scam</a>"#;
        let result = scan_links(html, None, &ScanConfig::default());
        let scam = &result.likely_scam_links[0];
        assert!(scam.details.is_some());
        assert!(scam.risk_indicators.is_some());
    }

    #[test]
    fn test_trusted_bucket_omits_risk_fields() {
        let html = r#"<a href="https://moe.gov.bn/">ok</a>"#;
        let result = scan_links(html, None, &ScanConfig::default());
        let trusted = &result.trusted_links[0];
        assert!(trusted.risk_indicators.is_none());
        assert!(trusted.details.is_none());
    }

    #[test]
    fn test_relative_links_resolved_via_source_url() {
        let html = r#"<a href="/login">Sign in</a>"#;
        let result = scan_url_content(html, "https://bank.example.com", &ScanConfig::default());
        assert_eq!(
            result.all_links_analysis[0].analysis.url,
            "https://bank.example.com/login"
        );
    }
}
