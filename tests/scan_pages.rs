//! End-to-end tests for whole-page scanning through the public API.

use link_trust::{extract_links, scan_links, PageVerdict, ScanConfig};

/// A realistic page mixing institutional, commercial, and scam links.
const MIXED_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Community Notices</title></head>
<body>
    <h1>Notices</h1>
    <ul>
        <li><a href="https://www.moe.gov.bn/admissions">School admissions</a></li>
        <li><a href="https://www.mofe.gov.bn/news">Budget news</a></li>
        <li><a href="https://www.example.org/events">Local events</a></li>
        <li><a href="http://free-prize-winner.tk/claim">You won! Claim now</a></li>
    </ul>
</body>
</html>
"#;

#[test]
fn test_mixed_page_buckets_and_counts() {
    let result = scan_links(MIXED_PAGE, None, &ScanConfig::default());

    assert_eq!(result.total_links, 4);
    assert_eq!(result.trusted_links.len(), 2);
    assert_eq!(result.suspicious_links.len(), 1);
    assert_eq!(result.likely_scam_links.len(), 1);
    assert_eq!(result.all_links_analysis.len(), 4);

    // scam_ratio 0.25 lands in the caution band
    assert_eq!(result.page_verdict, PageVerdict::Caution);
}

#[test]
fn test_empty_page_verdict() {
    let result = scan_links("<html><body><p>No links here</p></body></html>", None, &ScanConfig::default());
    assert_eq!(result.total_links, 0);
    assert_eq!(result.overall_safety_score, 0);
    assert_eq!(result.page_verdict, PageVerdict::NoLinksFound);
}

#[test]
fn test_relative_links_resolved_before_analysis() {
    let html = r#"
        <a href="/scholarships">Scholarships</a>
        <a href="contact.html">Contact</a>
    "#;
    let result = scan_links(html, Some("https://www.moe.gov.bn/info/"), &ScanConfig::default());

    let urls: Vec<&str> = result
        .all_links_analysis
        .iter()
        .map(|l| l.analysis.url.as_str())
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://www.moe.gov.bn/scholarships",
            "https://www.moe.gov.bn/info/contact.html",
        ]
    );
    // Both resolve onto the trusted domain
    assert_eq!(result.trusted_links.len(), 2);
    assert_eq!(result.page_verdict, PageVerdict::LikelySafe);
}

#[test]
fn test_extraction_survives_broken_markup() {
    // Anchors buried in a comment are invisible to the structural parser;
    // the pattern fallback still produces best-effort records
    let html = r#"<!-- <a href="http://free-prize-winner.tk/claim">claim</a> -->"#;
    let links = extract_links(html, None);
    assert_eq!(links.len(), 1);

    let result = scan_links(html, None, &ScanConfig::default());
    assert_eq!(result.likely_scam_links.len(), 1);
    assert_eq!(result.page_verdict, PageVerdict::LikelyScamSite);
}

#[test]
fn test_scan_result_json_shape() {
    let result = scan_links(MIXED_PAGE, None, &ScanConfig::default());
    let json = serde_json::to_value(&result).expect("scan result should serialize");

    assert_eq!(json["total_links"], 4);
    assert_eq!(json["page_verdict"], "CAUTION - Contains suspicious links");

    // Scam entries carry details; trusted entries omit the risk fields
    let scam = &json["likely_scam_links"][0];
    assert!(scam["details"].is_array());
    assert!(scam["risk_indicators"].is_number());
    let trusted = &json["trusted_links"][0];
    assert!(trusted.get("details").is_none());
    assert!(trusted.get("risk_indicators").is_none());

    // Index stamps follow document order
    assert_eq!(json["all_links_analysis"][0]["link_index"], 1);
    assert_eq!(json["all_links_analysis"][3]["link_index"], 4);
}

#[test]
fn test_repeated_scans_are_independent() {
    // No state is shared between scans; the same input gives the same result
    let config = ScanConfig::default();
    let first = scan_links(MIXED_PAGE, None, &config);
    let second = scan_links(MIXED_PAGE, None, &config);
    assert_eq!(first.total_links, second.total_links);
    assert_eq!(first.overall_safety_score, second.overall_safety_score);
    assert_eq!(first.page_verdict, second.page_verdict);
}
