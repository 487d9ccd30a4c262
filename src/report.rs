//! Human-readable report rendering for scan results.

use colored::*;

use crate::scan::{LinkReport, ScanResult};

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn push_bucket(report: &mut Vec<String>, heading: &str, links: &[LinkReport], marker: &str) {
    if links.is_empty() {
        return;
    }
    report.push(light_rule());
    report.push(format!("{heading} ({}):", links.len()));
    report.push(light_rule());
    for link in links {
        report.push(format!("  {marker} {}", link.url));
        report.push(format!("    Text: {}", link.text));
        report.push(format!("    Trust Score: {}", link.trust_score));
        if let Some(indicators) = link.risk_indicators {
            report.push(format!("    Risk Indicators: {indicators}"));
        }
        if let Some(details) = &link.details {
            report.push("    Details:".to_string());
            for detail in details {
                report.push(format!("      - {detail}"));
            }
        }
        report.push(String::new());
    }
}

/// Renders a scan result as a formatted terminal report.
///
/// Lists the page totals and verdict followed by one section per non-empty
/// bucket; scam entries include their full detail strings.
pub fn generate_report(result: &ScanResult) -> String {
    let mut report = Vec::new();

    report.push(heavy_rule());
    report.push("HTML LINK SCAN REPORT".to_string());
    report.push(heavy_rule());
    report.push(String::new());

    report.push(format!("Total Links Found: {}", result.total_links));
    report.push(format!(
        "Overall Safety Score: {}/100",
        result.overall_safety_score
    ));
    report.push(format!("Page Verdict: {}", result.page_verdict.as_str()));
    report.push(String::new());

    push_bucket(
        &mut report,
        "TRUSTED LINKS",
        &result.trusted_links,
        &"✓".green().to_string(),
    );
    push_bucket(
        &mut report,
        "SUSPICIOUS LINKS",
        &result.suspicious_links,
        &"⚠".yellow().to_string(),
    );
    push_bucket(
        &mut report,
        "LIKELY SCAM LINKS",
        &result.likely_scam_links,
        &"✗".red().to_string(),
    );

    report.push(heavy_rule());

    report.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::scan::scan_links;

    #[test]
    fn test_report_lists_verdict_and_buckets() {
        colored::control::set_override(false);
        let html = r#"
            <a href="https://moe.gov.bn/">ok</a>
            <a href="http://free-prize-winner.tk/claim">scam</a>
        "#;
        let result = scan_links(html, None, &ScanConfig::default());
        let report = generate_report(&result);

        assert!(report.contains("HTML LINK SCAN REPORT"));
        assert!(report.contains("Total Links Found: 2"));
        assert!(report.contains("TRUSTED LINKS (1):"));
        assert!(report.contains("LIKELY SCAM LINKS (1):"));
        assert!(report.contains("http://free-prize-winner.tk/claim"));
        assert!(report.contains("Details:"));
    }

    #[test]
    fn test_report_for_empty_page() {
        colored::control::set_override(false);
        let result = scan_links("", None, &ScanConfig::default());
        let report = generate_report(&result);
        assert!(report.contains("Page Verdict: NO LINKS FOUND"));
        assert!(!report.contains("TRUSTED LINKS"));
    }
}
