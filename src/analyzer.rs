//! URL risk analysis.
//!
//! This module scores a single URL by combining the domain's trust tier with
//! a battery of independent risk heuristics:
//! - Excessive URL length
//! - Scam/urgency keyword matches
//! - Abuse-prone TLDs
//! - Typo-squatting and homograph patterns
//! - Randomly-generated-looking domain labels
//! - Missing transport encryption
//!
//! The trust tier sets a ceiling; risk findings only ever erode it. The final
//! status label is re-derived from the final score alone, so a fully trusted
//! domain riddled with risk signals can still end up labeled a likely scam.

use serde::Serialize;
use strum_macros::Display;
use url::Url;

use crate::config::{
    ScanConfig, BASE_SCORE_FULL_TRUST, BASE_SCORE_PARTIAL_TRUST, BASE_SCORE_UNTRUSTED,
    LONG_URL_THRESHOLD, PENALTY_LONG_URL, PENALTY_NON_ASCII, PENALTY_NO_HTTPS,
    PENALTY_PER_KEYWORD, PENALTY_RANDOM_LABEL, PENALTY_SUSPICIOUS_TLD, PENALTY_TYPOSQUAT,
    RANDOM_LABEL_THRESHOLD,
};
use crate::trust::{classify_domain, TrustTier};

/// Qualitative label for an analyzed URL.
///
/// The tier-derived interim label and the score-derived final label use the
/// same set of values but can diverge; [`StatusLabel::from_score`] has the
/// last word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum StatusLabel {
    /// Final score 80 or above.
    #[serde(rename = "Trusted")]
    Trusted,
    /// Final score in [60, 80).
    #[serde(rename = "Likely Safe")]
    #[strum(serialize = "Likely Safe")]
    LikelySafe,
    /// Interim label for a domain in neither trust list.
    #[serde(rename = "Needs Review")]
    #[strum(serialize = "Needs Review")]
    NeedsReview,
    /// Final score in [40, 60).
    #[serde(rename = "Caution")]
    Caution,
    /// Final score below 40.
    #[serde(rename = "Likely Scam")]
    #[strum(serialize = "Likely Scam")]
    LikelyScam,
    /// No domain could be extracted from the input.
    #[serde(rename = "Invalid")]
    Invalid,
}

impl StatusLabel {
    /// Derives the final status label from a final (post-deduction) score.
    pub fn from_score(score: i32) -> StatusLabel {
        if score >= 80 {
            StatusLabel::Trusted
        } else if score >= 60 {
            StatusLabel::LikelySafe
        } else if score >= 40 {
            StatusLabel::Caution
        } else {
            StatusLabel::LikelyScam
        }
    }
}

/// Result of analyzing a single URL.
///
/// Stateless value record; created once per [`analyze_url`] call.
#[derive(Debug, Clone, Serialize)]
pub struct UrlAnalysis {
    /// The URL exactly as given.
    pub url: String,
    /// Extracted domain, lower-cased; empty when extraction failed.
    pub domain: String,
    /// Final trust score in [0, 100].
    pub trust_score: i32,
    /// Status label derived from the final score.
    pub status: StatusLabel,
    /// Explanation strings in check evaluation order.
    pub details: Vec<String>,
    /// Number of triggered negative risk checks.
    pub risk_indicators: usize,
}

/// Prepends a temporary `http://` scheme when the input has none, so that
/// bare domains like `example.com` parse as URLs.
pub fn normalize_url(url: &str) -> String {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("http://{url}")
    } else {
        url.to_string()
    }
}

/// Extracts the host from a URL string, degrading to an empty string rather
/// than failing.
///
/// Takes the authority component when the URL parses and has one, otherwise
/// falls back to the path component (or, for scheme-less input, everything
/// before the first slash). Input that carries a scheme but still fails to
/// parse (empty or invalid host) yields an empty domain. A trailing `:port`
/// is stripped in the fallback paths.
fn extract_domain(url: &str) -> String {
    let candidate = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            // Scheme-only URIs such as mailto: carry their target in the path
            None => parsed.path().to_string(),
        },
        // A scheme is present but the URL is still unparseable; splitting
        // would mislabel the scheme itself as the domain
        Err(_) if url.contains("://") => String::new(),
        // No scheme at all; treat everything before the first slash as the
        // authority
        Err(_) => url.split('/').next().unwrap_or_default().to_string(),
    };

    candidate
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Builds the short-circuit result for input no domain can be extracted from.
fn invalid_analysis(url: &str) -> UrlAnalysis {
    UrlAnalysis {
        url: url.to_string(),
        domain: String::new(),
        trust_score: 0,
        status: StatusLabel::Invalid,
        details: vec!["Could not extract domain from URL".to_string()],
        risk_indicators: 0,
    }
}

/// Analyzes a URL and returns its trust score, status label, and explanations.
///
/// Absent or empty input short-circuits to an Invalid result; so does any URL
/// from which no domain can be extracted. No error ever escapes this
/// function; every input produces a result value.
///
/// # Arguments
///
/// * `url` - The URL to analyze, or `None` when the caller received no URL
/// * `config` - Suffix and vocabulary lists to score against
pub fn analyze_url(url: Option<&str>, config: &ScanConfig) -> UrlAnalysis {
    let raw = match url {
        Some(u) if !u.is_empty() => u,
        _ => return invalid_analysis(url.unwrap_or_default()),
    };

    let domain = extract_domain(raw);
    if domain.is_empty() {
        return invalid_analysis(raw);
    }

    let tier = classify_domain(&domain, config);
    let mut details = Vec::new();
    let mut risk_indicators = 0usize;

    // Base score from the trust tier. Classification validity gates the tier
    // only; a present-but-invalid domain is still scored, at the lowest
    // non-invalid trust.
    let base_score = match tier {
        TrustTier::FullTrusted => {
            details.push(format!("Domain '{domain}' ends with a fully trusted suffix"));
            BASE_SCORE_FULL_TRUST
        }
        TrustTier::PartialTrusted => {
            details.push(format!(
                "Domain '{domain}' ends with a recognized institutional suffix"
            ));
            BASE_SCORE_PARTIAL_TRUST
        }
        TrustTier::Untrusted | TrustTier::Invalid => {
            details.push(format!(
                "Domain '{domain}' is not in any trusted list ({})",
                StatusLabel::NeedsReview
            ));
            BASE_SCORE_UNTRUSTED
        }
    };

    let mut penalty = 0i32;

    // Excessive length
    if raw.len() > LONG_URL_THRESHOLD {
        penalty += PENALTY_LONG_URL;
        risk_indicators += 1;
        details.push(format!("URL is suspiciously long ({} characters)", raw.len()));
    }

    // Suspicious keywords, matched against the whole URL
    let lowered = raw.to_lowercase();
    let matched: Vec<&str> = config
        .suspicious_keywords
        .iter()
        .filter(|kw| lowered.contains(kw.as_str()))
        .map(|kw| kw.as_str())
        .collect();
    if !matched.is_empty() {
        penalty += PENALTY_PER_KEYWORD * matched.len() as i32;
        risk_indicators += 1;
        details.push(format!(
            "Contains {} suspicious keyword(s): {}",
            matched.len(),
            matched.join(", ")
        ));
    }

    // Abuse-prone TLD
    if let Some(tld) = config
        .suspicious_tlds
        .iter()
        .find(|tld| domain.ends_with(tld.as_str()))
    {
        penalty += PENALTY_SUSPICIOUS_TLD;
        risk_indicators += 1;
        details.push(format!("Uses suspicious top-level domain '{tld}'"));
    }

    // Typo-squatting: "rn" rendered in many fonts is indistinguishable from
    // "m"; only flag when the original character is absent entirely
    if domain.contains("rn") && !domain.contains('m') {
        penalty += PENALTY_TYPOSQUAT;
        risk_indicators += 1;
        details.push("Domain shows potential typo-squatting ('rn' imitating 'm')".to_string());
    }

    // Homograph/mixed-script: any non-ASCII codepoint in the URL or domain
    if !raw.is_ascii() || !domain.is_ascii() {
        penalty += PENALTY_NON_ASCII;
        risk_indicators += 1;
        details.push(
            "Contains non-ASCII characters (potential homograph attack)".to_string(),
        );
    }

    // Randomly-generated-looking leading label
    let label = domain.split('.').next().unwrap_or_default();
    if label.len() > RANDOM_LABEL_THRESHOLD
        && !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        penalty += PENALTY_RANDOM_LABEL;
        risk_indicators += 1;
        details.push("Leading domain label looks randomly generated".to_string());
    }

    // Transport encryption
    if raw.starts_with("https://") {
        details.push("Uses encrypted HTTPS connection".to_string());
    } else {
        penalty += PENALTY_NO_HTTPS;
        risk_indicators += 1;
        details.push("URL does not use encrypted HTTPS".to_string());
    }

    let trust_score = (base_score - penalty).clamp(0, 100);

    UrlAnalysis {
        url: raw.to_string(),
        domain,
        trust_score,
        status: StatusLabel::from_score(trust_score),
        details,
        risk_indicators,
    }
}
