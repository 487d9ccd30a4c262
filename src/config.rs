//! Scanner configuration: trust suffix lists, risk vocabularies, and the
//! tunable scoring constants.
//!
//! The lists below are compiled-in defaults. Components never read them
//! directly; they receive an immutable [`ScanConfig`] so tests can substitute
//! fixtures without touching process-wide state.

use std::time::Duration;

use clap::ValueEnum;

// Base trust scores, assigned from the domain's trust tier before any risk
// deductions are applied.
/// Base score for a domain ending with a full-trust suffix.
pub const BASE_SCORE_FULL_TRUST: i32 = 95;
/// Base score for a domain ending with a partial-trust suffix.
pub const BASE_SCORE_PARTIAL_TRUST: i32 = 75;
/// Base score for a domain not found in either trust list.
pub const BASE_SCORE_UNTRUSTED: i32 = 60;

// Risk penalties. Each triggered check subtracts its penalty from the base
// score; the final score is clamped to [0, 100].
/// Penalty for URLs longer than [`LONG_URL_THRESHOLD`].
pub const PENALTY_LONG_URL: i32 = 30;
/// Penalty applied per suspicious keyword match (uncapped).
pub const PENALTY_PER_KEYWORD: i32 = 5;
/// Penalty for a domain ending with an abuse-prone TLD.
pub const PENALTY_SUSPICIOUS_TLD: i32 = 20;
/// Penalty for the "rn"-for-"m" character substitution pattern.
pub const PENALTY_TYPOSQUAT: i32 = 25;
/// Penalty for non-ASCII codepoints in the URL or domain.
pub const PENALTY_NON_ASCII: i32 = 30;
/// Penalty for a long, non-alphanumeric leading domain label.
pub const PENALTY_RANDOM_LABEL: i32 = 15;
/// Penalty for a URL that does not use HTTPS.
pub const PENALTY_NO_HTTPS: i32 = 10;

/// URL length above which the excessive-length check triggers.
pub const LONG_URL_THRESHOLD: usize = 200;
/// Length above which the leading domain label is considered suspiciously long.
pub const RANDOM_LABEL_THRESHOLD: usize = 20;

/// Default User-Agent string for the fetch collaborator.
///
/// Uses a generic Chrome-like string without a specific version number to
/// avoid becoming outdated. Users can override this via [`crate::fetch_page_with`].
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Per-request timeout for page fetches.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum response body size in bytes (2MB).
/// Responses larger than this are rejected to prevent memory exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Domains ending with these suffixes receive full trust, including
/// subdomains like `.gov.bn` and `.edu.bn`.
pub const FULL_TRUST_SUFFIXES: &[&str] = &[".bn"];

/// Recognized institutional suffixes that receive partial trust.
pub const PARTIAL_TRUST_SUFFIXES: &[&str] = &[".gov", ".edu"];

/// Scam, urgency, and financial vocabulary checked against the whole URL
/// (case-insensitive substring match).
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "free", "winner", "prize", "claim", "urgent", "verify", "account", "suspended", "refund",
    "lottery", "bitcoin", "crypto", "payment", "confirm", "secure", "update", "bonus", "gift",
];

/// Low-cost, abuse-prone TLDs.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".click", ".link", ".work",
];

/// Immutable configuration for trust classification and risk scoring.
///
/// Built once and shared by reference; nothing mutates it after construction,
/// so a single instance can serve parallel scans without coordination.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Suffixes granting the FullTrusted tier.
    pub full_trust_suffixes: Vec<String>,
    /// Suffixes granting the PartialTrusted tier.
    pub partial_trust_suffixes: Vec<String>,
    /// Keywords matched case-insensitively against the URL.
    pub suspicious_keywords: Vec<String>,
    /// TLD suffixes treated as abuse-prone.
    pub suspicious_tlds: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        ScanConfig {
            full_trust_suffixes: owned(FULL_TRUST_SUFFIXES),
            partial_trust_suffixes: owned(PARTIAL_TRUST_SUFFIXES),
            suspicious_keywords: owned(SUSPICIOUS_KEYWORDS),
            suspicious_tlds: owned(SUSPICIOUS_TLDS),
        }
    }
}

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
#[allow(missing_docs)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
