//! link_trust library: heuristic URL trust scoring and HTML link scanning.
//!
//! This library assigns a trust score to a URL and, for an HTML page,
//! classifies every outbound hyperlink into trust tiers, producing an
//! aggregate page verdict. It is built for automated scam/phishing triage:
//! the caller hands it a URL string or already-fetched HTML text and gets a
//! structured judgment back. No reputation databases are consulted and no
//! network access happens inside the core; fetching lives in a separate
//! collaborator ([`fetch_page`]).
//!
//! # Example
//!
//! ```
//! use link_trust::{analyze_url, scan_links, ScanConfig};
//!
//! let config = ScanConfig::default();
//!
//! let analysis = analyze_url(Some("https://example.gov.bn"), &config);
//! assert_eq!(analysis.trust_score, 95);
//!
//! let html = r#"<a href="https://www.moe.gov.bn/">Ministry of Education</a>"#;
//! let result = scan_links(html, None, &config);
//! assert_eq!(result.total_links, 1);
//! ```

#![warn(missing_docs)]

mod analyzer;
pub mod config;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod report;
mod scan;
mod trust;

// Re-export public API
pub use analyzer::{analyze_url, normalize_url, StatusLabel, UrlAnalysis};
pub use config::{LogLevel, ScanConfig};
pub use error_handling::{FetchError, InitializationError};
pub use extract::{extract_links, LinkRecord};
pub use fetch::{fetch_page, fetch_page_with};
pub use report::generate_report;
pub use scan::{scan_links, scan_url_content, AnalyzedLink, LinkReport, PageVerdict, ScanResult};
pub use trust::{classify_domain, TrustTier};
