//! Domain trust classification from static suffix lists.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::ScanConfig;

/// Coarse trust tier for a domain, derived purely from suffix membership.
///
/// Exactly one tier applies per domain. `FullTrusted` takes precedence over
/// `PartialTrusted`: the partial check excludes anything the full check
/// already matched, so the precedence holds even when a configuration makes
/// the two suffix sets overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum TrustTier {
    /// Domain ends with a full-trust suffix.
    FullTrusted,
    /// Domain ends with a recognized institutional suffix.
    PartialTrusted,
    /// Valid domain not present in either trust list.
    Untrusted,
    /// Empty, dotless, or implausibly short domain.
    Invalid,
}

/// Basic validation: must contain at least one dot, not be empty, and have a
/// reasonable length.
fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.contains('.') && domain.len() > 3
}

/// Classifies a domain into a [`TrustTier`] using the configured suffix lists.
///
/// The caller is expected to pass a lower-cased, trimmed domain; no
/// re-normalization happens here. Pure function, no side effects.
pub fn classify_domain(domain: &str, config: &ScanConfig) -> TrustTier {
    if !is_valid_domain(domain) {
        return TrustTier::Invalid;
    }

    if config
        .full_trust_suffixes
        .iter()
        .any(|suffix| domain.ends_with(suffix.as_str()))
    {
        return TrustTier::FullTrusted;
    }

    // The full-trust check has already failed at this point, which keeps the
    // tiers mutually exclusive under arbitrary suffix configurations.
    if config
        .partial_trust_suffixes
        .iter()
        .any(|suffix| domain.ends_with(suffix.as_str()))
    {
        TrustTier::PartialTrusted
    } else {
        TrustTier::Untrusted
    }
}
