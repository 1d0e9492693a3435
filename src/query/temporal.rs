//! Temporal constraint extraction
//!
//! A query may name an absolute year ("modified in 2024") or one of a
//! closed set of recency phrases ("yesterday", "last week", "last month").
//! A year always takes precedence.

use lazy_static::lazy_static;
use regex::Regex;

use super::model::Modified;

lazy_static! {
    /// A standalone year between 1900 and 2099. Boundaries are ASCII, so
    /// a year written next to CJK text ("2024年") still counts.
    static ref YEAR_PATTERN: Regex = Regex::new(r"(?-u:\b)(?:19|20)[0-9]{2}(?-u:\b)").unwrap();
}

/// Recency phrases in the order they are checked. Earlier entries win.
const RECENCY_PHRASES: [(&str, Modified); 3] = [
    ("last week", Modified::LastWeek),
    ("yesterday", Modified::Yesterday),
    ("last month", Modified::LastMonth),
];

/// Extract a year or a recency tag from `text`.
///
/// Returns `(Modified::None, year)` as soon as a year is found, without
/// looking for recency phrases. Otherwise returns the first matching
/// phrase with year `0`, or `(Modified::None, 0)` when nothing matches.
/// Phrase matching is case-sensitive.
pub fn extract_year_or_modified(text: &str) -> (Modified, u32) {
    if let Some(year) = extract_year(text) {
        return (Modified::None, year);
    }

    let modified = RECENCY_PHRASES
        .iter()
        .find(|(phrase, _)| text.contains(*phrase))
        .map(|(_, modified)| *modified)
        .unwrap_or_default();

    (modified, 0)
}

fn extract_year(text: &str) -> Option<u32> {
    YEAR_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}
