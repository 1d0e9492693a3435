//! Size constraint extraction
//!
//! Finds the first `<integer><unit>` pair in a query ("under 110gb",
//! "500 kb", "3 megabytes") and normalizes it to kilobytes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::SizeError;

lazy_static! {
    /// Group 1 holds the integer, group 2 the unit token. At most one ASCII
    /// whitespace character may separate them. Unit alternatives are
    /// listed longest-first so the captured token is the whole unit word.
    static ref SIZE_PATTERN: Regex = Regex::new(
        r"(?i)([0-9]+)[\t\n\x0C\r ]?(gigabytes|gigabyte|gb|megabytes|megabyte|mb|kilobytes|kilobyte|kb|bytes|byte|b)"
    )
    .unwrap();
}

/// Units a size constraint can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    /// Look up a unit token such as `"kb"` or `"Megabytes"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "b" | "byte" | "bytes" => Some(SizeUnit::Bytes),
            "kb" | "kilobyte" | "kilobytes" => Some(SizeUnit::Kilobytes),
            "mb" | "megabyte" | "megabytes" => Some(SizeUnit::Megabytes),
            "gb" | "gigabyte" | "gigabytes" => Some(SizeUnit::Gigabytes),
            _ => None,
        }
    }

    /// Convert `value` in this unit to kilobytes.
    ///
    /// Bytes are floor-divided, so anything under 1024 bytes becomes 0
    /// (no constraint). Returns `None` on overflow.
    pub fn to_kilobytes(self, value: u64) -> Option<u64> {
        match self {
            SizeUnit::Bytes => Some(value / 1024),
            SizeUnit::Kilobytes => Some(value),
            SizeUnit::Megabytes => value.checked_mul(1024),
            SizeUnit::Gigabytes => value.checked_mul(1024 * 1024),
        }
    }
}

/// Extract the first size constraint in `text`, in kilobytes.
///
/// Later numbers and units are ignored.
pub fn extract_file_size(text: &str) -> Result<u64, SizeError> {
    let caps = SIZE_PATTERN.captures(text).ok_or(SizeError::NoSizeFound)?;
    let digits = &caps[1];
    let token = &caps[2];

    let value: u64 = digits.parse().map_err(|_| SizeError::MalformedNumber {
        digits: digits.to_string(),
    })?;

    let unit = SizeUnit::from_token(token).ok_or_else(|| SizeError::UnknownUnit {
        unit: token.to_string(),
    })?;

    unit.to_kilobytes(value).ok_or_else(|| SizeError::SizeOverflow {
        value,
        unit: token.to_string(),
    })
}
