//! Parsed query descriptor

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative recency constraint taken from phrases like "last week".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modified {
    /// No recency phrase in the query
    #[default]
    #[serde(rename = "")]
    None,
    Yesterday,
    LastWeek,
    LastMonth,
}

impl Modified {
    /// The tag string used in printed and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modified::None => "",
            Modified::Yesterday => "yesterday",
            Modified::LastWeek => "last_week",
            Modified::LastMonth => "last_month",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Modified::None
    }
}

impl fmt::Display for Modified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured filter descriptor extracted from one free-text query.
///
/// Every field falls back to its zero value when the query does not
/// mention it: an empty `file_type`, `max_size_kb == 0`, `Modified::None`
/// and `year == 0`. A year and a recency tag are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Last noun in the query, taken as the file category
    pub file_type: String,
    /// Upper size bound in kilobytes
    pub max_size_kb: u64,
    /// Relative recency constraint
    pub modified: Modified,
    /// Absolute year constraint
    pub year: u32,
}

impl ParsedQuery {
    pub fn has_file_type(&self) -> bool {
        !self.file_type.is_empty()
    }

    pub fn has_size(&self) -> bool {
        self.max_size_kb > 0
    }

    pub fn has_year(&self) -> bool {
        self.year > 0
    }

    /// True when no field carries a constraint.
    pub fn is_empty(&self) -> bool {
        !self.has_file_type() && !self.has_size() && !self.has_year() && self.modified.is_none()
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsed Query:")?;
        writeln!(f, "File Type: {}", self.file_type)?;
        writeln!(f, "Max Size: {} KB", self.max_size_kb)?;
        writeln!(f, "Modified: {}", self.modified)?;
        write!(f, "Year: {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero_values() {
        let parsed = ParsedQuery::default();
        assert_eq!(parsed.file_type, "");
        assert_eq!(parsed.max_size_kb, 0);
        assert_eq!(parsed.modified, Modified::None);
        assert_eq!(parsed.year, 0);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_display_layout() {
        let parsed = ParsedQuery {
            file_type: "file".to_string(),
            max_size_kb: 115343360,
            modified: Modified::None,
            year: 2024,
        };
        assert_eq!(
            parsed.to_string(),
            "Parsed Query:\nFile Type: file\nMax Size: 115343360 KB\nModified: \nYear: 2024"
        );
    }

    #[test]
    fn test_modified_serializes_as_tag() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Modified::LastWeek)?, "\"last_week\"");
        assert_eq!(serde_json::to_string(&Modified::None)?, "\"\"");

        let back: Modified = serde_json::from_str("\"last_month\"")?;
        assert_eq!(back, Modified::LastMonth);
        Ok(())
    }

    #[test]
    fn test_json_shape() -> Result<(), serde_json::Error> {
        let parsed = ParsedQuery {
            file_type: "photos".to_string(),
            max_size_kb: 500,
            modified: Modified::Yesterday,
            year: 0,
        };
        let value = serde_json::to_value(&parsed)?;
        assert_eq!(value["file_type"], "photos");
        assert_eq!(value["max_size_kb"], 500);
        assert_eq!(value["modified"], "yesterday");
        assert_eq!(value["year"], 0);
        Ok(())
    }
}
