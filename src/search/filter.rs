//! File filtering functionality
//!
//! This module turns the fields of a [`ParsedQuery`] into filters over
//! directory entries. A field at its zero value adds no filter.

use std::collections::HashMap;
use std::time::SystemTime;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use glob::{MatchOptions, Pattern};
use lazy_static::lazy_static;
use walkdir::DirEntry;

use crate::errors::{SearchError, SearchResult};
use crate::query::{Modified, ParsedQuery};

/// Trait for file filters
pub trait FileFilter {
    /// Check if the entry matches the filter
    fn matches(&self, entry: &DirEntry) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

lazy_static! {
    /// Extensions for file-type nouns that name a category rather than a
    /// file name fragment.
    static ref CATEGORY_EXTENSIONS: HashMap<&'static str, &'static [&'static str]> = {
        const IMAGES: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "heic", "webp", "tiff"];
        const VIDEOS: &[&str] = &["mp4", "mkv", "mov", "avi", "webm"];
        const AUDIO: &[&str] = &["mp3", "flac", "wav", "ogg", "m4a"];
        const DOCUMENTS: &[&str] = &["pdf", "doc", "docx", "txt", "md", "odt", "rtf"];
        const SPREADSHEETS: &[&str] = &["xls", "xlsx", "csv", "ods"];
        const SLIDES: &[&str] = &["ppt", "pptx", "key", "odp"];
        const ARCHIVES: &[&str] = &["zip", "tar", "gz", "tgz", "7z", "rar"];
        const WORKFLOWS: &[&str] = &["yml", "yaml"];
        const SCRIPTS: &[&str] = &["sh", "py", "rb", "js", "ps1"];
        const LOGS: &[&str] = &["log"];

        let groups: [(&[&str], &'static [&'static str]); 10] = [
            (&["photo", "photos", "image", "images", "picture", "pictures", "pic", "pics"], IMAGES),
            (&["video", "videos", "movie", "movies", "clip", "clips"], VIDEOS),
            (&["song", "songs", "music", "audio", "track", "tracks"], AUDIO),
            (&["document", "documents", "doc", "docs"], DOCUMENTS),
            (&["spreadsheet", "spreadsheets", "sheet", "sheets"], SPREADSHEETS),
            (&["presentation", "presentations", "slide", "slides", "deck", "decks"], SLIDES),
            (&["archive", "archives", "backup", "backups"], ARCHIVES),
            (&["workflow", "workflows"], WORKFLOWS),
            (&["script", "scripts"], SCRIPTS),
            (&["log", "logs"], LOGS),
        ];

        let mut table = HashMap::new();
        for (nouns, extensions) in groups {
            for noun in nouns {
                table.insert(*noun, extensions);
            }
        }
        table
    };
}

/// Nouns that say nothing about which files are wanted. Time nouns belong
/// to the date constraint ("in year 2024"), not to the file name.
const GENERIC_NOUNS: &[&str] = &[
    "file", "files", "thing", "things", "item", "items", "stuff", "year", "years", "month",
    "months", "week", "weeks", "day", "days",
];

/// Filter for files no larger than a size bound
pub struct SizeFilter {
    max_bytes: u64,
}

impl SizeFilter {
    /// Create a filter from a bound in kilobytes
    pub fn from_kilobytes(max_size_kb: u64) -> Self {
        Self {
            max_bytes: max_size_kb.saturating_mul(1024),
        }
    }
}

impl FileFilter for SizeFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        entry
            .metadata()
            .map(|metadata| metadata.len() <= self.max_bytes)
            .unwrap_or(false)
    }

    fn description(&self) -> String {
        format!("size <= {} bytes", self.max_bytes)
    }
}

/// Filter for files of the category named by the file-type noun
pub enum FileTypeFilter {
    /// Known category, matched by extension
    Extensions {
        noun: String,
        extensions: &'static [&'static str],
    },
    /// Anything else, matched as a case-insensitive name fragment
    NameContains { noun: String, pattern: Pattern },
}

impl FileTypeFilter {
    /// Create a filter for a file-type noun.
    ///
    /// Returns `Ok(None)` for generic nouns like "file" that should not
    /// narrow the search.
    pub fn new(noun: &str) -> SearchResult<Option<Self>> {
        let lower = noun.to_lowercase();
        if lower.is_empty() || GENERIC_NOUNS.contains(&lower.as_str()) {
            return Ok(None);
        }

        if let Some(&extensions) = CATEGORY_EXTENSIONS.get(lower.as_str()) {
            return Ok(Some(FileTypeFilter::Extensions {
                noun: lower,
                extensions,
            }));
        }

        let glob = format!("*{}*", Pattern::escape(&lower));
        let pattern = Pattern::new(&glob).map_err(|e| SearchError::Pattern {
            message: format!("Invalid pattern '{}': {}", glob, e),
        })?;

        Ok(Some(FileTypeFilter::NameContains {
            noun: lower,
            pattern,
        }))
    }
}

impl FileFilter for FileTypeFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        match self {
            FileTypeFilter::Extensions { extensions, .. } => entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false),
            FileTypeFilter::NameContains { pattern, .. } => {
                let options = MatchOptions {
                    case_sensitive: false,
                    ..MatchOptions::new()
                };
                pattern.matches_with(&entry.file_name().to_string_lossy(), options)
            }
        }
    }

    fn description(&self) -> String {
        match self {
            FileTypeFilter::Extensions { noun, extensions } => {
                format!("{} (extension in [{}])", noun, extensions.join(", "))
            }
            FileTypeFilter::NameContains { pattern, .. } => {
                format!("name matches '{}'", pattern.as_str())
            }
        }
    }
}

/// Filter for files last modified inside a time window
pub struct ModifiedFilter {
    label: String,
    start: DateTime<Local>,
    /// Exclusive upper bound; open-ended when `None`
    end: Option<DateTime<Local>>,
}

impl ModifiedFilter {
    /// Files modified during the given calendar year, in local time.
    ///
    /// Returns `None` when the year cannot be represented as a date.
    pub fn year(year: u32) -> Option<Self> {
        let year = i32::try_from(year).ok()?;
        let start = NaiveDate::from_ymd_opt(year, 1, 1).and_then(start_of_day)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1).and_then(start_of_day)?;
        Some(Self {
            label: format!("modified in {}", year),
            start,
            end: Some(end),
        })
    }

    /// Files modified within the recency window relative to `now`.
    ///
    /// `Yesterday` is the previous local calendar day. `LastWeek` and
    /// `LastMonth` mean modified since 7 and 30 days before `now`.
    /// Returns `None` for `Modified::None`.
    pub fn recent(modified: Modified, now: DateTime<Local>) -> Option<Self> {
        let (start, end) = match modified {
            Modified::None => return None,
            Modified::Yesterday => {
                let today = start_of_day(now.date_naive())?;
                let yesterday = now.date_naive().pred_opt().and_then(start_of_day)?;
                (yesterday, Some(today))
            }
            Modified::LastWeek => (now - Duration::days(7), None),
            Modified::LastMonth => (now - Duration::days(30), None),
        };

        Some(Self {
            label: format!("modified {}", modified),
            start,
            end,
        })
    }

    fn contains(&self, time: DateTime<Local>) -> bool {
        time >= self.start && self.end.map_or(true, |end| time < end)
    }
}

impl FileFilter for ModifiedFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        entry
            .metadata()
            .ok()
            .and_then(|metadata| metadata.modified().ok())
            .map(|time: SystemTime| self.contains(DateTime::<Local>::from(time)))
            .unwrap_or(false)
    }

    fn description(&self) -> String {
        let start = self.start.format("%Y-%m-%d %H:%M");
        match self.end {
            Some(end) => format!("{} [{} .. {})", self.label, start, end.format("%Y-%m-%d %H:%M")),
            None => format!("{} [{} ..)", self.label, start),
        }
    }
}

/// Local midnight at the start of `date`. Falls back to UTC midnight when
/// a DST gap swallows local midnight.
fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        Local
            .from_local_datetime(&midnight)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&midnight)),
    )
}

/// All filters derived from one parsed query.
///
/// Only regular files match; every contained filter must agree.
pub struct QueryFilter {
    filters: Vec<Box<dyn FileFilter + Send + Sync>>,
}

impl QueryFilter {
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FileFilter for QueryFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file() && self.filters.iter().all(|filter| filter.matches(entry))
    }

    fn description(&self) -> String {
        if self.filters.is_empty() {
            return "any regular file".to_string();
        }
        let parts: Vec<String> = self.filters.iter().map(|f| f.description()).collect();
        parts.join(" and ")
    }
}

/// Factory for creating filters from a parsed query
pub struct FilterFactory;

impl FilterFactory {
    /// Create the filters for `query`, resolving recency against `now`
    pub fn from_query(query: &ParsedQuery, now: DateTime<Local>) -> SearchResult<QueryFilter> {
        let mut filters: Vec<Box<dyn FileFilter + Send + Sync>> = Vec::new();

        if let Some(filter) = FileTypeFilter::new(&query.file_type)? {
            filters.push(Box::new(filter));
        }

        if query.has_size() {
            filters.push(Box::new(SizeFilter::from_kilobytes(query.max_size_kb)));
        }

        if query.has_year() {
            let filter = ModifiedFilter::year(query.year).ok_or_else(|| {
                SearchError::InvalidOption(format!("year {} is out of range", query.year))
            })?;
            filters.push(Box::new(filter));
        } else if let Some(filter) = ModifiedFilter::recent(query.modified, now) {
            filters.push(Box::new(filter));
        }

        Ok(QueryFilter { filters })
    }
}
