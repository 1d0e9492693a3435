//! Options for searching with a parsed query
//!
//! This module provides options for configuring the directory walk.

use super::thread_pool::ThreadPoolConfig;

/// Options for configuring the directory walk
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum depth to search
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links
    pub follow_links: bool,

    /// Whether to descend into hidden files and directories
    pub include_hidden: bool,

    /// Whether to ignore permission errors
    pub ignore_permission_errors: bool,

    /// Whether to ignore I/O errors
    pub ignore_io_errors: bool,

    /// Whether to filter entries on a thread pool
    pub parallel: bool,

    /// Thread pool sizing for parallel searches
    pub threads: ThreadPoolConfig,
}

impl SearchOptions {
    /// Create a new SearchOptions with default values
    pub fn new() -> Self {
        Self {
            max_depth: None,
            follow_links: false,
            include_hidden: false,
            ignore_permission_errors: true,
            ignore_io_errors: false,
            parallel: false,
            threads: ThreadPoolConfig::default(),
        }
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Set whether hidden entries are searched
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Set whether to ignore permission errors
    pub fn with_ignore_permission_errors(mut self, ignore: bool) -> Self {
        self.ignore_permission_errors = ignore;
        self
    }

    /// Set whether to ignore I/O errors
    pub fn with_ignore_io_errors(mut self, ignore: bool) -> Self {
        self.ignore_io_errors = ignore;
        self
    }

    /// Set whether to search in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: ThreadPoolConfig) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}
