//! Query parser
//!
//! Runs the tagger, the size extractor and the temporal extractor over one
//! query and merges their results into a [`ParsedQuery`].

use log::debug;

use crate::errors::{QueryError, QueryResult};
use super::model::ParsedQuery;
use super::size::extract_file_size;
use super::tagger::{tag_file_type, Document, LexiconTagger, Tagger};
use super::temporal::extract_year_or_modified;

/// Parser that turns free text into a [`ParsedQuery`]
#[derive(Debug, Clone)]
pub struct QueryParser<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> QueryParser<T> {
    /// Create a parser using the given tagger
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Parse one query.
    ///
    /// Only a tagging failure is reported. A missing or unusable size
    /// leaves `max_size_kb` at 0.
    pub fn parse(&self, query: &str) -> QueryResult<ParsedQuery> {
        let document = Document::new(query, &self.tagger)?;
        debug!(
            "{} produced {} spans for {:?}",
            self.tagger.description(),
            document.spans().len(),
            query
        );

        let file_type = tag_file_type(&document);

        let max_size_kb = match extract_file_size(query) {
            Ok(size) => size,
            Err(err) => {
                debug!("no size constraint: {}", err);
                0
            }
        };

        let (modified, year) = extract_year_or_modified(query);

        Ok(ParsedQuery {
            file_type,
            max_size_kb,
            modified,
            year,
        })
    }

    /// Parse a query given as raw bytes.
    ///
    /// Bytes that are not valid UTF-8 cannot be tagged and fail the same
    /// way as any other tagging failure.
    pub fn parse_bytes(&self, query: &[u8]) -> QueryResult<ParsedQuery> {
        let query = std::str::from_utf8(query).map_err(|e| QueryError::DocumentBuildFailure {
            reason: format!("query is not valid UTF-8: {}", e),
        })?;
        self.parse(query)
    }
}

impl Default for QueryParser<LexiconTagger> {
    fn default() -> Self {
        Self::new(LexiconTagger::new())
    }
}

/// Parse `query` with the bundled lexicon tagger.
pub fn parse_query(query: &str) -> QueryResult<ParsedQuery> {
    QueryParser::new(LexiconTagger::new()).parse(query)
}

/// Parse a byte-string query with the bundled lexicon tagger.
pub fn parse_query_bytes(query: &[u8]) -> QueryResult<ParsedQuery> {
    QueryParser::new(LexiconTagger::new()).parse_bytes(query)
}
