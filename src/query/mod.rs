//! 自然语言查询解析模块
//!
//! 将 "Find workflow file under 110gb modified in year 2024" 这样的查询
//! 转换为结构化的 [`ParsedQuery`]：文件类型、最大大小（KB）、年份或相对时间。

pub mod model;
pub mod parser;
pub mod size;
pub mod tagger;
pub mod temporal;

pub use self::model::{Modified, ParsedQuery};
pub use self::parser::{parse_query, parse_query_bytes, QueryParser};
pub use self::size::{extract_file_size, SizeUnit};
pub use self::tagger::{tag_file_type, Category, Document, LexiconTagger, PosTag, TaggedSpan, Tagger};
pub use self::temporal::extract_year_or_modified;
