//! 将自然语言文件查询转换为结构化搜索条件的库
//!
//! 本库从简短的查询文本中提取：
//! - 文件类型（查询中最后一个普通名词）
//! - 最大文件大小（统一换算为 KB）
//! - 年份，或相对时间（yesterday / last week / last month）
//!
//! 并可按解析结果在目录树中查找文件。
//!
//! ## 使用场景
//!
//! - 为文件搜索界面提供自然语言输入
//! - 在脚本中用一句话描述要清理或归档的文件
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use nlfind::query::{parse_query, Modified};
//! use nlfind::search::{Finder, SearchOptions};
//!
//! // 解析查询
//! let parsed = parse_query("photos from yesterday under 500kb").unwrap();
//! assert_eq!(parsed.max_size_kb, 500);
//! assert_eq!(parsed.modified, Modified::Yesterday);
//!
//! // 按解析结果查找文件
//! let finder = Finder::new(SearchOptions::new().with_max_depth(Some(3)));
//! for path in finder.find_query(".", &parsed).unwrap() {
//!     println!("找到文件: {}", path.display());
//! }
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod query;
pub mod search;

// Re-export main types for convenience
pub use errors::{QueryError, QueryResult, SearchError, SearchResult, SizeError};
pub use query::{parse_query, Modified, ParsedQuery, QueryParser};
pub use search::Finder;
