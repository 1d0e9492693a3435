use std::path::PathBuf;
use thiserror::Error;

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Result type for operations that can produce SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors surfaced to callers of the query parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The tagger could not build a document from the query text
    #[error("failed to build document: {reason}")]
    DocumentBuildFailure { reason: String },
}

/// Errors local to size extraction.
///
/// The parser recovers from every one of these by leaving the size
/// constraint unset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    #[error("no size found")]
    NoSizeFound,

    #[error("malformed number '{digits}'")]
    MalformedNumber { digits: String },

    #[error("unknown size unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("{value} {unit} does not fit in kilobytes")]
    SizeOverflow { value: u64, unit: String },
}

/// Errors produced while searching the file system with a parsed query
#[derive(Debug, Error)]
pub enum SearchError {
    /// 路径不存在
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// 权限不足
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// 文件系统错误（其他IO错误）
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// 遍历目录时的错误
    #[error("directory walk failed: {0}")]
    WalkDir(String),

    /// 模式匹配错误
    #[error("invalid pattern: {message}")]
    Pattern { message: String },

    /// 线程池创建失败
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// 无效的搜索选项
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl From<walkdir::Error> for SearchError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => match io_err.kind() {
                std::io::ErrorKind::NotFound => SearchError::PathNotFound(path),
                std::io::ErrorKind::PermissionDenied => SearchError::PermissionDenied(path),
                _ => SearchError::Filesystem {
                    source: std::io::Error::new(io_err.kind(), io_err.to_string()),
                    path,
                },
            },
            None => SearchError::WalkDir(err.to_string()),
        }
    }
}
