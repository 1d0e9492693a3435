//! nlfind 的命令行接口
//!
//! 本模块提供了命令行参数解析和验证功能。

use clap::Parser;

use crate::errors::SearchError;
use crate::search::SearchOptions;

/// 未提供查询时使用的示例查询
pub const DEFAULT_QUERY: &str = "Find workflow file under 110gb modified in year 2024";

/// 将自然语言查询解析为文件搜索条件
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 查询文本（多个单词以空格连接）
    pub query: Vec<String>,

    /// 以 JSON 格式输出解析结果（不能与 --search 同时使用）
    #[arg(long, conflicts_with = "search")]
    pub json: bool,

    /// 按解析结果在这些路径中搜索文件 (可多次指定)
    #[arg(short = 's', long = "search", value_name = "PATH")]
    pub search: Vec<String>,

    /// 最大搜索深度
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 跟随符号链接
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// 包含隐藏文件和目录
    #[arg(long)]
    pub hidden: bool,

    /// 并行搜索
    #[arg(short = 'p', long)]
    pub parallel: bool,

    /// 忽略IO错误（如符号链接循环等）
    #[arg(long)]
    pub ignore_io_errors: bool,

    /// 启用调试日志
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// 获取查询文本
    pub fn query_text(&self) -> String {
        if self.query.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            self.query.join(" ")
        }
    }

    /// 构建搜索选项
    pub fn build_options(&self) -> SearchOptions {
        SearchOptions::new()
            .with_max_depth(self.max_depth)
            .with_follow_links(self.follow_links)
            .with_include_hidden(self.hidden)
            .with_parallel(self.parallel)
            .with_ignore_io_errors(self.ignore_io_errors)
    }

    /// 验证命令行参数
    pub fn validate(&self) -> Result<(), SearchError> {
        for path in &self.search {
            if !std::path::Path::new(path).exists() {
                return Err(SearchError::PathNotFound(std::path::PathBuf::from(path)));
            }
        }

        if self.max_depth == Some(0) {
            return Err(SearchError::InvalidOption(
                "Maximum depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
