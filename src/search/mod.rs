//! 文件查找模块
//!
//! 将解析后的查询应用到文件系统：遍历搜索根目录，
//! 用 [`FilterFactory`] 生成的过滤器筛选文件，可选并行处理。

pub mod filter;
pub mod options;
mod thread_pool;
mod walker;

use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, info};
use rayon::prelude::*;

pub use self::filter::{FileFilter, FilterFactory, QueryFilter};
pub use self::options::SearchOptions;
pub use self::thread_pool::ThreadPoolConfig;
pub use self::walker::FileWalker;

use crate::errors::{SearchError, SearchResult};
use crate::query::ParsedQuery;

/// 文件查找器
///
/// 遍历目录树并返回通过过滤器的文件路径，结果按路径排序。
#[derive(Debug, Clone, Default)]
pub struct Finder {
    options: SearchOptions,
}

impl Finder {
    /// 创建新的文件查找器实例
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// 按解析后的查询查找文件，相对时间以当前本地时间为准
    pub fn find_query<P: AsRef<Path>>(&self, root: P, query: &ParsedQuery) -> SearchResult<Vec<PathBuf>> {
        let filter = FilterFactory::from_query(query, Local::now())?;
        self.find(root, &filter)
    }

    /// 在指定目录中查找符合条件的文件
    pub fn find<P, F>(&self, root: P, filter: &F) -> SearchResult<Vec<PathBuf>>
    where
        P: AsRef<Path>,
        F: FileFilter + Sync + ?Sized,
    {
        let root = root.as_ref();
        if !root.exists() {
            return Err(SearchError::PathNotFound(root.to_path_buf()));
        }

        info!("Searching {} for {}", root.display(), filter.description());

        let mut results = if self.options.parallel {
            self.find_parallel(root, filter)?
        } else {
            self.find_sequential(root, filter)?
        };
        results.sort();

        debug!("Found {} matching files under {}", results.len(), root.display());
        Ok(results)
    }

    fn find_sequential<F>(&self, root: &Path, filter: &F) -> SearchResult<Vec<PathBuf>>
    where
        F: FileFilter + ?Sized,
    {
        let mut results = Vec::new();
        for entry in FileWalker::new(root, &self.options) {
            let entry = entry?;
            if filter.matches(&entry) {
                results.push(entry.into_path());
            }
        }
        Ok(results)
    }

    /// 并行查找文件
    fn find_parallel<F>(&self, root: &Path, filter: &F) -> SearchResult<Vec<PathBuf>>
    where
        F: FileFilter + Sync + ?Sized,
    {
        // 首先统计目录数量以决定线程数
        let dir_count = self.count_directories(root);
        let pool = self.options.threads.build(dir_count)?;

        pool.install(|| {
            FileWalker::new(root, &self.options)
                .par_bridge()
                .filter_map(|entry| match entry {
                    Ok(entry) if filter.matches(&entry) => Some(Ok(entry.into_path())),
                    Ok(_) => None,
                    Err(err) => Some(Err(err)),
                })
                .collect()
        })
    }

    /// 统计目录中的子目录数量
    fn count_directories(&self, root: &Path) -> usize {
        FileWalker::new(root, &self.options)
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .count()
    }
}
