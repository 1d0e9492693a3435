//! 文件系统遍历功能
//!
//! 本模块提供遍历搜索根目录并产出目录条目的迭代器。

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::{DirEntry, FilterEntry, WalkDir};

use super::options::SearchOptions;
use crate::errors::{SearchError, SearchResult};

type EntryPredicate = fn(&DirEntry) -> bool;

/// 基于迭代器的文件系统遍历器
///
/// 根目录本身不会被产出；隐藏条目按选项剪枝。
pub struct FileWalker<'a> {
    inner: FilterEntry<walkdir::IntoIter, EntryPredicate>,
    options: &'a SearchOptions,
    root_path: PathBuf,
}

impl<'a> FileWalker<'a> {
    /// 使用给定路径和选项创建新的 FileWalker
    pub fn new<P: AsRef<Path>>(path: P, options: &'a SearchOptions) -> Self {
        let root_path = path.as_ref().to_path_buf();
        let mut walker = WalkDir::new(&root_path).follow_links(options.follow_links);

        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        let predicate: EntryPredicate = if options.include_hidden {
            keep_all
        } else {
            not_hidden
        };

        Self {
            inner: walker.into_iter().filter_entry(predicate),
            options,
            root_path,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// 根据选项处理目录遍历错误，可忽略的错误返回 None
    fn handle_error(&self, err: walkdir::Error) -> Option<SearchError> {
        let ignored = match err.io_error().map(|e| e.kind()) {
            Some(std::io::ErrorKind::PermissionDenied) => self.options.ignore_permission_errors,
            _ => self.options.ignore_io_errors,
        };

        if ignored {
            warn!("Skipping entry: {}", err);
            return None;
        }

        Some(SearchError::from(err))
    }
}

impl Iterator for FileWalker<'_> {
    type Item = SearchResult<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.depth() > 0 {
                        return Some(Ok(entry));
                    }
                }
                Err(err) => {
                    if let Some(err) = self.handle_error(err) {
                        return Some(Err(err));
                    }
                }
            }
        }
    }
}

fn keep_all(_entry: &DirEntry) -> bool {
    true
}

fn not_hidden(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_structure() -> std::io::Result<TempDir> {
        let temp_dir = TempDir::new()?;

        File::create(temp_dir.path().join("file1.txt"))?.write_all(b"test")?;
        std::fs::create_dir(temp_dir.path().join("dir1"))?;
        File::create(temp_dir.path().join("dir1").join("file2.txt"))?.write_all(b"test")?;
        std::fs::create_dir(temp_dir.path().join(".cache"))?;
        File::create(temp_dir.path().join(".cache").join("blob.bin"))?.write_all(b"test")?;

        Ok(temp_dir)
    }

    #[test]
    fn test_walker_skips_root_and_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let options = SearchOptions::new();

        let entries: Vec<_> = FileWalker::new(temp_dir.path(), &options).collect::<Result<_, _>>()?;

        // 2 files + 1 subdir; root and .cache are skipped
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.path() != temp_dir.path()));

        Ok(())
    }

    #[test]
    fn test_walker_includes_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let options = SearchOptions::new().with_include_hidden(true);

        let entries: Vec<_> = FileWalker::new(temp_dir.path(), &options).collect::<Result<_, _>>()?;

        assert_eq!(entries.len(), 5);

        Ok(())
    }

    #[test]
    fn test_walker_max_depth() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let options = SearchOptions::new().with_max_depth(Some(1));

        let entries: Vec<_> = FileWalker::new(temp_dir.path(), &options).collect::<Result<_, _>>()?;

        // 1 file + 1 subdir
        assert_eq!(entries.len(), 2);

        Ok(())
    }

    #[test]
    fn test_walker_hidden_root_is_walked() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let hidden_root = temp_dir.path().join(".hidden");
        std::fs::create_dir(&hidden_root)?;
        File::create(hidden_root.join("notes.txt"))?.write_all(b"test")?;

        let options = SearchOptions::new();
        let entries: Vec<_> = FileWalker::new(&hidden_root, &options).collect::<Result<_, _>>()?;

        assert_eq!(entries.len(), 1);

        Ok(())
    }
}
