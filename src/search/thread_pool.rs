//! 搜索线程池模块
//!
//! 根据目录数量和 CPU 核心数决定并行搜索使用的线程数。

use log::{debug, info};

use crate::errors::{SearchError, SearchResult};

/// 线程池配置选项
#[derive(Debug, Clone)]
pub struct ThreadPoolConfig {
    /// 最小线程数
    pub min_threads: usize,
    /// 最大线程数
    pub max_threads: usize,
    /// 每个线程处理的目录数量
    pub dirs_per_thread: usize,
    /// 是否根据目录数量调整线程数
    pub auto_adjust: bool,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            min_threads: 2,
            max_threads: num_cpus::get(),
            dirs_per_thread: 100,
            auto_adjust: true,
        }
    }
}

impl ThreadPoolConfig {
    /// 计算给定目录数量下的线程数
    pub fn thread_count(&self, dir_count: usize) -> usize {
        let min_threads = self.min_threads.max(1);
        if !self.auto_adjust || dir_count == 0 {
            return min_threads;
        }

        let cpu_count = num_cpus::get();
        let per_thread = self.dirs_per_thread.max(1);
        let ideal = (dir_count + per_thread - 1) / per_thread;

        debug!(
            "Thread count inputs - dirs: {}, min: {}, max: {}, per_thread: {}, cpus: {}",
            dir_count, min_threads, self.max_threads, per_thread, cpu_count
        );

        // 不超过 max_threads 和 CPU 核心数，但至少使用 min_threads
        ideal
            .min(self.max_threads)
            .min(cpu_count)
            .max(min_threads)
    }

    /// 构建 rayon 线程池
    pub fn build(&self, dir_count: usize) -> SearchResult<rayon::ThreadPool> {
        let threads = self.thread_count(dir_count);
        info!("Using {} threads for {} directories", threads, dir_count);

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| SearchError::ThreadPool(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_pool_config_default() {
        let config = ThreadPoolConfig::default();
        assert_eq!(config.min_threads, 2);
        assert_eq!(config.max_threads, num_cpus::get());
        assert_eq!(config.dirs_per_thread, 100);
        assert!(config.auto_adjust);
    }

    #[test]
    fn test_thread_count_within_bounds() {
        let config = ThreadPoolConfig {
            min_threads: 2,
            max_threads: 8,
            dirs_per_thread: 100,
            auto_adjust: true,
        };

        for dirs in [0, 50, 350, 1000, 100_000] {
            let threads = config.thread_count(dirs);
            assert!(
                threads >= config.min_threads && threads <= config.max_threads.max(config.min_threads),
                "{} directories gave {} threads",
                dirs,
                threads
            );
        }
    }

    #[test]
    fn test_no_auto_adjust_uses_min_threads() {
        let config = ThreadPoolConfig {
            min_threads: 3,
            max_threads: 8,
            dirs_per_thread: 100,
            auto_adjust: false,
        };
        assert_eq!(config.thread_count(1000), 3);
    }

    #[test]
    fn test_build_pool() -> SearchResult<()> {
        let config = ThreadPoolConfig {
            min_threads: 2,
            max_threads: 2,
            dirs_per_thread: 1,
            auto_adjust: true,
        };
        let pool = config.build(10)?;
        assert_eq!(pool.current_num_threads(), 2);
        Ok(())
    }
}
