use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use nlfind::cli::Cli;
use nlfind::query::parse_query;
use nlfind::search::Finder;

fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    cli.validate().context("命令行参数无效")?;

    let query = cli.query_text();
    debug!("解析查询: {}", query);

    let parsed = parse_query(&query).with_context(|| format!("Error parsing query '{}'", query))?;

    if cli.search.is_empty() {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        } else {
            println!("{}", parsed);
        }
        return Ok(());
    }

    info!(
        "查询条件: file_type={:?} max_size_kb={} modified={:?} year={}",
        parsed.file_type, parsed.max_size_kb, parsed.modified.as_str(), parsed.year
    );
    let start_time = Instant::now();
    let finder = Finder::new(cli.build_options());

    // 为每个指定的路径执行搜索
    for path in &cli.search {
        debug!("在路径中搜索: {}", path);

        let results = finder
            .find_query(path, &parsed)
            .with_context(|| format!("搜索 {} 失败", path))?;

        // 打印结果
        for entry in results {
            println!("{}", entry.display());
        }
    }

    info!("搜索完成，耗时 {:.2?}", start_time.elapsed());

    Ok(())
}
