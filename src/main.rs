mod block;
mod cache;
mod cli;
mod config;
mod dashboard;
mod error;
mod logging;
mod pagination;
mod report;
mod repository;
mod score;
mod types;

use crate::cache::FileCache;
use crate::dashboard::DashboardService;
use crate::error::{Result, SeoError};
use crate::repository::FsRepository;
use crate::types::config::SeoConfig;
use crate::types::report::{DashboardReport, ItemScore};
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn require_site(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SeoError::PathNotFound(path.display().to_string()))
    }
}

/// Site config, or defaults plus a warning when the site has no config file.
fn site_config(root: &Path) -> Result<(SeoConfig, bool)> {
    match config::load_config(root)? {
        Some(cfg) => {
            tracing::info!(
                site = cfg.site.name.as_deref().unwrap_or("unnamed"),
                "site config loaded"
            );
            Ok((cfg, false))
        }
        None => {
            eprintln!(
                "warning: no {} found in {}; using defaults",
                config::DEFAULT_CONFIG_FILE,
                root.display()
            );
            Ok((SeoConfig::default(), true))
        }
    }
}

fn content_dir(root: &Path, cfg: &SeoConfig) -> PathBuf {
    root.join(&cfg.site.content_dir)
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Dashboard(cmd) => {
            require_site(&cmd.path)?;
            let (cfg, missing_config) = site_config(&cmd.path)?;
            let items_per_page = cmd.items_per_page.unwrap_or(cfg.dashboard.items_per_page);

            let cache = FileCache::for_site(&cmd.path, cfg.cache.max_age_secs);
            let use_cache = cfg.cache.enabled && !cmd.no_cache;
            let cache_key = format!(
                "dashboard:{}:{}:{}",
                cmd.page,
                pagination::clamp_items_per_page(items_per_page),
                cmd.format.as_str()
            );
            if use_cache {
                if let Some(cached) = cache.get(&cache_key) {
                    println!("{cached}");
                    return Ok(if missing_config {
                        exit_code::WARNINGS
                    } else {
                        exit_code::SUCCESS
                    });
                }
            }

            let dashboard_report = match FsRepository::open(&content_dir(&cmd.path, &cfg)) {
                Ok(repository) => DashboardService::new(&repository, cfg.dashboard.clone())
                    .dashboard(cmd.page, items_per_page),
                Err(e) => {
                    tracing::error!(error = %e, "content store unavailable");
                    DashboardReport::failed(format!("failed to load dashboard: {e}"))
                }
            };

            let rendered = report::render_dashboard(&dashboard_report, output_format(cmd.format))?;
            println!("{rendered}");

            if !dashboard_report.success {
                return Ok(exit_code::WARNINGS);
            }
            if use_cache {
                if let Err(e) = cache.put(&cache_key, &rendered) {
                    tracing::warn!(error = %e, "failed to store dashboard in cache");
                }
            }
            if missing_config {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Latest(cmd) => {
            require_site(&cmd.path)?;
            let (mut cfg, missing_config) = site_config(&cmd.path)?;
            if let Some(count) = cmd.count {
                cfg.block.articles_count = count;
            }
            if let Some(content_type) = cmd.content_type {
                cfg.block.content_type = content_type;
            }
            cfg.validate()?;

            let repository = FsRepository::open(&content_dir(&cmd.path, &cfg))?;
            let articles = block::latest_articles(&repository, &cfg.block)?;
            println!(
                "{}",
                report::render_latest(&articles, output_format(cmd.format))?
            );

            if missing_config {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Score(cmd) => {
            if !cmd.file.is_file() {
                return Err(SeoError::PathNotFound(cmd.file.display().to_string()));
            }
            let scores: Vec<ItemScore> = repository::filesystem::read_content_file(&cmd.file)?
                .iter()
                .map(|item| {
                    let breakdown = score::breakdown(item);
                    ItemScore {
                        id: item.id,
                        title: item.title.clone(),
                        seo_score: breakdown.total(),
                        breakdown,
                    }
                })
                .collect();
            println!(
                "{}",
                report::render_scores(&scores, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::PurgeCache(cmd) => {
            require_site(&cmd.path)?;
            let (cfg, _) = site_config(&cmd.path)?;
            let render_cache = FileCache::for_site(&cmd.path, cfg.cache.max_age_secs);
            let outcome = cache::purge_caches(&render_cache);
            println!(
                "{}",
                report::render_purge(&outcome, output_format(cmd.format))?
            );
            if outcome.success {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::RUNTIME_FAILURE)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
