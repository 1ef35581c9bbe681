use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seoboard",
    version,
    about = "SEO scoring dashboard for site content"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Paged content listing with SEO scores and site statistics
    Dashboard(DashboardCommand),
    /// Most recently created published articles
    Latest(LatestCommand),
    /// Score breakdown for every item in a content file
    Score(ScoreCommand),
    /// Purge the rendered-output cache of a site
    PurgeCache(PurgeCacheCommand),
}

#[derive(Args)]
pub struct DashboardCommand {
    pub path: PathBuf,
    /// 0-indexed page; clamped to the available range
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub page: i64,
    /// Page size; clamped to 5..=100
    #[arg(long, allow_negative_numbers = true)]
    pub items_per_page: Option<i64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args)]
pub struct LatestCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub count: Option<usize>,
    #[arg(long)]
    pub content_type: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PurgeCacheCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
        }
    }
}
