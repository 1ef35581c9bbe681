pub mod json;
pub mod md;

use crate::error::SeoError;
use crate::types::report::{DashboardReport, ItemScore, LatestArticle, PurgeOutcome};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_dashboard(report: &DashboardReport, format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::dashboard_markdown(report)),
    }
}

pub fn render_latest(articles: &[LatestArticle], format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(articles).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::latest_markdown(articles)),
    }
}

pub fn render_scores(scores: &[ItemScore], format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(scores).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::scores_markdown(scores)),
    }
}

pub fn render_purge(outcome: &PurgeOutcome, format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(outcome).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::purge_markdown(outcome)),
    }
}
