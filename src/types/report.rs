use crate::pagination::PaginationWindow;
use crate::types::content::{ContentItem, Status};
use crate::types::scoring::{Score, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub id: u64,
    pub title: String,
    pub content_type: String,
    pub author: String,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    pub status: Status,
    pub url: String,
    pub seo_score: Score,
}

impl ScoredItem {
    pub fn new(item: &ContentItem, seo_score: Score) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            content_type: item.content_type.clone(),
            author: item.author.clone(),
            created: item.created,
            changed: item.changed,
            status: item.status(),
            url: item.url(),
            seo_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_published: usize,
    pub total_drafts: usize,
    pub average_seo_score: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub content: Vec<ScoredItem>,
    pub pagination: Option<PaginationWindow>,
    pub stats: DashboardStats,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DashboardReport {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            content: Vec::new(),
            pagination: None,
            stats: DashboardStats::default(),
            success: false,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LatestArticle {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub created: DateTime<Utc>,
    pub author: String,
    pub summary: String,
    pub seo_score: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurgeOutcome {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemScore {
    pub id: u64,
    pub title: String,
    pub seo_score: Score,
    pub breakdown: ScoreBreakdown,
}
