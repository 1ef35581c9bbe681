use crate::error::Result;
use crate::pagination::{self, PaginationWindow};
use crate::repository::{ContentFilter, ContentRepository, SortOrder};
use crate::score;
use crate::types::config::DashboardConfig;
use crate::types::content::Status;
use crate::types::report::{DashboardReport, DashboardStats, ScoredItem};

pub struct DashboardService<'a> {
    repository: &'a dyn ContentRepository,
    settings: DashboardConfig,
}

impl<'a> DashboardService<'a> {
    pub fn new(repository: &'a dyn ContentRepository, settings: DashboardConfig) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Builds one page of the dashboard. Repository failures produce a
    /// report with `success == false` rather than an error.
    pub fn dashboard(&self, page: i64, items_per_page: i64) -> DashboardReport {
        match self.listing(page, items_per_page) {
            Ok((content, window)) => DashboardReport {
                content,
                pagination: Some(window),
                stats: self.stats_or_default(),
                success: true,
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, page, items_per_page, "dashboard listing failed");
                DashboardReport::failed(format!("failed to load dashboard: {e}"))
            }
        }
    }

    fn listing(&self, page: i64, items_per_page: i64) -> Result<(Vec<ScoredItem>, PaginationWindow)> {
        let filter = ContentFilter::all();
        let total = self.repository.count(&filter)?;
        let window = pagination::plan(total, page, items_per_page);
        let fetched = self.repository.fetch_page(
            &filter,
            SortOrder::ChangedDesc,
            window.offset(),
            window.items_per_page,
        )?;
        tracing::debug!(
            total,
            page = window.current_page,
            fetched = fetched.items.len(),
            "dashboard page fetched"
        );

        let content = fetched
            .items
            .iter()
            .map(|item| ScoredItem::new(item, score::score(item)))
            .collect();
        Ok((content, window))
    }

    fn stats_or_default(&self) -> DashboardStats {
        self.stats().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "dashboard statistics unavailable");
            DashboardStats::default()
        })
    }

    pub fn stats(&self) -> Result<DashboardStats> {
        let published = ContentFilter::with_status(Status::Published);
        let total_published = self.repository.count(&published)?;
        let total_drafts = self
            .repository
            .count(&ContentFilter::with_status(Status::Draft))?;
        let sample = self.repository.fetch_page(
            &published,
            SortOrder::ChangedDesc,
            0,
            self.settings.stats_sample_limit,
        )?;

        Ok(DashboardStats {
            total_published,
            total_drafts,
            average_seo_score: score::average_score(&sample.items),
        })
    }
}
