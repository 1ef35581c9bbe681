pub mod filesystem;
pub mod memory;

use crate::error::Result;
use crate::types::content::{ContentItem, Status};

pub use filesystem::FsRepository;
pub use memory::InMemoryRepository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub content_type: Option<String>,
    pub status: Option<Status>,
}

impl ContentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: Status) -> Self {
        Self {
            content_type: None,
            status: Some(status),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        let type_ok = self
            .content_type
            .as_deref()
            .map_or(true, |wanted| item.content_type == wanted);
        let status_ok = self.status.map_or(true, |wanted| item.status() == wanted);
        type_ok && status_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    ChangedDesc,
    CreatedDesc,
}

#[derive(Debug, Clone, Default)]
pub struct ContentPage {
    pub items: Vec<ContentItem>,
    /// Matches for the filter, ignoring offset and limit.
    pub total_count: usize,
}

/// Read access to a content store.
pub trait ContentRepository: Send + Sync {
    fn fetch_page(
        &self,
        filter: &ContentFilter,
        sort: SortOrder,
        offset: usize,
        limit: usize,
    ) -> Result<ContentPage>;

    fn count(&self, filter: &ContentFilter) -> Result<usize> {
        Ok(self.fetch_page(filter, SortOrder::ChangedDesc, 0, 0)?.total_count)
    }
}
