use super::{ContentFilter, ContentPage, ContentRepository, SortOrder};
use crate::error::Result;
use crate::types::content::ContentItem;
use std::cmp::Reverse;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Vec<ContentItem>,
}

impl InMemoryRepository {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

impl ContentRepository for InMemoryRepository {
    fn fetch_page(
        &self,
        filter: &ContentFilter,
        sort: SortOrder,
        offset: usize,
        limit: usize,
    ) -> Result<ContentPage> {
        let mut matching: Vec<&ContentItem> =
            self.items.iter().filter(|item| filter.matches(item)).collect();
        let total_count = matching.len();

        // newest first, ties broken by id descending so pages stay stable
        match sort {
            SortOrder::ChangedDesc => matching.sort_by_key(|item| Reverse((item.changed, item.id))),
            SortOrder::CreatedDesc => matching.sort_by_key(|item| Reverse((item.created, item.id))),
        }

        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(ContentPage { items, total_count })
    }

    fn count(&self, filter: &ContentFilter) -> Result<usize> {
        Ok(self.items.iter().filter(|item| filter.matches(item)).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::content::Status;
    use chrono::{Duration, TimeZone, Utc};

    fn sample() -> InMemoryRepository {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let items = (1..=7)
            .map(|id| {
                let mut item = ContentItem::new(id, format!("Item {id}"), base + Duration::days(id as i64));
                // changed order is the reverse of created order
                item.changed = base + Duration::days(30 - id as i64);
                item.published = id % 2 == 1;
                item.content_type = if id <= 4 { "article" } else { "page" }.to_string();
                item
            })
            .collect();
        InMemoryRepository::new(items)
    }

    fn ids(page: &ContentPage) -> Vec<u64> {
        page.items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn fetch_page_sorts_by_changed_desc_and_slices() {
        let repo = sample();
        let page = repo
            .fetch_page(&ContentFilter::all(), SortOrder::ChangedDesc, 2, 3)
            .expect("fetch should succeed");
        assert_eq!(page.total_count, 7);
        assert_eq!(ids(&page), vec![3, 4, 5]);
    }

    #[test]
    fn fetch_page_sorts_by_created_desc() {
        let repo = sample();
        let page = repo
            .fetch_page(&ContentFilter::all(), SortOrder::CreatedDesc, 0, 2)
            .expect("fetch should succeed");
        assert_eq!(ids(&page), vec![7, 6]);
    }

    #[test]
    fn filters_by_type_and_status() {
        let repo = sample();
        let filter = ContentFilter::with_status(Status::Published).content_type("article");
        let page = repo
            .fetch_page(&filter, SortOrder::CreatedDesc, 0, 10)
            .expect("fetch should succeed");
        assert_eq!(ids(&page), vec![3, 1]);
        assert_eq!(repo.count(&filter).expect("count should succeed"), 2);
        assert_eq!(
            repo.count(&ContentFilter::with_status(Status::Draft))
                .expect("count should succeed"),
            3
        );
    }

    #[test]
    fn offset_past_the_end_yields_empty_page_with_total() {
        let repo = sample();
        let page = repo
            .fetch_page(&ContentFilter::all(), SortOrder::ChangedDesc, 50, 5)
            .expect("fetch should succeed");
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 7);
    }
}
