use serde::Serialize;

pub const MIN_ITEMS_PER_PAGE: i64 = 5;
pub const MAX_ITEMS_PER_PAGE: i64 = 100;
pub const PAGES_TO_SHOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// 1-indexed label.
    pub number: usize,
    /// 0-indexed page.
    pub page: usize,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    pub total_items: usize,
    pub items_per_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub pages: Vec<PageLink>,
    pub first: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
    pub start_item: usize,
    pub end_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationWindow {
    pub fn offset(&self) -> usize {
        self.current_page.saturating_mul(self.items_per_page)
    }
}

pub fn clamp_items_per_page(items_per_page: i64) -> usize {
    items_per_page.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE) as usize
}

/// Plans the navigation window for one page of a listing.
///
/// Out-of-range inputs are clamped, never rejected.
pub fn plan(total_count: usize, page: i64, items_per_page: i64) -> PaginationWindow {
    let items_per_page = clamp_items_per_page(items_per_page);
    let total_pages = total_count.div_ceil(items_per_page);
    let last_page = total_pages.saturating_sub(1);

    let current_page = if page <= 0 {
        0
    } else {
        usize::try_from(page).map_or(last_page, |page| page.min(last_page))
    };

    let pages = if total_pages == 0 {
        Vec::new()
    } else {
        let mut start = current_page.saturating_sub(PAGES_TO_SHOW / 2);
        let end = last_page.min(start.saturating_add(PAGES_TO_SHOW - 1));
        if end - start < PAGES_TO_SHOW - 1 {
            start = end.saturating_sub(PAGES_TO_SHOW - 1);
        }
        (start..=end)
            .map(|page| PageLink {
                number: page + 1,
                page,
                current: page == current_page,
            })
            .collect()
    };

    let has_previous = current_page > 0;
    let has_next = current_page + 1 < total_pages;

    PaginationWindow {
        total_items: total_count,
        items_per_page,
        current_page,
        total_pages,
        pages,
        first: (total_pages > 0).then_some(0),
        previous: has_previous.then(|| current_page - 1),
        next: has_next.then(|| current_page + 1),
        last: (total_pages > 0).then_some(last_page),
        start_item: current_page.saturating_mul(items_per_page).saturating_add(1),
        end_item: (current_page + 1)
            .saturating_mul(items_per_page)
            .min(total_count),
        has_previous,
        has_next,
    }
}

pub fn page_query(page: usize, items_per_page: usize) -> String {
    format!("?page={page}&items_per_page={items_per_page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_indices(window: &PaginationWindow) -> Vec<usize> {
        window.pages.iter().map(|link| link.page).collect()
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let window = plan(0, 0, 5);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.current_page, 0);
        assert!(window.pages.is_empty());
        assert!(!window.has_previous);
        assert!(!window.has_next);
        assert_eq!(window.first, None);
        assert_eq!(window.last, None);
        assert_eq!(window.start_item, 1);
        assert_eq!(window.end_item, 0);
    }

    #[test]
    fn middle_page_of_forty_seven_items() {
        let window = plan(47, 3, 5);
        assert_eq!(window.total_pages, 10);
        assert_eq!(window.current_page, 3);
        assert_eq!(page_indices(&window), vec![1, 2, 3, 4, 5]);
        let current: Vec<_> = window.pages.iter().filter(|link| link.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].page, 3);
        assert_eq!(current[0].number, 4);
        assert_eq!(window.start_item, 16);
        assert_eq!(window.end_item, 20);
        assert_eq!(window.previous, Some(2));
        assert_eq!(window.next, Some(4));
        assert_eq!(window.first, Some(0));
        assert_eq!(window.last, Some(9));
    }

    #[test]
    fn window_shifts_near_the_end() {
        let window = plan(47, 9, 5);
        assert_eq!(page_indices(&window), vec![5, 6, 7, 8, 9]);
        assert_eq!(window.start_item, 46);
        assert_eq!(window.end_item, 47);
        assert!(window.has_previous);
        assert!(!window.has_next);
        assert_eq!(window.next, None);
    }

    #[test]
    fn window_starts_at_zero_near_the_beginning() {
        let window = plan(100, 1, 10);
        assert_eq!(page_indices(&window), vec![0, 1, 2, 3, 4]);
        assert_eq!(window.previous, Some(0));
    }

    #[test]
    fn window_is_narrow_when_few_pages() {
        let window = plan(12, 0, 5);
        assert_eq!(window.total_pages, 3);
        assert_eq!(page_indices(&window), vec![0, 1, 2]);
    }

    #[test]
    fn items_per_page_is_clamped() {
        assert_eq!(plan(50, 0, 1).items_per_page, 5);
        assert_eq!(plan(50, 0, -3).items_per_page, 5);
        assert_eq!(plan(500, 0, 1000).items_per_page, 100);
        assert_eq!(plan(500, 0, 1000).total_pages, 5);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(plan(47, -4, 5).current_page, 0);
        assert_eq!(plan(47, 99, 5).current_page, 9);
        assert_eq!(plan(47, i64::MAX, 5).current_page, 9);
        assert_eq!(plan(0, 7, 5).current_page, 0);
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let window = plan(usize::MAX, i64::MAX, 7);
        let total_pages = usize::MAX.div_ceil(7);
        assert_eq!(window.total_pages, total_pages);
        assert_eq!(window.current_page, total_pages - 1);
        assert_eq!(window.pages.len(), PAGES_TO_SHOW);
        assert!(window.pages.last().is_some_and(|link| link.current));
        assert_eq!(window.start_item, (total_pages - 1) * 7 + 1);
        assert_eq!(window.end_item, usize::MAX);
        assert_eq!(window.offset(), (total_pages - 1) * 7);
        assert!(!window.has_next);
    }

    #[test]
    fn plan_is_deterministic() {
        assert_eq!(plan(47, 3, 5), plan(47, 3, 5));
    }

    #[test]
    fn query_string_carries_page_and_size() {
        assert_eq!(page_query(2, 20), "?page=2&items_per_page=20");
        assert_eq!(plan(47, 3, 5).offset(), 15);
    }
}
