use crate::error::Result;
use crate::repository::{ContentFilter, ContentRepository, SortOrder};
use crate::score::{self, markup::strip_markup};
use crate::types::config::BlockConfig;
use crate::types::content::{ContentItem, Status};
use crate::types::report::LatestArticle;

const ELLIPSIS: &str = "...";

/// Most recently created published items of the configured type.
pub fn latest_articles(
    repository: &dyn ContentRepository,
    settings: &BlockConfig,
) -> Result<Vec<LatestArticle>> {
    let filter =
        ContentFilter::with_status(Status::Published).content_type(settings.content_type.as_str());
    let page = repository.fetch_page(&filter, SortOrder::CreatedDesc, 0, settings.articles_count)?;
    tracing::debug!(
        content_type = %settings.content_type,
        found = page.items.len(),
        "latest articles fetched"
    );

    Ok(page
        .items
        .iter()
        .map(|item| LatestArticle {
            id: item.id,
            title: item.title.clone(),
            url: item.url(),
            created: item.created,
            author: item.author.clone(),
            summary: summary(item, settings.summary_length),
            seo_score: score::score(item),
        })
        .collect())
}

/// Author-written summary when present, else the leading text of the body.
pub fn summary(item: &ContentItem, max_chars: usize) -> String {
    let Some(body) = item.body.as_ref() else {
        return String::new();
    };
    if let Some(summary) = body.summary.as_deref().filter(|text| !text.trim().is_empty()) {
        return summary.to_string();
    }

    let text = strip_markup(&body.value);
    let mut excerpt: String = text.chars().take(max_chars).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}
