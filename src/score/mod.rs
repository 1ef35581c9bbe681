pub mod body;
pub mod markup;
pub mod media;
pub mod metadata;
pub mod title;

use crate::types::content::ContentItem;
use crate::types::scoring::{Score, ScoreBreakdown};

pub fn breakdown(item: &ContentItem) -> ScoreBreakdown {
    ScoreBreakdown {
        title: title::title_score(&item.title),
        body: body::body_score(item.body_text()),
        alias: metadata::alias_score(item.alias.as_deref()),
        meta_description: metadata::meta_description_score(item.meta_description.as_deref()),
        images: media::images_score(&item.images),
        tags: media::tags_score(&item.tags),
    }
}

/// SEO score in `0..=100`. Missing fields contribute nothing.
pub fn score(item: &ContentItem) -> Score {
    breakdown(item).total()
}

/// Mean score rounded half-up; `0` for an empty slice.
pub fn average_score(items: &[ContentItem]) -> Score {
    if items.is_empty() {
        return 0;
    }
    let total: u64 = items.iter().map(|item| u64::from(score(item))).sum();
    let count = items.len() as u64;
    // every score is <= 100, so the mean is too
    ((2 * total + count) / (2 * count)) as Score
}
