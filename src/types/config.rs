use crate::error::SeoError;
use serde::Deserialize;

pub const MIN_ARTICLES_COUNT: usize = 1;
pub const MAX_ARTICLES_COUNT: usize = 15;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub block: BlockConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub name: Option<String>,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: None,
            content_dir: default_content_dir(),
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,
    #[serde(default = "default_stats_sample_limit")]
    pub stats_sample_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            stats_sample_limit: default_stats_sample_limit(),
        }
    }
}

fn default_items_per_page() -> i64 {
    5
}

fn default_stats_sample_limit() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockConfig {
    #[serde(default = "default_articles_count")]
    pub articles_count: usize,
    #[serde(default = "default_block_content_type")]
    pub content_type: String,
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            articles_count: default_articles_count(),
            content_type: default_block_content_type(),
            summary_length: default_summary_length(),
        }
    }
}

fn default_articles_count() -> usize {
    5
}

fn default_block_content_type() -> String {
    "article".to_string()
}

fn default_summary_length() -> usize {
    150
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_max_age_secs() -> u64 {
    300
}

impl SeoConfig {
    pub fn validate(&self) -> Result<(), SeoError> {
        if self.site.content_dir.trim().is_empty() {
            return Err(SeoError::ConfigParse(
                "site.content_dir must not be empty".to_string(),
            ));
        }

        let count = self.block.articles_count;
        if !(MIN_ARTICLES_COUNT..=MAX_ARTICLES_COUNT).contains(&count) {
            return Err(SeoError::ConfigParse(format!(
                "block.articles_count must be between {MIN_ARTICLES_COUNT} and {MAX_ARTICLES_COUNT} (found {count})"
            )));
        }
        if self.block.content_type.trim().is_empty() {
            return Err(SeoError::ConfigParse(
                "block.content_type must not be empty".to_string(),
            ));
        }
        if self.block.summary_length == 0 {
            return Err(SeoError::ConfigParse(
                "block.summary_length must be greater than 0".to_string(),
            ));
        }

        if self.dashboard.stats_sample_limit == 0 {
            return Err(SeoError::ConfigParse(
                "dashboard.stats_sample_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
