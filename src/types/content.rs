use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Snapshot of one publishable unit as handed over by a content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub created: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_content_type() -> String {
    "article".to_string()
}

impl ContentItem {
    /// Bare item with only identity and timestamps set; every optional field empty.
    #[cfg(test)]
    pub fn new(id: u64, title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            body: None,
            alias: None,
            meta_description: None,
            images: Vec::new(),
            tags: Vec::new(),
            published: false,
            created,
            changed: created,
            author: String::new(),
            content_type: default_content_type(),
        }
    }

    pub fn status(&self) -> Status {
        if self.published {
            Status::Published
        } else {
            Status::Draft
        }
    }

    pub fn body_text(&self) -> &str {
        self.body.as_ref().map(|body| body.value.as_str()).unwrap_or("")
    }

    pub fn url(&self) -> String {
        match self.alias.as_deref().map(str::trim) {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => format!("/node/{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn parse_item_with_defaults() {
        let item: ContentItem = serde_json::from_str(
            r#"{"id": 7, "title": "Hello", "created": "2024-05-01T08:00:00Z", "changed": "2024-05-02T08:00:00Z"}"#,
        )
        .expect("minimal item should parse");
        assert_eq!(item.content_type, "article");
        assert!(item.images.is_empty());
        assert_eq!(item.status(), Status::Draft);
        assert_eq!(item.body_text(), "");
    }

    #[test]
    fn url_prefers_alias_over_node_path() {
        let mut item = ContentItem::new(12, "t", created());
        assert_eq!(item.url(), "/node/12");
        item.alias = Some("   ".to_string());
        assert_eq!(item.url(), "/node/12");
        item.alias = Some("/guides/seo".to_string());
        assert_eq!(item.url(), "/guides/seo");
    }
}
