use super::{ContentFilter, ContentPage, ContentRepository, InMemoryRepository, SortOrder};
use crate::error::{Result, SeoError};
use crate::types::content::ContentItem;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentFile {
    Many(Vec<ContentItem>),
    One(Box<ContentItem>),
}

/// Content store backed by a directory of JSON files, loaded once at open.
#[derive(Debug, Clone)]
pub struct FsRepository {
    inner: InMemoryRepository,
}

impl FsRepository {
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(SeoError::PathNotFound(root.display().to_string()));
        }

        let mut items = Vec::new();
        for path in list_json_files(root)? {
            let loaded = read_content_file(&path)?;
            tracing::trace!(path = %path.display(), count = loaded.len(), "loaded content file");
            items.extend(loaded);
        }
        tracing::debug!(root = %root.display(), count = items.len(), "content repository opened");

        Ok(Self {
            inner: InMemoryRepository::new(items),
        })
    }
}

impl ContentRepository for FsRepository {
    fn fetch_page(
        &self,
        filter: &ContentFilter,
        sort: SortOrder,
        offset: usize,
        limit: usize,
    ) -> Result<ContentPage> {
        self.inner.fetch_page(filter, sort, offset, limit)
    }

    fn count(&self, filter: &ContentFilter) -> Result<usize> {
        self.inner.count(filter)
    }
}

pub fn read_content_file(path: &Path) -> Result<Vec<ContentItem>> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: ContentFile = serde_json::from_str(&raw)
        .map_err(|e| SeoError::ContentParse(format!("{}: {}", path.display(), e)))?;
    Ok(match parsed {
        ContentFile::Many(items) => items,
        ContentFile::One(item) => vec![*item],
    })
}

fn list_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    // dot-directories hold tool state such as the render cache
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
    for entry in walker {
        let entry = entry.map_err(|e| {
            SeoError::Repository(format!("failed to walk {}: {}", root.display(), e))
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}
