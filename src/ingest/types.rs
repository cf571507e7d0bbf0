// src/ingest/types.rs
use anyhow::Result;

/// One post pulled out of a feed. Identity is `id`; the rest is display/match material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub category: Option<String>, // e.g. subreddit name
    pub summary: Option<String>,  // plain text, HTML already stripped
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            category: None,
            summary: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Anything that can turn a feed endpoint into entries.
///
/// Implementations report failures as `Err`; callers that must not fail go through
/// [`crate::ingest::fetch`], which logs and swallows them.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(&self, endpoint: &str) -> Result<Vec<Entry>>;
    fn name(&self) -> &'static str;
}
