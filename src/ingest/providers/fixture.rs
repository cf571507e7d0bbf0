use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;

use crate::ingest::parse::parse_entries;
use crate::ingest::types::{Entry, FeedSource};

/// Serves pre-recorded feed documents keyed by endpoint. Used for demos and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticFeedSource {
    docs: HashMap<String, String>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, endpoint: impl Into<String>, document: impl Into<String>) -> Self {
        self.docs.insert(endpoint.into(), document.into());
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch_entries(&self, endpoint: &str) -> Result<Vec<Entry>> {
        let doc = self
            .docs
            .get(endpoint)
            .ok_or_else(|| anyhow!("no fixture registered for {endpoint}"))?;
        parse_entries(doc.as_bytes())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
