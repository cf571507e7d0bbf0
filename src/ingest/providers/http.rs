use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::ingest::parse::parse_entries;
use crate::ingest::types::{Entry, FeedSource};

/// Live feed source: one GET per endpoint, single attempt, no retry.
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    /// `timeout = None` leaves reqwest's default (no overall request timeout).
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().context("building feed http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_entries(&self, endpoint: &str) -> Result<Vec<Entry>> {
        let resp = self
            .client
            .get(endpoint)
            .send()
            .await
            .context("feed http get()")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("feed http status {status}");
        }

        let body = resp.bytes().await.context("feed http .bytes()")?;
        parse_entries(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
