// src/listener.rs
//! Scan orchestration: one pass over every endpoint (`run_once`), or the same pass repeated
//! on a fixed interval until an external shutdown signal (`run_loop` / `run_until`).
//!
//! The binary runs a single pass unless looping is asked for.

use async_trait::async_trait;
use metrics::counter;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ListenerConfig;
use crate::dedup::SeenSet;
use crate::filter::{KeywordFilter, Verdict};
use crate::ingest::{self, types::Entry, types::FeedSource};
use crate::notify::Notifier;

/// Inter-cycle pause. Injected so tests never wait on the real clock.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, period: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}

/// What one `run_once` pass did. Informational only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub feeds: usize,
    pub fetched: usize,
    pub fresh: usize,
    pub duplicates: usize,
    pub excluded: usize,
    pub opportunities: usize,
}

pub struct Listener<S, N> {
    source: S,
    notifier: N,
    filter: KeywordFilter,
    endpoints: Vec<String>,
    seen: SeenSet,
    match_summary: bool,
}

impl<S: FeedSource, N: Notifier> Listener<S, N> {
    pub fn new(source: S, notifier: N, filter: KeywordFilter, endpoints: Vec<String>) -> Self {
        Self {
            source,
            notifier,
            filter,
            endpoints,
            seen: SeenSet::new(),
            match_summary: false,
        }
    }

    pub fn from_config(cfg: &ListenerConfig, source: S, notifier: N) -> Self {
        let filter = KeywordFilter::new(&cfg.include_keywords, &cfg.exclude_keywords);
        Self::new(source, notifier, filter, cfg.feeds.clone()).with_summary_matching(cfg.match_summary)
    }

    pub fn with_summary_matching(mut self, on: bool) -> Self {
        self.match_summary = on;
        self
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Process every endpoint once, in configured order.
    ///
    /// A failing endpoint yields nothing and never stops the pass. Each new entry is marked
    /// seen *before* it is filtered, so a rejected entry is never looked at again.
    pub async fn run_once(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        for endpoint in &self.endpoints {
            info!(target: "listener", endpoint = %endpoint, "checking feed");
            let entries = ingest::fetch(&self.source, endpoint).await;
            report.feeds += 1;
            report.fetched += entries.len();

            for entry in entries {
                if !self.seen.mark_seen(entry.id.as_str()) {
                    report.duplicates += 1;
                    continue;
                }
                report.fresh += 1;

                let text = match_text(&entry, self.match_summary);
                match self.filter.evaluate(&text) {
                    Verdict::Relevant { matched } => {
                        info!(
                            target: "listener",
                            id = %entry.id,
                            matched = ?matched,
                            "opportunity detected"
                        );
                        report.opportunities += 1;
                        self.notifier.notify(&entry, &matched);
                    }
                    Verdict::Excluded { keyword } => {
                        debug!(target: "listener", id = %entry.id, %keyword, "entry excluded");
                        report.excluded += 1;
                    }
                    Verdict::NoMatch => {
                        debug!(target: "listener", id = %entry.id, "no keyword match");
                    }
                }
            }
        }

        counter!("listener_cycles_total").increment(1);
        counter!("listener_entries_fresh_total").increment(report.fresh as u64);
        counter!("listener_entries_duplicate_total").increment(report.duplicates as u64);

        info!(
            target: "listener",
            feeds = report.feeds,
            fetched = report.fetched,
            fresh = report.fresh,
            duplicates = report.duplicates,
            opportunities = report.opportunities,
            seen_total = self.seen.len(),
            "scan complete"
        );
        report
    }

    /// Repeat `run_once` forever, pausing `interval` between passes. Never returns on its
    /// own; stop it by dropping the future (see [`Listener::run_until`]).
    pub async fn run_loop<Z: Sleeper + ?Sized>(&mut self, interval: Duration, sleeper: &Z) {
        info!(
            target: "listener",
            feeds = self.endpoints.len(),
            interval_secs = interval.as_secs(),
            "monitoring feeds"
        );
        loop {
            self.run_once().await;
            info!(target: "listener", interval_secs = interval.as_secs(), "sleeping");
            sleeper.sleep(interval).await;
        }
    }

    /// Run the loop until `shutdown` resolves (Ctrl-C in the binary). Whatever pass or sleep
    /// is in progress is simply dropped.
    pub async fn run_until<Z, F>(&mut self, interval: Duration, sleeper: &Z, shutdown: F)
    where
        Z: Sleeper + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = self.run_loop(interval, sleeper) => {}
            _ = shutdown => {}
        }
        info!(target: "listener", seen_total = self.seen.len(), "listener stopped");
    }
}

/// Title only by default; title plus summary when summary matching is on.
fn match_text(entry: &Entry, with_summary: bool) -> String {
    match (&entry.summary, with_summary) {
        (Some(summary), true) => format!("{} {}", entry.title, summary),
        _ => entry.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_text_respects_summary_flag() {
        let e = Entry::new("1", "Title", "l").with_summary("body text");
        assert_eq!(match_text(&e, false), "Title");
        assert_eq!(match_text(&e, true), "Title body text");
        let bare = Entry::new("2", "Only title", "l");
        assert_eq!(match_text(&bare, true), "Only title");
    }
}
