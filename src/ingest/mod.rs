// src/ingest/mod.rs
pub mod parse;
pub mod providers;
pub mod types;

use crate::ingest::types::{Entry, FeedSource};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series carry descriptions once a recorder exists).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("ingest_feeds_total", "Feed endpoints fetched.");
        describe_counter!(
            "ingest_feed_errors_total",
            "Feed fetches that failed (network, status, or parse)."
        );
        describe_counter!("ingest_entries_total", "Entries parsed from feeds.");
        describe_histogram!("ingest_fetch_ms", "Fetch + parse time in milliseconds.");
    });
}

/// Normalize feed markup into plain text: decode entities, strip tags, collapse whitespace.
pub fn normalize_text(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    out = re_tags.replace_all(&out, " ").to_string();

    // 3) Normalize typographic quotes to ASCII
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace (\s is Unicode-aware, so NBSP goes too)
    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").expect("whitespace regex"));
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// Fetch one endpoint without ever failing.
///
/// Network errors, bad statuses and malformed documents are logged as warnings with the
/// endpoint and cause; the endpoint then yields no entries for this cycle.
pub async fn fetch<S: FeedSource + ?Sized>(source: &S, endpoint: &str) -> Vec<Entry> {
    ensure_metrics_described();
    counter!("ingest_feeds_total").increment(1);

    let t0 = std::time::Instant::now();
    match source.fetch_entries(endpoint).await {
        Ok(entries) => {
            let ms = t0.elapsed().as_secs_f64() * 1_000.0;
            histogram!("ingest_fetch_ms").record(ms);
            counter!("ingest_entries_total").increment(entries.len() as u64);
            tracing::debug!(
                target: "ingest",
                endpoint,
                source = source.name(),
                entries = entries.len(),
                "feed fetched"
            );
            entries
        }
        Err(e) => {
            tracing::warn!(
                target: "ingest",
                endpoint,
                source = source.name(),
                error = ?e,
                "feed fetch failed; skipping endpoint this cycle"
            );
            counter!("ingest_feed_errors_total").increment(1);
            Vec::new()
        }
    }
}
