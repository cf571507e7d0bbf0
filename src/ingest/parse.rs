// src/ingest/parse.rs
//! Feed document -> `Entry` mapping. Format detection (Atom, RSS, JSON Feed) is left to
//! `feed-rs`; this module only decides which fields we keep and how they fall back.

use anyhow::{Context, Result};
use feed_rs::model;

use crate::ingest::normalize_text;
use crate::ingest::types::Entry;

/// Parse a raw feed document. A document the parser rejects is an error for the whole feed.
pub fn parse_entries(body: &[u8]) -> Result<Vec<Entry>> {
    let parser = feed_rs::parser::Builder::new()
        .id_generator(stable_id)
        .build();
    let feed = parser.parse(body).context("parsing feed document")?;
    Ok(feed.entries.into_iter().map(entry_from_model).collect())
}

/// Id for items that carry no `<guid>`/`<id>`: a hash of their links and title, so the same
/// item gets the same id on every fetch and dedup keeps working.
fn stable_id(links: &[model::Link], title: &Option<model::Text>, uri: Option<&str>) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    for link in links {
        hasher.update(link.href.as_bytes());
        hasher.update([0u8]);
    }
    if let Some(t) = title {
        hasher.update(t.content.as_bytes());
    }
    hasher.update([0u8]);
    hasher.update(uri.unwrap_or_default().as_bytes());

    let digest = hasher.finalize();
    let mut out = String::with_capacity(32);
    for b in digest.iter().take(16) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

fn entry_from_model(it: model::Entry) -> Entry {
    // Atom puts the post body in <content>, RSS in <description> (summary).
    let summary = it
        .summary
        .map(|t| t.content)
        .or_else(|| it.content.and_then(|c| c.body))
        .map(|raw| normalize_text(&raw))
        .filter(|s| !s.is_empty());

    Entry {
        id: it.id,
        title: it.title.map(|t| t.content).unwrap_or_default(),
        link: it.links.into_iter().next().map(|l| l.href).unwrap_or_default(),
        category: it
            .categories
            .into_iter()
            .map(|c| c.term)
            .find(|term| !term.trim().is_empty()),
        summary,
    }
}
