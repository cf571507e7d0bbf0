// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod dedup;
pub mod filter;
pub mod ingest;
pub mod listener;
pub mod notify;

// ---- Re-exports for stable public API ----
pub use crate::dedup::SeenSet;
pub use crate::filter::{is_relevant, KeywordFilter, Verdict};
pub use crate::ingest::types::{Entry, FeedSource};
pub use crate::listener::{CycleReport, Listener, Sleeper, TokioSleeper};
pub use crate::notify::Notifier;
