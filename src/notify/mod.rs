pub mod console;
pub mod templates;

use crate::ingest::types::Entry;

/// Shown when an entry carries no category (some feeds omit it).
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Receives opportunities found by the listener.
///
/// Presentation only: implementations must not fail outward. A sink that cannot write
/// logs the problem and returns.
pub trait Notifier {
    fn notify(&mut self, entry: &Entry, matched_keywords: &[String]);
}
