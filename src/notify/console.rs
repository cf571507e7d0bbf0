use metrics::counter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as _;
use std::io::{self, Write};

use super::templates::pick_template;
use super::{Notifier, UNKNOWN_CATEGORY};
use crate::ingest::types::Entry;

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------";
const NO_TEMPLATE: &str = "(no reply templates configured)";

/// Render one opportunity alert as human-readable text.
pub fn render_alert(entry: &Entry, matched_keywords: &[String], template: Option<&str>) -> String {
    let category = entry
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(UNKNOWN_CATEGORY);

    // fmt::Write into a String is infallible.
    let mut out = String::with_capacity(512);
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "OPPORTUNITY DETECTED! [Keywords: {}]",
        matched_keywords.join(", ")
    );
    let _ = writeln!(out, "Category: {category}");
    let _ = writeln!(out, "Title: {}", entry.title);
    let _ = writeln!(out, "Link: {}", entry.link);
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "Suggested Action: Post this reply:");
    let _ = writeln!(out, "{}", template.unwrap_or(NO_TEMPLATE));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    out
}

/// Prints alerts to a writer (stdout in the binary) with a randomly chosen reply draft.
pub struct ConsoleNotifier<W, R> {
    out: W,
    rng: R,
    templates: Vec<String>,
}

impl ConsoleNotifier<io::Stdout, StdRng> {
    pub fn stdout(templates: Vec<String>) -> Self {
        Self::new(io::stdout(), StdRng::from_os_rng(), templates)
    }
}

impl<W: Write, R: Rng> ConsoleNotifier<W, R> {
    pub fn new(out: W, rng: R, templates: Vec<String>) -> Self {
        Self {
            out,
            rng,
            templates,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}

impl<W: Write, R: Rng> Notifier for ConsoleNotifier<W, R> {
    fn notify(&mut self, entry: &Entry, matched_keywords: &[String]) {
        let template = pick_template(&self.templates, &mut self.rng);
        let alert = render_alert(entry, matched_keywords, template);
        counter!("notify_opportunities_total").increment(1);

        if let Err(e) = self.out.write_all(alert.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(target: "notify", error = ?e, id = %entry.id, "failed to write alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_category_falls_back_to_unknown() {
        let e = Entry::new("t3_1", "Helium mobile tips", "https://example.test/1");
        let s = render_alert(&e, &["helium mobile".to_string()], Some("draft"));
        assert!(s.contains("Category: Unknown\n"));
        assert!(s.contains("[Keywords: helium mobile]"));
    }

    #[test]
    fn no_templates_prints_placeholder() {
        let e = Entry::new("t3_1", "x", "y").with_category("DePIN");
        let s = render_alert(&e, &[], None);
        assert!(s.contains(NO_TEMPLATE));
        assert!(s.contains("Category: DePIN\n"));
    }

    #[test]
    fn write_failure_does_not_panic() {
        let mut n = ConsoleNotifier::new(
            BrokenPipe,
            StdRng::seed_from_u64(3),
            vec!["draft".to_string()],
        );
        n.notify(&Entry::new("a", "b", "c"), &["k".to_string()]);
    }
}
