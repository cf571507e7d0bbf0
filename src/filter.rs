// src/filter.rs
//! Keyword gate for feed entries.
//!
//! Rules, in order:
//! 1. text and keywords are compared lowercased;
//! 2. any exclude keyword contained in the text rejects it outright, even if include
//!    keywords match as well;
//! 3. otherwise every include keyword contained in the text is collected, in configured
//!    order, and the text is relevant when at least one matched.
//!
//! Matching is plain substring containment: "depin" matches inside "depinned".
//! Matched keywords are reported as configured; [`KeywordFilter::new`] stores them lowercased.

/// Outcome of running one text through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Rejected by this exclude keyword (the first one found, in configured order).
    Excluded { keyword: String },
    /// No include keyword present.
    NoMatch,
    /// At least one include keyword present; all of them, in configured order.
    Relevant { matched: Vec<String> },
}

impl Verdict {
    pub fn is_relevant(&self) -> bool {
        matches!(self, Verdict::Relevant { .. })
    }

    pub fn matched(&self) -> &[String] {
        match self {
            Verdict::Relevant { matched } => matched,
            _ => &[],
        }
    }

    pub fn into_parts(self) -> (bool, Vec<String>) {
        match self {
            Verdict::Relevant { matched } => (true, matched),
            _ => (false, Vec::new()),
        }
    }
}

/// Evaluate `text` against raw keyword lists.
///
/// Returns `(relevant, matched_keywords)`; `matched_keywords` is empty when not relevant.
pub fn is_relevant<I, X>(
    text: &str,
    include_keywords: &[I],
    exclude_keywords: &[X],
) -> (bool, Vec<String>)
where
    I: AsRef<str>,
    X: AsRef<str>,
{
    evaluate(text, include_keywords, exclude_keywords).into_parts()
}

fn evaluate<I, X>(text: &str, include: &[I], exclude: &[X]) -> Verdict
where
    I: AsRef<str>,
    X: AsRef<str>,
{
    let text = text.to_lowercase();

    // Empty keywords would match everything.
    let hit = |kw: &&str| !kw.is_empty() && text.contains(kw.to_lowercase().as_str());

    if let Some(bad) = exclude.iter().map(AsRef::<str>::as_ref).find(hit) {
        return Verdict::Excluded {
            keyword: bad.to_string(),
        };
    }

    let matched: Vec<String> = include
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(hit)
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        Verdict::NoMatch
    } else {
        Verdict::Relevant { matched }
    }
}

/// Owns both keyword lists for the lifetime of a listener.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl KeywordFilter {
    /// Keywords are trimmed and lowercased; empties and repeats are dropped, order kept.
    pub fn new<I, X>(include: I, exclude: X) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        X: IntoIterator,
        X::Item: AsRef<str>,
    {
        Self {
            include: clean_keywords(include),
            exclude: clean_keywords(exclude),
        }
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn evaluate(&self, text: &str) -> Verdict {
        evaluate(text, self.include.as_slice(), self.exclude.as_slice())
    }
}

pub(crate) fn clean_keywords<T>(items: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for it in items {
        let kw = it.as_ref().trim().to_lowercase();
        if !kw.is_empty() && !out.contains(&kw) {
            out.push(kw);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCLUDE: &[&str] = &["passive income app", "honeygain", "depin", "side hustle"];
    const EXCLUDE: &[&str] = &["survey", "casino"];

    #[test]
    fn substring_not_word_boundary() {
        let (ok, matched) = is_relevant("Why DePINned projects fail", INCLUDE, EXCLUDE);
        assert!(ok);
        assert_eq!(matched, vec!["depin"]);
    }

    #[test]
    fn all_matches_in_configured_order() {
        let (ok, matched) = is_relevant(
            "My side hustle: honeygain + a passive income app",
            INCLUDE,
            EXCLUDE,
        );
        assert!(ok);
        assert_eq!(matched, vec!["passive income app", "honeygain", "side hustle"]);
    }

    #[test]
    fn exclude_wins_and_reports_keyword() {
        let f = KeywordFilter::new(INCLUDE.iter().copied(), EXCLUDE.iter().copied());
        let v = f.evaluate("Honeygain CASINO bonus");
        assert_eq!(
            v,
            Verdict::Excluded {
                keyword: "casino".into()
            }
        );
        assert!(v.matched().is_empty());
    }

    #[test]
    fn empty_keywords_are_ignored() {
        let (ok, matched) = is_relevant("anything at all", &["", "all"], &[""]);
        assert!(ok);
        assert_eq!(matched, vec!["all"]);
    }

    #[test]
    fn mixed_case_keywords_still_match() {
        let none: [&str; 0] = [];
        let (ok, matched) = is_relevant("honeygain payout", &["Honeygain"], &none);
        assert!(ok);
        assert_eq!(matched, vec!["Honeygain"]);

        let (ok, matched) = is_relevant("Honeygain casino", &["honeygain"], &["CASINO"]);
        assert!(!ok);
        assert!(matched.is_empty());
    }

    #[test]
    fn clean_keywords_lowercases_and_dedups_in_order() {
        let out = clean_keywords([" DePIN ", "", "Helium Mobile", "depin"]);
        assert_eq!(out, vec!["depin".to_string(), "helium mobile".to_string()]);
    }
}
