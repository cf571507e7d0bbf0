// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::filter::clean_keywords;

pub const ENV_CONFIG_PATH: &str = "LISTENER_CONFIG_PATH";
pub const ENV_INTERVAL_SECS: &str = "LISTENER_INTERVAL_SECS";

pub const DEFAULT_CONFIG_TOML: &str = "config/listener.toml";
pub const DEFAULT_CONFIG_JSON: &str = "config/listener.json";
pub const DEFAULT_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = concat!("feed-listener/", env!("CARGO_PKG_VERSION"));

const DEFAULT_FEEDS: &[&str] = &[
    "https://www.reddit.com/r/passiveincome/new/.rss",
    "https://www.reddit.com/r/beermoney/new/.rss",
    "https://www.reddit.com/r/androidapps/new/.rss",
    "https://www.reddit.com/r/DePIN/new/.rss",
];

const DEFAULT_INCLUDE: &[&str] = &[
    "passive income app",
    "earn money android",
    "honeygain",
    "helium mobile",
    "depin",
    "wifi map",
    "mining on phone",
    "side hustle",
];

const DEFAULT_EXCLUDE: &[&str] = &["survey", "casino", "gamble", "betting", "referral link"];

const DEFAULT_TEMPLATES: &[&str] = &[
    "[Reply Draft 1]\n\"Hey, if you're looking for passive apps on Android, check out **DiSensor**.\n\
     It mines crypto by mapping WiFi & environmental data. Doesn't drain battery.\n\
     Still in Beta.\"",
    "[Reply Draft 2]\n\"Have you tried **DiSensor**? It's a new DePIN project competing with Helium.\n\
     You earn points for contributing signal data. Early stage but looks promising.\"",
];

/// Everything the listener needs at startup. Immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    pub feeds: Vec<String>,
    pub include_keywords: Vec<String>,
    pub exclude_keywords: Vec<String>,
    pub reply_templates: Vec<String>,
    pub interval_secs: u64,
    /// Also match against the entry summary/body, not just the title.
    pub match_summary: bool,
    pub user_agent: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            feeds: to_owned(DEFAULT_FEEDS),
            include_keywords: to_owned(DEFAULT_INCLUDE),
            exclude_keywords: to_owned(DEFAULT_EXCLUDE),
            reply_templates: to_owned(DEFAULT_TEMPLATES),
            interval_secs: DEFAULT_INTERVAL_SECS,
            match_summary: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ListenerConfig {
    /// Clean up lists and clamp numbers so downstream code can trust them.
    pub fn sanitize(mut self) -> Self {
        self.feeds = clean_list(self.feeds);
        self.include_keywords = clean_keywords(self.include_keywords);
        self.exclude_keywords = clean_keywords(self.exclude_keywords);
        self.reply_templates = self
            .reply_templates
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if self.interval_secs == 0 {
            self.interval_secs = 1;
        }
        if self.user_agent.trim().is_empty() {
            self.user_agent = DEFAULT_USER_AGENT.to_string();
        }
        self.request_timeout_secs = self.request_timeout_secs.filter(|s| *s > 0);
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_from(path: &Path) -> Result<ListenerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading listener config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing listener config {}", path.display()))?;
    Ok(cfg.sanitize())
}

/// Load config using env var + fallbacks:
/// 1) $LISTENER_CONFIG_PATH (must exist)
/// 2) config/listener.toml
/// 3) config/listener.json
/// 4) built-in defaults
///
/// `$LISTENER_INTERVAL_SECS` overrides `interval_secs` in every case.
pub fn load_default() -> Result<ListenerConfig> {
    let cfg = load_file_or_defaults()?;
    Ok(apply_env_overrides(cfg))
}

fn load_file_or_defaults() -> Result<ListenerConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_from(&pb);
        }
        return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
    }
    let toml_p = PathBuf::from(DEFAULT_CONFIG_TOML);
    if toml_p.exists() {
        return load_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_CONFIG_JSON);
    if json_p.exists() {
        return load_from(&json_p);
    }
    Ok(ListenerConfig::default().sanitize())
}

fn apply_env_overrides(mut cfg: ListenerConfig) -> ListenerConfig {
    match std::env::var(ENV_INTERVAL_SECS).ok().map(|v| v.trim().parse::<u64>()) {
        Some(Ok(secs)) => cfg.interval_secs = secs.max(1),
        Some(Err(e)) => {
            tracing::warn!(target: "config", error = %e, "ignoring invalid {ENV_INTERVAL_SECS}")
        }
        None => {}
    }
    cfg
}

fn parse_config(s: &str, hint_ext: &str) -> Result<ListenerConfig> {
    match hint_ext {
        "json" => Ok(serde_json::from_str(s)?),
        "toml" => Ok(toml::from_str(s)?),
        // Unknown extension: TOML first, then JSON.
        _ => toml::from_str(s)
            .map_err(anyhow::Error::from)
            .or_else(|_| serde_json::from_str(s).map_err(anyhow::Error::from))
            .map_err(|_| anyhow!("unsupported listener config format")),
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && !out.iter().any(|o| o == t) {
            out.push(t.to_string());
        }
    }
    out
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
