//! Feed listener — binary entrypoint.
//! Runs one scan over the configured feeds and exits, or keeps polling when
//! `LISTENER_MODE=loop` (or a `loop` argument) is given, until Ctrl-C.

use anyhow::Result;
use feed_listener::config;
use feed_listener::ingest::providers::http::HttpFeedSource;
use feed_listener::notify::console::ConsoleNotifier;
use feed_listener::{Listener, TokioSleeper};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ENV_MODE: &str = "LISTENER_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Once,
    Loop,
}

/// CLI argument wins over the env var; anything other than "loop" means a single pass.
fn mode_from_env() -> Mode {
    let raw = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(ENV_MODE).ok())
        .unwrap_or_default();
    if raw.trim().eq_ignore_ascii_case("loop") {
        Mode::Loop
    } else {
        Mode::Once
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // No signal handler means no way to stop gracefully; keep running until killed.
        warn!(error = ?e, "unable to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("interrupt received");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op otherwise.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_default()?;
    info!(feeds = cfg.feeds.len(), "initializing feed listener");

    let source = HttpFeedSource::new(&cfg.user_agent, cfg.request_timeout())?;
    let notifier = ConsoleNotifier::stdout(cfg.reply_templates.clone());
    let mut listener = Listener::from_config(&cfg, source, notifier);

    match mode_from_env() {
        Mode::Once => {
            info!("one-time scan started");
            let report = listener.run_once().await;
            info!(opportunities = report.opportunities, "scan finished");
        }
        Mode::Loop => {
            listener
                .run_until(cfg.interval(), &TokioSleeper, wait_for_ctrl_c())
                .await;
        }
    }

    Ok(())
}
