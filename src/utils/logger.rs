use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber
///
/// The level comes from the `LOGLEVEL` environment variable
/// (`DEBUG`, `ERROR`, `WARN`, `TRACE`, anything else = `INFO`).
/// Later calls are no-ops, and a subscriber already installed elsewhere is kept.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "DEBUG" => Level::DEBUG,
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
