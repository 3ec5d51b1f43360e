//! Tracing setup for the server binary.
//!
//! The library only emits events through `tracing`; installing a
//! subscriber is left to the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Levels accepted by `--log-level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Filter directives for the given base level.
pub fn default_filter(log_level: &str) -> String {
    format!(
        "spaceship_schedule={log_level},spaceship_server={log_level},tower=warn,hyper=warn"
    )
}

/// Installs the global stdout subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
