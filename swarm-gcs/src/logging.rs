//! Logging setup for applications embedding the SDK.
//!
//! The SDK itself only emits `tracing` events; whether and how they are
//! rendered is the host application's choice. Mobile shells typically want
//! silence, a development build wants compact stderr output.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different embedding contexts
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output - the default for the mobile shell
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode.
///
/// Call early, before the first `GcsClient` is constructed.
///
/// # Environment Variables
///
/// - `GCS_LOG_LEVEL`: override the log level filter (error, warn, info,
///   debug, trace, or a full `tracing` directive)
/// - `RUST_LOG`: consulted when `GCS_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from the `GCS_LOG_MODE` environment variable
/// ("development", "debug", anything else is silent).
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("GCS_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("GCS_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
