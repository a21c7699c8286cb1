//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ADTO client.

use std::path::Path;

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{AdtoError, Result};

/// Initialize logging based on configuration.
///
/// Console output goes to stderr so rendered pages on stdout stay clean.
/// When a file path is configured, a daily rolling file is written as well;
/// keep the returned guard alive for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AdtoError::Config(format!("Invalid log filter: {}", e)))?;

    let console = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let guard = match config.file_path.as_deref() {
        Some(file_path) => {
            let path = Path::new(file_path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "adto-client.log".to_string());

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
                .try_init()
                .map_err(|e| AdtoError::Config(format!("Logging already initialized: {}", e)))?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()
                .map_err(|e| AdtoError::Config(format!("Logging already initialized: {}", e)))?;
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API call
pub fn log_api_request(method: &str, url: &str) {
    debug!(method = method, url = url, "Events API request");
}

/// Log a completed API call
pub fn log_api_response(method: &str, url: &str, status: u16, duration_ms: u64) {
    if status < 400 {
        debug!(
            method = method,
            url = url,
            status = status,
            duration_ms = duration_ms,
            "Events API response"
        );
    } else {
        warn!(
            method = method,
            url = url,
            status = status,
            duration_ms = duration_ms,
            "Events API returned an error status"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log user actions with structured data
pub fn log_user_action(action: &str, details: Option<&str>) {
    info!(
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log filter changes that will trigger a new query
pub fn log_filter_change(filter: &str, value: &str, page: u32) {
    debug!(
        filter = filter,
        value = value,
        page = page,
        "Filter changed"
    );
}
