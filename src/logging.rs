//! Tracing subscriber setup.
//!
//! Logs go to stderr so that command output on stdout stays clean. The filter
//! comes from `--log-level` when given, then `RUST_LOG`, then the default level.

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON};
use crate::errors::{AppError, AppResult};
use std::io;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the level filter.
///
/// # Errors
///
/// Returns `AppError::Config` if `level` is not a valid filter directive.
pub fn build_filter(level: Option<&str>) -> AppResult<EnvFilter> {
    match level {
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| {
            AppError::Config(format!("Invalid log level '{}': {}", directive, e))
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))),
    }
}

/// Installs the global subscriber.
///
/// `format` is `"json"` for one JSON object per line, anything else for
/// human-readable text.
///
/// # Errors
///
/// Returns `AppError::Config` if the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(format: &str, level: Option<&str>) -> AppResult<()> {
    let filter = build_filter(level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if format == LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_writer(io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
