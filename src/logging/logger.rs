// file: src/logging/logger.rs
// version: 1.0.0
// guid: c02163c9-ffca-4141-a84b-32425a6bc57d

//! Logger initialization and configuration
//!
//! Logs are written to stderr; stdout carries the JSON result.

use crate::error::AgentError;
use crate::Result;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level filter for the verbosity flags, overridden by `RUST_LOG`
fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AgentError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AgentError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run an async operation inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, resource: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation, resource = resource);
    async move { f().await }.instrument(span).await
}
