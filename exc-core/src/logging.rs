//! # Excepto Logging Utilities
//!
//! The harness logs through `tracing`: capture and dispatch at `debug`, stage
//! transitions at `trace`, discarded exceptions at `warn`, refused cycles and
//! uncaught raises at `error`. Applications that have no subscriber of their
//! own can install one here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exc_core::logging::init_tracing;
//!
//! // Sets the global tracing subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//! ```

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "exc_core=info,excepto=info";

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Initialize the global tracing subscriber with explicit filter directives.
///
/// # Errors
/// Returns an error if the directives do not parse or a global subscriber is
/// already installed.
pub fn init_tracing_with_filter(
    directives: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(directives)?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("Excepto logging initialized");
    Ok(())
}
