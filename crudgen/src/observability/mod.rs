//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` takes precedence
//! over the verbosity count when set.

use crate::error::{GeneratorError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // sqlx logs every statement at info; keep it quiet unless tracing.
    if verbosity >= 3 {
        level.to_string()
    } else {
        format!("{level},sqlx=warn")
    }
}

/// Install the global subscriber
///
/// # Example
///
/// ```rust,no_run
/// crudgen::observability::init(1, false)?;
/// tracing::info!("generator started");
/// # Ok::<(), crudgen::error::GeneratorError>(())
/// ```
///
/// # Errors
///
/// Returns [`GeneratorError::Config`] if a global subscriber is already set.
pub fn init(verbosity: u8, json: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
    });
    let compact_layer = (!json).then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(compact_layer)
        .try_init()
        .map_err(|e| GeneratorError::Config(format!("failed to initialize logging: {e}")))
}
