//! Optional `tracing` setup for hosts that do not install their own subscriber.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `EDITOR_LAUNCH_LOG=debug`.
pub const LOG_ENV: &str = "EDITOR_LAUNCH_LOG";

const DEFAULT_FILTER: &str = "editor_launch=info,warn";

/// Install a stderr subscriber filtered by [`LOG_ENV`].
///
/// Fails without side effects when the host already installed a global
/// subscriber.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!("Logging initialised");
    Ok(())
}
