//! Tracing subscriber setup for hosts that do not install their own.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install a console subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"pagecanvas=info"`) when it is unset.
///
/// Fails if a global subscriber is already installed.
pub fn init(default_directive: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .with_context(|| format!("invalid log directive: {default_directive}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::debug!("Logging initialized");
    Ok(())
}
