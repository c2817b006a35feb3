//! Tracing subscriber initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Install the global JSON tracing subscriber
///
/// `service.log_level` accepts either a bare level or a full filter directive;
/// an unparsable value falls back to `info`. Calling this more than once is a
/// no-op for the later calls.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.service.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            environment = %config.service.environment,
            "Tracing initialized for service: {}",
            config.service.name
        );
    }

    Ok(())
}
