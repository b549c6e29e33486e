// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! The filter directive is taken from, in order: the `--log` flag, the
//! `ART_SPACE_LOG` environment variable, the `[logging] level` setting, and
//! finally [`DEFAULT_LOG_LEVEL`].

use crate::config::{Config, DEFAULT_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const ENV_LOG: &str = "ART_SPACE_LOG";

/// Picks the filter directive to use. Empty values are skipped.
#[must_use]
pub fn resolve_filter(cli: Option<&str>, env: Option<&str>, config: &Config) -> String {
    [cli, env, config.logging.level.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Installs the global `tracing` subscriber.
///
/// An unparsable directive falls back to [`DEFAULT_LOG_LEVEL`] and is
/// reported once the subscriber is up. Calling this twice is harmless.
pub fn init(cli: Option<&str>, config: &Config) {
    let env = std::env::var(ENV_LOG).ok();
    let directive = resolve_filter(cli, env.as_deref(), config);

    let (filter, rejected) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err)),
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        return;
    }

    if let Some(err) = rejected {
        tracing::warn!(%directive, %err, "invalid log filter, using default");
    }
}
