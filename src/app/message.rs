// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ART_SPACE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional `tracing` filter directive, e.g. `debug` or `art_space=trace`.
    /// Takes precedence over `ART_SPACE_LOG` and the config file.
    pub log: Option<String>,
}
