// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width. Portrait, like a phone screen.
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Smallest width at which the frame, caption and buttons still fit.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Smallest height at which the frame, caption and buttons still fit.
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const _: () = {
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
