// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the project SVG at runtime to produce a RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use crate::media::render_svg;
use iced::window::{icon, Icon};

/// Edge length of the rendered icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &[u8] = include_bytes!("../assets/branding/art_space.svg");

    let pixmap = match render_svg(SVG_SOURCE, ICON_SIZE) {
        Ok(pixmap) => pixmap,
        Err(err) => {
            tracing::warn!(%err, "could not render window icon");
            return None;
        }
    };

    let (width, height) = (pixmap.width(), pixmap.height());
    icon::from_rgba(pixmap.take(), width, height).ok()
}
