// SPDX-License-Identifier: MPL-2.0
//! Raster image handles for bundled artwork.
//!
//! Artwork and branding are shipped as SVG sources and rasterized once at
//! startup. The gallery only ever sees the resulting read-only handles.

pub mod image;

pub use image::{rasterize_svg, render_svg, ArtworkImage, DEFAULT_RASTER_WIDTH};
