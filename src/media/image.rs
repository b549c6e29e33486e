// SPDX-License-Identifier: MPL-2.0
//! SVG rasterization into RGBA image handles.

use crate::error::{Error, Result};
use iced::widget::image;
use resvg::usvg;

/// Width in pixels used when rasterizing gallery artwork.
pub const DEFAULT_RASTER_WIDTH: u32 = 600;

/// Opaque, read-only handle to a rasterized image.
///
/// Cloning is cheap: the pixel buffer lives behind the iced handle and is
/// shared, never copied or mutated.
#[derive(Debug, Clone)]
pub struct ArtworkImage {
    handle: image::Handle,
    width: u32,
    height: u32,
}

impl ArtworkImage {
    /// Wraps raw RGBA pixels (4 bytes per pixel, row-major).
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl PartialEq for ArtworkImage {
    fn eq(&self, other: &Self) -> bool {
        self.handle.id() == other.handle.id()
    }
}

/// Rasterizes an SVG document so that its width equals `target_width`.
///
/// The aspect ratio of the source is kept.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the document cannot be parsed, has empty
/// dimensions, or the target pixmap cannot be allocated.
pub fn rasterize_svg(source: &[u8], target_width: u32) -> Result<ArtworkImage> {
    let pixmap = render_svg(source, target_width)?;
    let (width, height) = (pixmap.width(), pixmap.height());
    Ok(ArtworkImage::from_rgba(width, height, pixmap.take()))
}

/// Renders an SVG document into a pixmap `target_width` pixels wide.
///
/// # Errors
///
/// Same as [`rasterize_svg`].
pub fn render_svg(source: &[u8], target_width: u32) -> Result<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(source, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let orig_size = tree.size();
    if orig_size.width() <= 0.0 || orig_size.height() <= 0.0 || target_width == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let scale = target_width as f32 / orig_size.width();
    let target_height = (orig_size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(target_width, target_height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
        <rect width="6" height="3" fill="blue" />
    </svg>"#;

    #[test]
    fn rasterize_scales_to_target_width_and_keeps_ratio() {
        let image = rasterize_svg(WIDE_SVG.as_bytes(), 60).expect("svg should rasterize");
        assert_eq!(image.width(), 60);
        assert_eq!(image.height(), 30);
    }

    #[test]
    fn rasterize_invalid_svg_returns_svg_error() {
        match rasterize_svg(b"<svg>oops", 60) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn rasterize_zero_target_width_errors() {
        assert!(matches!(
            rasterize_svg(WIDE_SVG.as_bytes(), 0),
            Err(Error::Svg(_))
        ));
    }

    #[test]
    fn clones_share_the_same_handle() {
        let image = ArtworkImage::from_rgba(1, 1, vec![255, 0, 0, 255]);
        let copy = image.clone();
        assert_eq!(image, copy);
        assert_eq!(copy.width(), 1);
    }

    #[test]
    fn distinct_images_are_not_equal() {
        let red = ArtworkImage::from_rgba(1, 1, vec![255, 0, 0, 255]);
        let blue = ArtworkImage::from_rgba(1, 1, vec![0, 0, 255, 255]);
        assert_ne!(red, blue);
    }
}
