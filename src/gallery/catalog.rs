// SPDX-License-Identifier: MPL-2.0
//! The bundled gallery catalog.
//!
//! The artworks shipped with the application live in `assets/gallery/` and
//! are embedded into the binary. `catalog.toml` lists them in display order:
//!
//! ```toml
//! [[artwork]]
//! image = "naomi.svg"
//! title = "dog"
//! artist = "Mr Johnson"
//! year = "2015"
//! ```
//!
//! Caption text is taken as-is. The only checks are structural: the manifest
//! must parse and every referenced image must be bundled.

use super::{ArtworkEntry, GalleryStore};
use crate::error::{GalleryError, Result};
use crate::media::{rasterize_svg, DEFAULT_RASTER_WIDTH};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::borrow::Cow;

/// Name of the manifest inside the embedded gallery folder.
pub const MANIFEST_FILE: &str = "catalog.toml";

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct GalleryAssets;

/// One row of the catalog manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// File name of the SVG source inside the gallery folder.
    pub image: String,
    pub title: String,
    pub artist: String,
    pub year: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "artwork")]
    artworks: Vec<CatalogEntry>,
}

/// Parses a catalog manifest, keeping the row order.
///
/// # Errors
///
/// Returns [`GalleryError::InvalidCatalog`] if the content is not a valid
/// manifest.
pub fn parse_manifest(content: &str) -> Result<Vec<CatalogEntry>> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| GalleryError::InvalidCatalog(e.to_string()))?;
    Ok(manifest.artworks)
}

/// Turns manifest rows into artwork entries, fetching image sources through
/// `fetch`.
///
/// # Errors
///
/// Returns [`GalleryError::MissingResource`] for a row whose image `fetch`
/// cannot provide, or an SVG error if the source fails to rasterize.
pub fn resolve_entries<F>(rows: Vec<CatalogEntry>, mut fetch: F) -> Result<Vec<ArtworkEntry>>
where
    F: FnMut(&str) -> Option<Cow<'static, [u8]>>,
{
    rows.into_iter()
        .map(|row| -> Result<ArtworkEntry> {
            let source = fetch(&row.image)
                .ok_or_else(|| GalleryError::MissingResource(row.image.clone()))?;
            let image = rasterize_svg(&source, DEFAULT_RASTER_WIDTH)?;
            tracing::debug!(image = %row.image, title = %row.title, "loaded artwork");
            Ok(ArtworkEntry::new(image, row.title, row.artist, row.year))
        })
        .collect()
}

/// Loads the artworks bundled with the application, in catalog order.
///
/// # Errors
///
/// Fails if the embedded manifest is missing or malformed, or if one of its
/// images is missing or cannot be rasterized.
pub fn load_bundled() -> Result<Vec<ArtworkEntry>> {
    let manifest = GalleryAssets::get(MANIFEST_FILE)
        .ok_or_else(|| GalleryError::MissingResource(MANIFEST_FILE.to_string()))?;
    let content = String::from_utf8_lossy(manifest.data.as_ref());
    let rows = parse_manifest(&content)?;
    resolve_entries(rows, |name| GalleryAssets::get(name).map(|file| file.data))
}

/// Builds a store over the bundled artworks, positioned on the first one.
///
/// # Errors
///
/// See [`load_bundled`]; additionally fails if the catalog lists nothing.
pub fn bundled_store() -> Result<GalleryStore> {
    GalleryStore::new(load_bundled()?)
}
