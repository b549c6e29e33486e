// SPDX-License-Identifier: MPL-2.0
//! Gallery store: a fixed list of artworks and a clamped cursor over it.
//!
//! The store is the only mutable state of the application. It is seeded once
//! with an explicit, ordered list of [`ArtworkEntry`] values and then only
//! moves its cursor through [`GalleryStore::previous`] and
//! [`GalleryStore::next`]. Both operations clamp at the list boundaries:
//! stepping before the first or past the last entry leaves the cursor where
//! it is and reports nothing.

pub mod catalog;

use crate::error::{GalleryError, Result};
use crate::media::ArtworkImage;

/// One displayable gallery item: an image plus its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkEntry {
    image: ArtworkImage,
    title: String,
    artist: String,
    /// Free-form text, e.g. "2015" or "c. 1890".
    year: String,
}

impl ArtworkEntry {
    #[must_use]
    pub fn new(
        image: ArtworkImage,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            image,
            title: title.into(),
            artist: artist.into(),
            year: year.into(),
        }
    }

    #[must_use]
    pub fn image(&self) -> &ArtworkImage {
        &self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

/// Navigable cursor over a non-empty, fixed list of artworks.
///
/// Invariant: `current_index < entries.len()` at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryStore {
    entries: Vec<ArtworkEntry>,
    current_index: usize,
}

impl GalleryStore {
    /// Creates a store positioned on the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] if `entries` is empty.
    pub fn new(entries: Vec<ArtworkEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GalleryError::Empty.into());
        }
        Ok(Self {
            entries,
            current_index: 0,
        })
    }

    /// Returns the currently selected artwork.
    #[must_use]
    pub fn current(&self) -> &ArtworkEntry {
        &self.entries[self.current_index]
    }

    /// Moves to the previous artwork, staying put on the first one.
    ///
    /// Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Moves to the next artwork, staying put on the last one.
    ///
    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 >= self.entries.len() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Current position in the list (0-indexed).
    #[must_use]
    pub fn index(&self) -> usize {
        self.current_index
    }

    /// Number of artworks in the gallery. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // a store is never empty
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[ArtworkEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current_index + 1 == self.entries.len()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{numbered_entries, sample_entries};
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn sample_store() -> GalleryStore {
        GalleryStore::new(sample_entries()).expect("sample gallery is non-empty")
    }

    #[test]
    fn new_store_rejects_empty_list() {
        assert_eq!(
            GalleryStore::new(Vec::new()),
            Err(Error::Gallery(GalleryError::Empty))
        );
    }

    #[test]
    fn new_store_starts_on_first_entry() {
        let entries = sample_entries();
        let store = GalleryStore::new(entries.clone()).expect("non-empty");
        assert_eq!(store.index(), 0);
        assert_eq!(store.current(), &entries[0]);
        assert!(store.is_at_first());
        assert!(!store.is_at_last());
    }

    #[test]
    fn previous_on_first_entry_is_a_no_op() {
        let mut store = sample_store();
        assert!(!store.previous());
        assert!(!store.previous());
        assert_eq!(store.index(), 0);
        assert_eq!(store.current().title(), "dog");
    }

    #[test]
    fn next_on_last_entry_is_a_no_op() {
        let mut store = sample_store();
        store.next();
        store.next();
        assert!(store.is_at_last());

        assert!(!store.next());
        assert!(!store.next());
        assert_eq!(store.index(), 2);
        assert_eq!(store.current().title(), "This image");
    }

    #[test]
    fn walks_forward_then_back_clamping_at_both_ends() {
        let mut store = sample_store();

        store.next();
        assert_eq!(store.current().title(), "random dude");
        store.next();
        assert_eq!(store.current().title(), "This image");
        store.next();
        assert_eq!(store.current().title(), "This image");

        store.previous();
        store.previous();
        assert_eq!(store.current().title(), "dog");
        assert_eq!(store.current().artist(), "Mr Johnson");
        store.previous();
        assert_eq!(store.current().title(), "dog");
    }

    #[test]
    fn single_entry_gallery_never_moves() {
        let mut store = GalleryStore::new(numbered_entries(1)).expect("non-empty");
        assert!(store.is_at_first());
        assert!(store.is_at_last());
        assert!(!store.next());
        assert!(!store.previous());
        assert_eq!(store.index(), 0);
    }

    #[test]
    fn caption_fields_are_kept_verbatim() {
        let store = sample_store();
        let entries = store.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].artist(), "Mr. Google");
        assert_eq!(entries[2].year(), "1955");
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Previous,
        Next,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![Just(Step::Previous), Just(Step::Next)]
    }

    proptest! {
        #[test]
        fn cursor_stays_in_bounds(len in 1usize..12, steps in prop::collection::vec(step(), 0..64)) {
            let mut store = GalleryStore::new(numbered_entries(len)).unwrap();
            for step in steps {
                let before = store.index();
                match step {
                    Step::Previous => {
                        store.previous();
                        prop_assert_eq!(store.index(), before.saturating_sub(1));
                    }
                    Step::Next => {
                        store.next();
                        prop_assert_eq!(store.index(), (before + 1).min(len - 1));
                    }
                }
                prop_assert!(store.index() < len);
            }
        }

        #[test]
        fn boundaries_are_idempotent(len in 1usize..12, repeats in 1usize..8) {
            let mut store = GalleryStore::new(numbered_entries(len)).unwrap();
            for _ in 0..repeats {
                store.previous();
            }
            prop_assert_eq!(store.index(), 0);

            for _ in 0..(len + repeats) {
                store.next();
            }
            prop_assert_eq!(store.index(), len - 1);
            let at_last = store.clone();
            store.next();
            prop_assert_eq!(&store, &at_last);
        }

        #[test]
        fn next_then_previous_round_trips_inside_the_list(len in 3usize..12, start_seed in any::<usize>()) {
            let mut store = GalleryStore::new(numbered_entries(len)).unwrap();
            // Any index that is neither first nor last.
            let start = 1 + start_seed % (len - 2);
            for _ in 0..start {
                store.next();
            }
            let original = store.current().clone();

            store.next();
            store.previous();
            prop_assert_eq!(store.current(), &original);
        }
    }
}
