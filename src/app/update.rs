// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::gallery::GalleryStore;
use crate::ui::gallery::{self, Event as GalleryEvent};
use iced::Task;

/// Routes a top-level message to the gallery store.
///
/// `store` is `None` when the gallery failed to load; no navigation
/// controls are shown then, so there is nothing to apply.
pub fn update(store: Option<&mut GalleryStore>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => {
            if let Some(store) = store {
                apply_gallery_event(store, gallery::update(&msg));
            }
        }
    }
    Task::none()
}

/// Applies a navigation intent from the gallery screen.
pub fn apply_gallery_event(store: &mut GalleryStore, event: GalleryEvent) {
    let moved = match event {
        GalleryEvent::Previous => store.previous(),
        GalleryEvent::Next => store.next(),
    };
    tracing::debug!(?event, index = store.index(), moved, "gallery navigation");
}
