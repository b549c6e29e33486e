// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::error::Error;
use crate::gallery::GalleryStore;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Result<GalleryStore, Error>,
}

/// Renders the gallery, or the startup error if it could not be built.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.gallery {
        Ok(store) => gallery::view(gallery::ViewContext {
            artwork: store.current(),
        })
        .map(Message::Gallery),
        Err(err) => view_load_error(err),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn view_load_error(err: &Error) -> Element<'_, Message> {
    let message = Text::new(format!("Could not load the gallery.\n{err}"))
        .size(typography::BODY)
        .color(palette::ERROR_500);

    Container::new(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
