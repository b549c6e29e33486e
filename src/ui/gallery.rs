// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the framed artwork, its caption card and the navigation row.
//!
//! The screen holds no state. It renders whatever artwork it is handed and
//! turns button presses into [`Event`]s for the application to apply to the
//! gallery store.

use crate::gallery::ArtworkEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, Column, Container, Image, Row, Space, Text},
    Element, Font, Length, Padding,
};

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub artwork: &'a ArtworkEntry,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousPressed,
    NextPressed,
}

/// Navigation intents propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Previous,
    Next,
}

/// Process a gallery screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::PreviousPressed => Event::Previous,
        Message::NextPressed => Event::Next,
    }
}

/// Render the gallery screen, stacked against the bottom of the window.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            bottom: spacing::XXL,
            ..Padding::ZERO
        })
        .push(Space::new().height(Length::Fill))
        .push(image_frame(ctx.artwork))
        .push(Space::new().height(spacing::LG))
        .push(artwork_info(ctx.artwork))
        .push(Space::new().height(spacing::LG))
        .push(buttons_row())
        .into()
}

fn image_frame(artwork: &ArtworkEntry) -> Element<'_, Message> {
    let image = Image::new(artwork.image().handle().clone())
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(image)
        .height(sizing::FRAME_HEIGHT)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_frame)
        .into()
}

/// Caption card: title on the first line, then the artist in the heaviest
/// weight followed by the year in parentheses.
fn artwork_info(artwork: &ArtworkEntry) -> Element<'_, Message> {
    let title = Text::new(artwork.title())
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Light,
            ..Font::DEFAULT
        });

    let byline = Row::new()
        .push(
            Text::new(artwork.artist())
                .size(typography::BODY)
                .font(Font {
                    weight: Weight::Black,
                    ..Font::DEFAULT
                }),
        )
        .push(Text::new(format_year(artwork.year())).size(typography::BODY));

    let card = Container::new(Column::new().push(title).push(byline))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::caption_card);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}

fn buttons_row<'a>() -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::FillPortion(1)))
        .push(nav_button(PREVIOUS_LABEL, Message::PreviousPressed))
        .push(Space::new().width(Length::FillPortion(2)))
        .push(nav_button(NEXT_LABEL, Message::NextPressed))
        .push(Space::new().width(Length::FillPortion(1)))
        .into()
}

/// Navigation buttons stay enabled at the ends of the gallery; the store
/// ignores moves past a boundary.
fn nav_button<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    let label = Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(label)
        .width(sizing::BUTTON_WIDTH)
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary)
        .on_press(message)
        .into()
}

/// Year suffix shown after the artist, e.g. `"\t(2015)"`.
fn format_year(year: &str) -> String {
    format!("\t({year})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::test_support::sample_entries;

    #[test]
    fn buttons_map_to_navigation_events() {
        assert_eq!(update(&Message::PreviousPressed), Event::Previous);
        assert_eq!(update(&Message::NextPressed), Event::Next);
    }

    #[test]
    fn year_is_wrapped_in_parentheses_after_a_tab() {
        assert_eq!(format_year("2015"), "\t(2015)");
        assert_eq!(format_year(""), "\t()");
    }

    #[test]
    fn view_builds_for_every_sample_artwork() {
        for artwork in &sample_entries() {
            let _element = view(ViewContext { artwork });
        }
    }
}
