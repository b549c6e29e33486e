// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Elevated card holding the artwork, outlined in gray.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_FRAME,
            radius: radius::NONE.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Elevated card holding the caption.
pub fn caption_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}
