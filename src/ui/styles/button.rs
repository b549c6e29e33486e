// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Filled brand-colored button used for gallery navigation.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::SM),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_700, shadow::NONE),
        button::Status::Active | button::Status::Disabled => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn primary_button_changes_on_hover() {
        let theme = Theme::Light;
        let active = primary(&theme, button::Status::Active);
        let hover = primary(&theme, button::Status::Hovered);
        assert_ne!(active.background, hover.background);
    }
}
