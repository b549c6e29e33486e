// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's visual constants in one place.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale
- **Sizing**: Fixed component sizes of the gallery screen
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Card elevation

## Examples

```
use art_space::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
let frame_border = palette::GRAY_400;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.53, 0.53, 0.53);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Drop shadow under cards.
    pub const SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 15.0;
    pub const MD: f32 = 20.0;
    pub const LG: f32 = 30.0;
    pub const XL: f32 = 35.0;
    pub const XXL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed height of the artwork frame.
    pub const FRAME_HEIGHT: f32 = 450.0;

    // Navigation buttons
    pub const BUTTON_WIDTH: f32 = 120.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artwork title on the caption card.
    pub const TITLE_XL: f32 = 32.0;

    /// Standard body - artist and year, button labels
    pub const BODY: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Gray outline around the artwork frame.
    pub const WIDTH_FRAME: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Card elevation.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 15.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    assert!(typography::TITLE_XL > typography::BODY);

    // The image must keep some room inside its frame.
    assert!(sizing::FRAME_HEIGHT > 2.0 * (spacing::XL + border::WIDTH_FRAME));

    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
};
