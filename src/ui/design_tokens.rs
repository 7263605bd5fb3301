// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, opacities, spacing and sizes shared by every view of the gallery.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use tribute_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.067, 0.067); // #111
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Page and lightbox surfaces
    pub const NAVY_900: Color = Color::from_rgb(0.039, 0.078, 0.157); // rgb(10,20,40)
    pub const NAVY_800: Color = Color::from_rgb(0.078, 0.118, 0.235); // rgb(20,30,60)
    pub const NAVY_700: Color = Color::from_rgb(0.12, 0.17, 0.3);

    /// Accent ring around the featured photo.
    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 0.878, 1.0); // #00e0ff

    // Hover color shift gradient stops
    pub const SHIFT_MAGENTA: Color = Color::from_rgb(1.0, 0.0, 0.588); // rgb(255,0,150)
    pub const SHIFT_BLUE: Color = Color::from_rgb(0.0, 0.588, 1.0); // rgb(0,150,255)

    pub const HEART_RED: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_CONTROL: f32 = 0.6;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop at full strength.
    pub const BACKDROP: f32 = 0.92;

    /// Lightbox card surface.
    pub const CARD: f32 = 0.98;

    /// Gradient stops of the hover color shift.
    pub const SHIFT_STOP: f32 = 0.5;

    /// Strongest veil drawn over an item at full entrance blur.
    pub const BLUR_VEIL_MAX: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Inset of each tile inside its masonry box.
    pub const TILE_GUTTER: f32 = 8.0;

    /// Diameter of the lightbox close button.
    pub const CLOSE_BUTTON: f32 = 40.0;

    /// Fraction of the window the lightbox image may occupy.
    pub const LIGHTBOX_FRACTION: f32 = 0.8;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Greeting title.
    pub const DISPLAY: f32 = 48.0;

    /// Greeting subtitle.
    pub const TITLE_LG: f32 = 26.0;

    pub const TITLE_MD: f32 = 20.0;

    /// Close button glyph.
    pub const GLYPH: f32 = 24.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Accent ring of the featured photo in the lightbox.
    pub const WIDTH_ACCENT: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const IMAGE: f32 = 16.0;
    pub const CARD: f32 = 18.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const TILE: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 50.0,
    };

    pub const CARD: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 48.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::BLUR_VEIL_MAX > 0.0 && opacity::BLUR_VEIL_MAX <= 1.0);

    // Sizing validation
    assert!(sizing::LIGHTBOX_FRACTION > 0.0 && sizing::LIGHTBOX_FRACTION <= 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::CARD >= radius::IMAGE);

    // Color validation
    assert!(palette::ACCENT_CYAN.b >= 0.0 && palette::ACCENT_CYAN.b <= 1.0);
};
