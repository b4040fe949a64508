// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the slider and the demo application.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Slider geometry defaults
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use segment_slider::ui::design_tokens::{palette, sizing};

let track = palette::GRAY_200;
let radius = sizing::SLIDER_SELECTED_RADIUS;
assert!(radius > sizing::SLIDER_STOP_RADIUS);
# let _ = track;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Track bar thickness
    pub const SLIDER_TRACK: f32 = 4.0;

    /// Unselected stop circle radius, or rectangle height
    pub const SLIDER_STOP_RADIUS: f32 = 5.0;

    /// Rectangle stop width
    pub const SLIDER_STOP_WIDTH: f32 = 4.0;

    /// Selected stop circle radius
    pub const SLIDER_SELECTED_RADIUS: f32 = 10.0;

    /// Gap between a stop and its label
    pub const SLIDER_TEXT_OFFSET: f32 = 6.0;

    /// Side insets; keeps the selected circle from being clipped
    pub const SLIDER_INSETS: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Stop labels, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);

    // Sizing validation
    assert!(sizing::SLIDER_SELECTED_RADIUS > sizing::SLIDER_STOP_RADIUS);
    assert!(sizing::SLIDER_INSETS >= sizing::SLIDER_SELECTED_RADIUS);
    assert!(sizing::SLIDER_TRACK > 0.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
