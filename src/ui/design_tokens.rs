// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the visual constants shared by every widget.
//!
//! - **Palette**: base, brand and severity colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes and layout breakpoints
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! ```
//! use tiksaver::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert_eq!(backdrop.a, 0.5);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.07, 0.09);
    pub const GRAY_800: Color = Color::from_rgb(0.13, 0.13, 0.16);
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.35, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.8, 0.83);
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Brand colors
    pub const BRAND_PINK: Color = Color::from_rgb(0.996, 0.173, 0.333);
    pub const BRAND_PINK_DARK: Color = Color::from_rgb(0.847, 0.106, 0.267);
    pub const BRAND_CYAN: Color = Color::from_rgb(0.145, 0.957, 0.933);

    // Severity colors (#ff4757, #2ed573, #3742fa)
    pub const ERROR: Color = Color::from_rgb(1.000, 0.278, 0.341);
    pub const SUCCESS: Color = Color::from_rgb(0.180, 0.835, 0.451);
    pub const INFO: Color = Color::from_rgb(0.216, 0.259, 0.980);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.2;
    /// Modal backdrop dimming.
    pub const BACKDROP: f32 = 0.5;
    pub const HOVER: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const INPUT_HEIGHT: f32 = 48.0;

    /// Toasts: `max-width: 300px`, 100px from the top, 20px from the right.
    pub const TOAST_WIDTH: f32 = 300.0;
    pub const TOAST_TOP_OFFSET: f32 = 100.0;
    pub const TOAST_RIGHT_OFFSET: f32 = 20.0;

    pub const MODAL_MAX_WIDTH: f32 = 500.0;
    pub const BULK_TEXTAREA_HEIGHT: f32 = 150.0;

    pub const HERO_MAX_WIDTH: f32 = 720.0;

    /// Windows narrower than this get the hamburger menu.
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading.
    pub const DISPLAY: f32 = 34.0;

    /// Section and modal titles.
    pub const TITLE: f32 = 22.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;

    /// Close glyph in modal corners.
    pub const CLOSE_GLYPH: f32 = 24.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Toasts and input fields.
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Modal panels.
    pub const XL: f32 = 15.0;
    pub const FULL: f32 = 9999.0;
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

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
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

    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::TOAST_WIDTH < sizing::MOBILE_BREAKPOINT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(palette::ERROR, palette::SUCCESS);
        assert_ne!(palette::SUCCESS, palette::INFO);
        assert_ne!(palette::ERROR, palette::INFO);
    }
}
