//! Colour palettes for the builder chrome.

use iced::Color;

/// Colours used by every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_medium: Color,
    pub bg_light: Color,
    pub bg_active: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent: Color,
    /// Canvas background while a field type is dragged over it
    pub drop_target: Color,
    pub danger: Color,

    pub border: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_dark: Color::from_rgb(0.11, 0.11, 0.13),
        bg_medium: Color::from_rgb(0.14, 0.14, 0.16),
        bg_light: Color::from_rgb(0.18, 0.18, 0.20),
        bg_active: Color::from_rgb(0.25, 0.25, 0.28),

        text_primary: Color::from_rgb(0.93, 0.93, 0.93),
        text_secondary: Color::from_rgb(0.65, 0.65, 0.68),
        text_muted: Color::from_rgb(0.45, 0.45, 0.48),

        accent: Color::from_rgb(0.39, 0.40, 0.95),
        drop_target: Color::from_rgb(0.16, 0.16, 0.26),
        danger: Color::from_rgb(0.94, 0.33, 0.31),

        border: Color::from_rgb(0.25, 0.25, 0.28),
    };

    pub const LIGHT: Palette = Palette {
        bg_dark: Color::from_rgb(1.0, 1.0, 1.0),
        bg_medium: Color::from_rgb(0.98, 0.98, 0.98),
        bg_light: Color::from_rgb(0.95, 0.96, 0.96),
        bg_active: Color::from_rgb(0.86, 0.87, 0.89),

        text_primary: Color::from_rgb(0.07, 0.09, 0.15),
        text_secondary: Color::from_rgb(0.29, 0.33, 0.39),
        text_muted: Color::from_rgb(0.42, 0.45, 0.50),

        accent: Color::from_rgb(0.31, 0.27, 0.90),
        drop_target: Color::from_rgb(0.93, 0.95, 1.0),
        danger: Color::from_rgb(0.94, 0.27, 0.27),

        border: Color::from_rgb(0.82, 0.84, 0.86),
    };

    /// Returns the palette for the configured mode.
    pub fn for_mode(dark: bool) -> &'static Palette {
        if dark { &Self::DARK } else { &Self::LIGHT }
    }
}
