use crate::cli::ThemePreference;
use crate::pipeline::detect::detect_mode;
use crate::pipeline::extract::ExtractedColor;
use crate::theme::{
    ColorPalette, DARK_TEXT, DARK_TEXT_SECONDARY, LIGHT_TEXT, LIGHT_TEXT_SECONDARY,
};

/// Map ranked dominant colors onto the semantic palette roles.
///
/// The most frequent color becomes `primary` and the runner-up `secondary`.
/// Background, surface and accent are brightness shifts of those two, chosen
/// so the fixed text colors always stay readable on them. Returns `None`
/// when there are no colors to work with.
pub fn assign_roles(colors: &[ExtractedColor]) -> Option<ColorPalette> {
    let primary = colors.first()?.color;
    let secondary = colors.get(1).map_or(primary, |c| c.color);

    let palette = match detect_mode(primary) {
        ThemePreference::Dark => ColorPalette {
            primary,
            secondary,
            background: primary.shift_brightness(-0.8),
            surface: primary.shift_brightness(-0.6),
            text: DARK_TEXT,
            text_secondary: DARK_TEXT_SECONDARY,
            accent: secondary.shift_brightness(0.3),
            is_dark: true,
        },
        ThemePreference::Light => ColorPalette {
            primary: primary.shift_brightness(-0.2),
            secondary: secondary.shift_brightness(-0.2),
            background: primary.shift_brightness(0.8),
            surface: primary.shift_brightness(0.9),
            text: LIGHT_TEXT,
            text_secondary: LIGHT_TEXT_SECONDARY,
            accent: secondary.shift_brightness(-0.1),
            is_dark: false,
        },
    };
    Some(palette)
}
