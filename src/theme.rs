use serde::{Deserialize, Serialize};

use crate::cli::ThemePreference;
use crate::color::Color;

/// Text colors used on dark surfaces.
pub const DARK_TEXT: Color = Color::new(0xf8, 0xfa, 0xfc);
pub const DARK_TEXT_SECONDARY: Color = Color::new(0xcb, 0xd5, 0xe1);

/// Text colors used on light surfaces.
pub const LIGHT_TEXT: Color = Color::new(0x1e, 0x29, 0x3b);
pub const LIGHT_TEXT_SECONDARY: Color = Color::new(0x47, 0x55, 0x69);

/// Fixed background/surface pair for dark palettes.
pub const DARK_BACKGROUND: Color = Color::new(0x0f, 0x17, 0x2a);
pub const DARK_SURFACE: Color = Color::new(0x1e, 0x29, 0x3b);

/// Fixed background/surface pair for light palettes.
pub const LIGHT_BACKGROUND: Color = Color::new(0xff, 0xff, 0xff);
pub const LIGHT_SURFACE: Color = Color::new(0xf8, 0xfa, 0xfc);

const BRAND_PRIMARY: Color = Color::new(0x8b, 0x5c, 0xf6);
const BRAND_SECONDARY: Color = Color::new(0x3b, 0x82, 0xf6);
const BRAND_ACCENT: Color = Color::new(0xec, 0x48, 0x99);

/// A complete semantic color palette derived from an image.
///
/// Palettes are plain values: extraction and reconciliation always build a
/// new one instead of mutating an existing palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    /// True when the palette is meant for light text on a dark surface.
    pub is_dark: bool,
}

impl ColorPalette {
    /// The fallback palette returned whenever extraction cannot produce
    /// anything better.
    pub const DEFAULT: ColorPalette = ColorPalette {
        primary: BRAND_PRIMARY,
        secondary: BRAND_SECONDARY,
        background: DARK_BACKGROUND,
        surface: DARK_SURFACE,
        text: DARK_TEXT,
        text_secondary: DARK_TEXT_SECONDARY,
        accent: BRAND_ACCENT,
        is_dark: true,
    };

    /// The brand palette with its surfaces matched to `preference`.
    ///
    /// Used when the preference flips and no image-driven palette is
    /// available yet.
    pub fn neutral(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::DEFAULT,
            ThemePreference::Light => Self {
                background: LIGHT_BACKGROUND,
                surface: LIGHT_SURFACE,
                text: LIGHT_TEXT,
                text_secondary: LIGHT_TEXT_SECONDARY,
                is_dark: false,
                ..Self::DEFAULT
            },
        }
    }

    /// Which preference this palette already satisfies.
    pub fn polarity(&self) -> ThemePreference {
        if self.is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// The seven colors with their field names, in declaration order.
    pub fn named_colors(&self) -> [(&'static str, Color); 7] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("accent", self.accent),
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_values() {
        let p = ColorPalette::default();
        assert_eq!(p.primary.to_hex(), "#8b5cf6");
        assert_eq!(p.secondary.to_hex(), "#3b82f6");
        assert_eq!(p.background.to_hex(), "#0f172a");
        assert_eq!(p.surface.to_hex(), "#1e293b");
        assert_eq!(p.text.to_hex(), "#f8fafc");
        assert_eq!(p.text_secondary.to_hex(), "#cbd5e1");
        assert_eq!(p.accent.to_hex(), "#ec4899");
        assert!(p.is_dark);
    }

    #[test]
    fn neutral_dark_is_default() {
        assert_eq!(ColorPalette::neutral(ThemePreference::Dark), ColorPalette::DEFAULT);
    }

    #[test]
    fn neutral_light_swaps_surfaces_keeps_brand_hues() {
        let p = ColorPalette::neutral(ThemePreference::Light);
        assert_eq!(p.background.to_hex(), "#ffffff");
        assert_eq!(p.surface.to_hex(), "#f8fafc");
        assert_eq!(p.text.to_hex(), "#1e293b");
        assert_eq!(p.text_secondary.to_hex(), "#475569");
        assert_eq!(p.primary, ColorPalette::DEFAULT.primary);
        assert_eq!(p.accent, ColorPalette::DEFAULT.accent);
        assert!(!p.is_dark);
    }

    #[test]
    fn polarity_follows_is_dark() {
        assert_eq!(ColorPalette::DEFAULT.polarity(), ThemePreference::Dark);
        assert_eq!(
            ColorPalette::neutral(ThemePreference::Light).polarity(),
            ThemePreference::Light
        );
    }

    #[test]
    fn json_uses_camel_case_hex_fields() {
        let json = serde_json::to_value(ColorPalette::DEFAULT).unwrap();
        assert_eq!(json["textSecondary"], "#cbd5e1");
        assert_eq!(json["isDark"], true);
        assert_eq!(json["primary"], "#8b5cf6");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn json_round_trip_preserves_palette() {
        let json = serde_json::to_string(&ColorPalette::neutral(ThemePreference::Light)).unwrap();
        let back: ColorPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorPalette::neutral(ThemePreference::Light));
    }
}
