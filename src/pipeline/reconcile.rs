use crate::cli::ThemePreference;
use crate::theme::{
    ColorPalette, DARK_BACKGROUND, DARK_SURFACE, DARK_TEXT, DARK_TEXT_SECONDARY,
    LIGHT_BACKGROUND, LIGHT_SURFACE, LIGHT_TEXT, LIGHT_TEXT_SECONDARY,
};

/// Bring an extracted palette in line with the user's light/dark preference.
///
/// A palette whose polarity already matches is returned unchanged.
/// Otherwise the background, surface and text colors are replaced with the
/// fixed set for `preference`. Going dark-to-light also swaps `primary` and
/// `accent` so the extracted hue family stays visible against the white
/// surfaces.
///
/// This is not an involution: reconciling back to dark restores the dark
/// surfaces and text but leaves `primary` and `accent` swapped.
pub fn reconcile(palette: ColorPalette, preference: ThemePreference) -> ColorPalette {
    match (preference, palette.is_dark) {
        (ThemePreference::Light, true) => ColorPalette {
            primary: palette.accent,
            accent: palette.primary,
            background: LIGHT_BACKGROUND,
            surface: LIGHT_SURFACE,
            text: LIGHT_TEXT,
            text_secondary: LIGHT_TEXT_SECONDARY,
            is_dark: false,
            ..palette
        },
        (ThemePreference::Dark, false) => ColorPalette {
            background: DARK_BACKGROUND,
            surface: DARK_SURFACE,
            text: DARK_TEXT,
            text_secondary: DARK_TEXT_SECONDARY,
            is_dark: true,
            ..palette
        },
        _ => palette,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn dark_extracted() -> ColorPalette {
        ColorPalette {
            primary: Color::from_hex("#100020").unwrap(),
            secondary: Color::from_hex("#334455").unwrap(),
            background: Color::from_hex("#000000").unwrap(),
            surface: Color::from_hex("#000000").unwrap(),
            text: DARK_TEXT,
            text_secondary: DARK_TEXT_SECONDARY,
            accent: Color::from_hex("#ffaa00").unwrap(),
            is_dark: true,
        }
    }

    fn light_extracted() -> ColorPalette {
        ColorPalette {
            primary: Color::new(169, 169, 149),
            secondary: Color::new(49, 99, 149),
            background: Color::WHITE,
            surface: Color::WHITE,
            text: LIGHT_TEXT,
            text_secondary: LIGHT_TEXT_SECONDARY,
            accent: Color::new(75, 125, 175),
            is_dark: false,
        }
    }

    #[test]
    fn dark_palette_under_light_preference() {
        let p = reconcile(dark_extracted(), ThemePreference::Light);
        assert_eq!(p.primary.to_hex(), "#ffaa00");
        assert_eq!(p.accent.to_hex(), "#100020");
        assert_eq!(p.secondary.to_hex(), "#334455");
        assert_eq!(p.background.to_hex(), "#ffffff");
        assert_eq!(p.surface.to_hex(), "#f8fafc");
        assert_eq!(p.text.to_hex(), "#1e293b");
        assert_eq!(p.text_secondary.to_hex(), "#475569");
        assert!(!p.is_dark);
    }

    #[test]
    fn light_palette_under_dark_preference() {
        let original = light_extracted();
        let p = reconcile(original, ThemePreference::Dark);
        assert_eq!(p.primary, original.primary);
        assert_eq!(p.secondary, original.secondary);
        assert_eq!(p.accent, original.accent);
        assert_eq!(p.background.to_hex(), "#0f172a");
        assert_eq!(p.surface.to_hex(), "#1e293b");
        assert_eq!(p.text.to_hex(), "#f8fafc");
        assert_eq!(p.text_secondary.to_hex(), "#cbd5e1");
        assert!(p.is_dark);
    }

    #[test]
    fn matching_polarity_is_a_no_op() {
        assert_eq!(reconcile(dark_extracted(), ThemePreference::Dark), dark_extracted());
        assert_eq!(
            reconcile(light_extracted(), ThemePreference::Light),
            light_extracted()
        );
    }

    #[test]
    fn reconciling_twice_with_same_preference_is_stable() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            let once = reconcile(dark_extracted(), pref);
            assert_eq!(reconcile(once, pref), once);
        }
    }

    #[test]
    fn dark_light_dark_restores_surfaces_but_not_hues() {
        let there = reconcile(dark_extracted(), ThemePreference::Light);
        let back = reconcile(there, ThemePreference::Dark);

        assert!(back.is_dark);
        assert_eq!(back.background, DARK_BACKGROUND);
        assert_eq!(back.surface, DARK_SURFACE);
        assert_eq!(back.text, DARK_TEXT);
        assert_eq!(back.text_secondary, DARK_TEXT_SECONDARY);
        // The swap is one-directional.
        assert_eq!(back.primary, dark_extracted().accent);
        assert_eq!(back.accent, dark_extracted().primary);
    }
}
