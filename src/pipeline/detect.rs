use crate::cli::ThemePreference;
use crate::color::Color;

/// Relative luminance below which a dominant color yields a dark palette.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

/// Decide whether the palette built around `primary` should be dark or light.
pub fn detect_mode(primary: Color) -> ThemePreference {
    if primary.relative_luminance() < DARK_LUMINANCE_THRESHOLD {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_dark() {
        assert_eq!(detect_mode(Color::BLACK), ThemePreference::Dark);
    }

    #[test]
    fn white_is_light() {
        assert_eq!(detect_mode(Color::WHITE), ThemePreference::Light);
    }

    #[test]
    fn threshold_falls_between_gray_187_and_188() {
        // Luminance 0.4969 vs 0.5029.
        assert_eq!(detect_mode(Color::new(187, 187, 187)), ThemePreference::Dark);
        assert_eq!(detect_mode(Color::new(188, 188, 188)), ThemePreference::Light);
    }

    #[test]
    fn classification_is_monotonic_in_gray_level() {
        let mut seen_light = false;
        for v in 0..=255u8 {
            let mode = detect_mode(Color::new(v, v, v));
            if seen_light {
                assert_eq!(mode, ThemePreference::Light, "gray {v} flipped back to dark");
            }
            seen_light |= mode == ThemePreference::Light;
        }
        assert!(seen_light);
    }
}
