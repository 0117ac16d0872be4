use std::str::FromStr;

use anyhow::{bail, Result};
use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 24-bit sRGB color.
///
/// Palettes hold colors in this form so that every field is a valid
/// `#rrggbb` triplet by construction; the hex string is only the external
/// encoding (`Display`, serde).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!(
                "invalid hex color: expected 6 hex digits, got {:?}",
                hex
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// Relative luminance in `[0, 1]`.
    ///
    /// Each channel is linearized with the sRGB transfer curve (knee at
    /// 0.03928) and weighted with the BT.709 coefficients.
    pub fn relative_luminance(self) -> f64 {
        fn linearize(c: f64) -> f64 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let srgb: Srgb<f64> = self.to_srgb_u8().into_format();
        0.2126 * linearize(srgb.red) + 0.7152 * linearize(srgb.green) + 0.0722 * linearize(srgb.blue)
    }

    /// Contrast ratio between two colors, in `[1, 21]`.
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Shift every channel by `amount * 255`, rounding and clamping to
    /// `[0, 255]`. Positive amounts brighten, negative amounts darken.
    pub fn shift_brightness(self, amount: f64) -> Color {
        let shift = |c: u8| (f64::from(c) + amount * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
