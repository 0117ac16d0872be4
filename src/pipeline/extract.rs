use std::collections::hash_map::Entry;
use std::collections::HashMap;

use image::RgbaImage;
use tracing::{debug, warn};

use crate::color::Color;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::pipeline::assign::assign_roles;
use crate::pipeline::load::{FsImageLoader, ImageLoader, ImageSource};
use crate::theme::ColorPalette;

/// A histogram bucket that made it into the ranked result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedColor {
    /// First sampled pixel that landed in the bucket.
    pub color: Color,
    /// How many sampled pixels landed in the bucket.
    pub count: u32,
}

/// Build a coarse color histogram from raw RGBA bytes and return the most
/// populated buckets, most frequent first.
///
/// Only every `sample_stride`-th pixel is visited. Transparent pixels and
/// pixels that are nearly black or nearly white are skipped. Buckets with
/// equal counts keep the order in which they were first seen.
pub fn extract_colors(rgba: &[u8], config: &ExtractorConfig) -> Vec<ExtractedColor> {
    let stride = config.sample_stride.max(1);
    let bucket_size = config.bucket_size.max(1);

    let mut buckets: Vec<ExtractedColor> = Vec::new();
    let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();
    let mut sampled = 0usize;

    for px in rgba.chunks_exact(4).step_by(stride) {
        sampled += 1;
        let (r, g, b, a) = (px[0], px[1], px[2], px[3]);

        if a < config.min_alpha {
            continue;
        }
        let brightness = (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0;
        if brightness < config.min_brightness || brightness > config.max_brightness {
            continue;
        }

        let key = (r / bucket_size, g / bucket_size, b / bucket_size);
        match index.entry(key) {
            Entry::Occupied(slot) => buckets[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(buckets.len());
                buckets.push(ExtractedColor {
                    color: Color::new(r, g, b),
                    count: 1,
                });
            }
        }
    }

    let distinct = buckets.len();
    // Stable: ties stay in first-seen order.
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(config.max_colors);

    debug!(sampled, distinct, kept = buckets.len(), "built color histogram");
    buckets
}

/// Derive a palette from decoded pixels.
pub fn palette_from_rgba(
    image: &RgbaImage,
    config: &ExtractorConfig,
) -> Result<ColorPalette, ExtractError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ExtractError::EmptyImage);
    }
    let colors = extract_colors(image.as_raw(), config);
    assign_roles(&colors).ok_or(ExtractError::NoQualifyingPixels)
}

/// Turns images into palettes.
///
/// [`PaletteExtractor::extract`] never fails: anything that goes wrong
/// resolves to [`ColorPalette::DEFAULT`].
#[derive(Debug, Clone)]
pub struct PaletteExtractor<L = FsImageLoader> {
    loader: L,
    config: ExtractorConfig,
}

impl PaletteExtractor<FsImageLoader> {
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_loader(FsImageLoader, config)
    }
}

impl Default for PaletteExtractor<FsImageLoader> {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl<L: ImageLoader> PaletteExtractor<L> {
    pub fn with_loader(loader: L, config: ExtractorConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a palette, reporting why it could not be derived.
    pub async fn try_extract(&self, source: &ImageSource) -> Result<ColorPalette, ExtractError> {
        let image = self.loader.load(source).await?;
        palette_from_rgba(&image, &self.config)
    }

    /// Extract a palette, falling back to the default palette on any error.
    pub async fn extract(&self, source: &ImageSource) -> ColorPalette {
        match self.try_extract(source).await {
            Ok(palette) => palette,
            Err(err) => {
                warn!(%source, error = %err, "using default palette");
                ColorPalette::DEFAULT
            }
        }
    }
}
