/// Tunables for dominant-color extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig {
    /// Visit every Nth pixel.
    pub sample_stride: usize,
    /// Pixels with a lower alpha are treated as transparent.
    pub min_alpha: u8,
    /// Pixels whose mean channel value is below this are skipped.
    pub min_brightness: f32,
    /// Pixels whose mean channel value is above this are skipped.
    pub max_brightness: f32,
    /// Channel width of one histogram bucket.
    pub bucket_size: u8,
    /// How many ranked buckets survive.
    pub max_colors: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sample_stride: 10,
            min_alpha: 128,
            min_brightness: 20.0,
            max_brightness: 235.0,
            bucket_size: 10,
            max_colors: 5,
        }
    }
}
