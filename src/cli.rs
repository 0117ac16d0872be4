use std::path::PathBuf;

use clap::Parser;

use crate::config::ExtractorConfig;

/// Derive readable color palettes from images.
#[derive(Parser, Debug)]
#[command(name = "imgtheme", version, about)]
pub struct Args {
    /// Paths to the input images
    #[arg(required = true, num_args = 1..)]
    pub images: Vec<PathBuf>,

    /// Reconcile palettes against a light or dark preference
    /// (the raw extracted palette is printed if omitted)
    #[arg(short, long, value_enum)]
    pub preference: Option<ThemePreference>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, conflicts_with = "tui")]
    pub output: Option<PathBuf>,

    /// Launch the interactive slideshow
    #[arg(long)]
    pub tui: bool,

    /// Sample every Nth pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub stride: u32,

    /// Number of dominant colors kept after ranking
    #[arg(long = "max-colors", default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_colors: u32,
}

impl Args {
    /// Extraction settings selected on the command line.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            sample_stride: self.stride as usize,
            max_colors: self.max_colors as usize,
            ..ExtractorConfig::default()
        }
    }
}

/// The user's light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Light => f.write_str("light"),
            ThemePreference::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object per image
    Json,
    /// CSS custom properties per image
    Css,
}
