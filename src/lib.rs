pub mod backends;
pub mod cli;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod theme;
pub mod tui;

pub use cli::ThemePreference;
pub use color::Color;
pub use config::ExtractorConfig;
pub use controller::{ControllerState, PaletteReader, ThemeController, UpdateOutcome};
pub use error::ExtractError;
pub use pipeline::extract::PaletteExtractor;
pub use pipeline::load::{FsImageLoader, ImageLoader, ImageSource};
pub use theme::ColorPalette;
