pub mod css;
pub mod json;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::theme::ColorPalette;

/// A palette labelled with the image it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeEntry {
    pub name: String,
    #[serde(flatten)]
    pub palette: ColorPalette,
}

impl ThemeEntry {
    /// Label a palette with the file stem of `path`.
    pub fn from_path(path: &Path, palette: ColorPalette) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Self { name, palette }
    }
}

/// An output format for palettes consumed by presentation code.
pub trait ThemeBackend {
    fn name(&self) -> &str;

    /// Render all entries into one document.
    fn serialize(&self, entries: &[ThemeEntry]) -> Result<String>;

    /// Write the rendered document to `path`.
    fn write_to(&self, entries: &[ThemeEntry], path: &Path) -> Result<()> {
        let content = self.serialize(entries)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {} output to {}", self.name(), path.display()))?;
        Ok(())
    }
}

/// The backend for a command-line format choice.
pub fn backend_for(format: OutputFormat) -> Box<dyn ThemeBackend> {
    match format {
        OutputFormat::Json => Box::new(json::JsonBackend),
        OutputFormat::Css => Box::new(css::CssBackend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_is_file_stem() {
        let entry = ThemeEntry::from_path(Path::new("/photos/sunset.final.jpg"), ColorPalette::DEFAULT);
        assert_eq!(entry.name, "sunset.final");
    }

    #[test]
    fn entry_without_file_name_gets_placeholder() {
        let entry = ThemeEntry::from_path(Path::new("/"), ColorPalette::DEFAULT);
        assert_eq!(entry.name, "image");
    }

    #[test]
    fn backend_for_matches_format() {
        assert_eq!(backend_for(OutputFormat::Json).name(), "JSON");
        assert_eq!(backend_for(OutputFormat::Css).name(), "CSS");
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        let entries = [ThemeEntry::from_path(Path::new("a.png"), ColorPalette::DEFAULT)];
        let backend = json::JsonBackend;

        backend.write_to(&entries, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, backend.serialize(&entries).unwrap());
    }

    #[test]
    fn write_to_missing_directory_fails_with_context() {
        let entries = [ThemeEntry::from_path(Path::new("a.png"), ColorPalette::DEFAULT)];
        let err = css::CssBackend
            .write_to(&entries, Path::new("/nonexistent/dir/out.css"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to write CSS output"));
    }
}
