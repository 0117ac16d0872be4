use std::path::PathBuf;

use thiserror::Error;

/// Why an extraction fell back to the default palette.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported or corrupt image: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels")]
    EmptyImage,

    #[error("no sampled pixel survived filtering")]
    NoQualifyingPixels,

    #[error("image decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
