use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use image::RgbaImage;

use crate::error::ExtractError;

/// Something that can be turned into an RGBA pixel buffer.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// Pixels that are already decoded.
    Pixels(Arc<RgbaImage>),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<RgbaImage> for ImageSource {
    fn from(image: RgbaImage) -> Self {
        ImageSource::Pixels(Arc::new(image))
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Pixels(image) => {
                write!(f, "<{}x{} pixels>", image.width(), image.height())
            }
        }
    }
}

/// Produces decoded pixels for an [`ImageSource`].
///
/// Loading may suspend (disk, decoding); the caller's task yields while it
/// waits.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, source: &ImageSource) -> Result<RgbaImage, ExtractError>;
}

#[async_trait]
impl<T: ImageLoader + ?Sized> ImageLoader for Arc<T> {
    async fn load(&self, source: &ImageSource) -> Result<RgbaImage, ExtractError> {
        (**self).load(source).await
    }
}

/// Loads images from the local filesystem with the `image` crate.
///
/// Decoding happens on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, source: &ImageSource) -> Result<RgbaImage, ExtractError> {
        match source {
            ImageSource::Pixels(image) => Ok(RgbaImage::clone(image)),
            ImageSource::Path(path) => {
                let path = path.clone();
                tokio::task::spawn_blocking(move || load_rgba(&path)).await?
            }
        }
    }
}

/// Decode an image file into RGBA8, whatever its on-disk pixel format.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| ExtractError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}
