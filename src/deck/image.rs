//! Image loading for picture elements.
//!
//! Images are optional decoration: a path that cannot be read or decoded
//! resolves to `None` and the slide is built without its picture.

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ooxml::pptx::ImageFormat;

/// An image read into memory, with its pixel size.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl LoadedImage {
    /// Sniff the format and read the pixel size from the image header.
    ///
    /// Returns `None` for data that is not a supported still image.
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Option<Self> {
        let path = path.into();
        let format = ImageFormat::detect_from_bytes(&data)?;
        let (pixel_width, pixel_height) = image::ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .map_err(|e| debug!(path = %path.display(), error = %e, "image header unreadable"))
            .ok()?;

        Some(Self {
            path,
            data,
            format,
            pixel_width,
            pixel_height,
        })
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("bytes", &self.data.len())
            .field("pixel_width", &self.pixel_width)
            .field("pixel_height", &self.pixel_height)
            .finish()
    }
}

/// Resolves image paths named in slide specs.
pub trait ImageSource {
    /// Load the image at `path`, or `None` when it is missing or unusable.
    fn load(&self, path: &Path) -> Option<LoadedImage>;
}

/// Reads images from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FsImageSource {
    base_dir: Option<PathBuf>,
}

impl FsImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir` instead of the working directory.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageSource for FsImageSource {
    fn load(&self, path: &Path) -> Option<LoadedImage> {
        let resolved = self.resolve(path);
        let data = match std::fs::read(&resolved) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %resolved.display(), error = %e, "image not readable");
                return None;
            }
        };
        let image = LoadedImage::from_bytes(&resolved, data);
        if image.is_none() {
            debug!(path = %resolved.display(), "not a supported image");
        }
        image
    }
}

/// In-memory images keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageSource {
    images: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, data: Vec<u8>) {
        self.images.insert(path.into(), data);
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        self.insert(path, data);
        self
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, path: &Path) -> Option<LoadedImage> {
        let data = self.images.get(path)?;
        LoadedImage::from_bytes(path, data.clone())
    }
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image::RgbImage::new(width, height)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_dimensions() {
        let image = LoadedImage::from_bytes("chart.png", png_bytes(40, 30)).unwrap();
        assert_eq!(image.pixel_size(), (40, 30));
        assert_eq!(image.format, ImageFormat::Png);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(LoadedImage::from_bytes("notes.txt", b"hello world".to_vec()).is_none());
        // Correct magic, truncated header
        assert!(LoadedImage::from_bytes("broken.png", vec![0x89, b'P', b'N', b'G']).is_none());
    }

    #[test]
    fn test_fs_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsImageSource::with_base_dir(dir.path());
        assert!(source.load(Path::new("absent.png")).is_none());
    }

    #[test]
    fn test_fs_source_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img/cover.png"), png_bytes(16, 9)).unwrap();

        let source = FsImageSource::with_base_dir(dir.path());
        let image = source.load(Path::new("img/cover.png")).unwrap();
        assert_eq!(image.pixel_size(), (16, 9));
        assert_eq!(image.path, dir.path().join("img/cover.png"));
    }

    #[test]
    fn test_memory_source() {
        let source = MemoryImageSource::new().with_image("a.png", png_bytes(2, 2));
        assert!(source.load(Path::new("a.png")).is_some());
        assert!(source.load(Path::new("b.png")).is_none());
    }
}
