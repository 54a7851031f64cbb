//! Format types for PPTX presentations.

use crate::ooxml::opc::constants::content_type as ct;

/// Image format types supported by PPTX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
            Self::Gif => ct::GIF,
            Self::Bmp => ct::BMP,
            Self::Tiff => ct::TIFF,
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        // BMP: 42 4D (BM)
        if bytes.starts_with(&[0x42, 0x4D]) {
            return Some(Self::Bmp);
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        None
    }
}

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The `algn` attribute value.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Run formatting properties for text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
}

/// One paragraph of a text box: a single run plus paragraph properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    pub text: String,
    pub align: TextAlign,
    /// Space after the paragraph in points
    pub space_after: Option<f64>,
    pub format: TextFormat,
}

impl TextParagraph {
    /// Create a paragraph with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder method: set alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Builder method: set space after in points.
    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Builder method: set run formatting.
    pub fn format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_format() {
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0x89, b'P', b'N', b'G', 0x0D]),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::detect_from_bytes(b"GIF89a"),
            Some(ImageFormat::Gif)
        );
        assert_eq!(ImageFormat::detect_from_bytes(b"BM\0\0"), Some(ImageFormat::Bmp));
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0x4D, 0x4D, 0x00, 0x2A]),
            Some(ImageFormat::Tiff)
        );
        assert_eq!(ImageFormat::detect_from_bytes(b"%PDF-1.7"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"BM"), None);
    }

    #[test]
    fn test_paragraph_builder() {
        let para = TextParagraph::new("22 TB/s")
            .align(TextAlign::Center)
            .space_after(14.0);
        assert_eq!(para.align.as_attr(), "ctr");
        assert_eq!(para.space_after, Some(14.0));
        assert_eq!(para.format, TextFormat::default());
    }
}
