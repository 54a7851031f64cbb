//! Slide layout engine.
//!
//! The layout engine is pure: it maps a canvas and a [`LayoutKind`] to a set
//! of non-overlapping [`LayoutZone`]s, and maps line markup to text styles.
//! Nothing in this module performs I/O or touches the presentation writer.
//!
//! # Example
//!
//! ```rust
//! use longan::layout::{LayoutEngine, LayoutGeometry};
//!
//! let engine = LayoutEngine::new(LayoutGeometry::widescreen());
//! let split = engine.split();
//! assert!(split.text.right() <= split.image.left);
//! ```

pub mod engine;
pub mod geometry;
pub mod markup;
pub mod style;
pub mod zone;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use engine::{
    Anchor, BigNumberZones, ClosingZones, CoverZones, LayoutEngine, SlideZones, SplitZones,
    StandardImageZones, StandardZones,
};
pub use geometry::{Canvas, CanvasPreset, LayoutGeometry};
pub use markup::{MarkupLine, Tier, parse_line};
pub use style::{Alignment, Column, FontLimits, Palette, TextStyle, Typography};
pub use zone::LayoutZone;

/// The arrangement of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Title on top, tiered body lines below.
    #[default]
    Standard,
    /// Text column on the left, image on the right.
    Split,
    /// A single standout statistic with unit and explanation.
    BigNumber,
    /// Cover slide: title, centered image, subtitle.
    #[serde(alias = "cover")]
    Title,
    /// Closing slide: large title and subtitle.
    Closing,
}

impl LayoutKind {
    /// All kinds, in declaration order.
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Standard,
        LayoutKind::Split,
        LayoutKind::BigNumber,
        LayoutKind::Title,
        LayoutKind::Closing,
    ];

    /// Name used in deck files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Standard => "standard",
            LayoutKind::Split => "split",
            LayoutKind::BigNumber => "big_number",
            LayoutKind::Title => "title",
            LayoutKind::Closing => "closing",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = crate::common::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(LayoutKind::Standard),
            "split" => Ok(LayoutKind::Split),
            "big_number" => Ok(LayoutKind::BigNumber),
            "title" | "cover" => Ok(LayoutKind::Title),
            "closing" => Ok(LayoutKind::Closing),
            other => Err(crate::common::Error::Config(format!(
                "unknown layout kind '{}'",
                other
            ))),
        }
    }
}
