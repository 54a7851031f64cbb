//! Layout geometry: the canvas plus every distance the zones are built from.
//!
//! All distances are [`Length`]s, so deck files can write them as bare inches
//! or with a unit suffix. Only the canvas differs between presets; the other
//! distances keep their defaults unless overridden.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::{Error, Length, Result};

use super::LayoutKind;
use super::engine::LayoutEngine;
use super::zone::LayoutZone;

/// Widescreen canvas width: 13.333 in.
pub const WIDESCREEN_WIDTH_EMU: i64 = 12_192_000;
/// Standard (4:3) canvas width: 10 in.
pub const STANDARD_WIDTH_EMU: i64 = 9_144_000;
/// Canvas height shared by both presets: 7.5 in.
pub const CANVAS_HEIGHT_EMU: i64 = 6_858_000;

/// Named canvas sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasPreset {
    /// 16:9, 13.333 in by 7.5 in.
    #[default]
    #[serde(alias = "16x9", alias = "16:9")]
    Widescreen,
    /// 4:3, 10 in by 7.5 in.
    #[serde(alias = "4x3", alias = "4:3")]
    Standard,
}

impl CanvasPreset {
    pub fn canvas(&self) -> Canvas {
        match self {
            CanvasPreset::Widescreen => Canvas::from_emus(WIDESCREEN_WIDTH_EMU, CANVAS_HEIGHT_EMU),
            CanvasPreset::Standard => Canvas::from_emus(STANDARD_WIDTH_EMU, CANVAS_HEIGHT_EMU),
        }
    }
}

/// Slide canvas size.
///
/// In deck files a canvas is either a preset name (`widescreen`, `standard`,
/// `16x9`, `4x3`) or an explicit `{ width, height }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Canvas {
    pub width: Length,
    pub height: Length,
}

impl Canvas {
    pub const fn from_emus(width: i64, height: i64) -> Self {
        Self {
            width: Length::from_emus(width),
            height: Length::from_emus(height),
        }
    }

    /// The whole canvas as a zone.
    pub fn zone(&self) -> LayoutZone {
        LayoutZone::new(0, 0, self.width.emus(), self.height.emus())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        CanvasPreset::Widescreen.canvas()
    }
}

impl From<CanvasPreset> for Canvas {
    fn from(preset: CanvasPreset) -> Self {
        preset.canvas()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCanvas {
    Preset(CanvasPreset),
    Size { width: Length, height: Length },
}

impl<'de> Deserialize<'de> for Canvas {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawCanvas::deserialize(deserializer)? {
            RawCanvas::Preset(preset) => Ok(preset.canvas()),
            RawCanvas::Size { width, height } => Ok(Canvas { width, height }),
        }
    }
}

/// Every distance the layout engine derives zones from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutGeometry {
    pub canvas: Canvas,

    /// Left and right inset of titles and the split text column.
    pub margin: Length,
    pub title_top: Length,
    pub title_height: Length,

    /// Left and right inset of the full-width body and the explanation line.
    pub body_inset: Length,
    pub body_top: Length,
    pub body_height: Length,
    /// Text column width on a standard slide that carries a picture.
    pub standard_text_width: Length,

    pub split_text_width: Length,
    pub split_gap: Length,
    /// Fixed image column width. When absent the column runs to the right margin.
    pub split_image_width: Option<Length>,

    pub big_number_title_height: Length,
    pub number_top: Length,
    pub number_height: Length,
    pub unit_height: Length,
    pub explanation_gap: Length,
    pub explanation_height: Length,

    pub cover_title_top: Length,
    pub cover_title_height: Length,
    pub cover_image_top: Length,
    pub cover_image_max_height: Length,
    pub cover_subtitle_top: Length,
    pub subtitle_height: Length,

    pub closing_title_top: Length,
    pub closing_title_height: Length,
    pub closing_subtitle_top: Length,

    pub signature_width: Length,
    pub signature_height: Length,
    /// Distance from the bottom edge of the canvas to the top of the signature block.
    pub signature_bottom_inset: Length,

    pub footer_height: Length,
}

impl LayoutGeometry {
    /// Geometry for a canvas, with every other distance at its default.
    pub fn for_canvas(canvas: Canvas) -> Self {
        let inch = Length::from_inches;
        Self {
            canvas,
            margin: inch(0.5),
            title_top: inch(0.3),
            title_height: inch(1.5),
            body_inset: inch(1.0),
            body_top: inch(2.0),
            body_height: inch(4.5),
            standard_text_width: inch(4.5),
            split_text_width: inch(5.5),
            split_gap: inch(0.5),
            split_image_width: None,
            big_number_title_height: inch(1.2),
            number_top: inch(2.2),
            number_height: inch(2.0),
            unit_height: inch(0.8),
            explanation_gap: inch(0.2),
            explanation_height: inch(1.0),
            cover_title_top: inch(0.4),
            cover_title_height: inch(1.8),
            cover_image_top: inch(2.3),
            cover_image_max_height: inch(2.8),
            cover_subtitle_top: inch(5.4),
            subtitle_height: inch(0.8),
            closing_title_top: inch(2.5),
            closing_title_height: inch(1.5),
            closing_subtitle_top: inch(4.2),
            signature_width: inch(5.0),
            signature_height: inch(0.9),
            signature_bottom_inset: inch(1.0),
            footer_height: inch(0.3),
        }
    }

    /// 16:9 geometry (13.333 in by 7.5 in).
    pub fn widescreen() -> Self {
        Self::for_canvas(CanvasPreset::Widescreen.canvas())
    }

    /// 4:3 geometry (10 in by 7.5 in).
    pub fn standard() -> Self {
        Self::for_canvas(CanvasPreset::Standard.canvas())
    }

    /// Multiply the canvas and every distance by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let s = |l: Length| l.scale(factor);
        Self {
            canvas: Canvas {
                width: s(self.canvas.width),
                height: s(self.canvas.height),
            },
            margin: s(self.margin),
            title_top: s(self.title_top),
            title_height: s(self.title_height),
            body_inset: s(self.body_inset),
            body_top: s(self.body_top),
            body_height: s(self.body_height),
            standard_text_width: s(self.standard_text_width),
            split_text_width: s(self.split_text_width),
            split_gap: s(self.split_gap),
            split_image_width: self.split_image_width.map(s),
            big_number_title_height: s(self.big_number_title_height),
            number_top: s(self.number_top),
            number_height: s(self.number_height),
            unit_height: s(self.unit_height),
            explanation_gap: s(self.explanation_gap),
            explanation_height: s(self.explanation_height),
            cover_title_top: s(self.cover_title_top),
            cover_title_height: s(self.cover_title_height),
            cover_image_top: s(self.cover_image_top),
            cover_image_max_height: s(self.cover_image_max_height),
            cover_subtitle_top: s(self.cover_subtitle_top),
            subtitle_height: s(self.subtitle_height),
            closing_title_top: s(self.closing_title_top),
            closing_title_height: s(self.closing_title_height),
            closing_subtitle_top: s(self.closing_subtitle_top),
            signature_width: s(self.signature_width),
            signature_height: s(self.signature_height),
            signature_bottom_inset: s(self.signature_bottom_inset),
            footer_height: s(self.footer_height),
        }
    }

    /// Check that every kind's zones fit the canvas without colliding.
    ///
    /// The signature block and the footer strip are checked against the
    /// zones of every kind, since either may be stamped on any slide.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width.emus() <= 0 || self.canvas.height.emus() <= 0 {
            return Err(Error::Layout(format!(
                "canvas must have a positive size, got {}",
                self.canvas
            )));
        }

        let engine = LayoutEngine::new(self.clone());
        let canvas = self.canvas.zone();
        let signature = engine.signature();
        let footer = engine.footer();

        for kind in LayoutKind::ALL {
            check_zone_set(kind.as_str(), &engine.zones(kind).named(), &canvas, &signature, &footer)?;
        }
        let standard = engine.standard_with_image();
        check_zone_set(STANDARD_IMAGE, &standard.named(), &canvas, &signature, &footer)?;
        check_placed("standard", "signature", &signature, &canvas)?;
        check_placed("standard", "footer", &footer, &canvas)?;

        let split = engine.split();
        check_gap("split", &split.text, &split.image, self.split_gap)?;
        check_gap(STANDARD_IMAGE, &standard.text, &standard.image, self.split_gap)?;

        let cover = engine.cover();
        if cover.image_frame.bottom() > cover.subtitle.top {
            return Err(Error::Layout(format!(
                "title: image frame ({}) runs into the subtitle ({})",
                cover.image_frame, cover.subtitle
            )));
        }

        Ok(())
    }
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self::widescreen()
    }
}

const STANDARD_IMAGE: &str = "standard with image";

fn check_zone_set(
    kind: &str,
    named: &[(&'static str, LayoutZone)],
    canvas: &LayoutZone,
    signature: &LayoutZone,
    footer: &LayoutZone,
) -> Result<()> {
    for (name, zone) in named {
        check_placed(kind, name, zone, canvas)?;
    }
    for (i, (a_name, a)) in named.iter().enumerate() {
        for (b_name, b) in &named[i + 1..] {
            check_disjoint(kind, a_name, a, b_name, b)?;
        }
        check_disjoint(kind, a_name, a, "signature", signature)?;
        check_disjoint(kind, a_name, a, "footer", footer)?;
    }
    Ok(())
}

fn check_gap(kind: &str, text: &LayoutZone, image: &LayoutZone, min: Length) -> Result<()> {
    let gap = text.horizontal_gap_to(image);
    if gap < min.emus() {
        return Err(Error::Layout(format!(
            "{}: text column and image are {} apart, need at least {}",
            kind,
            Length::from_emus(gap),
            min
        )));
    }
    Ok(())
}

fn check_placed(kind: &str, name: &str, zone: &LayoutZone, canvas: &LayoutZone) -> Result<()> {
    if zone.is_empty() {
        return Err(Error::Layout(format!(
            "{}: zone '{}' is empty ({})",
            kind, name, zone
        )));
    }
    if !canvas.contains(zone) {
        return Err(Error::Layout(format!(
            "{}: zone '{}' ({}) leaves the canvas",
            kind, name, zone
        )));
    }
    Ok(())
}

fn check_disjoint(
    kind: &str,
    a_name: &str,
    a: &LayoutZone,
    b_name: &str,
    b: &LayoutZone,
) -> Result<()> {
    if a.overlaps(b) {
        return Err(Error::Layout(format!(
            "{}: zone '{}' ({}) overlaps zone '{}' ({})",
            kind, a_name, a, b_name, b
        )));
    }
    Ok(())
}
