//! Text styles: the palette, the font sizes per tier and zone, and the
//! maximum sizes that keep emphasis lines on the canvas.

use serde::{Deserialize, Serialize};

use crate::common::{Error, RGBColor, Result};

use super::LayoutKind;
use super::markup::{MarkupLine, Tier};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The text column a body line is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Full-width content area.
    Body,
    /// Narrow left column of a split slide.
    SplitText,
}

/// Resolved style of one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_pt: f64,
    pub color: RGBColor,
    pub align: Alignment,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size_pt: f64, color: RGBColor, align: Alignment, bold: bool) -> Self {
        Self {
            size_pt,
            color,
            align,
            bold,
        }
    }
}

/// Deck colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: RGBColor,
    pub title: RGBColor,
    /// Big numbers and the signature author line.
    pub emphasis: RGBColor,
    pub subheading: RGBColor,
    pub body: RGBColor,
    /// Signature organization line.
    pub accent: RGBColor,
    /// Footer line.
    pub subtle: RGBColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: RGBColor::MIDNIGHT,
            title: RGBColor::WHITE,
            emphasis: RGBColor::GOLD,
            subheading: RGBColor::WHITE,
            body: RGBColor::LIGHT_GRAY,
            accent: RGBColor::SKY_BLUE,
            subtle: RGBColor::SUBTLE_GRAY,
        }
    }
}

/// Upper bounds on font sizes, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontLimits {
    pub title: f64,
    pub big_number: f64,
    pub subheading: f64,
    pub body: f64,
}

impl Default for FontLimits {
    fn default() -> Self {
        Self {
            title: 60.0,
            big_number: 120.0,
            subheading: 36.0,
            body: 28.0,
        }
    }
}

/// Font sizes (points) and paragraph spacing for every text role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Latin and East Asian typeface; the theme font when absent.
    pub font: Option<String>,
    /// Prefix of bullet lines in the full-width body.
    pub bullet: String,

    pub title_size: f64,
    pub cover_title_size: f64,
    pub closing_title_size: f64,

    pub big_number_size: f64,
    pub subheading_size: f64,
    pub body_size: f64,
    pub body_space_after: f64,

    pub split_emphasis_size: f64,
    pub split_subheading_size: f64,
    pub split_body_size: f64,
    pub split_space_after: f64,

    pub number_size: f64,
    pub unit_size: f64,
    pub explanation_size: f64,

    pub subtitle_size: f64,
    pub closing_subtitle_size: f64,

    pub signature_org_size: f64,
    pub signature_name_size: f64,
    pub footer_size: f64,

    pub limits: FontLimits,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: None,
            bullet: "• ".to_string(),
            title_size: 54.0,
            cover_title_size: 56.0,
            closing_title_size: 80.0,
            big_number_size: 96.0,
            subheading_size: 32.0,
            body_size: 26.0,
            body_space_after: 14.0,
            split_emphasis_size: 36.0,
            split_subheading_size: 28.0,
            split_body_size: 22.0,
            split_space_after: 12.0,
            number_size: 120.0,
            unit_size: 36.0,
            explanation_size: 24.0,
            subtitle_size: 24.0,
            closing_subtitle_size: 28.0,
            signature_org_size: 16.0,
            signature_name_size: 24.0,
            footer_size: 14.0,
            limits: FontLimits::default(),
        }
    }
}

impl Typography {
    /// Reject font sizes and limits that are zero, negative or not finite,
    /// and paragraph spacing that is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let l = &self.limits;
        let sizes = [
            ("title_size", self.title_size),
            ("cover_title_size", self.cover_title_size),
            ("closing_title_size", self.closing_title_size),
            ("big_number_size", self.big_number_size),
            ("subheading_size", self.subheading_size),
            ("body_size", self.body_size),
            ("split_emphasis_size", self.split_emphasis_size),
            ("split_subheading_size", self.split_subheading_size),
            ("split_body_size", self.split_body_size),
            ("number_size", self.number_size),
            ("unit_size", self.unit_size),
            ("explanation_size", self.explanation_size),
            ("subtitle_size", self.subtitle_size),
            ("closing_subtitle_size", self.closing_subtitle_size),
            ("signature_org_size", self.signature_org_size),
            ("signature_name_size", self.signature_name_size),
            ("footer_size", self.footer_size),
            ("limits.title", l.title),
            ("limits.big_number", l.big_number),
            ("limits.subheading", l.subheading),
            ("limits.body", l.body),
        ];
        for (name, size) in sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::Config(format!(
                    "typography: {} must be a positive number of points, got {}",
                    name, size
                )));
            }
        }
        for (name, space) in [
            ("body_space_after", self.body_space_after),
            ("split_space_after", self.split_space_after),
        ] {
            if !space.is_finite() || space < 0.0 {
                return Err(Error::Config(format!(
                    "typography: {} must not be negative, got {}",
                    name, space
                )));
            }
        }
        Ok(())
    }

    /// Copy with every size capped by [`FontLimits`].
    ///
    /// Titles use the title cap. The number, the body emphasis line and the
    /// closing title are display lines and share the big-number cap.
    /// Subheadings, the split emphasis line and the unit use the subheading
    /// cap. Everything else in a text zone uses the body cap.
    pub fn clamped(&self) -> Self {
        let l = &self.limits;
        Self {
            title_size: self.title_size.min(l.title),
            cover_title_size: self.cover_title_size.min(l.title),
            closing_title_size: self.closing_title_size.min(l.big_number),
            big_number_size: self.big_number_size.min(l.big_number),
            number_size: self.number_size.min(l.big_number),
            subheading_size: self.subheading_size.min(l.subheading),
            split_emphasis_size: self.split_emphasis_size.min(l.subheading),
            split_subheading_size: self.split_subheading_size.min(l.subheading),
            unit_size: self.unit_size.min(l.subheading),
            body_size: self.body_size.min(l.body),
            split_body_size: self.split_body_size.min(l.body),
            explanation_size: self.explanation_size.min(l.body),
            subtitle_size: self.subtitle_size.min(l.body),
            closing_subtitle_size: self.closing_subtitle_size.min(l.body),
            ..self.clone()
        }
    }

    /// Style of a body line of `tier` rendered in `column`.
    pub fn style(&self, tier: Tier, column: Column, palette: &Palette) -> TextStyle {
        match (tier, column) {
            (Tier::BigNumber, Column::Body) => {
                TextStyle::new(self.big_number_size, palette.emphasis, Alignment::Center, true)
            }
            (Tier::BigNumber, Column::SplitText) => {
                TextStyle::new(self.split_emphasis_size, palette.emphasis, Alignment::Left, true)
            }
            (Tier::Subheading, Column::Body) => {
                TextStyle::new(self.subheading_size, palette.subheading, Alignment::Left, true)
            }
            (Tier::Subheading, Column::SplitText) => TextStyle::new(
                self.split_subheading_size,
                palette.subheading,
                Alignment::Left,
                true,
            ),
            (Tier::Bullet, Column::Body) => {
                TextStyle::new(self.body_size, palette.body, Alignment::Left, false)
            }
            (Tier::Bullet, Column::SplitText) => {
                TextStyle::new(self.split_body_size, palette.body, Alignment::Left, false)
            }
        }
    }

    /// Text of a body line as it appears on the slide.
    ///
    /// Blank lines stay blank so they can space out groups of bullets.
    pub fn display_text(&self, line: &MarkupLine, column: Column) -> String {
        match (line.tier, column) {
            (Tier::Bullet, Column::Body) if !line.text.trim().is_empty() => {
                format!("{}{}", self.bullet, line.text)
            }
            _ => line.text.clone(),
        }
    }

    /// Paragraph spacing after each body line, in points.
    pub fn space_after(&self, column: Column) -> f64 {
        match column {
            Column::Body => self.body_space_after,
            Column::SplitText => self.split_space_after,
        }
    }

    pub fn title_style(&self, kind: LayoutKind, palette: &Palette) -> TextStyle {
        let (size, align) = match kind {
            LayoutKind::Standard | LayoutKind::Split => (self.title_size, Alignment::Left),
            LayoutKind::BigNumber => (self.title_size, Alignment::Center),
            LayoutKind::Title => (self.cover_title_size, Alignment::Center),
            LayoutKind::Closing => (self.closing_title_size, Alignment::Center),
        };
        TextStyle::new(size, palette.title, align, true)
    }

    pub fn subtitle_style(&self, kind: LayoutKind, palette: &Palette) -> TextStyle {
        let size = match kind {
            LayoutKind::Closing => self.closing_subtitle_size,
            _ => self.subtitle_size,
        };
        TextStyle::new(size, palette.body, Alignment::Center, false)
    }

    pub fn number_style(&self, palette: &Palette) -> TextStyle {
        TextStyle::new(self.number_size, palette.emphasis, Alignment::Center, true)
    }

    /// Unit line under a big number: the line's tier color and weight at
    /// the unit size, centered.
    pub fn unit_style(&self, tier: Tier, palette: &Palette) -> TextStyle {
        self.centered(tier, self.unit_size, palette)
    }

    pub fn explanation_style(&self, tier: Tier, palette: &Palette) -> TextStyle {
        self.centered(tier, self.explanation_size, palette)
    }

    fn centered(&self, tier: Tier, size_pt: f64, palette: &Palette) -> TextStyle {
        let base = self.style(tier, Column::Body, palette);
        TextStyle::new(size_pt, base.color, Alignment::Center, base.bold)
    }

    pub fn signature_org_style(&self, palette: &Palette) -> TextStyle {
        TextStyle::new(self.signature_org_size, palette.accent, Alignment::Center, false)
    }

    pub fn signature_name_style(&self, palette: &Palette) -> TextStyle {
        TextStyle::new(self.signature_name_size, palette.emphasis, Alignment::Center, true)
    }

    pub fn footer_style(&self, palette: &Palette) -> TextStyle {
        TextStyle::new(self.footer_size, palette.subtle, Alignment::Center, false)
    }
}
