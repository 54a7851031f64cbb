//! Planned slide content: positioned, styled elements ready for rendering.

use std::path::PathBuf;

use crate::common::RGBColor;
use crate::layout::{LayoutKind, LayoutZone, TextStyle};

use super::image::LoadedImage;

/// What a text element holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Title,
    Body,
    Number,
    Unit,
    Explanation,
    Subtitle,
    Signature,
}

impl Role {
    /// Shape name written to the slide part.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Role::Title => "Title",
            Role::Body => "Body",
            Role::Number => "Number",
            Role::Unit => "Unit",
            Role::Explanation => "Explanation",
            Role::Subtitle => "Subtitle",
            Role::Signature => "Signature",
        }
    }
}

/// One paragraph with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledParagraph {
    pub text: String,
    pub style: TextStyle,
    /// Space after the paragraph, in points.
    pub space_after: Option<f64>,
}

impl StyledParagraph {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            space_after: None,
        }
    }

    pub fn with_space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }
}

/// A positioned piece of slide content.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        role: Role,
        zone: LayoutZone,
        paragraphs: Vec<StyledParagraph>,
    },
    Picture {
        zone: LayoutZone,
        image: LoadedImage,
    },
}

impl Element {
    pub fn zone(&self) -> LayoutZone {
        match self {
            Element::Text { zone, .. } | Element::Picture { zone, .. } => *zone,
        }
    }

    /// The role of a text element; `None` for pictures.
    pub fn role(&self) -> Option<Role> {
        match self {
            Element::Text { role, .. } => Some(*role),
            Element::Picture { .. } => None,
        }
    }

    /// Paragraph texts joined by newlines; empty for pictures.
    pub fn text(&self) -> String {
        match self {
            Element::Text { paragraphs, .. } => paragraphs
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Element::Picture { .. } => String::new(),
        }
    }

    pub fn is_picture(&self) -> bool {
        matches!(self, Element::Picture { .. })
    }
}

/// Everything needed to render one slide, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlan {
    pub index: usize,
    pub kind: LayoutKind,
    pub background: RGBColor,
    pub elements: Vec<Element>,
    pub notes: Option<String>,
    /// Image named by the spec that could not be loaded.
    pub skipped_image: Option<PathBuf>,
}

impl SlidePlan {
    /// The first text element with `role`.
    pub fn element(&self, role: Role) -> Option<&Element> {
        self.elements.iter().find(|e| e.role() == Some(role))
    }

    pub fn elements_with_role(&self, role: Role) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.role() == Some(role))
    }

    pub fn picture_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_picture()).count()
    }

    pub fn has_signature(&self) -> bool {
        self.element(Role::Signature).is_some()
    }
}
