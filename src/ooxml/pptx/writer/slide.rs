/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::{ImageFormat, TextParagraph};
use super::shape::MutableShape;

/// A mutable slide in a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Slide background
    pub(crate) background: SlideBackground,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            notes: None,
            background: SlideBackground::None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set speaker notes. Empty notes are treated as no notes.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes.to_string())
        };
    }

    /// Get the speaker notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Set the slide background.
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = background;
    }

    /// Get the slide background.
    pub fn background(&self) -> &SlideBackground {
        &self.background
    }

    // IDs: 1=group, 2+ shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    /// Add a text box. Each line of `text` becomes one paragraph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::ooxml::pptx::MutablePresentation;
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    /// slide
    ///     .add_text_box("Memory Bandwidth", 0, 3_840_480, 12_192_000, 731_520)
    ///     .with_name("Unit");
    /// assert_eq!(slide.shape_count(), 1);
    /// ```
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let paragraphs = text.split('\n').map(TextParagraph::new).collect();
        self.add_paragraphs(paragraphs, x, y, width, height)
    }

    /// Add a text box made of pre-formatted paragraphs.
    pub fn add_paragraphs(
        &mut self,
        paragraphs: Vec<TextParagraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape =
            MutableShape::new_text_box(self.next_shape_id(), paragraphs, x, y, width, height);
        self.push_shape(shape)
    }

    /// Add a picture from raw image bytes.
    ///
    /// The format is detected from the magic bytes; unknown formats are
    /// rejected with `OoxmlError::InvalidFormat`.
    pub fn add_picture(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data).ok_or_else(|| {
            OoxmlError::InvalidFormat("unrecognized image data".to_string())
        })?;
        let description = format!("image.{}", format.extension());
        let shape = MutableShape::new_picture(
            self.next_shape_id(),
            data,
            format,
            x,
            y,
            width,
            height,
            description,
        );
        Ok(self.push_shape(shape))
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get the shapes on the slide in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Collect all images from this slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.get_image_data())
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        xml.push_str(&self.background.to_xml());

        xml.push_str("<p:spTree>");
        write_group_shape_properties(&mut xml);

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content, or `None` if the slide has no notes.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(self.write_notes_xml(notes_text))
    }

    fn write_notes_xml(&self, notes_text: &str) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:notes xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        write_group_shape_properties(&mut xml);

        // Slide image placeholder
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#);
        xml.push_str(
            r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#,
        );
        xml.push_str(r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        xml.push_str("</p:sp>");

        // Notes text shape
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Notes Placeholder 2"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for line in notes_text.lines() {
            xml.push_str("<a:p>");
            xml.push_str("<a:r>");
            xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}

/// The mandatory non-visual and visual properties of the root group shape.
fn write_group_shape_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}
