/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::ImageFormat;
use super::slide::MutableSlide;

/// Default slide width: 13.333 inches (16:9).
pub const DEFAULT_SLIDE_WIDTH: i64 = 12_192_000;
/// Default slide height: 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// ID of the single slide master, the lowest value PowerPoint accepts.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions, and record document
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title (docProps/core.xml)
    title: Option<String>,
    /// Document author (docProps/core.xml)
    author: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation with the default 16:9 dimensions.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: None,
            author: None,
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = (index + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Get the document title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the document author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Set the document author.
    pub fn set_author(&mut self, author: &str) {
        self.author = Some(author.to_string());
    }

    /// Check if any slide carries speaker notes.
    pub fn has_notes(&self) -> bool {
        self.slides.iter().any(|s| s.has_notes())
    }

    /// Collect all images from all slides in the presentation.
    pub(crate) fn collect_all_images(&self) -> Vec<(usize, &[u8], ImageFormat)> {
        let mut all_images = Vec::new();

        for (slide_index, slide) in self.slides.iter().enumerate() {
            for (image_data, image_format) in slide.collect_images() {
                all_images.push((slide_index, image_data, image_format));
            }
        }

        all_images
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - rId of the slide master relationship
    /// * `slide_rel_ids` - rIds of the slides, in slide order
    /// * `notes_master_rel_id` - rId of the notes master, when notes exist
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
        notes_master_rel_id: Option<&str>,
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if let Some(rid) = notes_master_rel_id {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
                rid
            )?;
        }

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str("</p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
