/// Shape types and implementation for PPTX presentations.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{ImageFormat, TextAlign, TextFormat, TextParagraph};

/// A shape on a slide (text box or picture).
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Display name written to `p:cNvPr/@name`
    pub(crate) name: Option<String>,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    TextBox {
        paragraphs: Vec<TextParagraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        paragraphs: Vec<TextParagraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            name: None,
            shape_type: ShapeType::TextBox {
                paragraphs,
                x,
                y,
                width,
                height,
            },
        }
    }

    /// Create a new picture shape.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            name: None,
            shape_type: ShapeType::Picture {
                data,
                format,
                x,
                y,
                width,
                height,
                description,
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the display name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Builder method: set the display name.
    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    /// Check if this shape is a picture.
    pub fn is_picture(&self) -> bool {
        matches!(self.shape_type, ShapeType::Picture { .. })
    }

    /// Position and size as `(x, y, width, height)` in EMUs.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        match &self.shape_type {
            ShapeType::TextBox {
                x,
                y,
                width,
                height,
                ..
            }
            | ShapeType::Picture {
                x,
                y,
                width,
                height,
                ..
            } => (*x, *y, *width, *height),
        }
    }

    /// Get the paragraphs if this shape is a text box.
    pub fn paragraphs(&self) -> Option<&[TextParagraph]> {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => Some(paragraphs),
            ShapeType::Picture { .. } => None,
        }
    }

    /// Get the text of a text box, paragraphs joined by newlines.
    pub fn text(&self) -> Option<String> {
        self.paragraphs().map(|paras| {
            paras
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            ShapeType::TextBox { .. } => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the rId of their image relationship; a picture without
    /// one is an error rather than a dangling reference.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                paragraphs,
                x,
                y,
                width,
                height,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                match &self.name {
                    Some(name) => write!(
                        xml,
                        r#"<p:cNvPr id="{}" name="{}"/>"#,
                        self.shape_id,
                        escape_xml(name)
                    )?,
                    None => write!(
                        xml,
                        r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                        self.shape_id, self.shape_id
                    )?,
                }
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");
                if paragraphs.is_empty() {
                    xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
                }
                for paragraph in paragraphs {
                    write_paragraph(xml, paragraph)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Picture {
                x,
                y,
                width,
                height,
                description,
                ..
            } => {
                let rid = rel_id.ok_or_else(|| {
                    OoxmlError::InvalidFormat(format!(
                        "picture shape {} has no image relationship",
                        self.shape_id
                    ))
                })?;

                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                let default_name = format!("Picture {}", self.shape_id);
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
                    self.shape_id,
                    escape_xml(self.name.as_deref().unwrap_or(&default_name)),
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width.max(0), height.max(0))?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &TextParagraph) -> Result<()> {
    xml.push_str("<a:p>");

    write!(xml, r#"<a:pPr algn="{}""#, paragraph.align.as_attr())?;
    match paragraph.space_after {
        Some(points) => {
            write!(
                xml,
                r#"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
                pt_to_centipoints(points)
            )?;
        },
        None => xml.push_str("/>"),
    }

    xml.push_str("<a:r>");
    write_run_properties(xml, &paragraph.format)?;
    write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
    xml.push_str("</a:r>");

    xml.push_str("</a:p>");
    Ok(())
}

/// `a:rPr` attributes first, then children in schema order (fill before
/// latin typeface).
fn write_run_properties(xml: &mut String, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:rPr lang=\"en-US\"");

    if let Some(size) = format.size {
        write!(xml, " sz=\"{}\"", pt_to_centipoints(size))?;
    }

    if let Some(true) = format.bold {
        xml.push_str(" b=\"1\"");
    }

    if let Some(true) = format.italic {
        xml.push_str(" i=\"1\"");
    }

    xml.push_str(" dirty=\"0\"");

    if format.color.is_none() && format.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }
    xml.push('>');

    if let Some(ref color) = format.color {
        write!(
            xml,
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            escape_xml(color)
        )?;
    }

    if let Some(ref font) = format.font {
        let font = escape_xml(font);
        write!(
            xml,
            "<a:latin typeface=\"{font}\"/><a:ea typeface=\"{font}\"/>"
        )?;
    }

    xml.push_str("</a:rPr>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text_box() -> MutableShape {
        MutableShape::new_text_box(
            2,
            vec![
                TextParagraph::new("Tom & Jerry").space_after(14.0),
                TextParagraph::new("second").align(TextAlign::Center),
            ],
            914_400,
            457_200,
            4_572_000,
            914_400,
        )
    }

    fn formatted(format: TextFormat) -> MutableShape {
        MutableShape::new_text_box(
            2,
            vec![TextParagraph::new("Tom & Jerry").format(format)],
            0,
            0,
            100,
            100,
        )
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape = sample_text_box();
        if let ShapeType::TextBox { paragraphs, .. } = &mut shape.shape_type {
            for p in paragraphs {
                p.format = TextFormat {
                    size: Some(26.0),
                    bold: Some(true),
                    color: Some("DCDCDC".to_string()),
                    ..TextFormat::default()
                };
            }
        }

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 2"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="457200"/>"#));
        assert!(xml.contains(r#"<a:spcPts val="1400"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="2600" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="DCDCDC"/>"#));
        assert!(xml.contains("<a:t>Tom &amp; Jerry</a:t>"));
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_fill_precedes_typeface() {
        let shape = formatted(TextFormat {
            color: Some("FFD700".to_string()),
            font: Some("Microsoft YaHei".to_string()),
            ..TextFormat::default()
        });

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        let fill = xml.find("<a:solidFill>").unwrap();
        let latin = xml.find("<a:latin").unwrap();
        assert!(fill < latin);
    }

    #[test]
    fn test_named_shape() {
        let mut shape = sample_text_box();
        shape.with_name("Signature");
        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"name="Signature""#));
        assert_eq!(shape.text().unwrap(), "Tom & Jerry\nsecond");
    }

    #[test]
    fn test_picture_requires_relationship() {
        let shape = MutableShape::new_picture(
            3,
            vec![0x89, b'P', b'N', b'G'],
            ImageFormat::Png,
            0,
            0,
            100,
            100,
            "cover.png".to_string(),
        );
        let mut xml = String::new();
        assert!(shape.to_xml(&mut xml, None).is_err());

        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();
        assert!(xml.starts_with("<p:pic>"));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(shape.is_picture());
        assert_eq!(shape.bounds(), (0, 0, 100, 100));
    }
}
