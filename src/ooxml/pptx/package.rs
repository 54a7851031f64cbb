/// Package assembly for PowerPoint presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::path::Path;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const NOTES_MASTER_URI: &str = "/ppt/notesMasters/notesMaster1.xml";
const NOTES_THEME_URI: &str = "/ppt/theme/theme2.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

/// Turns a [`MutablePresentation`] into a complete `.pptx` package.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::ooxml::pptx::{MutablePresentation, PresentationPackage};
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide().add_text_box("Hello", 914_400, 914_400, 4_572_000, 914_400);
/// PresentationPackage::new(&pres).save("hello.pptx")?;
/// # Ok::<(), longan::ooxml::OoxmlError>(())
/// ```
pub struct PresentationPackage<'a> {
    pres: &'a MutablePresentation,
}

impl<'a> PresentationPackage<'a> {
    pub fn new(pres: &'a MutablePresentation) -> Self {
        Self { pres }
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_opc_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Write the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_opc_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Write the presentation to a stream.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let package = self.to_opc_package()?;
        PackageWriter::write_to_stream(writer, &package)?;
        Ok(())
    }

    /// Assemble every part of the presentation into an OPC package.
    pub fn to_opc_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();
        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let layout_uri = PackURI::new(SLIDE_LAYOUT_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        let has_notes = self.pres.has_notes();
        let notes_master_uri = PackURI::new(NOTES_MASTER_URI)?;

        let media = self.add_media_parts(&mut pkg)?;
        let slide_uris = self.add_slide_parts(&mut pkg, &media, &layout_uri, &notes_master_uri)?;

        // Presentation part: master first so it gets rId1, then the slides
        let mut pres_part = Part::xml(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, String::new());
        let master_rid = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_rids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect();
        let notes_master_rid = if has_notes {
            Some(pres_part.relate_to(&notes_master_uri, rt::NOTES_MASTER))
        } else {
            None
        };
        let fixed_parts = [
            (PRES_PROPS_URI, ct::PML_PRES_PROPS, rt::PRES_PROPS, template::default_pres_props_xml()),
            (VIEW_PROPS_URI, ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::default_view_props_xml()),
            (THEME_URI, ct::OFC_THEME, rt::THEME, template::default_theme_xml()),
            (TABLE_STYLES_URI, ct::PML_TABLE_STYLES, rt::TABLE_STYLES, template::default_table_styles_xml()),
        ];
        for (uri, content_type, reltype, xml) in fixed_parts {
            let uri = PackURI::new(uri)?;
            pres_part.relate_to(&uri, reltype);
            pkg.add_part(Part::xml(uri, content_type, xml.to_string()))?;
        }
        let pres_xml = self.pres.generate_presentation_xml_with_rels(
            &master_rid,
            &slide_rids,
            notes_master_rid.as_deref(),
        )?;
        pres_part.set_blob(pres_xml.into_bytes());
        pkg.add_part(pres_part)?;

        // Slide master and its single layout. The master XML refers to the
        // layout as rId1, so that relationship is created first.
        let mut master_part = Part::xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().to_string(),
        );
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(master_part)?;

        let mut layout_part = Part::xml(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().to_string(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout_part)?;

        if has_notes {
            let notes_theme_uri = PackURI::new(NOTES_THEME_URI)?;
            let mut notes_master = Part::xml(
                notes_master_uri,
                ct::PML_NOTES_MASTER,
                template::default_notes_master_xml().to_string(),
            );
            notes_master.relate_to(&notes_theme_uri, rt::THEME);
            pkg.add_part(notes_master)?;
            pkg.add_part(Part::xml(
                notes_theme_uri,
                ct::OFC_THEME,
                template::default_theme_xml().to_string(),
            ))?;
        }

        // Document properties
        let core_uri = PackURI::new(CORE_PROPS_URI)?;
        let app_uri = PackURI::new(APP_PROPS_URI)?;
        pkg.add_part(Part::xml(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.core_props_xml()?,
        ))?;
        pkg.add_part(Part::xml(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            self.app_props_xml()?,
        ))?;

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Add one media part per distinct image and return, per slide, the
    /// media partname of each picture in shape order.
    fn add_media_parts(&self, pkg: &mut OpcPackage) -> Result<Vec<Vec<PackURI>>> {
        let mut per_slide: Vec<Vec<PackURI>> = vec![Vec::new(); self.pres.slide_count()];
        let mut seen: HashMap<&[u8], PackURI> = HashMap::new();

        for (slide_index, data, format) in self.pres.collect_all_images() {
            let uri = match seen.get(data) {
                Some(uri) => uri.clone(),
                None => {
                    let uri = PackURI::new(format!(
                        "/ppt/media/image{}.{}",
                        seen.len() + 1,
                        format.extension()
                    ))?;
                    pkg.add_part(Part::new(uri.clone(), format.mime_type(), data.to_vec()))?;
                    seen.insert(data, uri.clone());
                    uri
                },
            };
            per_slide[slide_index].push(uri);
        }

        Ok(per_slide)
    }

    fn add_slide_parts(
        &self,
        pkg: &mut OpcPackage,
        media: &[Vec<PackURI>],
        layout_uri: &PackURI,
        notes_master_uri: &PackURI,
    ) -> Result<Vec<PackURI>> {
        let mut mapper = RelationshipMapper::new();
        let mut slide_uris = Vec::with_capacity(self.pres.slide_count());

        for (slide_index, slide) in self.pres.slides().iter().enumerate() {
            let number = slide_index + 1;
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", number))?;
            let mut slide_part = Part::xml(slide_uri.clone(), ct::PML_SLIDE, String::new());

            slide_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
            for (image_index, media_uri) in media[slide_index].iter().enumerate() {
                let rid = slide_part.relate_to(media_uri, rt::IMAGE);
                mapper.add_image(slide_index, image_index, rid);
            }

            if let Some(notes_xml) = slide.generate_notes_xml() {
                let notes_uri =
                    PackURI::new(format!("/ppt/notesSlides/notesSlide{}.xml", number))?;
                slide_part.relate_to(&notes_uri, rt::NOTES_SLIDE);

                let mut notes_part = Part::xml(notes_uri, ct::PML_NOTES_SLIDE, notes_xml?);
                notes_part.relate_to(notes_master_uri, rt::NOTES_MASTER);
                notes_part.relate_to(&slide_uri, rt::SLIDE);
                pkg.add_part(notes_part)?;
            }

            let slide_xml = slide.to_xml_with_rels(slide_index, &mapper)?;
            slide_part.set_blob(slide_xml.into_bytes());
            pkg.add_part(slide_part)?;
            slide_uris.push(slide_uri);
        }

        Ok(slide_uris)
    }

    /// Core properties carry no timestamps so output stays reproducible.
    fn core_props_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));
        if let Some(title) = self.pres.title() {
            write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
        }
        if let Some(author) = self.pres.author() {
            write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(author))?;
            write!(
                xml,
                "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
                escape_xml(author)
            )?;
        }
        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }

    fn app_props_xml(&self) -> Result<String> {
        let notes = self.pres.slides().iter().filter(|s| s.has_notes()).count();
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
        ));
        xml.push_str("<Application>Longan</Application>");
        write!(
            xml,
            "<PresentationFormat>{}</PresentationFormat>",
            presentation_format(self.pres.slide_width(), self.pres.slide_height())
        )?;
        write!(xml, "<Slides>{}</Slides>", self.pres.slide_count())?;
        write!(xml, "<Notes>{}</Notes>", notes)?;
        xml.push_str("</Properties>");
        Ok(xml)
    }
}

/// The label PowerPoint shows for the slide size.
fn presentation_format(width: i64, height: i64) -> &'static str {
    if height <= 0 {
        return "Custom";
    }
    let ratio = width as f64 / height as f64;
    if (ratio - 16.0 / 9.0).abs() < 0.01 {
        "Widescreen"
    } else if (ratio - 4.0 / 3.0).abs() < 0.01 {
        "On-screen Show (4:3)"
    } else {
        "Custom"
    }
}
