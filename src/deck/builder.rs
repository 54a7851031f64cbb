//! Deck builder: slide specs to planned slides to a presentation.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::common::{Error, Result};
use crate::layout::{
    Alignment, Anchor, Column, LayoutEngine, LayoutKind, LayoutZone, MarkupLine, SlideZones,
    TextStyle, Typography, parse_line,
};
use crate::ooxml::pptx::{
    MutablePresentation, PresentationPackage, SlideBackground, TextAlign, TextFormat,
    TextParagraph,
};

use super::config::{DeckConfig, SignatureStyle};
use super::image::{FsImageSource, ImageSource, LoadedImage};
use super::plan::{Element, Role, SlidePlan, StyledParagraph};
use super::spec::SlideSpec;

/// Outcome of [`DeckBuilder::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub slide_count: usize,
    /// Images named by slide specs that were left out because they could not be loaded.
    pub skipped_images: usize,
}

/// Turns slide specs into a presentation.
///
/// ```rust
/// use longan::deck::{DeckBuilder, DeckConfig, SlideSpec};
/// use longan::layout::LayoutKind;
///
/// let builder = DeckBuilder::new(DeckConfig::default());
/// let specs = vec![
///     SlideSpec::new(LayoutKind::Title, "The Architecture of Memory"),
///     SlideSpec::new(LayoutKind::Standard, "Agenda").with_lines(["# HBM4", "Engram"]),
/// ];
/// let pres = builder.build(&specs)?;
/// assert_eq!(pres.slide_count(), 2);
/// # Ok::<(), longan::Error>(())
/// ```
pub struct DeckBuilder {
    config: DeckConfig,
    engine: LayoutEngine,
    typography: Typography,
    images: Box<dyn ImageSource>,
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DeckBuilder {
    /// Create a builder that reads images from the file system.
    ///
    /// Font sizes are capped by the configured limits.
    pub fn new(config: DeckConfig) -> Self {
        Self {
            engine: LayoutEngine::new(config.geometry.clone()),
            typography: config.typography.clamped(),
            images: Box::new(FsImageSource::new()),
            config,
        }
    }

    pub fn with_image_source(mut self, source: Box<dyn ImageSource>) -> Self {
        self.images = source;
        self
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// The typography in effect, after clamping.
    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Plan every slide. Planning never fails; unusable images are dropped.
    pub fn plan(&self, specs: &[SlideSpec]) -> Vec<SlidePlan> {
        specs
            .iter()
            .enumerate()
            .map(|(index, spec)| self.plan_slide(index, specs.len(), spec))
            .collect()
    }

    fn plan_slide(&self, index: usize, count: usize, spec: &SlideSpec) -> SlidePlan {
        let mut plan = SlidePlan {
            index,
            kind: spec.layout,
            background: self.config.palette.background,
            elements: Vec::new(),
            notes: spec
                .notes
                .as_ref()
                .filter(|n| !n.trim().is_empty())
                .cloned(),
            skipped_image: None,
        };

        match self.engine.zones(spec.layout) {
            SlideZones::Standard(zones) => {
                self.push_title(&mut plan, spec, zones.title);
                match self.resolve_image(&mut plan, spec) {
                    Some(image) if spec.body_lines.is_empty() => {
                        self.push_fitted(&mut plan, image, zones.body, Anchor::TopCenter);
                    }
                    Some(image) => {
                        let columns = self.engine.standard_with_image();
                        self.push_body(&mut plan, &spec.body_lines, columns.text, Column::Body);
                        self.push_fitted(&mut plan, image, columns.image, Anchor::TopLeft);
                    }
                    None => {
                        self.push_body(&mut plan, &spec.body_lines, zones.body, Column::Body);
                    }
                }
            }
            SlideZones::Split(zones) => {
                self.push_title(&mut plan, spec, zones.title);
                self.push_body(&mut plan, &spec.body_lines, zones.text, Column::SplitText);
                self.push_picture(&mut plan, spec, zones.image, Anchor::TopLeft);
            }
            SlideZones::BigNumber(zones) => {
                self.push_title(&mut plan, spec, zones.title);
                let palette = &self.config.palette;
                let parts = BigNumberParts::from_lines(&spec.body_lines);
                if let Some(number) = parts.number {
                    plan.elements.push(single_line(
                        Role::Number,
                        zones.number,
                        number,
                        self.typography.number_style(palette),
                    ));
                }
                if let Some(unit) = parts.unit {
                    let style = self.typography.unit_style(unit.tier, palette);
                    plan.elements.push(single_line(Role::Unit, zones.unit, unit.text, style));
                }
                if !parts.explanation.is_empty() {
                    plan.elements.push(Element::Text {
                        role: Role::Explanation,
                        zone: zones.explanation,
                        paragraphs: parts
                            .explanation
                            .into_iter()
                            .map(|line| {
                                let style = self.typography.explanation_style(line.tier, palette);
                                StyledParagraph::new(line.text, style)
                            })
                            .collect(),
                    });
                }
                self.ignore_picture(&mut plan, spec);
            }
            SlideZones::Cover(zones) => {
                self.push_title(&mut plan, spec, zones.title);
                self.push_picture(&mut plan, spec, zones.image_frame, Anchor::TopCenter);
                self.push_subtitle(&mut plan, spec, zones.subtitle);
            }
            SlideZones::Closing(zones) => {
                self.push_title(&mut plan, spec, zones.title);
                self.push_subtitle(&mut plan, spec, zones.subtitle);
                self.ignore_picture(&mut plan, spec);
            }
        }

        if self.config.signature.policy.applies(index, count) {
            plan.elements.push(self.signature(spec.layout == LayoutKind::Title));
        }

        debug!(
            slide = index,
            kind = %spec.layout,
            elements = plan.elements.len(),
            "slide planned"
        );
        plan
    }

    fn push_title(&self, plan: &mut SlidePlan, spec: &SlideSpec, zone: LayoutZone) {
        let style = self
            .typography
            .title_style(spec.layout, &self.config.palette);
        plan.elements.push(Element::Text {
            role: Role::Title,
            zone,
            paragraphs: spec
                .title
                .split('\n')
                .map(|line| StyledParagraph::new(line, style.clone()))
                .collect(),
        });
    }

    fn push_body(&self, plan: &mut SlidePlan, lines: &[String], zone: LayoutZone, column: Column) {
        if lines.is_empty() {
            return;
        }
        let space_after = self.typography.space_after(column);
        let paragraphs = lines
            .iter()
            .map(|line| {
                let markup = parse_line(line);
                let style = self
                    .typography
                    .style(markup.tier, column, &self.config.palette);
                StyledParagraph::new(self.typography.display_text(&markup, column), style)
                    .with_space_after(space_after)
            })
            .collect();
        plan.elements.push(Element::Text {
            role: Role::Body,
            zone,
            paragraphs,
        });
    }

    fn push_subtitle(&self, plan: &mut SlidePlan, spec: &SlideSpec, zone: LayoutZone) {
        let Some(line) = spec.body_lines.first() else {
            return;
        };
        let style = self
            .typography
            .subtitle_style(spec.layout, &self.config.palette);
        plan.elements.push(single_line(
            Role::Subtitle,
            zone,
            parse_line(line).text,
            style,
        ));
    }

    fn push_picture(&self, plan: &mut SlidePlan, spec: &SlideSpec, frame: LayoutZone, anchor: Anchor) {
        if let Some(image) = self.resolve_image(plan, spec) {
            self.push_fitted(plan, image, frame, anchor);
        }
    }

    fn push_fitted(&self, plan: &mut SlidePlan, image: LoadedImage, frame: LayoutZone, anchor: Anchor) {
        let zone = self.engine.fit_image(frame, image.pixel_size(), anchor);
        plan.elements.push(Element::Picture { zone, image });
    }

    /// Load the spec's image, recording it on the plan when it cannot be read.
    fn resolve_image(&self, plan: &mut SlidePlan, spec: &SlideSpec) -> Option<LoadedImage> {
        let path = spec.image.as_deref()?;
        let image = self.images.load(path);
        if image.is_none() {
            debug!(slide = plan.index, path = %path.display(), "image skipped");
            plan.skipped_image = Some(path.to_path_buf());
        }
        image
    }

    /// Layouts without a picture zone still report images that fail to load.
    fn ignore_picture(&self, plan: &mut SlidePlan, spec: &SlideSpec) {
        if self.resolve_image(plan, spec).is_some() {
            debug!(
                slide = plan.index,
                kind = %spec.layout,
                "layout has no picture zone, image ignored"
            );
        }
    }

    fn signature(&self, cover: bool) -> Element {
        let signature = &self.config.signature;
        let palette = &self.config.palette;
        match signature.style {
            SignatureStyle::Block => Element::Text {
                role: Role::Signature,
                zone: self.engine.signature(),
                paragraphs: vec![
                    StyledParagraph::new(
                        signature.organization_line(cover),
                        self.typography.signature_org_style(palette),
                    ),
                    StyledParagraph::new(
                        signature.author.clone(),
                        self.typography.signature_name_style(palette),
                    ),
                ],
            },
            SignatureStyle::Footer => single_line(
                Role::Signature,
                self.engine.footer(),
                signature.footer_line(cover),
                self.typography.footer_style(palette),
            ),
        }
    }

    /// Write planned slides into a presentation, in plan order.
    pub fn render(&self, plans: &[SlidePlan]) -> Result<MutablePresentation> {
        let canvas = &self.config.geometry.canvas;
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(canvas.width.emus());
        pres.set_slide_height(canvas.height.emus());
        if let Some(title) = &self.config.title {
            pres.set_title(title);
        }
        pres.set_author(
            self.config
                .author
                .as_deref()
                .unwrap_or(&self.config.signature.author),
        );

        for plan in plans {
            let slide = pres.add_slide();
            slide.set_background(SlideBackground::solid(plan.background.to_hex()));

            for element in &plan.elements {
                match element {
                    Element::Text {
                        role,
                        zone,
                        paragraphs,
                    } => {
                        let paragraphs = paragraphs
                            .iter()
                            .map(|p| self.text_paragraph(p))
                            .collect();
                        slide
                            .add_paragraphs(paragraphs, zone.left, zone.top, zone.width, zone.height)
                            .with_name(role.shape_name());
                    }
                    Element::Picture { zone, image } => {
                        slide
                            .add_picture(
                                image.data.clone(),
                                zone.left,
                                zone.top,
                                zone.width,
                                zone.height,
                            )?
                            .with_name("Picture");
                    }
                }
            }

            if let Some(notes) = &plan.notes {
                slide.set_notes(notes);
            }
        }

        Ok(pres)
    }

    fn text_paragraph(&self, paragraph: &StyledParagraph) -> TextParagraph {
        let style = &paragraph.style;
        let mut out = TextParagraph::new(paragraph.text.clone())
            .align(text_align(style.align))
            .format(TextFormat {
                font: self.typography.font.clone(),
                size: Some(style.size_pt),
                bold: Some(style.bold),
                italic: None,
                color: Some(style.color.to_hex()),
            });
        if let Some(points) = paragraph.space_after {
            out = out.space_after(points);
        }
        out
    }

    /// Plan and render in one step.
    pub fn build(&self, specs: &[SlideSpec]) -> Result<MutablePresentation> {
        self.render(&self.plan(specs))
    }

    /// Build the deck and serialize it to `.pptx` bytes.
    pub fn to_bytes(&self, specs: &[SlideSpec]) -> Result<Vec<u8>> {
        let pres = self.build(specs)?;
        Ok(PresentationPackage::new(&pres).to_bytes()?)
    }

    /// Build the deck and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, specs: &[SlideSpec], path: P) -> Result<SaveReport> {
        let path = path.as_ref();
        if specs.is_empty() {
            return Err(Error::InvalidDeck(
                "a deck needs at least one slide".to_string(),
            ));
        }

        let plans = self.plan(specs);
        let skipped_images = plans.iter().filter(|p| p.skipped_image.is_some()).count();
        let pres = self.render(&plans)?;
        PresentationPackage::new(&pres).save(path)?;

        info!(
            path = %path.display(),
            slides = pres.slide_count(),
            skipped_images,
            "presentation saved"
        );
        Ok(SaveReport {
            path: path.to_path_buf(),
            slide_count: pres.slide_count(),
            skipped_images,
        })
    }
}

fn single_line(role: Role, zone: LayoutZone, text: String, style: TextStyle) -> Element {
    Element::Text {
        role,
        zone,
        paragraphs: vec![StyledParagraph::new(text, style)],
    }
}

fn text_align(align: Alignment) -> TextAlign {
    match align {
        Alignment::Left => TextAlign::Left,
        Alignment::Center => TextAlign::Center,
        Alignment::Right => TextAlign::Right,
    }
}

/// Body lines of a big-number slide, sorted into their zones.
#[derive(Debug, Default, PartialEq)]
struct BigNumberParts {
    number: Option<String>,
    unit: Option<MarkupLine>,
    explanation: Vec<MarkupLine>,
}

impl BigNumberParts {
    /// The first `##` line is the number (the first line when there is none),
    /// the line after it is the unit, and every other line is explanation.
    fn from_lines(lines: &[String]) -> Self {
        let Some(number_at) = lines
            .iter()
            .position(|l| l.starts_with("##"))
            .or_else(|| (!lines.is_empty()).then_some(0))
        else {
            return Self::default();
        };

        let line = |i: usize| parse_line(&lines[i]);
        Self {
            number: Some(line(number_at).text),
            unit: (number_at + 1 < lines.len()).then(|| line(number_at + 1)),
            explanation: (0..lines.len())
                .filter(|&i| i != number_at && i != number_at + 1)
                .map(line)
                .collect(),
        }
    }
}
