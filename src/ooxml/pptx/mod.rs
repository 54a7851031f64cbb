//! PowerPoint (.pptx) presentation writing.
//!
//! - [`MutablePresentation`], [`MutableSlide`] and [`MutableShape`] form the
//!   in-memory model: slides with a background, text boxes, pictures and
//!   speaker notes.
//! - [`PresentationPackage`] assembles that model into PresentationML parts
//!   (master, layout, theme, slides, notes, media, document properties) and
//!   writes the ZIP container.
//!
//! # Example
//!
//! ```rust
//! use longan::ooxml::pptx::{
//!     MutablePresentation, PresentationPackage, SlideBackground, TextFormat, TextParagraph,
//! };
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid("0F0F19"));
//! let title = TextParagraph::new("HBM4").format(TextFormat {
//!     size: Some(54.0),
//!     bold: Some(true),
//!     color: Some("FFFFFF".to_string()),
//!     ..TextFormat::default()
//! });
//! slide.add_paragraphs(vec![title], 457_200, 274_320, 11_277_600, 1_097_280);
//!
//! let bytes = PresentationPackage::new(&pres).to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), longan::ooxml::OoxmlError>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{ImageFormat, TextAlign, TextFormat, TextParagraph};
pub use package::PresentationPackage;
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
