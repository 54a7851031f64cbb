//! Deck building: slide specs in, a `.pptx` presentation out.
//!
//! [`DeckBuilder::plan`] resolves every slide into positioned, styled
//! [`Element`]s using the layout engine; [`DeckBuilder::render`] writes those
//! plans into a [`MutablePresentation`](crate::ooxml::pptx::MutablePresentation).

pub mod builder;
pub mod config;
pub mod image;
pub mod plan;
pub mod spec;

pub use builder::{DeckBuilder, SaveReport};
pub use config::{DeckConfig, DeckFile, SignatureConfig, SignaturePolicy, SignatureStyle};
pub use image::{FsImageSource, ImageSource, LoadedImage, MemoryImageSource};
pub use plan::{Element, Role, SlidePlan, StyledParagraph};
pub use spec::SlideSpec;

pub use crate::layout::LayoutKind;
