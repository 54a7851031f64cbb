//! Longan - A Rust library for generating PowerPoint slide decks
//!
//! Longan turns declarative slide specifications into `.pptx` files. It is
//! built from two layers: a pure layout engine that maps a canvas and a
//! layout kind to non-overlapping zones, and a deck builder that fills those
//! zones with styled text and pictures and writes an Office Open XML package.
//!
//! # Features
//!
//! - **Layout engine**: zones for standard, split, big-number, cover and closing slides
//! - **Markup tiers**: `##` emphasis lines, `#` subheadings and bullets
//! - **Signature policies**: first-and-last, every slide or none
//! - **Deterministic output**: identical input yields byte-identical files
//! - **YAML deck files**: every constant can be overridden per deck
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use longan::deck::{DeckBuilder, DeckConfig, SlideSpec};
//! use longan::layout::LayoutKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let specs = vec![
//!     SlideSpec::new(LayoutKind::Title, "The Architecture of Memory")
//!         .with_lines(["NVIDIA Rubin vs. DeepSeek Engram"])
//!         .with_image("img/cover.png"),
//!     SlideSpec::new(LayoutKind::BigNumber, "HBM4")
//!         .with_lines(["## 22 TB/s", "Memory Bandwidth"]),
//! ];
//!
//! let report = DeckBuilder::new(DeckConfig::default()).save(&specs, "memory.pptx")?;
//! println!("Total slides: {}", report.slide_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Loading a deck file
//!
//! ```no_run
//! use longan::deck::{DeckBuilder, DeckFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = DeckFile::load("deck.yaml")?;
//! deck.config.validate()?;
//! let (config, slides) = deck.into_parts();
//! DeckBuilder::new(config).save(&slides, "deck.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting zones
//!
//! ```rust
//! use longan::layout::{LayoutEngine, LayoutGeometry};
//!
//! let engine = LayoutEngine::new(LayoutGeometry::standard());
//! let cover = engine.cover();
//! assert!(cover.image_frame.bottom() <= cover.subtitle.top);
//! ```

/// Shared value types, units and the crate-level error
pub mod common;

/// Slide zones, markup tiers and text styles
pub mod layout;

/// Deck configuration, planning and rendering
pub mod deck;

/// OOXML (Office Open XML) package writer
///
/// This module provides the PresentationML writer used by the deck builder.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Length, RGBColor, Result};
pub use deck::{DeckBuilder, DeckConfig, DeckFile, SaveReport, SlideSpec};
pub use layout::{LayoutEngine, LayoutGeometry, LayoutKind};
