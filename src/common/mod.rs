//! Common types and utilities shared by the layout engine, the deck builder
//! and the OOXML writer.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
