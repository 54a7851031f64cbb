//! Common style and formatting types.
//!
//! This module provides the color and length value types shared by the layout
//! engine, the deck configuration and the presentation writer.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
