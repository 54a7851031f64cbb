//! Office Open XML (OOXML) writing.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (parts, relationships, content
//!    types) and the ZIP container
//! 2. **PresentationML** (`pptx`): the mutable presentation model and the
//!    package assembly for `.pptx` files
//!
//! # Example
//!
//! ```rust
//! use longan::ooxml::pptx::{MutablePresentation, PresentationPackage};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide().add_text_box("Hello", 914_400, 914_400, 4_572_000, 914_400);
//!
//! let bytes = PresentationPackage::new(&pres).to_bytes()?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), longan::ooxml::OoxmlError>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
