//! XML helpers shared by the package and presentation writers.

pub mod escape;

pub use escape::escape_xml;
