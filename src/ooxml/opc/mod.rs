/// Open Packaging Conventions (OPC), write side.
///
/// An [`OpcPackage`] collects [`Part`]s and their [`Relationships`];
/// [`PackageWriter`] serializes it into a ZIP container together with the
/// `[Content_Types].xml` and `.rels` parts the format requires.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
