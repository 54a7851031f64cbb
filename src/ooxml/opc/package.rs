/// The in-memory OPC package assembled before serialization.
///
/// Parts are kept in a `BTreeMap` keyed by partname so iteration order, and
/// therefore ZIP entry order, does not depend on insertion order.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;

/// An Open Packaging Convention package being built for writing.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<PackURI, Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new("/"),
            parts: BTreeMap::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Returns `OpcError::DuplicatePart` if a part with the same partname was
    /// already added.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.contains_key(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.insert(part.partname().clone(), part);
        Ok(())
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.get(partname)
    }

    /// Iterate over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.add(reltype, target)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn xml_part(uri: &str, content_type: &str) -> Part {
        Part::xml(PackURI::new(uri).unwrap(), content_type, "<x/>".to_string())
    }

    #[test]
    fn test_parts_iterate_in_partname_order() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(xml_part("/ppt/slides/slide2.xml", ct::PML_SLIDE))
            .unwrap();
        pkg.add_part(xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN))
            .unwrap();
        pkg.add_part(xml_part("/ppt/slides/slide1.xml", ct::PML_SLIDE))
            .unwrap();

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "/ppt/presentation.xml",
                "/ppt/slides/slide1.xml",
                "/ppt/slides/slide2.xml"
            ]
        );
        assert_eq!(pkg.part_count(), 3);
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN))
            .unwrap();
        let err = pkg
            .add_part(xml_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN))
            .unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
    }

    #[test]
    fn test_package_relationships() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pkg.relate_to(&pres, rt::OFFICE_DOCUMENT), "rId1");
        assert_eq!(
            pkg.rels().get("rId1").unwrap().target_ref(),
            "ppt/presentation.xml"
        );
    }
}
