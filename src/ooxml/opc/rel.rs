/// Relationship-related objects for OPC packages.
///
/// Relationships are kept in insertion order so that rIds are assigned
/// sequentially ("rId1", "rId2", ...) and the emitted `.rels` XML is stable
/// across runs.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI of the source part, used to relativize target partnames
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Base URI of the source part ("/" for the package itself)
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to a target part and return its rId.
    ///
    /// If a relationship of the same type to the same target already exists,
    /// its rId is returned instead of creating a duplicate.
    pub fn add(&mut self, reltype: &str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);

        if let Some(existing) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return existing.r_id.clone();
        }

        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref,
        });
        r_id
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Iterate over relationships in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Get the number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if there are no relationships.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        // Writing into a String is infallible
        let _ = write!(
            xml,
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        );
        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.r_id,
                rel.reltype,
                escape_xml(&rel.target_ref)
            );
        }
        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        let image = PackURI::new("/ppt/media/image1.png").unwrap();

        assert_eq!(rels.add(rt::SLIDE_LAYOUT, &layout), "rId1");
        assert_eq!(rels.add(rt::IMAGE, &image), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(
            rels.get("rId2").unwrap().target_ref(),
            "../media/image1.png"
        );
    }

    #[test]
    fn test_duplicate_target_reuses_id() {
        let mut rels = Relationships::new("/ppt/slides");
        let image = PackURI::new("/ppt/media/image1.png").unwrap();
        assert_eq!(rels.add(rt::IMAGE, &image), "rId1");
        assert_eq!(rels.add(rt::IMAGE, &image), "rId1");
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new("/");
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        rels.add(rt::OFFICE_DOCUMENT, &pres);

        let xml = rels.to_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="ppt/presentation.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
