use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutKind;

/// Content and layout of one output slide.
///
/// ```rust
/// use longan::deck::SlideSpec;
/// use longan::layout::LayoutKind;
///
/// let spec = SlideSpec::new(LayoutKind::BigNumber, "HBM4")
///     .with_lines(["## 22 TB/s", "Memory Bandwidth"]);
/// assert_eq!(spec.body_lines.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,
    #[serde(default, alias = "body")]
    pub body_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub layout: LayoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SlideSpec {
    pub fn new(layout: LayoutKind, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_lines: Vec::new(),
            image: None,
            layout,
            notes: None,
        }
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let spec: SlideSpec = serde_saphyr::from_str("title: Agenda\n").unwrap();
        assert_eq!(spec, SlideSpec::new(LayoutKind::Standard, "Agenda"));
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "\
layout: split
title: Engram
body:
  - \"# Conditional memory\"
  - O(1) lookup
image: img/engram.png
notes: Explain the hash table.
";
        let spec: SlideSpec = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(spec.layout, LayoutKind::Split);
        assert_eq!(spec.body_lines, vec!["# Conditional memory", "O(1) lookup"]);
        assert_eq!(spec.image, Some(PathBuf::from("img/engram.png")));
        assert_eq!(spec.notes.as_deref(), Some("Explain the hash table."));
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let result: std::result::Result<SlideSpec, _> =
            serde_saphyr::from_str("title: X\nlayout: grid\n");
        assert!(result.is_err());
    }
}
