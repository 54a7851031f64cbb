//! Slide background support for PowerPoint presentations.

/// Slide background configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// No background element; the master's background shows through
    #[default]
    None,
    /// Solid color background
    Solid {
        /// RGB color in hexadecimal format (e.g., "0F0F19")
        color: String,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    pub fn solid(color: impl Into<String>) -> Self {
        SlideBackground::Solid {
            color: color.into(),
        }
    }

    /// Generate the `p:bg` element, which must precede `p:spTree` in `p:cSld`.
    pub(crate) fn to_xml(&self) -> String {
        match self {
            SlideBackground::None => String::new(),
            SlideBackground::Solid { color } => format!(
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            ),
        }
    }
}
