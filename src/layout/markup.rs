//! Line markup for slide bodies.
//!
//! A body line starting with `##` is an emphasis line (a big number), a line
//! starting with `#` is a subheading, and every other line is a bullet.

/// Visual tier of a body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Bullet,
    Subheading,
    BigNumber,
}

/// A body line split into its tier and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupLine {
    pub tier: Tier,
    pub text: String,
}

/// Classify a body line.
///
/// The `##` prefix is checked before `#`. Prefixed lines lose the prefix and
/// surrounding whitespace; bullet lines keep their text as written.
pub fn parse_line(line: &str) -> MarkupLine {
    if let Some(rest) = line.strip_prefix("##") {
        MarkupLine {
            tier: Tier::BigNumber,
            text: rest.trim().to_string(),
        }
    } else if let Some(rest) = line.strip_prefix('#') {
        MarkupLine {
            tier: Tier::Subheading,
            text: rest.trim().to_string(),
        }
    } else {
        MarkupLine {
            tier: Tier::Bullet,
            text: line.to_string(),
        }
    }
}
