use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// In deck files a color is written as a 6-digit hex string, with or without `#`.
///
/// # Examples
///
/// ```rust
/// use longan::common::RGBColor;
///
/// // Create a gold color
/// let gold = RGBColor::new(255, 215, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("#00BFFF").unwrap();
/// assert_eq!(blue.to_hex(), "00BFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const GOLD: RGBColor = RGBColor::new(255, 215, 0);
    pub const LIGHT_GRAY: RGBColor = RGBColor::new(220, 220, 220);
    pub const SUBTLE_GRAY: RGBColor = RGBColor::new(100, 100, 100);
    pub const SKY_BLUE: RGBColor = RGBColor::new(0, 191, 255);
    pub const EMERALD: RGBColor = RGBColor::new(46, 204, 113);
    pub const MIDNIGHT: RGBColor = RGBColor::new(15, 15, 25);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (e.g., "FFD700" or "#FFD700").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        RGBColor::from_hex(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{}'", text)))
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
