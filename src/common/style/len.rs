use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::unit::{EMUS_PER_INCH, emu_to_inches, inches_to_emu, parse_length_emu};

/// Length measurement stored in EMUs.
///
/// Deck files may write a length as a bare number (inches) or as a string with
/// a unit suffix (`"0.5in"`, `"24pt"`, `"2cm"`).
///
/// # Examples
///
/// ```rust
/// use longan::common::Length;
///
/// let length = Length::from_inches(1.0);
/// assert_eq!(length.emus(), 914_400);
/// assert_eq!(length.inches(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: inches_to_emu(inches),
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Get the value in inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        emu_to_inches(self.emus)
    }

    /// Scale by a factor, rounding to the nearest EMU.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            emus: (self.emus as f64 * factor).round() as i64,
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::from_emus(self.emus + rhs.emus)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::from_emus(self.emus - rhs.emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emus % EMUS_PER_INCH == 0 {
            write!(f, "{}in", self.emus / EMUS_PER_INCH)
        } else {
            write!(f, "{:.3}in", self.inches())
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Inches(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLength::deserialize(deserializer)? {
            RawLength::Inches(inches) => Ok(Length::from_inches(inches)),
            RawLength::Text(text) => parse_length_emu(&text)
                .map(Length::from_emus)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}emu", self.emus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Length::from_inches(2.0);
        let b = Length::from_inches(0.5);
        assert_eq!((a - b).inches(), 1.5);
        assert_eq!((a + b).emus(), inches_to_emu(2.5));
        assert_eq!(a.scale(0.5), Length::from_inches(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::from_inches(5.0).to_string(), "5in");
        assert_eq!(Length::from_inches(0.25).to_string(), "0.250in");
    }

    #[test]
    fn test_deserialize_number_and_text() {
        let values: Vec<Length> = serde_saphyr::from_str("[1.5, \"72pt\", \"2.54cm\"]").unwrap();
        assert_eq!(values[0], Length::from_inches(1.5));
        assert_eq!(values[1], Length::from_inches(1.0));
        assert_eq!(values[2], Length::from_inches(1.0));
    }

    #[test]
    fn test_deserialize_rejects_unknown_unit() {
        let result: std::result::Result<Vec<Length>, _> = serde_saphyr::from_str("[\"3ly\"]");
        assert!(result.is_err());
    }
}
