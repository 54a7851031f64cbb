//! Unit conversion utilities.
//!
//! Slide geometry is stored in EMUs (English Metric Units), the native length
//! unit of Office Open XML. Configuration files are written by humans in
//! inches, points or centimeters, so this module also parses textual lengths.

use crate::Result;
use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Font sizes in DrawingML are hundredths of a point.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

/// Length units accepted in deck files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Inch (the default when no unit is written)
    Inch,
    /// Point (1/72 inch)
    Point,
    /// Centimeter
    Centimeter,
    /// Millimeter
    Millimeter,
    /// Raw EMU
    Emu,
}

impl LengthUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Emu => "emu",
        }
    }

    /// Number of EMUs in one of this unit
    #[inline]
    pub fn emus_per_unit(&self) -> f64 {
        match self {
            Self::Inch => EMUS_PER_INCH as f64,
            Self::Point => EMUS_PER_PT as f64,
            Self::Centimeter => EMUS_PER_CM as f64,
            Self::Millimeter => EMUS_PER_MM as f64,
            Self::Emu => 1.0,
        }
    }

    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "" | "in" | "inch" | "inches" | "\"" => Some(Self::Inch),
            "pt" => Some(Self::Point),
            "cm" => Some(Self::Centimeter),
            "mm" => Some(Self::Millimeter),
            "emu" => Some(Self::Emu),
            _ => None,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(s)
            .ok_or_else(|| crate::Error::Config(format!("Unknown length unit '{}'", s)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a textual length (e.g. "0.5in", "24pt", "2cm", "1.25") into EMUs.
///
/// A bare number is read as inches, matching how slide geometry is usually
/// written down.
pub fn parse_length_emu(s: &str) -> Result<i64> {
    let s = s.trim();
    let split = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);

    if digits.is_empty() {
        return Err(crate::Error::Config(format!(
            "No numeric value found in '{}'",
            s
        )));
    }

    let value: f64 = digits.parse().map_err(|_| {
        crate::Error::Config(format!("Failed to parse numeric value from '{}'", s))
    })?;
    let unit = LengthUnit::from_str(unit.trim())?;

    Ok((value * unit.emus_per_unit()).round() as i64)
}
