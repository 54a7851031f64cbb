use std::fmt;

use crate::common::unit::emu_to_inches;

/// A rectangle on the slide canvas, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutZone {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl LayoutZone {
    #[inline]
    pub const fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub const fn right(&self) -> i64 {
        self.left + self.width
    }

    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// True when the interiors intersect. Zones that share an edge do not overlap.
    pub fn overlaps(&self, other: &LayoutZone) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Horizontal distance from this zone's right edge to `other`'s left edge.
    ///
    /// Negative when `other` starts before this zone ends.
    pub fn horizontal_gap_to(&self, other: &LayoutZone) -> i64 {
        other.left - self.right()
    }

    /// True when `other` lies entirely within this zone.
    pub fn contains(&self, other: &LayoutZone) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl fmt::Display for LayoutZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.2}in y={:.2}in w={:.2}in h={:.2}in",
            emu_to_inches(self.left),
            emu_to_inches(self.top),
            emu_to_inches(self.width),
            emu_to_inches(self.height)
        )
    }
}
