use crate::units::*;

/// A rectangle, specified by two opposite corners. In layout space y grows downwards, so
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (top) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (bottom) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// The smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }
}
