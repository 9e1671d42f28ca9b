use crate::units::Pt;
use log::warn;

/// Padding insets the alignment box on each side before a text block is positioned in
/// it. There is no control preventing text from overflowing the padding; a block taller
/// or wider than the padded box simply spills over.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Padding {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Padding {
    /// Create padding by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS padding)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Padding {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Padding {
        let value: Pt = value.into();
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create padding by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) sides
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Padding {
        Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create padding where all values are 0.0
    pub fn empty() -> Padding {
        Padding::all(Pt(0.0))
    }

    /// Total horizontal inset (left + right)
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom)
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }

    /// Replace negative or non-finite sides with zero
    pub(crate) fn clamped(self) -> Padding {
        let clamp = |side: Pt, name: &str| {
            if side.0.is_finite() && side.0 >= 0.0 {
                side
            } else {
                warn!("ignoring invalid {name} padding of {side}");
                Pt(0.0)
            }
        };
        Padding {
            top: clamp(self.top, "top"),
            right: clamp(self.right, "right"),
            bottom: clamp(self.bottom, "bottom"),
            left: clamp(self.left, "left"),
        }
    }
}

impl From<Pt> for Padding {
    fn from(value: Pt) -> Self {
        Padding::all(value)
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::all(Pt(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn uniform_padding_from_any_unit() {
        assert_eq!(Padding::from(10.0f32), Padding::all(Pt(10.0)));
        assert_eq!(Padding::all(In(1.0)).left, Pt(72.0));
        assert_eq!(Padding::all(Pt(5.0)).horizontal(), Pt(10.0));
    }

    #[test]
    fn negative_sides_clamp_to_zero() {
        let padding = Padding::trbl(Pt(-1.0), Pt(2.0), Pt(f32::NAN), Pt(4.0)).clamped();
        assert_eq!(padding, Padding::trbl(Pt(0.0), Pt(2.0), Pt(0.0), Pt(4.0)));
    }
}
