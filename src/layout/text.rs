use crate::font::Font;
use crate::units::Pt;
use id_arena::Id;

/// A single measured character. `x` and `y` are relative to the top-left corner of the
/// text block until the block is aligned, after which they are absolute offsets within
/// the alignment box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glyph {
    /// The character this glyph draws
    pub ch: char,
    /// The font the character is set in, after family fallback
    pub font: Id<Font>,
    /// Horizontal advance of the glyph
    pub width: Pt,
    /// Offset of the glyph's left edge
    pub x: Pt,
    /// Offset of the top of the glyph's line
    pub y: Pt,
}

/// Why a line ended where it did
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// The next glyph did not fit and no prohibition applied
    Natural,
    /// An opening bracket that would have ended the line was moved to the next one
    Tail,
    /// Closing punctuation was pulled onto the end of this line, overflowing it
    PushIn,
    /// The last glyph was moved to the next line to stay with a companion mark
    PushOut,
    /// A single glyph wider than the whole line was given a line of its own
    Forced,
    /// The line ends with a hard line break (`'\n'`)
    Mandatory,
    /// The text ran out
    End,
}

/// One line of a laid out [Layout]
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) glyphs: Vec<Glyph>,
    pub(crate) natural_width: Pt,
    pub(crate) extra: Pt,
    pub(crate) leading: Pt,
    pub(crate) break_kind: BreakKind,
}

impl Line {
    /// Build a line from measured glyphs, placing them left to right at their natural
    /// advances along the line whose top edge sits at `top`
    pub(crate) fn new(mut glyphs: Vec<Glyph>, top: Pt, leading: Pt, break_kind: BreakKind) -> Line {
        let mut x = Pt(0.0);
        for glyph in glyphs.iter_mut() {
            glyph.x = x;
            glyph.y = top;
            x += glyph.width;
        }

        Line {
            glyphs,
            natural_width: x,
            extra: Pt(0.0),
            leading,
            break_kind,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The characters on this line, in reading order
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    /// The sum of the glyph advances, before any justification
    pub fn natural_width(&self) -> Pt {
        self.natural_width
    }

    /// The natural width without trailing whitespace, which may hang past the end of the
    /// line when it falls on a break
    pub fn content_width(&self) -> Pt {
        let trailing: Pt = self
            .glyphs
            .iter()
            .rev()
            .take_while(|g| g.ch.is_whitespace())
            .map(|g| g.width)
            .sum();
        self.natural_width - trailing
    }

    /// The width the line actually occupies, including space added by justification
    pub fn width(&self) -> Pt {
        self.natural_width + self.extra
    }

    /// Vertical space the line takes up (font size × leading ratio)
    pub fn leading(&self) -> Pt {
        self.leading
    }

    pub fn break_kind(&self) -> BreakKind {
        self.break_kind
    }

    /// Whether the line was allowed to run past the target width: closing punctuation
    /// pushed in from the next line, or a lone glyph too wide to fit anywhere
    pub fn overflows(&self) -> bool {
        matches!(self.break_kind, BreakKind::PushIn | BreakKind::Forced)
    }

    pub fn is_justified(&self) -> bool {
        self.extra > Pt(0.0)
    }

    /// Top edge of the line
    pub fn top(&self) -> Pt {
        self.glyphs.first().map(|g| g.y).unwrap_or_default()
    }

    /// Left edge of the line
    pub fn left(&self) -> Pt {
        self.glyphs.first().map(|g| g.x).unwrap_or_default()
    }
}

/// A block of text broken into lines against a fixed width
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub(crate) lines: Vec<Line>,
    pub(crate) width: Pt,
    pub(crate) font_size: Pt,
    pub(crate) leading_ratio: f32,
}

impl Layout {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The width the text was broken against
    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn leading_ratio(&self) -> f32 {
        self.leading_ratio
    }

    /// Total height of the block: the sum of every line's leading
    pub fn height(&self) -> Pt {
        self.lines.iter().map(|l| l.leading).sum()
    }

    /// Every glyph in the block, in reading order
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.lines.iter().flat_map(|l| l.glyphs.iter())
    }

    /// The laid out text, which is always exactly the text that went in
    pub fn text(&self) -> String {
        self.glyphs().map(|g| g.ch).collect()
    }
}
