use super::padding::Padding;
use super::text::{Glyph, Layout, Line};
use crate::rect::Rect;
use crate::units::Pt;
use crate::LayoutError;
use log::debug;

/// Horizontal placement of each line within the box
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of the whole block within the box
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Positions a laid out block of text inside a box.
///
/// The aligner is an immutable configuration value: every configuration method returns
/// an updated copy, in any order, and only [BlockAligner::apply] does any work. The
/// source [Layout] is never modified.
///
/// ```
/// use kinsoku_layout::{Font, LayoutEngine, LayoutOptions, MonospaceMetrics, Pt};
/// use kinsoku_layout::layout::{BlockAligner, HAlign, VAlign};
///
/// let mut engine = LayoutEngine::new();
/// engine.add_font(Font::new("Mono", MonospaceMetrics::new(1.0)));
/// let layout = engine
///     .layout("一二三四五六", &LayoutOptions::new(Pt(49.0), Pt(12.0)))
///     .expect("can lay out text");
///
/// let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
///     .expect("box is valid")
///     .alignment(HAlign::Center, VAlign::Middle)
///     .padding(Pt(10.0))
///     .apply();
/// assert_eq!(aligned.lines().len(), 2);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BlockAligner<'a> {
    layout: &'a Layout,
    width: Pt,
    height: Pt,
    origin: (Pt, Pt),
    horizontal: HAlign,
    vertical: VAlign,
    padding: Padding,
}

impl<'a> BlockAligner<'a> {
    /// Prepare to align `layout` in a `width` × `height` box. Both dimensions must be
    /// positive; padding may later shrink the usable area to nothing (or less), which is
    /// not an error
    pub fn new(layout: &'a Layout, width: Pt, height: Pt) -> Result<BlockAligner<'a>, LayoutError> {
        if !width.is_positive() || !height.is_positive() {
            return Err(LayoutError::InvalidBox { width, height });
        }

        Ok(BlockAligner {
            layout,
            width,
            height,
            origin: (Pt(0.0), Pt(0.0)),
            horizontal: HAlign::default(),
            vertical: VAlign::default(),
            padding: Padding::empty(),
        })
    }

    pub fn alignment(mut self, horizontal: HAlign, vertical: VAlign) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    /// Inset the box before aligning. Accepts a uniform [Pt] or `f32`, or a full
    /// [Padding]. Negative sides are treated as zero
    pub fn padding<P: Into<Padding>>(mut self, padding: P) -> Self {
        self.padding = padding.into().clamped();
        self
    }

    /// Move the top-left corner of the box (defaults to `(0, 0)`)
    pub fn origin(mut self, x: Pt, y: Pt) -> Self {
        self.origin = (x, y);
        self
    }

    /// The area inside the padding that the block is aligned within
    pub fn content_box(&self) -> Rect {
        Rect::new(
            self.origin.0 + self.padding.left,
            self.origin.1 + self.padding.top,
            self.width - self.padding.horizontal(),
            self.height - self.padding.vertical(),
        )
    }

    /// Compute the final position of every glyph
    pub fn apply(&self) -> AlignedLayout {
        let content = self.content_box();
        let block_height = self.layout.height();
        let top = match self.vertical {
            VAlign::Top => Pt(0.0),
            VAlign::Middle => (content.height() - block_height) / 2.0,
            VAlign::Bottom => content.height() - block_height,
        };
        debug!(
            "aligning {} lines ({} tall) in {} x {} at {:?}/{:?}",
            self.layout.lines.len(),
            block_height,
            content.width(),
            content.height(),
            self.horizontal,
            self.vertical
        );

        let lines = self
            .layout
            .lines
            .iter()
            .map(|line| {
                let left = match self.horizontal {
                    HAlign::Left => Pt(0.0),
                    HAlign::Center => (content.width() - line.width()) / 2.0,
                    HAlign::Right => content.width() - line.width(),
                };

                let mut line = line.clone();
                for glyph in line.glyphs.iter_mut() {
                    glyph.x = content.x1 + left + glyph.x;
                    glyph.y = content.y1 + top + glyph.y;
                }
                line
            })
            .collect();

        AlignedLayout {
            lines,
            frame: Rect::new(self.origin.0, self.origin.1, self.width, self.height),
            content,
            font_size: self.layout.font_size,
        }
    }
}

/// A [Layout] whose glyphs carry their final offsets within an alignment box. Offsets
/// grow right and down from the top-left corner of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedLayout {
    pub(crate) lines: Vec<Line>,
    pub(crate) frame: Rect,
    pub(crate) content: Rect,
    pub(crate) font_size: Pt,
}

impl AlignedLayout {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.lines.iter().flat_map(|l| l.glyphs.iter())
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    /// The box the block was aligned in, padding included
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The box the block was aligned in, padding excluded
    pub fn content_box(&self) -> Rect {
        self.content
    }

    /// The area actually covered by glyphs (each glyph spanning its advance and its line's
    /// leading), or [None] for an empty block. May extend past the frame when the text
    /// overflows it
    pub fn bounds(&self) -> Option<Rect> {
        self.lines
            .iter()
            .flat_map(|line| {
                line.glyphs
                    .iter()
                    .map(move |g| Rect::new(g.x, g.y, g.width, line.leading))
            })
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, MonospaceMetrics};
    use crate::layout::text::BreakKind;
    use id_arena::Arena;

    // two lines, 30 and 10 wide, each 20 tall
    fn layout() -> Layout {
        let mut fonts: Arena<Font> = Arena::new();
        let font = fonts.alloc(Font::new("Mono", MonospaceMetrics::new(1.0)));
        let glyphs = |text: &str| -> Vec<Glyph> {
            text.chars()
                .map(|ch| Glyph {
                    ch,
                    font,
                    width: Pt(10.0),
                    x: Pt(0.0),
                    y: Pt(0.0),
                })
                .collect()
        };
        Layout {
            lines: vec![
                Line::new(glyphs("abc"), Pt(0.0), Pt(20.0), BreakKind::Natural),
                Line::new(glyphs("d"), Pt(20.0), Pt(20.0), BreakKind::End),
            ],
            width: Pt(35.0),
            font_size: Pt(10.0),
            leading_ratio: 2.0,
        }
    }

    fn origins(aligned: &AlignedLayout) -> Vec<(Pt, Pt)> {
        aligned.lines().iter().map(|l| (l.left(), l.top())).collect()
    }

    #[test]
    fn top_left_is_the_identity() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0)).unwrap().apply();
        assert_eq!(origins(&aligned), vec![(Pt(0.0), Pt(0.0)), (Pt(0.0), Pt(20.0))]);
        let xs: Vec<Pt> = aligned.lines()[0].glyphs().iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![Pt(0.0), Pt(10.0), Pt(20.0)]);
    }

    #[test]
    fn center_middle() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
            .unwrap()
            .alignment(HAlign::Center, VAlign::Middle)
            .apply();
        assert_eq!(origins(&aligned), vec![(Pt(35.0), Pt(30.0)), (Pt(45.0), Pt(50.0))]);
    }

    #[test]
    fn right_bottom_with_padding() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
            .unwrap()
            .padding(Pt(10.0))
            .alignment(HAlign::Right, VAlign::Bottom)
            .apply();
        assert_eq!(origins(&aligned), vec![(Pt(60.0), Pt(50.0)), (Pt(80.0), Pt(70.0))]);
        assert_eq!(aligned.content_box(), Rect::new(Pt(10.0), Pt(10.0), Pt(80.0), Pt(80.0)));
    }

    #[test]
    fn configuration_order_does_not_matter() {
        let layout = layout();
        let a = BlockAligner::new(&layout, Pt(80.0), Pt(60.0))
            .unwrap()
            .alignment(HAlign::Center, VAlign::Bottom)
            .padding(Pt(4.0))
            .origin(Pt(5.0), Pt(6.0))
            .apply();
        let b = BlockAligner::new(&layout, Pt(80.0), Pt(60.0))
            .unwrap()
            .origin(Pt(5.0), Pt(6.0))
            .padding(Pt(4.0))
            .alignment(HAlign::Center, VAlign::Bottom)
            .apply();
        assert_eq!(a, b);
    }

    #[test]
    fn overflowing_block_gets_negative_offsets() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(20.0), Pt(20.0))
            .unwrap()
            .alignment(HAlign::Center, VAlign::Middle)
            .apply();
        assert_eq!(origins(&aligned)[0], (Pt(-5.0), Pt(-10.0)));
    }

    #[test]
    fn padding_larger_than_the_box_is_not_an_error() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(10.0), Pt(10.0))
            .unwrap()
            .padding(Pt(20.0))
            .alignment(HAlign::Right, VAlign::Top)
            .apply();
        assert_eq!(aligned.content_box().width(), Pt(-30.0));
        assert_eq!(origins(&aligned)[0], (Pt(-40.0), Pt(20.0)));
    }

    #[test]
    fn rejects_empty_boxes() {
        let layout = layout();
        assert!(matches!(
            BlockAligner::new(&layout, Pt(0.0), Pt(10.0)),
            Err(LayoutError::InvalidBox { .. })
        ));
        assert!(BlockAligner::new(&layout, Pt(10.0), Pt(-1.0)).is_err());
    }

    #[test]
    fn bounds_cover_every_glyph() {
        let layout = layout();
        let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
            .unwrap()
            .alignment(HAlign::Center, VAlign::Top)
            .apply();
        assert_eq!(
            aligned.bounds(),
            Some(Rect::new(Pt(35.0), Pt(0.0), Pt(30.0), Pt(40.0)))
        );
    }

    #[test]
    fn source_layout_is_untouched() {
        let layout = layout();
        let before = layout.clone();
        let _ = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
            .unwrap()
            .alignment(HAlign::Right, VAlign::Bottom)
            .apply();
        assert_eq!(layout, before);
    }
}
