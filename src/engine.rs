use crate::font::{Font, FontFamily};
use crate::kinsoku::classify;
use crate::layout::linebreak::{break_lines, Measured};
use crate::layout::{justify, Glyph, Layout};
use crate::{LayoutError, Pt};
use id_arena::{Arena, Id};
use log::debug;

/// Leading ratio used when none is given: lines are 1.2× the font size apart
pub const DEFAULT_LEADING_RATIO: f32 = 1.2;

/// Parameters for a single [LayoutEngine::layout] call
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutOptions {
    /// The width lines are broken against
    pub width: Pt,
    pub font_size: Pt,
    /// Line height as a multiple of the font size
    pub leading_ratio: f32,
    /// Whether to stretch every line but the last to exactly fill the width
    pub justify: bool,
}

impl LayoutOptions {
    /// Options for breaking text set at `font_size` into lines `width` wide, with the
    /// default leading and no justification
    pub fn new(width: Pt, font_size: Pt) -> LayoutOptions {
        LayoutOptions {
            width,
            font_size,
            leading_ratio: DEFAULT_LEADING_RATIO,
            justify: false,
        }
    }

    pub fn leading_ratio(mut self, leading_ratio: f32) -> LayoutOptions {
        self.leading_ratio = leading_ratio;
        self
    }

    pub fn justify(mut self, justify: bool) -> LayoutOptions {
        self.justify = justify;
        self
    }

    /// The vertical space each line takes up
    pub fn leading(&self) -> Pt {
        self.font_size * self.leading_ratio
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !self.width.is_positive() {
            return Err(LayoutError::InvalidWidth(self.width));
        }
        if !self.font_size.is_positive() {
            return Err(LayoutError::InvalidFontSize(self.font_size));
        }
        if !(self.leading_ratio.is_finite() && self.leading_ratio > 0.0) {
            return Err(LayoutError::InvalidLeadingRatio(self.leading_ratio));
        }
        Ok(())
    }
}

/// Holds the fonts text can be set in and breaks text into [Layout]s.
///
/// Every registered font joins a single fallback order: each character is set in the
/// first registered font that has a glyph for it.
///
/// ```
/// use kinsoku_layout::{Font, LayoutEngine, LayoutOptions, MonospaceMetrics, Pt};
///
/// let mut engine = LayoutEngine::new();
/// engine.add_font(Font::new("HeiseiKakuGo-W5", MonospaceMetrics::new(1.0)));
///
/// let layout = engine
///     .layout("一二三四、五六七八", &LayoutOptions::new(Pt(49.0), Pt(12.0)))
///     .expect("can lay out text");
/// let lines: Vec<String> = layout.lines().iter().map(|l| l.text()).collect();
/// assert_eq!(lines, vec!["一二三四、", "五六七八"]);
/// ```
#[derive(Default)]
pub struct LayoutEngine {
    fonts: Arena<Font>,
    family: FontFamily,
}

impl LayoutEngine {
    pub fn new() -> LayoutEngine {
        LayoutEngine::default()
    }

    /// Register a font, appending it to the end of the fallback order. The returned id is
    /// what laid out glyphs refer to their font by
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.family.push(id);
        id
    }

    /// Register several fonts at once, in fallback order
    pub fn add_font_family<I: IntoIterator<Item = Font>>(&mut self, fonts: I) -> Vec<Id<Font>> {
        fonts.into_iter().map(|font| self.add_font(font)).collect()
    }

    /// Every registered font, indexable by the ids glyphs carry
    pub fn fonts(&self) -> &Arena<Font> {
        &self.fonts
    }

    /// The fallback order fonts are consulted in
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Break `text` into lines, applying kinsoku shori, and optionally justify the result.
    ///
    /// Fails fast, before any layout work, when the options are out of range or when no
    /// font has been registered
    pub fn layout(&self, text: &str, options: &LayoutOptions) -> Result<Layout, LayoutError> {
        options.validate()?;
        if self.family.is_empty() {
            return Err(LayoutError::NoFonts);
        }

        let items = self.measure(text, options.font_size);
        let lines = break_lines(&items, options.width, options.leading());
        debug!(
            "laid out {} chars into {} lines at {} wide",
            items.len(),
            lines.len(),
            options.width
        );

        let mut layout = Layout {
            lines,
            width: options.width,
            font_size: options.font_size,
            leading_ratio: options.leading_ratio,
        };
        if options.justify {
            justify(&mut layout);
        }
        Ok(layout)
    }

    /// Resolve a font for each character and measure it
    fn measure(&self, text: &str, size: Pt) -> Vec<Measured> {
        text.chars()
            .filter_map(|ch| {
                let id = self.family.resolve(&self.fonts, ch)?;
                let font = &self.fonts[id];
                let width = if ch.is_control() {
                    Pt(0.0)
                } else {
                    font.advance(ch, size).max(Pt(0.0))
                };
                Some(Measured {
                    glyph: Glyph {
                        ch,
                        font: id,
                        width,
                        x: Pt(0.0),
                        y: Pt(0.0),
                    },
                    class: classify(ch, font.word_wrap()),
                    wrap: font.word_wrap(),
                })
            })
            .collect()
    }
}
