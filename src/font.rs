use crate::{LayoutError, Pt};
use id_arena::{Arena, Id};
use log::debug;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::{fmt, ops::RangeInclusive, sync::Arc};

/// How lines are broken when text set in a given font overflows its box
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum WordWrap {
    /// Break between any two glyphs, correcting the break with the Japanese
    /// line-breaking prohibitions (kinsoku shori)
    #[default]
    Cjk,
    /// Break at the nearest preceding whitespace, falling back to breaking between glyphs
    /// when a single token is wider than the line
    Plain,
}

/// Source of glyph widths for a font.
///
/// Implementations must be pure: the same question always gets the same answer, and they
/// may be queried from several threads at once.
pub trait GlyphMetrics: Send + Sync {
    /// Whether the font can draw `ch` itself (as opposed to showing a replacement glyph)
    fn has_glyph(&self, ch: char) -> bool;

    /// The horizontal advance of `ch` at the given font size. Must always return a usable,
    /// non-negative width, even when [GlyphMetrics::has_glyph] is false
    fn advance(&self, ch: char, size: Pt) -> Pt;

    /// The glyph index of `ch`, if the metrics know about glyph indices. Renderers that
    /// write glyph-indexed text (e.g. `Identity-H` encoded PDF fonts) use this
    fn glyph_id(&self, _ch: char) -> Option<u16> {
        None
    }
}

/// Metrics read out of a TrueType or OpenType font file
pub struct TtfMetrics {
    pub face: OwnedFace,
}

impl TtfMetrics {
    /// Load metrics from raw font bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TtfMetrics, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TtfMetrics { face })
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }
}

impl GlyphMetrics for TtfMetrics {
    fn has_glyph(&self, ch: char) -> bool {
        self.face.as_face_ref().glyph_index(ch).is_some()
    }

    fn advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let Some(gid) = face
            .glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
        else {
            return Pt(0.0);
        };

        self.scaling(size) * face.glyph_hor_advance(gid).unwrap_or_default() as f32
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }
}

impl fmt::Debug for TtfMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtfMetrics")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Metrics for fonts where every glyph has the same advance, such as the built-in
/// Japanese CID fonts whose ideographs and kana are all one em wide.
///
/// By default every character is covered; restrict the coverage with
/// [MonospaceMetrics::covering] to take part in font-family fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of every glyph, as a fraction of the font size
    pub em: f32,
    pub coverage: Vec<RangeInclusive<char>>,
}

impl MonospaceMetrics {
    pub fn new(em: f32) -> MonospaceMetrics {
        MonospaceMetrics {
            em,
            coverage: Vec::default(),
        }
    }

    /// Restrict the characters this font claims to have glyphs for. May be called several
    /// times to cover several ranges
    pub fn covering(mut self, range: RangeInclusive<char>) -> MonospaceMetrics {
        self.coverage.push(range);
        self
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn has_glyph(&self, ch: char) -> bool {
        self.coverage.is_empty() || self.coverage.iter().any(|range| range.contains(&ch))
    }

    fn advance(&self, _ch: char, size: Pt) -> Pt {
        size * self.em
    }
}

/// A font that text can be laid out in: a name, a word-wrapping mode, and the metrics
/// that measure its glyphs.
///
/// Fonts are registered with a [LayoutEngine](crate::LayoutEngine), which hands back an
/// [Id] used to refer to the font from laid-out glyphs
#[derive(Clone)]
pub struct Font {
    name: String,
    word_wrap: WordWrap,
    metrics: Arc<dyn GlyphMetrics>,
}

impl Font {
    /// Create a font from a name and its metrics, wrapping in [WordWrap::Cjk] mode
    pub fn new<S: ToString, M: GlyphMetrics + 'static>(name: S, metrics: M) -> Font {
        Font::from_shared(name, Arc::new(metrics))
    }

    /// Create a font whose metrics are shared with other fonts (e.g. the same face
    /// registered once per wrapping mode)
    pub fn from_shared<S: ToString>(name: S, metrics: Arc<dyn GlyphMetrics>) -> Font {
        Font {
            name: name.to_string(),
            word_wrap: WordWrap::default(),
            metrics,
        }
    }

    /// Load a TrueType or OpenType font from raw bytes, naming it after the font's own
    /// full name
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let metrics = TtfMetrics::load(bytes)?;
        let name = metrics.name().unwrap_or_else(|| "Unnamed".to_string());
        Ok(Font::new(name, metrics))
    }

    /// Set the word-wrapping mode used for text set in this font
    pub fn with_word_wrap(mut self, word_wrap: WordWrap) -> Font {
        self.word_wrap = word_wrap;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn word_wrap(&self) -> WordWrap {
        self.word_wrap
    }

    pub fn metrics(&self) -> &dyn GlyphMetrics {
        self.metrics.as_ref()
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        self.metrics.has_glyph(ch)
    }

    /// Width of a single character at the given size
    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        self.metrics.advance(ch, size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.metrics.glyph_id(ch)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("word_wrap", &self.word_wrap)
            .finish_non_exhaustive()
    }
}

/// An ordered list of fonts consulted in turn for each character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFamily {
    fonts: Vec<Id<Font>>,
}

impl FontFamily {
    pub fn new() -> FontFamily {
        FontFamily::default()
    }

    /// Append a font to the end of the fallback order
    pub fn push(&mut self, font: Id<Font>) {
        self.fonts.push(font);
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Id<Font>> + '_ {
        self.fonts.iter().copied()
    }

    /// Pick the font to set `ch` in: the first font that has a glyph for it wins. When no
    /// font does, the last font in the family is used and left to draw its replacement
    /// glyph. Only an empty family resolves to [None]
    pub fn resolve(&self, fonts: &Arena<Font>, ch: char) -> Option<Id<Font>> {
        let found = self.fonts.iter().copied().find(|&id| fonts[id].has_glyph(ch));
        if found.is_none() && !self.fonts.is_empty() {
            debug!("no font has a glyph for {ch:?}, using the last font in the family");
        }
        found.or_else(|| self.fonts.last().copied())
    }
}

impl FromIterator<Id<Font>> for FontFamily {
    fn from_iter<I: IntoIterator<Item = Id<Font>>>(iter: I) -> Self {
        FontFamily {
            fonts: iter.into_iter().collect(),
        }
    }
}
