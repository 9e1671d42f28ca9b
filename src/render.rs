//! Painting aligned text onto a drawing surface.
//!
//! Rendering is the job of the surrounding application; this module only defines the
//! seam ([Renderer]) and one implementation that writes PDF content-stream operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::layout::AlignedLayout;
use crate::units::Pt;
use crate::LayoutError;
use id_arena::{Arena, Id};
use log::trace;
use pdf_writer::{Content, Name, Str};

/// Something aligned text can be drawn onto
pub trait Renderer {
    /// Draw every glyph of `layout` at `anchor + glyph offset`. The anchor is where the
    /// top-left corner of the alignment box lands on the surface
    fn render(&mut self, layout: &AlignedLayout, anchor_x: Pt, anchor_y: Pt) -> Result<(), LayoutError>;
}

/// The resource name text set in `font` is drawn with, e.g. `F0`. The page or form that
/// uses the content stream must map these names to its embedded fonts
pub fn font_resource_name(font: Id<Font>) -> String {
    format!("F{}", font.index())
}

/// Writes aligned text as PDF content-stream operators using `Identity-H` style two-byte
/// codes: the glyph index when the font's metrics know it, the UTF-16 code unit(s)
/// otherwise.
///
/// PDF's y axis grows upwards, so glyphs are placed at `anchor_y - offset`, with each
/// baseline one font size below the top of its line.
pub struct ContentRenderer<'f> {
    fonts: &'f Arena<Font>,
    content: Content,
    colour: Colour,
}

impl<'f> ContentRenderer<'f> {
    pub fn new(fonts: &'f Arena<Font>) -> ContentRenderer<'f> {
        ContentRenderer {
            fonts,
            content: Content::new(),
            colour: Colour::default(),
        }
    }

    /// Set the fill colour used for subsequently rendered text
    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Finish the content stream, returning its bytes
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    fn encode(&self, font: Id<Font>, ch: char) -> Vec<u8> {
        match self.fonts[font].glyph_id(ch) {
            Some(gid) => gid.to_be_bytes().to_vec(),
            None => ch
                .encode_utf16(&mut [0u16; 2])
                .iter()
                .flat_map(|unit| unit.to_be_bytes())
                .collect(),
        }
    }
}

impl Renderer for ContentRenderer<'_> {
    fn render(&mut self, layout: &AlignedLayout, anchor_x: Pt, anchor_y: Pt) -> Result<(), LayoutError> {
        let size = layout.font_size();
        self.content.save_state();
        self.colour.set_fill(&mut self.content);

        for line in layout.lines() {
            let mut glyphs = line.glyphs().iter().filter(|g| !g.ch.is_control()).peekable();
            if glyphs.peek().is_none() {
                continue;
            }

            self.content.begin_text();
            let mut current_font: Option<Id<Font>> = None;
            for glyph in glyphs {
                if current_font != Some(glyph.font) {
                    let name = font_resource_name(glyph.font);
                    self.content.set_font(Name(name.as_bytes()), size.0);
                    current_font = Some(glyph.font);
                }

                let x = anchor_x + glyph.x;
                let y = anchor_y - glyph.y - size;
                self.content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x.0, y.0]);
                let code = self.encode(glyph.font, glyph.ch);
                self.content.show(Str(&code));
            }
            self.content.end_text();
            trace!("rendered {:?}", line.text());
        }

        self.content.restore_state();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MonospaceMetrics;
    use crate::layout::{BlockAligner, HAlign, VAlign};
    use crate::{LayoutEngine, LayoutOptions};

    fn count(haystack: &[u8], needle: &str) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle.as_bytes())
            .count()
    }

    #[test]
    fn one_text_object_per_visible_line() {
        let mut engine = LayoutEngine::new();
        engine.add_font(Font::new("Mono", MonospaceMetrics::new(1.0)));
        let layout = engine
            .layout("一二三四五\n\n六", &LayoutOptions::new(Pt(49.0), Pt(12.0)))
            .unwrap();
        assert_eq!(layout.lines().len(), 4);

        let aligned = BlockAligner::new(&layout, Pt(100.0), Pt(100.0))
            .unwrap()
            .alignment(HAlign::Left, VAlign::Top)
            .apply();
        let mut renderer = ContentRenderer::new(engine.fonts());
        renderer.render(&aligned, Pt(50.0), Pt(700.0)).unwrap();
        let bytes = renderer.finish();

        // the line holding only a hard break draws nothing
        assert_eq!(count(&bytes, "BT"), 3);
        assert_eq!(count(&bytes, "ET"), 3);
        assert_eq!(count(&bytes, "Tm"), 6);
        assert_eq!(count(&bytes, "/F0 12 Tf"), 3);
        assert!(count(&bytes, "1 0 0 1 50 688 Tm") == 1);
    }

    #[test]
    fn switches_font_only_when_it_changes() {
        let mut engine = LayoutEngine::new();
        engine.add_font_family([
            Font::new("Latin", MonospaceMetrics::new(0.5).covering('a'..='z')),
            Font::new("Kanji", MonospaceMetrics::new(1.0)),
        ]);
        let layout = engine
            .layout("ab一二c", &LayoutOptions::new(Pt(200.0), Pt(10.0)))
            .unwrap();
        let aligned = BlockAligner::new(&layout, Pt(200.0), Pt(50.0)).unwrap().apply();
        let mut renderer = ContentRenderer::new(engine.fonts()).colour(crate::colours::RED);
        renderer.render(&aligned, Pt(0.0), Pt(0.0)).unwrap();
        let bytes = renderer.finish();

        assert_eq!(count(&bytes, "/F0 10 Tf"), 2);
        assert_eq!(count(&bytes, "/F1 10 Tf"), 1);
        assert_eq!(count(&bytes, "1 0 0 rg"), 1);
    }

    #[test]
    fn resource_names_follow_font_ids() {
        let mut engine = LayoutEngine::new();
        let a = engine.add_font(Font::new("A", MonospaceMetrics::new(1.0)));
        let b = engine.add_font(Font::new("B", MonospaceMetrics::new(1.0)));
        assert_eq!(font_resource_name(a), "F0");
        assert_eq!(font_resource_name(b), "F1");
    }
}
