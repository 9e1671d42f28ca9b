use super::linebreak::is_hard_break;
use super::text::{Layout, Line};
use crate::units::Pt;
use log::trace;

/// Stretch every line of the layout except the last so that it exactly fills the width
/// the layout was broken against, spreading the leftover space evenly between glyphs.
///
/// Lines that already fill or overflow the width, single-glyph lines, and lines ended by
/// a hard break (the last line of a paragraph) keep their natural spacing. Justifying
/// an already justified layout is a no-op.
pub fn justify(layout: &mut Layout) {
    let width = layout.width;
    let Some((_, lines)) = layout.lines.split_last_mut() else {
        return;
    };

    for (i, line) in lines.iter_mut().enumerate() {
        if justify_line(line, width) {
            trace!("justified line {i} to {width}");
        }
    }
}

fn justify_line(line: &mut Line, width: Pt) -> bool {
    let slack = width - line.natural_width;
    let gaps = line.glyphs.len().saturating_sub(1);
    let ends_paragraph = line.glyphs.last().is_some_and(|g| is_hard_break(g.ch));
    if slack <= Pt(0.0) || gaps == 0 || ends_paragraph || line.is_justified() {
        return false;
    }

    // position each glyph from its natural offset plus its share of the slack, so the
    // final glyph's right edge lands on the width without accumulating rounding error
    let left = line.left();
    let mut natural_x = Pt(0.0);
    for (i, glyph) in line.glyphs.iter_mut().enumerate() {
        glyph.x = left + natural_x + slack * i as f32 / gaps as f32;
        natural_x += glyph.width;
    }
    line.extra = slack;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Font, MonospaceMetrics};
    use crate::layout::text::{BreakKind, Glyph};
    use id_arena::Arena;

    fn line(text: &str, kind: BreakKind) -> Line {
        let mut fonts: Arena<Font> = Arena::new();
        let font = fonts.alloc(Font::new("Mono", MonospaceMetrics::new(1.0)));
        let glyphs = text
            .chars()
            .map(|ch| Glyph {
                ch,
                font,
                width: if ch == '\n' { Pt(0.0) } else { Pt(10.0) },
                x: Pt(0.0),
                y: Pt(0.0),
            })
            .collect();
        Line::new(glyphs, Pt(0.0), Pt(12.0), kind)
    }

    fn layout(lines: Vec<Line>, width: f32) -> Layout {
        Layout {
            lines,
            width: Pt(width),
            font_size: Pt(10.0),
            leading_ratio: 1.2,
        }
    }

    #[test]
    fn spreads_slack_between_glyphs() {
        let mut layout = layout(
            vec![line("abcd", BreakKind::Natural), line("ef", BreakKind::End)],
            49.0,
        );
        justify(&mut layout);

        let first = &layout.lines()[0];
        assert_eq!(first.width(), Pt(49.0));
        let xs: Vec<Pt> = first.glyphs().iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![Pt(0.0), Pt(13.0), Pt(26.0), Pt(39.0)]);
        assert!(first.is_justified());
    }

    #[test]
    fn last_line_is_never_justified() {
        let mut layout = layout(vec![line("ab", BreakKind::End)], 49.0);
        justify(&mut layout);
        assert_eq!(layout.lines()[0].width(), Pt(20.0));
        assert!(!layout.lines()[0].is_justified());
    }

    #[test]
    fn overflowing_and_paragraph_final_lines_keep_natural_spacing() {
        let mut layout = layout(
            vec![
                line("abcdef", BreakKind::PushIn),
                line("a\n", BreakKind::Mandatory),
                line("z", BreakKind::Natural),
                line("end", BreakKind::End),
            ],
            49.0,
        );
        justify(&mut layout);
        assert_eq!(layout.lines()[0].width(), Pt(60.0));
        assert_eq!(layout.lines()[1].width(), Pt(10.0));
        assert_eq!(layout.lines()[2].width(), Pt(10.0));
    }

    #[test]
    fn justifying_twice_changes_nothing() {
        let mut once = layout(
            vec![line("abc", BreakKind::Natural), line("d", BreakKind::End)],
            47.0,
        );
        justify(&mut once);
        let mut twice = once.clone();
        justify(&mut twice);
        assert_eq!(once, twice);
    }
}
