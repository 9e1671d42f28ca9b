//! Greedy line breaking with kinsoku shori corrections.
//!
//! Lines are filled glyph by glyph until the next glyph would overflow the target width.
//! The naive break found that way is then corrected at the boundary:
//!
//! 1. an opening bracket left at the end of the line is moved to the next line (tail),
//! 2. closing punctuation that would start the next line is pulled onto this one, even
//!    though that overflows it (push-in, oikomi),
//! 3. a companion mark (small kana, ー, 々) that would start the next line takes the glyph
//!    in front of it along to the next line (push-out, oidashi).
//!
//! Each correction only ever moves the boundary in one direction, so every boundary
//! settles after at most one pass over the glyphs of its line.

use super::text::{BreakKind, Glyph, Line};
use crate::font::WordWrap;
use crate::kinsoku::Kinsoku;
use crate::units::Pt;
use log::{debug, trace};

/// A glyph awaiting line breaking, with the break rules of its font already resolved
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Measured {
    pub glyph: Glyph,
    pub class: Kinsoku,
    pub wrap: WordWrap,
}

pub(crate) fn is_hard_break(ch: char) -> bool {
    ch == '\n'
}

/// Break measured glyphs into lines no wider than `width`, except where a kinsoku
/// correction or a single oversized glyph forces an overflow
pub(crate) fn break_lines(items: &[Measured], width: Pt, leading: Pt) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::default();
    let mut start = 0usize;
    let mut top = Pt(0.0);

    while start < items.len() {
        let (end, kind) = next_break(items, start, width);
        debug_assert!(end > start, "line breaking must make progress");

        let glyphs: Vec<Glyph> = items[start..end].iter().map(|m| m.glyph).collect();
        let line = Line::new(glyphs, top, leading, kind);
        trace!(
            "line {}: {:?} ({:?}, {} wide)",
            lines.len(),
            line.text(),
            kind,
            line.natural_width()
        );
        lines.push(line);

        top += leading;
        start = end;
    }

    lines
}

/// Find where the line starting at `start` ends (exclusive) and why
fn next_break(items: &[Measured], start: usize, width: Pt) -> (usize, BreakKind) {
    let mut x = Pt(0.0);
    let mut overflow: Option<usize> = None;
    for (i, item) in items.iter().enumerate().skip(start) {
        if is_hard_break(item.glyph.ch) {
            return (i + 1, BreakKind::Mandatory);
        }
        if x + item.glyph.width > width {
            overflow = Some(i);
            break;
        }
        x += item.glyph.width;
    }

    let Some(overflow) = overflow else {
        return (items.len(), BreakKind::End);
    };

    if overflow == start {
        // nothing fits; the glyph gets a line to itself rather than being retried forever
        debug!("glyph {:?} is wider than the line", items[start].glyph.ch);
        return settle(items, start, start + 1, BreakKind::Forced);
    }

    let end = match items[overflow].wrap {
        WordWrap::Cjk => overflow,
        WordWrap::Plain => whitespace_break(items, start, overflow).unwrap_or(overflow),
    };
    settle(items, start, end, BreakKind::Natural)
}

/// The latest break after a whitespace glyph. Whitespace at `overflow` hangs past the end
/// of the line instead of starting the next one, together with any whitespace and a hard
/// break directly after it
fn whitespace_break(items: &[Measured], start: usize, overflow: usize) -> Option<usize> {
    let hangs = |i: usize| items[i].glyph.ch.is_whitespace() && !is_hard_break(items[i].glyph.ch);

    if hangs(overflow) {
        let mut end = overflow + 1;
        while end < items.len() && hangs(end) {
            end += 1;
        }
        if end < items.len() && is_hard_break(items[end].glyph.ch) {
            end += 1;
        }
        return Some(end);
    }

    (start + 1..=overflow).rev().find(|&b| hangs(b - 1))
}

/// Apply the kinsoku corrections to a naive break at `end`
fn settle(items: &[Measured], start: usize, end: usize, kind: BreakKind) -> (usize, BreakKind) {
    let mut end = end;
    let mut kind = kind;

    while end - 1 > start && items[end - 1].class == Kinsoku::LineEnd {
        debug!("moving {:?} off the end of the line", items[end - 1].glyph.ch);
        end -= 1;
        kind = BreakKind::Tail;
    }

    if end >= items.len() {
        return (end, kind);
    }

    match items[end].class {
        Kinsoku::LineStartSimple => (push_in(items, end), BreakKind::PushIn),
        Kinsoku::LineStartCompanion => match push_out(items, start, end) {
            Some(end) => (end, BreakKind::PushOut),
            None => (push_in(items, end), BreakKind::PushIn),
        },
        Kinsoku::LineEnd | Kinsoku::None => (end, kind),
    }
}

/// Pull every glyph that may not start a line onto the current one. A hard break that
/// immediately follows is taken along so it does not produce an empty line
fn push_in(items: &[Measured], end: usize) -> usize {
    let mut end = end;
    while end < items.len() && items[end].class.prohibits_line_start() {
        debug!("pushing {:?} in to the end of the line", items[end].glyph.ch);
        end += 1;
    }
    if end < items.len() && is_hard_break(items[end].glyph.ch) {
        end += 1;
    }
    end
}

/// Move the boundary back so the companion marks at `end` start the next line together
/// with the glyph they belong to. Fails when that would empty the current line, start
/// the next line with a prohibited glyph, or leave an opening bracket at the line's end
fn push_out(items: &[Measured], start: usize, end: usize) -> Option<usize> {
    let mut end = end;
    while end > start && items[end].class == Kinsoku::LineStartCompanion {
        end -= 1;
    }

    if end <= start || items[end].class.prohibits_line_start() {
        return None;
    }
    let base = items[end].glyph.ch;

    while end - 1 > start && items[end - 1].class == Kinsoku::LineEnd {
        end -= 1;
    }
    if items[end - 1].class == Kinsoku::LineEnd {
        return None;
    }
    debug!("pushing {:?} out to the start of the next line", base);
    Some(end)
}
