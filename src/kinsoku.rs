//! Line-breaking prohibition classes for Japanese typesetting (kinsoku shori).
//!
//! The tables below follow the customary JIS X 4051 groupings: closing punctuation may not
//! start a line, small kana and prolonged/iteration marks may not be separated from the
//! character in front of them, and opening brackets may not end a line.

use crate::font::WordWrap;

/// How a single character constrains the line breaks around it
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Kinsoku {
    /// No restriction; a line may start or end with this character
    #[default]
    None,
    /// May not start a line. Pulled back onto the end of the previous line when it would
    /// (oikomi / push-in)
    LineStartSimple,
    /// May not start a line and must stay attached to the character before it. The
    /// preceding character is moved to the next line along with it (oidashi / push-out)
    LineStartCompanion,
    /// May not end a line; moved to the start of the next line instead
    LineEnd,
}

impl Kinsoku {
    /// Whether a line is forbidden from beginning with this class
    pub fn prohibits_line_start(self) -> bool {
        matches!(self, Kinsoku::LineStartSimple | Kinsoku::LineStartCompanion)
    }
}

/// Closing brackets, commas, stops, and other punctuation that never begins a line
pub const LINE_START_SIMPLE: &[char] = &[
    // ideographic comma and full stop
    '、', '。', '，', '．', '｡', '､',
    // closing brackets
    '）', '」', '』', '】', '〕', '〉', '》', '｝', '］', '〙', '〗', '〟', '｠', '｣',
    '’', '”', '»',
    // middle dots, colons, and sentence enders
    '・', '･', '：', '；', '？', '！', '‼', '⁇', '⁈', '⁉',
    // hyphens and wave dashes
    '‐', '゠', '–', '〜', '～',
    // ellipses
    '…', '‥',
    // ascii equivalents
    ')', ']', '}', ',', '.', ':', ';', '?', '!',
];

/// Small kana, the prolonged sound mark, and iteration marks: these never begin a line and
/// are bound to the character before them
pub const LINE_START_COMPANION: &[char] = &[
    // small hiragana
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'っ', 'ゃ', 'ゅ', 'ょ', 'ゎ', 'ゕ', 'ゖ',
    // small katakana
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ッ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ヵ', 'ヶ',
    // katakana phonetic extensions
    'ㇰ', 'ㇱ', 'ㇲ', 'ㇳ', 'ㇴ', 'ㇵ', 'ㇶ', 'ㇷ', 'ㇸ', 'ㇹ', 'ㇺ', 'ㇻ', 'ㇼ', 'ㇽ', 'ㇾ', 'ㇿ',
    // halfwidth small katakana
    'ｧ', 'ｨ', 'ｩ', 'ｪ', 'ｫ', 'ｬ', 'ｭ', 'ｮ', 'ｯ',
    // prolonged sound marks
    'ー', 'ｰ',
    // iteration marks
    '々', '〻', 'ゝ', 'ゞ', 'ヽ', 'ヾ',
];

/// Opening brackets and quotes that never end a line
pub const LINE_END: &[char] = &[
    '（', '「', '『', '【', '〔', '〈', '《', '｛', '［', '〘', '〖', '〝', '｟', '｢',
    '‘', '“', '«',
    '(', '[', '{',
];

/// Classify a character for line breaking. Fonts in [WordWrap::Plain] mode defer entirely
/// to whitespace wrapping, so every character classifies as [Kinsoku::None] for them.
pub fn classify(ch: char, mode: WordWrap) -> Kinsoku {
    if mode == WordWrap::Plain {
        return Kinsoku::None;
    }

    if LINE_START_SIMPLE.contains(&ch) {
        Kinsoku::LineStartSimple
    } else if LINE_START_COMPANION.contains(&ch) {
        Kinsoku::LineStartCompanion
    } else if LINE_END.contains(&ch) {
        Kinsoku::LineEnd
    } else {
        Kinsoku::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_disjoint() {
        for ch in LINE_START_SIMPLE {
            assert!(!LINE_START_COMPANION.contains(ch), "{ch} in two tables");
            assert!(!LINE_END.contains(ch), "{ch} in two tables");
        }
        for ch in LINE_START_COMPANION {
            assert!(!LINE_END.contains(ch), "{ch} in two tables");
        }
    }

    #[test]
    fn classifies_common_japanese_punctuation() {
        assert_eq!(classify('、', WordWrap::Cjk), Kinsoku::LineStartSimple);
        assert_eq!(classify('。', WordWrap::Cjk), Kinsoku::LineStartSimple);
        assert_eq!(classify('」', WordWrap::Cjk), Kinsoku::LineStartSimple);
        assert_eq!(classify('々', WordWrap::Cjk), Kinsoku::LineStartCompanion);
        assert_eq!(classify('ー', WordWrap::Cjk), Kinsoku::LineStartCompanion);
        assert_eq!(classify('っ', WordWrap::Cjk), Kinsoku::LineStartCompanion);
        assert_eq!(classify('「', WordWrap::Cjk), Kinsoku::LineEnd);
        assert_eq!(classify('【', WordWrap::Cjk), Kinsoku::LineEnd);
        assert_eq!(classify('一', WordWrap::Cjk), Kinsoku::None);
        assert_eq!(classify('a', WordWrap::Cjk), Kinsoku::None);
    }

    #[test]
    fn plain_mode_never_restricts() {
        for ch in ['、', '々', '「', ')', '('] {
            assert_eq!(classify(ch, WordWrap::Plain), Kinsoku::None);
        }
    }
}
