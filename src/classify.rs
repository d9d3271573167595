//! Tiered width classification of single code points.
//!
//! `classify` walks a fixed sequence of early-exit checks ordered by how
//! often each class shows up in real terminal content: ASCII first, then the
//! common wide scripts, then the common emoji blocks, then zero-width
//! characters, and only then the binary-search fallback tables. The hot
//! ranges are excluded from the fallback tables at generation time, so the
//! ordering affects speed, not results.

use crate::options::Options;
use crate::tables;

const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

/// Classification outcome for one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Occupies no cells: controls, combining marks, format characters.
    Zero,
    /// One cell: ASCII, Latin, Cyrillic and most other scripts.
    Narrow,
    /// Two cells: CJK, fullwidth forms, emoji.
    Wide,
    /// East Asian Ambiguous: one cell in neutral contexts, two in East
    /// Asian contexts. Collapsed to a concrete width by [`Options::resolve`].
    Ambiguous,
}

/// Classify a raw code point.
///
/// Total over all `u32` values: surrogates and values past U+10FFFF fall
/// through every tier to `Narrow`, so this never panics. Callers that need
/// stricter validation should do it in their decoding layer.
pub fn classify(cp: u32) -> WidthClass {
    // ASCII: C0 controls and DELETE take no cells, the rest take one.
    if cp < 0x80 {
        return if cp < 0x20 || cp == 0x7F {
            WidthClass::Zero
        } else {
            WidthClass::Narrow
        };
    }

    // Common wide scripts.
    if (0x4E00..=0x9FFF).contains(&cp)       // CJK Unified Ideographs
        || (0xAC00..=0xD7AF).contains(&cp)   // Hangul Syllables
        || (0x3040..=0x312F).contains(&cp)   // Hiragana, Katakana, Bopomofo
        || (0xF900..=0xFAFF).contains(&cp)   // CJK Compatibility Ideographs
    {
        return WidthClass::Wide;
    }

    // Common emoji blocks.
    if (0x1F600..=0x1F64F).contains(&cp)     // Emoticons
        || (0x1F300..=0x1F5FF).contains(&cp) // Misc Symbols and Pictographs
        || (0x1F680..=0x1F6FF).contains(&cp) // Transport and Map Symbols
        || (0x1F900..=0x1F9FF).contains(&cp) // Supplemental Symbols and Pictographs
        || (0x2600..=0x26FF).contains(&cp)   // Misc Symbols
        || (0x2700..=0x27BF).contains(&cp)   // Dingbats
    {
        return WidthClass::Wide;
    }

    // Joiners, variation selectors, common combining marks.
    if cp == ZWJ
        || cp == ZWNJ
        || (0xFE00..=0xFE0F).contains(&cp)   // Variation Selectors
        || (0xE0100..=0xE01EF).contains(&cp) // Variation Selectors Supplement
        || is_combining_mark(cp)
    {
        return WidthClass::Zero;
    }

    // Rare characters: binary search the generated tables.
    if tables::WIDE.contains(cp) {
        return WidthClass::Wide;
    }
    if tables::ZERO_WIDTH.contains(cp) {
        return WidthClass::Zero;
    }
    if tables::AMBIGUOUS.contains(cp) {
        return WidthClass::Ambiguous;
    }
    WidthClass::Narrow
}

// The combining-mark blocks common enough to earn a hot check. Rarer marks
// (Hebrew, Arabic, Devanagari points) live in the zero-width fallback table.
fn is_combining_mark(cp: u32) -> bool {
    (0x0300..=0x036F).contains(&cp)       // Combining Diacritical Marks
        || (0x1AB0..=0x1AFF).contains(&cp) // Combining Diacritical Marks Extended
        || (0x1DC0..=0x1DFF).contains(&cp) // Combining Diacritical Marks Supplement
        || (0x20D0..=0x20FF).contains(&cp) // Combining Marks for Symbols
        || (0xFE20..=0xFE2F).contains(&cp) // Combining Half Marks
}

/// Display width of a single character in terminal cells, with the default
/// policy: ambiguous characters narrow, emoji wide.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for most characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK, fullwidth forms, emoji)
#[inline]
pub fn char_width(c: char) -> usize {
    Options::default().resolve(classify(c as u32))
}

/// Display width of a single character under a caller-supplied policy.
#[inline]
pub fn char_width_with_options(c: char, opts: Options) -> usize {
    opts.resolve(classify(c as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_printable_is_narrow() {
        for cp in 0x20..=0x7Eu32 {
            assert_eq!(classify(cp), WidthClass::Narrow, "U+{cp:04X}");
        }
    }

    #[test]
    fn ascii_controls_are_zero() {
        for cp in 0x00..=0x1Fu32 {
            assert_eq!(classify(cp), WidthClass::Zero, "U+{cp:04X}");
        }
        assert_eq!(classify(0x7F), WidthClass::Zero);
    }

    #[test]
    fn hot_wide_script_boundaries() {
        assert_eq!(classify(0x4DFF), WidthClass::Narrow); // just before CJK
        assert_eq!(classify(0x4E00), WidthClass::Wide);
        assert_eq!(classify(0x9FFF), WidthClass::Wide);
        assert_eq!(classify(0xAC00), WidthClass::Wide);
        assert_eq!(classify(0xD7AF), WidthClass::Wide);
        assert_eq!(classify(0xD7B0), WidthClass::Narrow); // just after Hangul
        assert_eq!(classify(0x3040), WidthClass::Wide);
        assert_eq!(classify(0x312F), WidthClass::Wide);
        assert_eq!(classify(0xF900), WidthClass::Wide);
        assert_eq!(classify(0xFAFF), WidthClass::Wide);
    }

    #[test]
    fn hot_emoji_boundaries() {
        assert_eq!(classify(0x1F600), WidthClass::Wide);
        assert_eq!(classify(0x1F64F), WidthClass::Wide);
        assert_eq!(classify(0x1F650), WidthClass::Narrow); // Ornamental Dingbats
        assert_eq!(classify(0x2600), WidthClass::Wide);
        assert_eq!(classify(0x27BF), WidthClass::Wide);
        assert_eq!(classify(0x1F680), WidthClass::Wide); // rocket block start
        assert_eq!(classify(0x1F9FF), WidthClass::Wide);
    }

    #[test]
    fn joiners_and_selectors_are_zero() {
        assert_eq!(classify(0x200C), WidthClass::Zero); // ZWNJ
        assert_eq!(classify(0x200D), WidthClass::Zero); // ZWJ
        assert_eq!(classify(0xFE00), WidthClass::Zero);
        assert_eq!(classify(0xFE0F), WidthClass::Zero);
        assert_eq!(classify(0xE0100), WidthClass::Zero);
        assert_eq!(classify(0xE01EF), WidthClass::Zero);
    }

    #[test]
    fn combining_marks_are_zero() {
        for cp in [0x0300, 0x0301, 0x036F, 0x1AB0, 0x1DC0, 0x20D0, 0xFE20, 0xFE2F] {
            assert_eq!(classify(cp), WidthClass::Zero, "U+{cp:04X}");
        }
        // Marks outside the hot blocks resolve through the fallback table.
        for cp in [0x0591, 0x064B, 0x0941] {
            assert_eq!(classify(cp), WidthClass::Zero, "U+{cp:04X}");
        }
    }

    #[test]
    fn fallback_wide_table_entries() {
        assert_eq!(classify(0x3000), WidthClass::Wide); // ideographic space
        assert_eq!(classify(0xFF21), WidthClass::Wide); // fullwidth A
        assert_eq!(classify(0x10000), WidthClass::Wide); // Linear B
        assert_eq!(classify(0x20000), WidthClass::Wide); // CJK Extension B
        assert_eq!(classify(0xA000), WidthClass::Wide); // Yi
    }

    #[test]
    fn fallback_ambiguous_table_entries() {
        for cp in [0x00B1, 0x00BD, 0x00B0, 0x00D7, 0x00F7, 0x2500, 0x03B1, 0x0410] {
            assert_eq!(classify(cp), WidthClass::Ambiguous, "U+{cp:04X}");
        }
    }

    #[test]
    fn unclassified_defaults_to_narrow() {
        assert_eq!(classify(0xE000), WidthClass::Narrow); // private use
        assert_eq!(classify(0xF8FF), WidthClass::Narrow);
        assert_eq!(classify(0x10330), WidthClass::Narrow); // Gothic
    }

    #[test]
    fn invalid_input_defaults_to_narrow() {
        assert_eq!(classify(0xD800), WidthClass::Narrow); // surrogate
        assert_eq!(classify(0xDFFF), WidthClass::Narrow);
        assert_eq!(classify(0x110000), WidthClass::Narrow);
        assert_eq!(classify(u32::MAX), WidthClass::Narrow);
    }

    #[test]
    fn char_width_applies_default_policy() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('世'), 2);
        assert_eq!(char_width('😀'), 2);
        assert_eq!(char_width('±'), 1); // ambiguous defaults narrow
        assert_eq!(char_width('\u{0301}'), 0);
    }
}
