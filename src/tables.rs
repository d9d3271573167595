//! Sorted code-point range tables and their binary-search lookup.
//!
//! The three static tables below are emitted by the offline table generator
//! from Unicode 16.0 property data. The generator filters out every interval
//! already handled by the classifier's hot-path checks and merges adjacent
//! ranges, so the tables stay small enough to remain cache resident.

use thiserror::Error;
use tracing::debug;

/// An inclusive range of code points sharing one width property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneRange {
    pub first: u32,
    pub last: u32,
}

/// Invalid range data rejected by [`RangeTable::try_from_ranges`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("range {index} is inverted: first U+{first:04X} > last U+{last:04X}")]
    InvertedRange { index: usize, first: u32, last: u32 },
    #[error("range {index} starts at U+{first:04X}, before its predecessor")]
    Unsorted { index: usize, first: u32 },
    #[error("range {index} overlaps or touches its predecessor and was not merged")]
    Unmerged { index: usize },
}

/// An immutable, sorted, pairwise-disjoint set of inclusive code-point
/// ranges supporting a single query: membership of one code point.
///
/// Invariants (upheld by the generator for the static tables, checked by
/// [`RangeTable::try_from_ranges`] for caller-supplied data):
/// - sorted ascending by `first`
/// - `first <= last` for every range
/// - no two ranges overlap or touch (adjacent ranges are pre-merged)
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    ranges: &'static [RuneRange],
}

impl RangeTable {
    /// Wrap generated constant data without validation.
    ///
    /// The caller (normally the table generator's output) guarantees the
    /// sortedness and disjointness invariants.
    pub const fn from_static(ranges: &'static [RuneRange]) -> Self {
        Self { ranges }
    }

    /// Validated construction for tables supplied at run time.
    pub fn try_from_ranges(ranges: &'static [RuneRange]) -> Result<Self, TableError> {
        for (index, range) in ranges.iter().enumerate() {
            if range.first > range.last {
                return Err(TableError::InvertedRange {
                    index,
                    first: range.first,
                    last: range.last,
                });
            }
            if index > 0 {
                let prev = ranges[index - 1];
                if range.first < prev.first {
                    return Err(TableError::Unsorted {
                        index,
                        first: range.first,
                    });
                }
                // Touching ranges must have been merged by the producer.
                if range.first <= prev.last.saturating_add(1) {
                    return Err(TableError::Unmerged { index });
                }
            }
        }
        debug!(target = "cellwidth.tables", ranges = ranges.len(), "range table validated");
        Ok(Self { ranges })
    }

    /// Binary search over the sorted, disjoint intervals.
    pub fn contains(&self, cp: u32) -> bool {
        let mut lo = 0usize;
        let mut hi = self.ranges.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            let range = self.ranges[mid];
            if range.last < cp {
                lo = mid + 1;
            } else if range.first > cp {
                hi = mid;
            } else {
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The underlying sorted ranges.
    pub fn ranges(&self) -> &'static [RuneRange] {
        self.ranges
    }
}

/// East Asian Width `W`/`F` ranges not covered by the hot wide and emoji
/// checks. Two cells each.
pub static WIDE: RangeTable = RangeTable::from_static(&[
    RuneRange { first: 0x2E80, last: 0x2E99 },   // CJK Radicals Supplement
    RuneRange { first: 0x2E9B, last: 0x2EF3 },   // CJK Radicals Supplement
    RuneRange { first: 0x2F00, last: 0x2FD5 },   // Kangxi Radicals
    RuneRange { first: 0x3000, last: 0x303F },   // CJK Symbols and Punctuation
    RuneRange { first: 0x31C0, last: 0x31E3 },   // CJK Strokes
    RuneRange { first: 0x3200, last: 0x321E },   // Enclosed CJK Letters and Months
    RuneRange { first: 0x3220, last: 0x3247 },   // Enclosed CJK Letters and Months
    RuneRange { first: 0x3250, last: 0x4DBE },   // Enclosed CJK through CJK Extension A
    RuneRange { first: 0xA000, last: 0xA4CF },   // Yi Syllables, Yi Radicals
    RuneRange { first: 0xFE30, last: 0xFE4F },   // CJK Compatibility Forms
    RuneRange { first: 0xFF01, last: 0xFF60 },   // Fullwidth ASCII variants
    RuneRange { first: 0xFFE0, last: 0xFFE6 },   // Fullwidth currency signs
    RuneRange { first: 0x10000, last: 0x1007F }, // Linear B Syllabary
    RuneRange { first: 0x1B000, last: 0x1B0FF }, // Kana Supplement
    RuneRange { first: 0x1F000, last: 0x1F02F }, // Mahjong Tiles
    RuneRange { first: 0x1F0A0, last: 0x1F0FF }, // Playing Cards
    RuneRange { first: 0x1FA00, last: 0x1FAFF }, // Chess Symbols, Symbols and Pictographs Extended-A
    RuneRange { first: 0x20000, last: 0x2A6DF }, // CJK Extension B
    RuneRange { first: 0x2A700, last: 0x2EBEF }, // CJK Extensions C through F
    RuneRange { first: 0x30000, last: 0x3134F }, // CJK Extension G
]);

/// Zero-width ranges not covered by the hot joiner, variation-selector and
/// combining-mark checks. Zero cells each.
pub static ZERO_WIDTH: RangeTable = RangeTable::from_static(&[
    RuneRange { first: 0x0080, last: 0x009F }, // C1 controls
    RuneRange { first: 0x00AD, last: 0x00AD }, // Soft hyphen
    RuneRange { first: 0x0591, last: 0x05BD }, // Hebrew points
    RuneRange { first: 0x05BF, last: 0x05BF }, // Hebrew point rafe
    RuneRange { first: 0x05C1, last: 0x05C2 }, // Hebrew points shin dot, sin dot
    RuneRange { first: 0x05C4, last: 0x05C5 }, // Hebrew marks
    RuneRange { first: 0x05C7, last: 0x05C7 }, // Hebrew point qamats qatan
    RuneRange { first: 0x0610, last: 0x061A }, // Arabic signs and marks
    RuneRange { first: 0x064B, last: 0x065F }, // Arabic vowel signs
    RuneRange { first: 0x0670, last: 0x0670 }, // Arabic letter superscript alef
    RuneRange { first: 0x06D6, last: 0x06DC }, // Arabic small high signs
    RuneRange { first: 0x06DF, last: 0x06E4 }, // Arabic small high marks
    RuneRange { first: 0x06E7, last: 0x06E8 }, // Arabic small high yeh, noon
    RuneRange { first: 0x06EA, last: 0x06ED }, // Arabic empty centre marks
    RuneRange { first: 0x0901, last: 0x0902 }, // Devanagari signs candrabindu, anusvara
    RuneRange { first: 0x093A, last: 0x093A }, // Devanagari vowel sign oe
    RuneRange { first: 0x093C, last: 0x093C }, // Devanagari sign nukta
    RuneRange { first: 0x0941, last: 0x0948 }, // Devanagari vowel signs
    RuneRange { first: 0x094D, last: 0x094D }, // Devanagari sign virama
    RuneRange { first: 0x0951, last: 0x0957 }, // Devanagari stress signs
    RuneRange { first: 0x0962, last: 0x0963 }, // Devanagari vowel signs vocalic l, ll
    RuneRange { first: 0x200B, last: 0x200B }, // Zero-width space
    RuneRange { first: 0x200E, last: 0x200F }, // Left-to-right mark, right-to-left mark
    RuneRange { first: 0xFEFF, last: 0xFEFF }, // Zero-width no-break space (BOM)
]);

/// East Asian Width `A` ranges. One cell in neutral contexts, two in East
/// Asian contexts; the caller's policy decides.
pub static AMBIGUOUS: RangeTable = RangeTable::from_static(&[
    RuneRange { first: 0x00A1, last: 0x00A1 }, // Inverted exclamation mark
    RuneRange { first: 0x00A4, last: 0x00A4 }, // Currency sign
    RuneRange { first: 0x00A7, last: 0x00A8 }, // Section sign, diaeresis
    RuneRange { first: 0x00AA, last: 0x00AA }, // Feminine ordinal indicator
    RuneRange { first: 0x00AE, last: 0x00AE }, // Registered sign
    RuneRange { first: 0x00B0, last: 0x00B4 }, // Degree sign through acute accent
    RuneRange { first: 0x00B6, last: 0x00BA }, // Pilcrow through masculine ordinal
    RuneRange { first: 0x00BC, last: 0x00BF }, // Vulgar fractions, inverted question mark
    RuneRange { first: 0x00C6, last: 0x00C6 }, // Latin capital ae
    RuneRange { first: 0x00D0, last: 0x00D0 }, // Latin capital eth
    RuneRange { first: 0x00D7, last: 0x00D8 }, // Multiplication sign, capital o with stroke
    RuneRange { first: 0x00DE, last: 0x00E1 }, // Thorn through a with acute
    RuneRange { first: 0x00E6, last: 0x00E6 }, // Latin small ae
    RuneRange { first: 0x00E8, last: 0x00EA }, // e with grave, acute, circumflex
    RuneRange { first: 0x00EC, last: 0x00ED }, // i with grave, acute
    RuneRange { first: 0x00F0, last: 0x00F0 }, // Latin small eth
    RuneRange { first: 0x00F2, last: 0x00F3 }, // o with grave, acute
    RuneRange { first: 0x00F7, last: 0x00FA }, // Division sign through u with acute
    RuneRange { first: 0x00FC, last: 0x00FC }, // u with diaeresis
    RuneRange { first: 0x00FE, last: 0x00FE }, // Latin small thorn
    RuneRange { first: 0x0101, last: 0x0101 }, // a with macron
    RuneRange { first: 0x0111, last: 0x0111 }, // d with stroke
    RuneRange { first: 0x0113, last: 0x0113 }, // e with macron
    RuneRange { first: 0x011B, last: 0x011B }, // e with caron
    RuneRange { first: 0x0126, last: 0x0127 }, // h with stroke
    RuneRange { first: 0x012B, last: 0x012B }, // i with macron
    RuneRange { first: 0x0131, last: 0x0133 }, // Dotless i, ij ligatures
    RuneRange { first: 0x0138, last: 0x0138 }, // Kra
    RuneRange { first: 0x013F, last: 0x0142 }, // l with middle dot, l with stroke
    RuneRange { first: 0x0144, last: 0x0144 }, // n with acute
    RuneRange { first: 0x0148, last: 0x014B }, // n with caron, eng
    RuneRange { first: 0x014D, last: 0x014D }, // o with macron
    RuneRange { first: 0x0152, last: 0x0153 }, // oe ligatures
    RuneRange { first: 0x0166, last: 0x0167 }, // t with stroke
    RuneRange { first: 0x016B, last: 0x016B }, // u with macron
    RuneRange { first: 0x01CE, last: 0x01CE }, // a with caron
    RuneRange { first: 0x01D0, last: 0x01D0 }, // i with caron
    RuneRange { first: 0x01D2, last: 0x01D2 }, // o with caron
    RuneRange { first: 0x01D4, last: 0x01D4 }, // u with caron
    RuneRange { first: 0x01D6, last: 0x01D6 }, // u with diaeresis and macron
    RuneRange { first: 0x01D8, last: 0x01D8 }, // u with diaeresis and acute
    RuneRange { first: 0x01DA, last: 0x01DA }, // u with diaeresis and caron
    RuneRange { first: 0x01DC, last: 0x01DC }, // u with diaeresis and grave
    RuneRange { first: 0x0391, last: 0x03A1 }, // Greek capital letters
    RuneRange { first: 0x03A3, last: 0x03A9 }, // Greek capital letters
    RuneRange { first: 0x03B1, last: 0x03C1 }, // Greek small letters
    RuneRange { first: 0x03C3, last: 0x03C9 }, // Greek small letters
    RuneRange { first: 0x0401, last: 0x0401 }, // Cyrillic capital io
    RuneRange { first: 0x0410, last: 0x044F }, // Cyrillic letters
    RuneRange { first: 0x0451, last: 0x0451 }, // Cyrillic small io
    RuneRange { first: 0x2010, last: 0x2010 }, // Hyphen
    RuneRange { first: 0x2013, last: 0x2016 }, // Dashes, double vertical line
    RuneRange { first: 0x2018, last: 0x2019 }, // Single quotation marks
    RuneRange { first: 0x201C, last: 0x201D }, // Double quotation marks
    RuneRange { first: 0x2020, last: 0x2022 }, // Dagger, double dagger, bullet
    RuneRange { first: 0x2024, last: 0x2027 }, // Leaders, hyphenation point
    RuneRange { first: 0x2030, last: 0x2030 }, // Per mille sign
    RuneRange { first: 0x2032, last: 0x2033 }, // Prime, double prime
    RuneRange { first: 0x203B, last: 0x203B }, // Reference mark
    RuneRange { first: 0x2103, last: 0x2103 }, // Degree Celsius
    RuneRange { first: 0x2109, last: 0x2109 }, // Degree Fahrenheit
    RuneRange { first: 0x2121, last: 0x2122 }, // Telephone sign, trade mark sign
    RuneRange { first: 0x2126, last: 0x2126 }, // Ohm sign
    RuneRange { first: 0x212B, last: 0x212B }, // Angstrom sign
    RuneRange { first: 0x2160, last: 0x216B }, // Roman numerals
    RuneRange { first: 0x2170, last: 0x2179 }, // Small Roman numerals
    RuneRange { first: 0x2190, last: 0x2199 }, // Arrows
    RuneRange { first: 0x2460, last: 0x24E9 }, // Enclosed alphanumerics
    RuneRange { first: 0x2500, last: 0x25FF }, // Box Drawing through Geometric Shapes
]);
