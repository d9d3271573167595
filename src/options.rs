//! Caller policy for collapsing classification outcomes into cell counts.

use crate::classify::WidthClass;

/// How East Asian Ambiguous characters resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousWidth {
    /// One cell. The right choice for non-East-Asian locales.
    #[default]
    Narrow,
    /// Two cells. The right choice for CJK locales.
    Wide,
}

impl AmbiguousWidth {
    pub const fn cells(self) -> usize {
        match self {
            AmbiguousWidth::Narrow => 1,
            AmbiguousWidth::Wide => 2,
        }
    }
}

/// Width calculation policy. Immutable once constructed; cheap to copy.
///
/// ```
/// use cellwidth::{AmbiguousWidth, Options};
///
/// let east_asian = Options::new().with_east_asian_ambiguous(AmbiguousWidth::Wide);
/// assert_eq!(cellwidth::string_width_with_options("±½", east_asian), 4);
/// assert_eq!(cellwidth::string_width("±½"), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Resolution for East Asian Ambiguous characters. Defaults to narrow.
    pub east_asian_ambiguous: AmbiguousWidth,
    /// Whether emoji with both presentations render as emoji (two cells)
    /// rather than text. Defaults to `true`. The common emoji blocks and
    /// the generated wide table already force two cells, so today this
    /// flag is an accepted forward-compatibility hook rather than an
    /// active branch.
    pub emoji_presentation: bool,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            east_asian_ambiguous: AmbiguousWidth::Narrow,
            emoji_presentation: true,
        }
    }

    pub const fn with_east_asian_ambiguous(mut self, width: AmbiguousWidth) -> Self {
        self.east_asian_ambiguous = width;
        self
    }

    pub const fn with_emoji_presentation(mut self, emoji: bool) -> Self {
        self.emoji_presentation = emoji;
        self
    }

    /// Collapse a classification outcome into a concrete cell count.
    #[inline]
    pub fn resolve(&self, class: WidthClass) -> usize {
        match class {
            WidthClass::Zero => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
            WidthClass::Ambiguous => self.east_asian_ambiguous.cells(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_narrow_ambiguous_and_emoji_presentation() {
        let opts = Options::default();
        assert_eq!(opts.east_asian_ambiguous, AmbiguousWidth::Narrow);
        assert!(opts.emoji_presentation);
        assert_eq!(opts, Options::new());
    }

    #[test]
    fn resolve_maps_concrete_classes_directly() {
        let opts = Options::default();
        assert_eq!(opts.resolve(WidthClass::Zero), 0);
        assert_eq!(opts.resolve(WidthClass::Narrow), 1);
        assert_eq!(opts.resolve(WidthClass::Wide), 2);
    }

    #[test]
    fn resolve_follows_ambiguous_policy() {
        let narrow = Options::new();
        let wide = Options::new().with_east_asian_ambiguous(AmbiguousWidth::Wide);
        assert_eq!(narrow.resolve(WidthClass::Ambiguous), 1);
        assert_eq!(wide.resolve(WidthClass::Ambiguous), 2);
    }

    #[test]
    fn builders_chain() {
        let opts = Options::new()
            .with_east_asian_ambiguous(AmbiguousWidth::Wide)
            .with_emoji_presentation(false);
        assert_eq!(opts.east_asian_ambiguous, AmbiguousWidth::Wide);
        assert!(!opts.emoji_presentation);
    }
}
