//! Terminal cell width calculation for Unicode text.
//!
//! Maps code points and strings to the number of fixed-width terminal cells
//! they occupy (0, 1 or 2), for renderers that align text in character
//! grids. Lookup is tiered for speed:
//!
//! - ASCII resolves with two comparisons (most terminal content)
//! - common CJK scripts and emoji blocks resolve with a handful of range
//!   checks (most non-ASCII content)
//! - everything else falls back to a binary search over small generated
//!   tables
//!
//! Strings get two composition rules on top: regional-indicator pairs count
//! as one flag glyph, and variation selectors override the presentation of
//! their base character. ZWJ emoji sequences are deliberately not clustered;
//! see [`string_width`].
//!
//! Every entry point is a pure, total function over immutable data. There
//! is no shared mutable state, so any number of threads may call any
//! function concurrently.
//!
//! ```
//! use cellwidth::{AmbiguousWidth, Options};
//!
//! assert_eq!(cellwidth::char_width('世'), 2);
//! assert_eq!(cellwidth::string_width("Hello 世界"), 10);
//! assert_eq!(cellwidth::string_width("👍"), 2);
//!
//! let east_asian = Options::new().with_east_asian_ambiguous(AmbiguousWidth::Wide);
//! assert_eq!(cellwidth::string_width_with_options("±½", east_asian), 4);
//! ```

pub mod classify;
pub mod measure;
pub mod options;
pub mod tables;

pub use classify::{WidthClass, char_width, char_width_with_options, classify};
pub use measure::{string_width, string_width_with_options};
pub use options::{AmbiguousWidth, Options};
pub use tables::{RangeTable, RuneRange, TableError};
