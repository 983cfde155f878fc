//! Block-level token model
//!
//! This module defines the closed set of block tokens the scanner emits.
//! Tokens carry only plain scalar/text fields and are never mutated after
//! emission; stream order is the only relationship between them.

/// A block-level token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ATX or setext heading.
    ///
    /// `level` is always 1-6 and `text` never contains the block's own
    /// delimiters. `atx` records which heading form was observed; renderers
    /// may ignore it.
    Heading { text: String, level: u8, atx: bool },

    /// Paragraph with surrounding whitespace trimmed.
    Paragraph { text: String },

    /// Indented code block.
    ///
    /// Structural indentation (the first 4 columns of each line) is already
    /// stripped, and a trailing run of 2+ newlines is collapsed to exactly
    /// one.
    CodeBlock { code: String },

    /// Thematic break (horizontal rule).
    ///
    /// `marker` is the single repeated character observed, one of `-`, `_`,
    /// or `*`.
    ThematicBreak { marker: char },
}
