//! Block-structure scanner.
//!
//! A single-pass, line-oriented state machine. Each normalized line is
//! classified against the block grammar (ATX headings, thematic breaks,
//! indented code, setext underlines, paragraph text) in a fixed precedence
//! order; multi-line blocks accumulate in a buffer until flushed. Every line
//! is consumed by exactly one branch, so scanning terminates in as many
//! steps as there are lines.

use once_cell::sync::Lazy;
use regex::Regex;

use gfmc_core::Token;

use crate::indent::{leading_columns, strip_indent};
use crate::normalize::{lines, normalize};

/// 1-6 `#` characters followed by a space, a tab, or the end of the line.
static ATX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})($|[ \t].*)").unwrap());

/// Optional ATX closing sequence: a `#` run preceded by a space or tab, or
/// trailing content that is nothing but `#`.
static ATX_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]#+[ \t]*$|^#+$").unwrap());

/// Setext heading underline: 2+ `-` or 1+ `=`, unmixed, trailing whitespace
/// allowed.
static SETEXT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-{2,}|=+)[ \t]*$").unwrap());

/// Trailing run of two or more newlines in collected code content.
static TRAILING_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    None,
    Paragraph,
    CodeBlock,
}

/// The block scanner.
///
/// Holds the normalized source plus the two pieces of scanning state: the
/// current mode and the text accumulator. [`Scanner::scan`] consumes the
/// scanner by value, so state can never bleed into a second document.
pub struct Scanner {
    source: String,
    mode: Mode,
    buffer: String,
}

impl Scanner {
    /// Create a scanner over raw source text, normalizing it up front.
    pub fn new(source: &str) -> Self {
        Self {
            source: normalize(source),
            mode: Mode::None,
            buffer: String::new(),
        }
    }

    /// Scan the source line by line and produce the ordered token stream.
    pub fn scan(mut self) -> Vec<Token> {
        let source = std::mem::take(&mut self.source);
        let lines = lines(&source);
        let last = lines.len() - 1;
        let mut tokens = Vec::new();

        for (index, &line) in lines.iter().enumerate() {
            if is_blank(line) {
                match self.mode {
                    // A blank line ends a paragraph
                    Mode::Paragraph => tokens.push(self.flush_paragraph()),
                    // A single blank line does not close a code block;
                    // trailing blanks are trimmed at flush time
                    Mode::CodeBlock => {
                        if leading_columns(line) >= 4 {
                            self.push_line(strip_indent(line));
                        } else {
                            self.push_line("");
                        }
                        if index == last {
                            tokens.push(self.flush_code_block());
                        }
                    }
                    Mode::None => {}
                }
                continue;
            }

            if leading_columns(line) >= 4 {
                // An indented code block cannot interrupt a paragraph
                if self.mode == Mode::Paragraph {
                    self.push_line(line);
                } else {
                    self.mode = Mode::CodeBlock;
                    // The first 4 columns are not part of the content
                    self.push_line(strip_indent(line));
                    if index == last {
                        tokens.push(self.flush_code_block());
                    }
                }
                continue;
            }

            // A line with less than 4 columns of indentation closes an open
            // code block
            if self.mode == Mode::CodeBlock {
                tokens.push(self.flush_code_block());
            }

            // At most 3 leading spaces remain; they are not significant
            let line = line.trim_start_matches(' ');

            if let Some(caps) = ATX.captures(line) {
                if self.mode == Mode::Paragraph {
                    tokens.push(self.flush_paragraph());
                }
                let level = caps[1].len() as u8;
                let rest = caps.get(2).map_or("", |m| m.as_str());
                let text = ATX_CLOSE.replace(rest, "").trim().to_string();
                tokens.push(Token::Heading {
                    text,
                    level,
                    atx: true,
                });
                continue;
            }

            if let Some(marker) = thematic_break_marker(line) {
                if self.mode == Mode::Paragraph {
                    // A setext underline wins over the thematic-break
                    // reading while a paragraph is open
                    if let Some(level) = setext_close_level(line) {
                        tokens.push(self.flush_setext_heading(level));
                        continue;
                    }
                    tokens.push(self.flush_paragraph());
                }
                tokens.push(Token::ThematicBreak { marker });
                continue;
            }

            // Setext underline that is not a thematic break (an `=` run, or
            // a 2-dash run)
            if self.mode == Mode::Paragraph {
                if let Some(level) = setext_close_level(line) {
                    tokens.push(self.flush_setext_heading(level));
                    continue;
                }
            }

            // Literal text
            if index == last && self.mode != Mode::Paragraph {
                // No open buffer; the line itself is the paragraph
                self.buffer = line.to_string();
                tokens.push(self.flush_paragraph());
            } else {
                self.mode = Mode::Paragraph;
                self.push_line(line);
            }
        }

        // A paragraph can still be open here (its last line was literal
        // text or an indented continuation); flush it so no content is
        // lost at end of input
        if self.mode == Mode::Paragraph {
            tokens.push(self.flush_paragraph());
        }

        tokens
    }

    fn push_line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Take the accumulator and return the mode to `None`.
    fn reset(&mut self) -> String {
        self.mode = Mode::None;
        std::mem::take(&mut self.buffer)
    }

    fn flush_paragraph(&mut self) -> Token {
        let text = self.reset().trim().to_string();
        Token::Paragraph { text }
    }

    fn flush_setext_heading(&mut self, level: u8) -> Token {
        let text = self.reset().trim().to_string();
        Token::Heading {
            text,
            level,
            atx: false,
        }
    }

    fn flush_code_block(&mut self) -> Token {
        // Blank lines preceding or following an indented code block are not
        // part of it
        let collected = self.reset();
        let code = TRAILING_BLANKS.replace(&collected, "\n").into_owned();
        Token::CodeBlock { code }
    }
}

/// A blank line contains only spaces and tabs.
fn is_blank(line: &str) -> bool {
    line.chars().all(|ch| ch == ' ' || ch == '\t')
}

/// Classify a thematic break: 3+ of one of `-`, `_`, `*`, optionally
/// separated by spaces or tabs, and nothing else on the line.
///
/// The `regex` crate has no backreferences, so this is a character loop
/// rather than a pattern constant.
fn thematic_break_marker(line: &str) -> Option<char> {
    let marker = line.chars().next()?;
    if !matches!(marker, '-' | '_' | '*') {
        return None;
    }

    let mut count = 0;
    for ch in line.chars() {
        match ch {
            c if c == marker => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    if count >= 3 {
        Some(marker)
    } else {
        None
    }
}

/// Setext underline level: 1 for an `=` run, 2 for a `-` run.
fn setext_close_level(line: &str) -> Option<u8> {
    if !SETEXT_CLOSE.is_match(line) {
        return None;
    }
    Some(if line.starts_with('=') { 1 } else { 2 })
}
