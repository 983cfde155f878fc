//! Token stream dispatch.
//!
//! Walks the scanner's token stream front-to-back exactly once, invoking the
//! matching renderer operation per token and concatenating the fragments in
//! arrival order.

use gfmc_core::{Renderer, Token};

/// Render a token stream to output text.
///
/// The match is exhaustive over the closed token set; no token is revisited,
/// skipped, or silently dropped.
pub fn parse(tokens: Vec<Token>, renderer: &dyn Renderer) -> String {
    let mut output = String::new();

    for token in tokens {
        match token {
            Token::Heading { text, level, atx } => {
                output.push_str(&renderer.heading(&text, level, atx));
            }
            Token::Paragraph { text } => {
                output.push_str(&renderer.paragraph(&text));
            }
            Token::CodeBlock { code } => {
                output.push_str(&renderer.code_block(&code));
            }
            Token::ThematicBreak { marker } => {
                output.push_str(&renderer.thematic_break(marker));
            }
        }
    }

    output
}
