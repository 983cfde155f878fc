//! Renderer capability and the default HTML renderer
//!
//! A renderer maps each token kind to an output fragment. The trait carries
//! one operation per kind, so any type that implements it is complete by
//! construction; an incomplete renderer cannot be bound.

/// Capability for mapping block tokens to output fragments
pub trait Renderer: Send + Sync {
    /// Render a heading. `atx` records the observed heading form and is
    /// informational only.
    fn heading(&self, text: &str, level: u8, atx: bool) -> String;

    /// Render an indented code block's content.
    fn code_block(&self, code: &str) -> String;

    /// Render a paragraph.
    fn paragraph(&self, text: &str) -> String;

    /// Render a thematic break. `marker` is the repeated rule character.
    fn thematic_break(&self, marker: char) -> String;
}

/// The default renderer, producing HTML fragments
///
/// Fragments are concatenated as-is by the parser; no document wrapper is
/// added and no escaping policy is applied to token text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn heading(&self, text: &str, level: u8, _atx: bool) -> String {
        format!("<h{level}>{text}</h{level}>")
    }

    fn code_block(&self, code: &str) -> String {
        format!("<pre><code>{code}</code></pre>")
    }

    fn paragraph(&self, text: &str) -> String {
        format!("<p>{text}</p>")
    }

    fn thematic_break(&self, _marker: char) -> String {
        "<hr/>".to_string()
    }
}
