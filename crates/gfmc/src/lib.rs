//! # gfmc
//!
//! Compile GitHub Flavored Markdown block structure to output markup.
//!
//! This library turns raw text into a flat stream of block-level tokens
//! (headings, thematic breaks, indented code, paragraphs) with a single-pass
//! line scanner, then renders the stream through a swappable [`Renderer`]
//! capability. Inline content, container blocks, and tables are out of
//! scope; unrecognized input degrades to paragraph text, so compilation
//! never fails.
//!
//! ## Example
//!
//! ```rust
//! let html = gfmc::compile("# Hello World");
//! assert_eq!(html, "<h1>Hello World</h1>");
//! ```
//!
//! ## Example (custom renderer)
//!
//! ```rust
//! use gfmc::{GfmService, Renderer};
//!
//! struct Anchors;
//!
//! impl Renderer for Anchors {
//!     fn heading(&self, text: &str, level: u8, _atx: bool) -> String {
//!         format!("<h{level} id=\"{}\">{text}</h{level}>", text.to_lowercase())
//!     }
//!     fn code_block(&self, code: &str) -> String {
//!         format!("<pre><code>{code}</code></pre>")
//!     }
//!     fn paragraph(&self, text: &str) -> String {
//!         format!("<p>{text}</p>")
//!     }
//!     fn thematic_break(&self, _marker: char) -> String {
//!         "<hr/>".to_string()
//!     }
//! }
//!
//! let service = GfmService::with_renderer(Anchors);
//! assert_eq!(service.compile("# Intro"), "<h1 id=\"intro\">Intro</h1>");
//! ```

mod indent;
mod normalize;
mod parser;
mod scanner;
mod service;

pub use gfmc_core::{HtmlRenderer, Renderer, Token};
pub use indent::{leading_columns, strip_indent};
pub use normalize::normalize;
pub use parser::parse;
pub use scanner::Scanner;
pub use service::GfmService;

/// Compile source text to HTML with the default renderer.
///
/// Convenience wrapper over [`GfmService`].
pub fn compile(source: &str) -> String {
    GfmService::new().compile(source)
}
