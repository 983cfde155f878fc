//! GfmService - the main entry point for block-structure compilation.

use gfmc_core::{HtmlRenderer, Renderer};

use crate::parser::parse;
use crate::scanner::Scanner;

/// The main service for compiling Markdown block structure to output markup
///
/// The renderer capability is bound at construction; compilation itself is a
/// pure function of the source text and cannot fail.
pub struct GfmService {
    renderer: Box<dyn Renderer>,
}

impl GfmService {
    /// Create a new GfmService with the default HTML renderer
    pub fn new() -> Self {
        Self {
            renderer: Box::new(HtmlRenderer),
        }
    }

    /// Create a GfmService with a custom renderer
    pub fn with_renderer<R>(renderer: R) -> Self
    where
        R: Renderer + 'static,
    {
        Self {
            renderer: Box::new(renderer),
        }
    }

    /// Compile source text to concatenated output fragments
    ///
    /// Each call constructs a fresh scanner, so no state carries over
    /// between documents. The result is not a complete document; no wrapper
    /// is added around the fragments.
    pub fn compile(&self, source: &str) -> String {
        let tokens = Scanner::new(source).scan();
        parse(tokens, self.renderer.as_ref())
    }
}

impl Default for GfmService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_paragraph() {
        let service = GfmService::new();
        assert_eq!(service.compile("Hello World"), "<p>Hello World</p>");
    }

    #[test]
    fn test_heading() {
        let service = GfmService::new();
        assert_eq!(service.compile("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_setext_heading() {
        let service = GfmService::new();
        assert_eq!(service.compile("Title\n==="), "<h1>Title</h1>");
    }

    #[test]
    fn test_code_block() {
        let service = GfmService::new();
        assert_eq!(
            service.compile("    let x = 1;"),
            "<pre><code>let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_thematic_break() {
        let service = GfmService::new();
        assert_eq!(service.compile("---"), "<hr/>");
    }

    #[test]
    fn test_empty_source() {
        let service = GfmService::new();
        assert_eq!(service.compile(""), "");
    }

    #[test]
    fn test_fragments_concatenated_in_order() {
        let service = GfmService::new();
        assert_eq!(
            service.compile("# A\n\ntext\n\n---"),
            "<h1>A</h1><p>text</p><hr/>"
        );
    }

    #[test]
    fn test_custom_renderer() {
        struct Plain;

        impl Renderer for Plain {
            fn heading(&self, text: &str, _level: u8, _atx: bool) -> String {
                format!("{text}\n")
            }

            fn code_block(&self, code: &str) -> String {
                code.to_string()
            }

            fn paragraph(&self, text: &str) -> String {
                format!("{text}\n")
            }

            fn thematic_break(&self, _marker: char) -> String {
                "----\n".to_string()
            }
        }

        let service = GfmService::with_renderer(Plain);
        assert_eq!(service.compile("# Title\n\nbody"), "Title\nbody\n");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let service = GfmService::new();
        let source = "# A\n\ntext with \0 byte\n\n    code\n\n* * *";
        assert_eq!(service.compile(source), service.compile(source));
    }

    #[test]
    fn test_service_is_reusable_across_documents() {
        let service = GfmService::new();
        assert_eq!(service.compile("first"), "<p>first</p>");
        assert_eq!(service.compile("## second"), "<h2>second</h2>");
    }
}
