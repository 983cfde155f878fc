//! gfmc-core - Block token model and renderer capability
//!
//! This crate provides the shared data structures for gfmc: the block-level
//! [`Token`] stream produced by the scanner, the [`Renderer`] capability that
//! maps each token kind to an output fragment, and the default
//! [`HtmlRenderer`].
//!
//! # Architecture
//!
//! ```text
//! Source Text ──scan──▶ ┌──────────────┐
//!                       │ Token stream │ ──render──▶ Output Text
//!                       └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use gfmc_core::{HtmlRenderer, Renderer, Token};
//!
//! let token = Token::Heading {
//!     text: "Hello World".to_string(),
//!     level: 1,
//!     atx: true,
//! };
//!
//! let renderer = HtmlRenderer;
//! if let Token::Heading { text, level, atx } = &token {
//!     assert_eq!(renderer.heading(text, *level, *atx), "<h1>Hello World</h1>");
//! }
//! ```

mod render;
mod token;

pub use render::{HtmlRenderer, Renderer};
pub use token::Token;
