//! # mdlite Core
//!
//! A single-pass parser and HTML renderer for a small markdown dialect:
//! headings, `-`/`*` lists, fenced code blocks, and one-line paragraphs with
//! links and monospace spans, optionally preceded by a `---` front-matter
//! block.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdlite_core::{HtmlRenderer, Parser};
//!
//! let input = "---\ntitle: Hello\n---\n# Hello World\n\nSee [the docs](https://example.com).\n";
//! let result = Parser::new().parse(input).unwrap();
//!
//! assert_eq!(result.metadata.get("title"), Some("Hello"));
//! assert_eq!(result.document.blocks.len(), 2);
//!
//! let html = HtmlRenderer::new().render(&result.document);
//! assert_eq!(
//!     html,
//!     "<h1>Hello World</h1>\n<p>See <a href=\"https://example.com\">the docs</a>.</p>\n"
//! );
//! ```
//!
//! ## Errors
//!
//! Parsing only fails on a malformed code fence, and then fails as a whole:
//!
//! ```rust
//! use mdlite_core::{ParseErrorKind, Parser};
//!
//! let err = Parser::new().parse("``\nnot a fence\n").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::MalformedCodeFence);
//! ```
//!
//! Everything else degrades gracefully: an unclosed `[` or backtick is cut
//! off at the end of its line, and an unterminated front-matter block reads
//! the rest of the input as metadata.

pub mod ast;
pub mod cursor;
pub mod dump;
pub mod error;
pub mod html;
pub mod inline;
pub mod metadata;
pub mod parser;
pub mod span;

pub use ast::{Block, Document, Inline};
pub use error::{ParseError, ParseErrorKind};
pub use html::HtmlRenderer;
pub use metadata::Metadata;
pub use parser::{ParseResult, Parser};

/// Parse `input` with the default configuration.
pub fn parse(input: &str) -> Result<ParseResult<'_>, ParseError> {
    Parser::new().parse(input)
}

/// Parse `input` and render its body to HTML, discarding front matter.
pub fn markdown_to_html(input: &str) -> Result<String, ParseError> {
    let result = parse(input)?;
    Ok(HtmlRenderer::new().render(&result.document))
}
