//! Abstract Syntax Tree types for mdlite documents.
//!
//! The tree is strict: every parent owns its children, and every piece of
//! text is a `&'a str` borrowed from the input the document was parsed from.
//! Dropping a [`Document`] releases the whole tree; the input must outlive
//! it, which the `'a` lifetime enforces.

use crate::span::Span;

/// A parsed document: the root of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Top-level blocks in source order.
    pub blocks: Vec<Block<'a>>,
    /// Span of the document body (after any front matter).
    pub span: Span,
}

/// Block-level nodes, the direct children of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`-prefixed heading line.
    Heading(Heading<'a>),
    /// A single line of inline content.
    Paragraph(Paragraph<'a>),
    /// Run of `-`/`*` items.
    List(List<'a>),
    /// Triple-backtick fenced code.
    CodeBlock(CodeBlock<'a>),
}

impl Block<'_> {
    /// Source span of the block.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading(h) => h.span,
            Block::Paragraph(p) => p.span,
            Block::List(l) => l.span,
            Block::CodeBlock(c) => c.span,
        }
    }
}

/// Heading with its level and raw line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters, saturating at 255.
    pub level: u8,
    /// Rest of the line after the markers and one optional space.
    pub content: &'a str,
    /// Source span.
    pub span: Span,
}

/// Inline content of one line. Also used for list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Inline nodes in source order; may be empty.
    pub content: Vec<Inline<'a>>,
    /// Source span.
    pub span: Span,
}

/// A list block. Never constructed without at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'a> {
    /// Always `false`: no ordered-list syntax is recognized.
    pub ordered: bool,
    /// One paragraph per item.
    pub items: Vec<Paragraph<'a>>,
    /// Source span.
    pub span: Span,
}

/// Fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Text between the opening fence's newline and the newline before the
    /// closing fence.
    pub code: &'a str,
    /// Source span, fences included.
    pub span: Span,
}

/// Inline-level nodes, found inside paragraphs and list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Plain run of text.
    Text(Text<'a>),
    /// Backtick-delimited monospace span.
    Monotext(Monotext<'a>),
    /// `[content](address)` link.
    Link(Link<'a>),
}

impl Inline<'_> {
    /// Source span of the inline node.
    pub fn span(&self) -> Span {
        match self {
            Inline::Text(t) => t.span,
            Inline::Monotext(m) => m.span,
            Inline::Link(l) => l.span,
        }
    }
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<'a> {
    pub content: &'a str,
    pub span: Span,
}

/// Monospace text, without its backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monotext<'a> {
    pub content: &'a str,
    pub span: Span,
}

/// Hyperlink with display text and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    /// Display text between the brackets.
    pub content: &'a str,
    /// Destination between the parentheses.
    pub address: &'a str,
    /// Source span.
    pub span: Span,
}
