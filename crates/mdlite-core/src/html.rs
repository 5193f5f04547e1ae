//! HTML rendering of a parsed document.
//!
//! Produces the document body only; page chrome (head, navigation, footer) is
//! left to whatever embeds the fragment.
//!
//! Text is written verbatim by default, so markup in the source passes
//! straight through to the output. Call [`HtmlRenderer::with_escaping`] when
//! the input is not trusted.

use std::fmt::Write;

use crate::ast::{Block, CodeBlock, Document, Heading, Inline, List, Paragraph};

/// Renders a [`Document`] to an HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    escape: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self { escape: false }
    }

    /// Escape `&`, `<`, `>` and `"` in all text taken from the source.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn render(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(doc.span.len() as usize * 2);
        self.render_into(doc, &mut out);
        out
    }

    /// Append the rendered document to `out`.
    pub fn render_into(&self, doc: &Document, out: &mut String) {
        for block in &doc.blocks {
            self.render_block(block, out);
        }
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::Heading(h) => self.render_heading(h, out),
            Block::Paragraph(p) => {
                out.push_str("<p>");
                self.render_inlines(p, out);
                out.push_str("</p>\n");
            }
            Block::List(l) => self.render_list(l, out),
            Block::CodeBlock(c) => self.render_code_block(c, out),
        }
    }

    fn render_heading(&self, heading: &Heading, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = write!(out, "<h{}>", heading.level);
        self.push_text(heading.content, out);
        let _ = writeln!(out, "</h{}>", heading.level);
    }

    fn render_list(&self, list: &List, out: &mut String) {
        let tag = if list.ordered { "ol" } else { "ul" };
        let _ = writeln!(out, "<{}>", tag);
        for item in &list.items {
            out.push_str("<li>");
            self.render_inlines(item, out);
            out.push_str("</li>\n");
        }
        let _ = writeln!(out, "</{}>", tag);
    }

    fn render_code_block(&self, code: &CodeBlock, out: &mut String) {
        out.push_str("<pre><code>");
        self.push_text(code.code, out);
        out.push_str("</code></pre>\n");
    }

    fn render_inlines(&self, paragraph: &Paragraph, out: &mut String) {
        for inline in &paragraph.content {
            match inline {
                Inline::Text(t) => self.push_text(t.content, out),
                Inline::Monotext(m) => {
                    out.push_str("<code>");
                    self.push_text(m.content, out);
                    out.push_str("</code>");
                }
                Inline::Link(l) => {
                    out.push_str("<a href=\"");
                    self.push_text(l.address, out);
                    out.push_str("\">");
                    self.push_text(l.content, out);
                    out.push_str("</a>");
                }
            }
        }
    }

    #[inline]
    fn push_text(&self, text: &str, out: &mut String) {
        if self.escape {
            escape_html(text, out);
        } else {
            out.push_str(text);
        }
    }
}

/// Append `text` to `out` with HTML special characters replaced by entities.
pub fn escape_html(text: &str, out: &mut String) {
    let mut last = 0;
    for (i, byte) in text.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}
