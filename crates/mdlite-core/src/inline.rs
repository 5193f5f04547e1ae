//! Inline parser for paragraph and list-item content.
//!
//! Scans one line from the shared cursor, left to right, with no
//! backtracking. Recognizes `[text](address)` links and backtick monospace
//! spans; everything else is plain text. Unclosed constructs are never
//! errors: their capture is truncated at the end of the line.

use crate::ast::{Inline, Link, Monotext, Paragraph, Text};
use crate::cursor::Cursor;
use crate::span::Span;

/// Parse inline nodes up to and including the next newline.
///
/// The newline is consumed; it never appears in the returned nodes. At end of
/// input, returns what was collected so far.
pub fn parse_line<'a>(cursor: &mut Cursor<'a>) -> Vec<Inline<'a>> {
    let mut inlines = Vec::with_capacity(4);

    while let Some(byte) = cursor.peek() {
        match byte {
            b'[' => inlines.push(parse_link(cursor)),
            b'`' => inlines.push(parse_monotext(cursor)),
            b'\n' => {
                cursor.bump();
                return inlines;
            }
            _ => {
                inlines.push(parse_text(cursor));
                if cursor.eat(b'\n') {
                    return inlines;
                }
            }
        }
    }

    inlines
}

/// Parse one line into a paragraph node.
pub fn parse_paragraph<'a>(cursor: &mut Cursor<'a>) -> Paragraph<'a> {
    let start = cursor.offset();
    let content = parse_line(cursor);
    let mut end = cursor.offset();
    // The span covers the line's text, not its newline.
    if end > start && cursor.prev() == Some(b'\n') {
        end -= 1;
    }
    Paragraph {
        content,
        span: Span::from_offsets(start, end),
    }
}

#[inline]
fn parse_link<'a>(cursor: &mut Cursor<'a>) -> Inline<'a> {
    let start = cursor.offset();
    cursor.bump();

    let content = cursor.take_until2(b']', b'\n');
    cursor.eat(b']');
    // The byte after `]` is taken to be `(` without looking at it.
    if !matches!(cursor.peek(), Some(b'\n') | None) {
        cursor.bump();
    }

    let address = cursor.take_until2(b')', b'\n');
    cursor.eat(b')');

    Inline::Link(Link {
        content,
        address,
        span: cursor.span_from(start),
    })
}

#[inline]
fn parse_monotext<'a>(cursor: &mut Cursor<'a>) -> Inline<'a> {
    let start = cursor.offset();
    cursor.bump();

    let content = cursor.take_until2(b'`', b'\n');
    cursor.eat(b'`');

    Inline::Monotext(Monotext {
        content,
        span: cursor.span_from(start),
    })
}

#[inline]
fn parse_text<'a>(cursor: &mut Cursor<'a>) -> Inline<'a> {
    let start = cursor.offset();
    let content = cursor.take_until3(b'\n', b'`', b'[');

    Inline::Text(Text {
        content,
        span: cursor.span_from(start),
    })
}
