//! Single-pass block parser for mdlite.
//!
//! Dispatches on the byte under the cursor at the start of each line and
//! borrows every piece of text straight from the input. The only failure is a
//! malformed code fence, which aborts the parse.

use crate::ast::{Block, CodeBlock, Document, Heading, List};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::inline;
use crate::metadata::{self, Metadata};
use crate::span::Span;

const FENCE: &str = "```";
const OPEN_FENCE: &str = "```\n";

/// Output of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    /// The document body.
    pub document: Document<'a>,
    /// Front-matter entries; empty when the input has none.
    pub metadata: Metadata<'a>,
}

/// mdlite parser.
///
/// Holds configuration only. Each call to [`Parser::parse`] scans with its own
/// cursor, so one parser can be shared freely, across threads included.
#[derive(Debug, Clone)]
pub struct Parser {
    front_matter: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with front-matter extraction enabled.
    #[inline]
    pub fn new() -> Self {
        Self { front_matter: true }
    }

    /// Enable or disable front-matter extraction.
    ///
    /// When disabled, a leading `---` is parsed as ordinary body content.
    pub fn with_front_matter(mut self, enabled: bool) -> Self {
        self.front_matter = enabled;
        self
    }

    /// Parse `input` into a document and its front matter.
    pub fn parse<'a>(&self, input: &'a str) -> Result<ParseResult<'a>, ParseError> {
        let mut cursor = Cursor::new(input);

        let metadata = if self.front_matter {
            metadata::extract(&mut cursor)
        } else {
            Metadata::new()
        };

        let body_start = cursor.offset();
        let blocks = parse_blocks(&mut cursor)?;

        Ok(ParseResult {
            document: Document {
                blocks,
                span: Span::from_offsets(body_start, input.len()),
            },
            metadata,
        })
    }

    /// Parse raw bytes, which must be valid UTF-8.
    pub fn parse_bytes<'a>(&self, input: &'a [u8]) -> Result<ParseResult<'a>, ParseError> {
        let text = std::str::from_utf8(input)?;
        self.parse(text)
    }
}

fn parse_blocks<'a>(cursor: &mut Cursor<'a>) -> Result<Vec<Block<'a>>, ParseError> {
    let mut blocks = Vec::with_capacity(16);

    while let Some(byte) = cursor.peek() {
        match byte {
            b'#' => blocks.push(parse_heading(cursor)),
            b'-' | b'*' => blocks.push(parse_list(cursor)),
            b'`' => blocks.push(parse_code_block(cursor)?),
            b'\n' => cursor.bump(),
            _ => blocks.push(Block::Paragraph(inline::parse_paragraph(cursor))),
        }
    }

    Ok(blocks)
}

#[inline]
fn parse_heading<'a>(cursor: &mut Cursor<'a>) -> Block<'a> {
    let start = cursor.offset();
    let level = cursor.eat_while(b'#').min(u8::MAX as usize) as u8;
    cursor.eat(b' ');

    let content = cursor.take_line();
    let span = cursor.span_from(start);
    cursor.eat(b'\n');

    Block::Heading(Heading {
        level,
        content,
        span,
    })
}

#[inline]
fn parse_list<'a>(cursor: &mut Cursor<'a>) -> Block<'a> {
    let start = cursor.offset();
    let mut items = Vec::with_capacity(8);
    let mut span = Span::from_offsets(start, start);

    while let Some(b'-' | b'*') = cursor.peek() {
        cursor.bump();
        cursor.eat(b' ');
        let item = inline::parse_paragraph(cursor);
        span = span.merge(item.span);
        items.push(item);
    }

    Block::List(List {
        ordered: false,
        items,
        span,
    })
}

fn parse_code_block<'a>(cursor: &mut Cursor<'a>) -> Result<Block<'a>, ParseError> {
    let start = cursor.offset();

    if !cursor.starts_with(OPEN_FENCE) {
        let mut line = cursor.clone();
        line.take_line();
        return Err(ParseError::malformed_code_fence(
            "opening fence must be exactly three backticks followed by a newline",
            line.span_from(start),
        ));
    }
    cursor.skip(OPEN_FENCE);

    let content = match cursor.take_until_str(FENCE) {
        Some(content) => content,
        None => {
            let end = cursor.offset() + cursor.rest().len();
            return Err(ParseError::malformed_code_fence(
                "missing closing fence",
                Span::from_offsets(start, end),
            ));
        }
    };

    if content.is_empty() {
        return Err(ParseError::malformed_code_fence(
            "empty code block",
            Span::from_offsets(start, cursor.offset() + FENCE.len()),
        ));
    }

    let code = content.strip_suffix('\n').ok_or_else(|| {
        ParseError::malformed_code_fence(
            "closing fence must start on its own line",
            Span::from_offsets(start, cursor.offset() + FENCE.len()),
        )
    })?;

    cursor.skip(FENCE);

    Ok(Block::CodeBlock(CodeBlock {
        code,
        span: cursor.span_from(start),
    }))
}
