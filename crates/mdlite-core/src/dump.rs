//! Structural dump of a document as JSON.
//!
//! The dump is a tree of records, one per node, tagged by kind:
//!
//! ```json
//! [
//!   { "type": "heading", "level": 1, "content": "Title" },
//!   { "type": "paragraph", "content": [{ "type": "text", "content": "Hi" }] }
//! ]
//! ```
//!
//! It carries every node kind and payload, so a dump read back with
//! [`from_json`] compares equal to [`blocks`] of the original tree. Source
//! spans are not included.

use std::borrow::Cow;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::ast::{Block, Document, Inline, Paragraph};
use crate::metadata::Metadata;

/// Dump record for a block node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DumpBlock<'a> {
    Heading {
        level: u8,
        content: Cow<'a, str>,
    },
    Paragraph {
        content: Vec<DumpInline<'a>>,
    },
    List {
        ordered: bool,
        items: Vec<Vec<DumpInline<'a>>>,
    },
    CodeBlock {
        code: Cow<'a, str>,
    },
}

/// Dump record for an inline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DumpInline<'a> {
    Text {
        content: Cow<'a, str>,
    },
    Monotext {
        content: Cow<'a, str>,
    },
    Link {
        content: Cow<'a, str>,
        address: Cow<'a, str>,
    },
}

/// Convert the document's blocks into dump records borrowing its text.
pub fn blocks<'a>(doc: &Document<'a>) -> Vec<DumpBlock<'a>> {
    doc.blocks.iter().map(convert_block).collect()
}

/// Compact JSON dump of the document's blocks.
pub fn to_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string(&blocks(doc))
}

/// Human-readable JSON dump, indented by two spaces.
pub fn to_json_pretty(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&blocks(doc))
}

/// Read a dump produced by [`to_json`] or [`to_json_pretty`].
pub fn from_json(json: &str) -> serde_json::Result<Vec<DumpBlock<'static>>> {
    serde_json::from_str(json)
}

fn convert_block<'a>(block: &Block<'a>) -> DumpBlock<'a> {
    match block {
        Block::Heading(h) => DumpBlock::Heading {
            level: h.level,
            content: Cow::Borrowed(h.content),
        },
        Block::Paragraph(p) => DumpBlock::Paragraph {
            content: convert_inlines(p),
        },
        Block::List(l) => DumpBlock::List {
            ordered: l.ordered,
            items: l.items.iter().map(convert_inlines).collect(),
        },
        Block::CodeBlock(c) => DumpBlock::CodeBlock {
            code: Cow::Borrowed(c.code),
        },
    }
}

fn convert_inlines<'a>(paragraph: &Paragraph<'a>) -> Vec<DumpInline<'a>> {
    paragraph
        .content
        .iter()
        .map(|inline| match inline {
            Inline::Text(t) => DumpInline::Text {
                content: Cow::Borrowed(t.content),
            },
            Inline::Monotext(m) => DumpInline::Monotext {
                content: Cow::Borrowed(m.content),
            },
            Inline::Link(l) => DumpInline::Link {
                content: Cow::Borrowed(l.content),
                address: Cow::Borrowed(l.address),
            },
        })
        .collect()
}

/// Metadata serializes as a JSON object in insertion order.
impl Serialize for Metadata<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
