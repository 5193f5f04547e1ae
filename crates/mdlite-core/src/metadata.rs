//! Front-matter extraction.
//!
//! A document may open with a block of `key: value` lines between two `---`
//! marker lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01
//! ---
//! # Body starts here
//! ```
//!
//! Values are kept as raw, untyped text borrowed from the input.

use crate::cursor::Cursor;
use crate::span::Span;

const MARKER: &str = "---";

/// Ordered key/value pairs from the front-matter block.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the key at the position where it first appeared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata<'a> {
    entries: Vec<(&'a str, &'a str)>,
    /// Source span of the whole block, markers included. Empty when the
    /// document has no front matter.
    pub span: Span,
}

impl<'a> Metadata<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, overwriting any earlier value.
    pub fn insert(&mut self, key: &'a str, value: &'a str) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }
}

impl<'a, 'm> IntoIterator for &'m Metadata<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Copied<std::slice::Iter<'m, (&'a str, &'a str)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

/// Extract the front-matter block at the cursor.
///
/// Only runs when the cursor sits on `---`; otherwise returns an empty map and
/// leaves the cursor untouched. Without a closing marker every remaining line
/// is read as metadata.
pub fn extract<'a>(cursor: &mut Cursor<'a>) -> Metadata<'a> {
    let mut metadata = Metadata::new();
    if !cursor.starts_with(MARKER) {
        return metadata;
    }

    let start = cursor.offset();
    // Anything trailing the opening marker on its line is ignored.
    cursor.take_line();
    cursor.eat(b'\n');

    while !cursor.is_eof() {
        let line = cursor.take_line();
        cursor.eat(b'\n');

        if line == MARKER {
            break;
        }

        if let Some((key, value)) = split_entry(line) {
            metadata.insert(key, value);
        }
    }

    metadata.span = cursor.span_from(start);
    metadata
}

/// Split `key: value` at the first colon, dropping one space after it.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key, value.strip_prefix(' ').unwrap_or(value)))
}
