//! Byte cursor shared by the block, inline and front-matter scanners.
//!
//! The cursor is nothing more than an offset into the input. All delimiter
//! searches go through `memchr`, which is SIMD accelerated on supported
//! platforms.
//!
//! Every method leaves the offset on a UTF-8 character boundary: delimiters
//! are ASCII, and [`Cursor::bump`] steps over a whole character. Slices handed
//! out therefore never split a character and always borrow from the input.

use memchr::{memchr, memchr2, memchr3, memmem};

use crate::span::Span;

/// Forward-only position in an input buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
        }
    }

    /// Current byte offset.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// The byte just behind the cursor.
    #[inline(always)]
    pub fn prev(&self) -> Option<u8> {
        self.offset.checked_sub(1).map(|i| self.bytes[i])
    }

    /// The byte `n` positions past the cursor.
    #[inline(always)]
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.offset + n).copied()
    }

    #[inline(always)]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.bytes[self.offset..].starts_with(prefix.as_bytes())
    }

    /// Step over one character. Does nothing at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.offset += c.len_utf8();
        }
    }

    /// Advance past `prefix`, which the caller has already matched with
    /// [`Cursor::starts_with`].
    #[inline]
    pub fn skip(&mut self, prefix: &str) {
        debug_assert!(self.starts_with(prefix));
        self.offset = (self.offset + prefix.len()).min(self.bytes.len());
    }

    /// Step over `byte` if it is under the cursor.
    #[inline(always)]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Step over a run of `byte`, returning its length.
    #[inline]
    pub fn eat_while(&mut self, byte: u8) -> usize {
        let run = self.bytes[self.offset..]
            .iter()
            .take_while(|&&b| b == byte)
            .count();
        self.offset += run;
        run
    }

    /// Slice from the cursor up to (not including) `delim`, or to the end of
    /// input. The cursor stops on the delimiter.
    #[inline]
    pub fn take_until(&mut self, delim: u8) -> &'a str {
        let len = memchr(delim, &self.bytes[self.offset..]);
        self.take(len)
    }

    /// Like [`Cursor::take_until`], stopping at whichever of two delimiters
    /// comes first.
    #[inline]
    pub fn take_until2(&mut self, a: u8, b: u8) -> &'a str {
        let len = memchr2(a, b, &self.bytes[self.offset..]);
        self.take(len)
    }

    /// Like [`Cursor::take_until`], stopping at the first of three delimiters.
    #[inline]
    pub fn take_until3(&mut self, a: u8, b: u8, c: u8) -> &'a str {
        let len = memchr3(a, b, c, &self.bytes[self.offset..]);
        self.take(len)
    }

    /// Slice up to the next occurrence of `needle`, leaving the cursor on it.
    ///
    /// Returns `None` and leaves the cursor where it was if `needle` does not
    /// occur in the rest of the input.
    #[inline]
    pub fn take_until_str(&mut self, needle: &str) -> Option<&'a str> {
        let len = memmem::find(&self.bytes[self.offset..], needle.as_bytes())?;
        Some(self.take(Some(len)))
    }

    /// The rest of the current line, excluding its newline.
    #[inline]
    pub fn take_line(&mut self) -> &'a str {
        self.take_until(b'\n')
    }

    /// Unconsumed input.
    #[inline(always)]
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Span from `start` to the current offset.
    #[inline(always)]
    pub fn span_from(&self, start: usize) -> Span {
        Span::from_offsets(start, self.offset)
    }

    #[inline(always)]
    fn take(&mut self, len: Option<usize>) -> &'a str {
        let start = self.offset;
        let end = match len {
            Some(len) => start + len,
            None => self.bytes.len(),
        };
        self.offset = end;
        &self.input[start..end]
    }
}

