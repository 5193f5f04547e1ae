//! Byte ranges into the parsed input.
//!
//! Every node in the tree records the slice of source it was built from, so
//! error messages and tooling can point back at the original text.

use std::ops::Range;

/// A half-open byte range `[start, end)` in the source buffer.
///
/// Offsets are bytes, not characters. All delimiters the parser splits on are
/// ASCII, so both ends of a span always fall on UTF-8 boundaries.
///
/// # Example
///
/// ```rust
/// use mdlite_core::span::Span;
///
/// let span = Span::new(4, 9);
/// assert_eq!(span.len(), 5);
/// assert_eq!(span.range(), 4..9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Offset of the first byte.
    pub start: u32,
    /// Offset one past the last byte.
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from cursor offsets.
    #[inline]
    pub const fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The span as a range usable for slicing the source.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
