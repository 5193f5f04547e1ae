use crate::span::Span;
use std::fmt;

/// Error kinds for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A fenced code block whose opening or closing fence is not well formed,
    /// or whose content is empty.
    MalformedCodeFence,
    /// Byte input that is not valid UTF-8.
    InvalidUtf8,
}

/// A parse failure with the location where it was detected.
///
/// Any error aborts the whole parse: no partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,
    /// Source location where the error occurred
    pub span: Option<Span>,
    /// Error categorization
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for a bad code fence.
    ///
    /// `reason` completes the sentence "malformed code fence: ...".
    pub fn malformed_code_fence(reason: &str, span: Span) -> Self {
        Self {
            message: format!("malformed code fence: {}", reason),
            span: Some(span),
            kind: ParseErrorKind::MalformedCodeFence,
        }
    }

    /// Create an error for input bytes that are not UTF-8.
    pub fn invalid_utf8(err: std::str::Utf8Error) -> Self {
        let valid = err.valid_up_to() as u32;
        Self {
            message: format!("input is not valid UTF-8: {}", err),
            span: Some(Span::new(valid, valid + 1)),
            kind: ParseErrorKind::InvalidUtf8,
        }
    }

    /// Whether this error came from a malformed code fence.
    pub fn is_malformed_code_fence(&self) -> bool {
        self.kind == ParseErrorKind::MalformedCodeFence
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at bytes {}..{}", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::invalid_utf8(err)
    }
}
