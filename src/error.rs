//! Error types for xmlbind

use std::fmt;
use thiserror::Error;

/// Position in document text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in document text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
///
/// Syntax kinds are raised by the document parser and carry a position via
/// the error's [`Span`]. Structural kinds are raised by the binder when a
/// document or record does not match its schema; they carry the path of
/// element names leading to the offending descriptor instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    InvalidUtf8,
    InvalidEntity,
    DuplicateAttribute { name: String },
    MissingAttribute { name: String },
    MissingElement { name: String },
    MissingText,
    NameMismatch { expected: String, found: String },
}

impl ErrorKind {
    /// Whether this kind reports a schema violation rather than a syntax
    /// failure in the raw document text.
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. }
                | Self::MissingElement { .. }
                | Self::MissingText
                | Self::NameMismatch { .. }
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken => write!(f, "invalid token"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::InvalidEntity => write!(f, "invalid xml entity"),
            Self::DuplicateAttribute { name } => {
                write!(f, "duplicate attribute: {name}")
            }
            Self::MissingAttribute { name } => {
                write!(f, "expected attribute {name}")
            }
            Self::MissingElement { name } => {
                write!(f, "expected element {name}")
            }
            Self::MissingText => write!(f, "expected text content"),
            Self::NameMismatch { expected, found } => {
                write!(f, "expected {expected} element instead of {found}")
            }
        }
    }
}

/// Main error type for xmlbind
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    path: Vec<String>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            path: Vec::new(),
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Create a structural error with no document position
    pub fn structural(kind: ErrorKind) -> Self {
        Self::new(kind, Span::empty())
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }

    /// Prepend an element name to the descriptor path, used while a
    /// structural error unwinds through nested elements.
    pub fn within(mut self, name: &str) -> Self {
        self.path.insert(0, name.to_string());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Element names from the schema root to the failing descriptor;
    /// empty for syntax errors.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "error at {}: {}", self.span.start, self.message)
        } else {
            write!(f, "error at {}: {}", self.path.join("/"), self.message)
        }
    }
}

/// Result type alias for xmlbind
pub type Result<T> = std::result::Result<T, Error>;
