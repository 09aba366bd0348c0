//! Error types surfaced while parsing feature documents.

use std::fmt;
use thiserror::Error;

/// The category of a fatal parse failure.
///
/// Every variant renders a human-readable message; the line number lives on
/// the enclosing [`ParseError`].
///
/// # Examples
/// ```
/// use zuchini_parser::ParseErrorKind;
/// let kind = ParseErrorKind::InconsistentTableWidth {
///     expected: 2,
///     found: 3,
///     first_line: 4,
/// };
/// assert_eq!(
///     kind.to_string(),
///     "table row has 3 cells but the row at line 4 has 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Significant content appeared before any `Feature:` keyword, or the
    /// document contained no feature at all.
    #[error("expected a Feature keyword before any other content")]
    MissingFeatureKeyword,
    /// A doc string was opened but the document ended before it was closed.
    #[error("doc string opened at line {opened_at} is never closed")]
    UnterminatedDocString {
        /// Line of the opening delimiter.
        opened_at: usize,
    },
    /// The token stream ended while a construct was still open.
    #[error("unexpected end of input inside {context}")]
    UnexpectedEndOfInput {
        /// The construct left open.
        context: &'static str,
    },
    /// A table row could not be split into cells.
    #[error("malformed table row: {reason}")]
    MalformedTableRow {
        /// Why the row was rejected.
        reason: &'static str,
    },
    /// A table row has a different number of cells from the first row.
    #[error("table row has {found} cells but the row at line {first_line} has {expected}")]
    InconsistentTableWidth {
        /// Cell count of the first row in the table.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
        /// Line of the first row in the table.
        first_line: usize,
    },
    /// A recognised keyword appeared where its role is not permitted.
    #[error("keyword `{keyword}` is not allowed {context}")]
    UnknownKeywordAtContext {
        /// The keyword as written in the document.
        keyword: String,
        /// Where the keyword was found.
        context: &'static str,
    },
    /// A line that is not a keyword appeared where it cannot be placed.
    #[error("unexpected {found} {context}")]
    UnexpectedContent {
        /// What kind of line was found.
        found: &'static str,
        /// Where the line was found.
        context: &'static str,
    },
}

/// A fatal parse failure with the 1-based line it was detected on.
///
/// # Examples
/// ```
/// use zuchini_parser::{ParseError, ParseErrorKind};
/// let err = ParseError::new(3, ParseErrorKind::MissingFeatureKeyword);
/// assert_eq!(err.line(), 3);
/// assert_eq!(
///     err.located("login.feature").to_string(),
///     "login.feature:3: expected a Feature keyword before any other content"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for the given line.
    #[must_use]
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// 1-based line the error was detected on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The error category.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Human-readable message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Render the error as `uri:line: message`.
    #[must_use]
    pub fn located<'a>(&'a self, uri: &'a str) -> Located<'a> {
        Located { uri, error: self }
    }
}

/// Display adapter produced by [`ParseError::located`].
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    uri: &'a str,
    error: &'a ParseError,
}

impl fmt::Display for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.uri, self.error.line, self.error.kind)
    }
}

pub(crate) fn parse_error(line: usize, kind: ParseErrorKind) -> ParseError {
    ParseError::new(line, kind)
}
