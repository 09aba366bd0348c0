//! Line classifier turning document text into [`LineToken`]s.
//!
//! The tokenizer is lazy: each call to [`Iterator::next`] splits off one line
//! and classifies it. Lines are split on `\n` and lose one trailing `\r`. The
//! only state carried between lines is whether a doc string is open, which is
//! what makes `"""` blocks an embedded language: inside them every line is
//! [`TokenKind::DocContent`] until the matching closing delimiter.
//!
//! [`Tokenizer`] is [`Clone`], so a caller may snapshot it and restart from
//! any position.

use std::str::SplitInclusive;

use crate::docstring::{DocFence, DocMarker, closing_marker, opening_marker};
use crate::error::{ParseError, ParseErrorKind, parse_error};
use crate::keyword::{KeywordMatch, KeywordTable};
use crate::trim::{trim_comment, trim_tag};


/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A line introduced by a keyword from the [`KeywordTable`].
    Keyword(KeywordMatch<'a>),
    /// A line of `@tags`, without the `@` markers.
    Tags(Vec<&'a str>),
    /// A `#` comment, without the marker.
    Comment(&'a str),
    /// A pipe-delimited table row, trimmed but not yet split.
    TableRow(&'a str),
    /// An opening or closing doc string delimiter.
    DocDelimiter(DocMarker<'a>),
    /// A verbatim line inside a doc string.
    DocContent(&'a str),
    /// Any other non-blank line, trimmed.
    Text(&'a str),
    /// A whitespace-only line.
    Blank,
}

/// A classified line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken<'a> {
    /// 1-based line number.
    pub line: usize,
    /// What the line contains.
    pub kind: TokenKind<'a>,
}

/// Lazy iterator of [`LineToken`]s over a document.
///
/// # Examples
/// ```
/// use zuchini_parser::{KeywordTable, TokenKind, Tokenizer};
///
/// let keywords = KeywordTable::english();
/// let kinds: Vec<_> = Tokenizer::new("@wip\nFeature: F\n", &keywords)
///     .map(|token| token.map(|t| t.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(kinds[0], TokenKind::Tags(vec!["wip"]));
/// assert!(matches!(kinds[1], TokenKind::Keyword(_)));
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lines: SplitInclusive<'a, char>,
    keywords: &'a KeywordTable,
    line: usize,
    open_doc: Option<(DocFence, usize)>,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing `text` with the given keyword table.
    #[must_use]
    pub fn new(text: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            lines: text
                .strip_prefix('\u{feff}')
                .unwrap_or(text)
                .split_inclusive('\n'),
            keywords,
            line: 0,
            open_doc: None,
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line
    }

    fn classify(&mut self, line: &'a str) -> TokenKind<'a> {
        if let Some((fence, _)) = self.open_doc {
            let Some(marker) = closing_marker(line, fence) else {
                return TokenKind::DocContent(line);
            };
            self.open_doc = None;
            return TokenKind::DocDelimiter(marker);
        }

        let trimmed = line.trim();
        if let Some(hit) = self.keywords.match_line(trimmed) {
            return TokenKind::Keyword(hit);
        }
        if trimmed.starts_with('@') {
            return TokenKind::Tags(split_tags(trimmed));
        }
        if trimmed.starts_with('#') {
            return TokenKind::Comment(trim_comment(trimmed));
        }
        if trimmed.starts_with('|') {
            return TokenKind::TableRow(trimmed);
        }
        if let Some(marker) = opening_marker(line) {
            self.open_doc = Some((marker.fence, self.line));
            return TokenKind::DocDelimiter(marker);
        }
        if trimmed.is_empty() {
            TokenKind::Blank
        } else {
            TokenKind::Text(trimmed)
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<LineToken<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(raw) = self.lines.next() else {
            return self.open_doc.take().map(|(_, opened_at)| {
                Err(parse_error(
                    opened_at,
                    ParseErrorKind::UnterminatedDocString { opened_at },
                ))
            });
        };
        self.line += 1;
        let kind = self.classify(strip_line_ending(raw));
        Some(Ok(LineToken {
            line: self.line,
            kind,
        }))
    }
}

fn strip_line_ending(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

fn split_tags(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with('#'))
        .map(trim_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}
