//! Data-table row splitting and width checking.
//!
//! Rows are pipe-delimited. A literal pipe inside a cell is written `\|`, a
//! literal backslash `\\`, and a newline `\n`; any other escape is kept as
//! written. Escapes are resolved first and each cell is then trimmed of spaces
//! and tabs; none of the decoded characters is a blank, so an escaped pipe at
//! the edge of a cell survives.

use crate::error::{ParseError, ParseErrorKind, parse_error};
use crate::model::Row;
use crate::trim::trim_blanks;

/// Split a raw table line into trimmed, unescaped cells.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedTableRow`] when the line does not start
/// with `|`, yields no cells, or has text after its last pipe.
pub(crate) fn parse_row(raw: &str, line: usize) -> Result<Vec<String>, ParseError> {
    let malformed = |reason| parse_error(line, ParseErrorKind::MalformedTableRow { reason });
    let Some(body) = trim_blanks(raw).strip_prefix('|') else {
        return Err(malformed("row must start with '|'"));
    };

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('|') => cell.push('|'),
                Some('\\') => cell.push('\\'),
                Some('n') => cell.push('\n'),
                Some(other) => {
                    cell.push('\\');
                    cell.push(other);
                }
                None => cell.push('\\'),
            },
            '|' => {
                cells.push(trim_blanks(&cell).to_string());
                cell.clear();
            }
            other => cell.push(other),
        }
    }

    if !trim_blanks(&cell).is_empty() {
        return Err(malformed("missing closing '|'"));
    }
    if cells.is_empty() {
        return Err(malformed("row has no cells"));
    }
    Ok(cells)
}

/// Accumulates the rows of one table, enforcing a uniform width.
#[derive(Debug, Default)]
pub(crate) struct TableBuilder {
    rows: Vec<Row>,
    first: Option<(usize, usize)>,
}

impl TableBuilder {
    pub(crate) fn push(&mut self, row: Row) -> Result<(), ParseError> {
        let found = row.cells.len();
        match self.first {
            None => self.first = Some((found, row.meta.line)),
            Some((expected, first_line)) if expected != found => {
                return Err(parse_error(
                    row.meta.line,
                    ParseErrorKind::InconsistentTableWidth {
                        expected,
                        found,
                        first_line,
                    },
                ));
            }
            Some(_) => {}
        }
        self.rows.push(row);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn finish(self) -> Vec<Row> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::NodeMeta;
    use rstest::rstest;

    fn cells(raw: &str) -> Vec<String> {
        parse_row(raw, 1).unwrap_or_else(|err| panic!("parse row `{raw}`: {err}"))
    }

    fn row(line: usize, width: usize) -> Row {
        Row {
            meta: NodeMeta::new(Arc::from("mem"), line),
            cells: vec![String::new(); width],
        }
    }

    #[rstest]
    #[case("| a | b |", &["a", "b"])]
    #[case("   |a|b|   ", &["a", "b"])]
    #[case("|\t spaced out \t|", &["spaced out"])]
    #[case("| | |", &["", ""])]
    #[case(r"| a \| b | c |", &["a | b", "c"])]
    #[case(r"| ends with \| |", &["ends with |"])]
    #[case(r"| back\\slash |", &[r"back\slash"])]
    #[case(r"| two\nlines |", &["two\nlines"])]
    #[case(r"| \d+ |", &[r"\d+"])]
    #[case("| héllo | wörld |", &["héllo", "wörld"])]
    fn splits_cells(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(cells(raw), expected);
    }

    #[rstest]
    #[case("|", "row has no cells")]
    #[case("| a | b", "missing closing '|'")]
    #[case(r"| a \|", "missing closing '|'")]
    #[case("a |", "row must start with '|'")]
    fn rejects_malformed_rows(#[case] raw: &str, #[case] reason: &'static str) {
        let Err(err) = parse_row(raw, 9) else {
            panic!("expected `{raw}` to be rejected");
        };
        assert_eq!(err.line(), 9);
        assert_eq!(err.kind(), &ParseErrorKind::MalformedTableRow { reason });
    }

    #[test]
    fn accepts_rows_of_equal_width() {
        let mut table = TableBuilder::default();
        assert!(table.is_empty());
        for line in 3..6 {
            assert!(table.push(row(line, 2)).is_ok());
        }
        assert_eq!(table.finish().len(), 3);
    }

    #[test]
    fn reports_both_lines_on_width_mismatch() {
        let mut table = TableBuilder::default();
        assert!(table.push(row(4, 2)).is_ok());
        let Err(err) = table.push(row(5, 3)) else {
            panic!("expected width mismatch");
        };
        assert_eq!(err.line(), 5);
        assert_eq!(
            err.kind(),
            &ParseErrorKind::InconsistentTableWidth {
                expected: 2,
                found: 3,
                first_line: 4,
            }
        );
    }
}
