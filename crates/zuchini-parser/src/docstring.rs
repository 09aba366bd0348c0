//! Doc string delimiter detection and content collection.
//!
//! A doc string opens with `"""` or `` ``` `` (optionally followed by a
//! content type such as `json`) and closes with a line holding only the same
//! delimiter. Content lines lose exactly as much leading indentation as the
//! opening delimiter had; lines indented less than that are kept as written.

use std::fmt;

use crate::model::DocString;
use crate::trim::indentation;

/// The delimiter that opened a doc string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DocFence {
    /// `"""`
    Quotes,
    /// `` ``` ``
    Backticks,
}

impl DocFence {
    /// The delimiter text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quotes => "\"\"\"",
            Self::Backticks => "```",
        }
    }

    const fn escaped(self) -> &'static str {
        match self {
            Self::Quotes => "\\\"\\\"\\\"",
            Self::Backticks => "\\`\\`\\`",
        }
    }
}

impl fmt::Display for DocFence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opening or closing doc string delimiter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMarker<'a> {
    /// Which delimiter was used.
    pub fence: DocFence,
    /// Leading spaces and tabs before the delimiter.
    pub indent: usize,
    /// Media type written after an opening delimiter, if any.
    pub content_type: Option<&'a str>,
}

/// Recognise an opening delimiter on a line.
pub(crate) fn opening_marker(line: &str) -> Option<DocMarker<'_>> {
    let trimmed = line.trim_start();
    let (fence, rest) = [DocFence::Quotes, DocFence::Backticks]
        .into_iter()
        .find_map(|fence| trimmed.strip_prefix(fence.as_str()).map(|rest| (fence, rest)))?;
    let content_type = rest.trim();
    Some(DocMarker {
        fence,
        indent: indentation(line),
        content_type: (!content_type.is_empty()).then_some(content_type),
    })
}

/// Recognise the closing delimiter for `fence`.
pub(crate) fn closing_marker(line: &str, fence: DocFence) -> Option<DocMarker<'static>> {
    (line.trim() == fence.as_str()).then(|| DocMarker {
        fence,
        indent: indentation(line),
        content_type: None,
    })
}

/// Remove `indent` leading blanks when the line has at least that many.
pub(crate) fn strip_indent(line: &str, indent: usize) -> &str {
    if indentation(line) >= indent {
        line.get(indent..).unwrap_or(line)
    } else {
        line
    }
}

/// Collects the content of one doc string.
#[derive(Debug)]
pub(crate) struct DocStringBuilder {
    line: usize,
    fence: DocFence,
    indent: usize,
    content_type: Option<String>,
    lines: Vec<String>,
}

impl DocStringBuilder {
    pub(crate) fn open(line: usize, marker: DocMarker<'_>) -> Self {
        Self {
            line,
            fence: marker.fence,
            indent: marker.indent,
            content_type: marker.content_type.map(str::to_string),
            lines: Vec::new(),
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn fence(&self) -> DocFence {
        self.fence
    }

    pub(crate) fn push_line(&mut self, raw: &str) {
        let stripped = strip_indent(raw, self.indent);
        self.lines
            .push(stripped.replace(self.fence.escaped(), self.fence.as_str()));
    }

    pub(crate) fn finish(self) -> DocString {
        DocString {
            line: self.line,
            fence: self.fence,
            content_type: self.content_type,
            content: self.lines.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"\"\"", DocFence::Quotes, 0, None)]
    #[case("    ```", DocFence::Backticks, 4, None)]
    #[case("  ```json", DocFence::Backticks, 2, Some("json"))]
    #[case("\t\"\"\" text/markdown ", DocFence::Quotes, 1, Some("text/markdown"))]
    fn detects_opening_markers(
        #[case] line: &str,
        #[case] fence: DocFence,
        #[case] indent: usize,
        #[case] content_type: Option<&str>,
    ) {
        assert_eq!(
            opening_marker(line),
            Some(DocMarker {
                fence,
                indent,
                content_type,
            })
        );
    }

    #[test]
    fn ignores_lines_without_fence() {
        assert_eq!(opening_marker("\"\" two quotes"), None);
        assert_eq!(opening_marker("plain"), None);
    }

    #[test]
    fn closing_requires_matching_fence_alone() {
        assert!(closing_marker("   \"\"\"  ", DocFence::Quotes).is_some());
        assert!(closing_marker("```", DocFence::Quotes).is_none());
        assert!(closing_marker("\"\"\" trailing", DocFence::Quotes).is_none());
    }

    #[rstest]
    #[case("      body", 4, "  body")]
    #[case("    body", 4, "body")]
    #[case("  short", 4, "  short")]
    #[case("", 4, "")]
    fn strips_delimiter_indentation(#[case] line: &str, #[case] indent: usize, #[case] expected: &str) {
        assert_eq!(strip_indent(line, indent), expected);
    }

    #[test]
    fn joins_lines_and_unescapes_matching_fence() {
        let marker = opening_marker("  \"\"\"").unwrap_or_else(|| panic!("marker"));
        let mut doc = DocStringBuilder::open(3, marker);
        doc.push_line("  first");
        doc.push_line("    \\\"\\\"\\\" nested");
        doc.push_line("  \\`\\`\\`");
        let doc = doc.finish();
        assert_eq!(doc.line, 3);
        assert_eq!(doc.content, "first\n  \"\"\" nested\n\\`\\`\\`");
    }

    #[test]
    fn empty_doc_string_has_empty_content() {
        let marker = opening_marker("```yaml").unwrap_or_else(|| panic!("marker"));
        let doc = DocStringBuilder::open(1, marker).finish();
        assert_eq!(doc.content, "");
        assert_eq!(doc.content_type.as_deref(), Some("yaml"));
    }
}
