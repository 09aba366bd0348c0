//! Steps and their attached tables and doc strings.

use super::{Node, NodeMeta};
use crate::docstring::DocFence;
use crate::keyword::StepKeyword;

/// One step line within a container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    pub(crate) meta: NodeMeta,
    pub(crate) keyword: String,
    pub(crate) kind: StepKeyword,
    pub(crate) name: String,
    pub(crate) docs: Vec<DocString>,
    pub(crate) rows: Vec<Row>,
}

impl Step {
    pub(crate) fn new(meta: NodeMeta, keyword: &str, kind: StepKeyword, name: &str) -> Self {
        Self {
            meta,
            keyword: keyword.to_string(),
            kind,
            name: name.to_string(),
            docs: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The keyword as written, e.g. `And` or `*`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The role of the keyword, before resolving conjunctions.
    #[must_use]
    pub fn kind(&self) -> StepKeyword {
        self.kind
    }

    /// The step text after the keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keyword and text joined by a single space, as written on the line.
    ///
    /// # Examples
    /// ```
    /// use zuchini_parser::parse_feature;
    ///
    /// let src = "Feature: F\nScenario: S\n  Given   a   user\n";
    /// let feature = parse_feature("f.feature", src).unwrap();
    /// assert_eq!(feature.scenarios()[0].steps()[0].text(), "Given a   user");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        if self.name.is_empty() {
            self.keyword.clone()
        } else {
            format!("{} {}", self.keyword, self.name)
        }
    }

    /// Doc strings attached to the step.
    #[must_use]
    pub fn docs(&self) -> &[DocString] {
        &self.docs
    }

    /// The first doc string, if any.
    #[must_use]
    pub fn doc_string(&self) -> Option<&DocString> {
        self.docs.first()
    }

    /// Data table rows attached to the step.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The data table as plain cell strings.
    #[must_use]
    pub fn table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.cells.clone()).collect()
    }
}

impl Node for Step {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}

/// A literal block attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocString {
    pub(crate) line: usize,
    pub(crate) fence: DocFence,
    pub(crate) content_type: Option<String>,
    pub(crate) content: String,
}

impl DocString {
    /// Line of the opening delimiter.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Delimiter used to open and close the block.
    #[must_use]
    pub fn fence(&self) -> DocFence {
        self.fence
    }

    /// Media type written after the opening delimiter.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Content lines joined by `\n`.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// One line of a step table or an examples table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    pub(crate) meta: NodeMeta,
    pub(crate) cells: Vec<String>,
}

impl Row {
    pub(crate) fn new(meta: NodeMeta, cells: Vec<String>) -> Self {
        Self { meta, cells }
    }

    /// Trimmed, unescaped cells.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell at `index`, if present.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Node for Row {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}
