//! Scenario Outline expansion.
//!
//! An outline is a template: every `<column>` placeholder in its name, step
//! names, doc strings, and data-table cells is replaced with the value of the
//! matching column in one Examples data row. [`StepContainer::expand`] yields
//! one [`ExpandedScenario`] per data row across all Examples groups.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::model::{DocString, Examples, Node, Row, Step, StepContainer};

/// Matches `<placeholder>` tokens, capturing the name without brackets.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([^>\s][^>]*)>").unwrap_or_else(|_| unreachable!("placeholder regex is valid"))
});

/// A placeholder names a column the Examples table does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "line {line}: placeholder `<{placeholder}>` names no Examples column; available columns: [{}]",
    .available_columns.join(", ")
)]
pub struct PlaceholderError {
    /// The placeholder name, without angle brackets.
    pub placeholder: String,
    /// Header cells of the Examples group being applied.
    pub available_columns: Vec<String>,
    /// Line of the outline or step containing the placeholder.
    pub line: usize,
}

/// One concrete scenario produced from an outline and an Examples row.
///
/// # Examples
/// ```
/// use zuchini_parser::parse_feature;
///
/// let src = "\
/// Feature: Cukes
///   Scenario Outline: eat <n>
///     Given there are <n> cucumbers
///     Examples:
///       | n  |
///       | 12 |
/// ";
/// let feature = parse_feature("cukes.feature", src).unwrap();
/// let expanded = feature.scenarios()[0].expand().unwrap();
/// assert_eq!(expanded[0].name(), "eat 12");
/// assert_eq!(expanded[0].steps()[0].name(), "there are 12 cucumbers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedScenario<'a> {
    outline: &'a StepContainer,
    examples: &'a Examples,
    row: &'a Row,
    name: String,
    steps: Vec<Step>,
}

impl<'a> ExpandedScenario<'a> {
    /// The outline this scenario was produced from.
    #[must_use]
    pub fn outline(&self) -> &'a StepContainer {
        self.outline
    }

    /// The Examples group supplying the row.
    #[must_use]
    pub fn examples(&self) -> &'a Examples {
        self.examples
    }

    /// The data row supplying the values.
    #[must_use]
    pub fn row(&self) -> &'a Row {
        self.row
    }

    /// Line of the data row, which identifies the expansion.
    #[must_use]
    pub fn line(&self) -> usize {
        self.row.line()
    }

    /// Outline name with placeholders substituted.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outline steps with placeholders substituted.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

struct Columns<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl Columns<'_> {
    fn value(&self, name: &str) -> Option<&str> {
        let index = self.headers.iter().position(|header| header == name)?;
        self.values.get(index).map(String::as_str)
    }

    fn substitute(&self, text: &str, line: usize) -> Result<String, PlaceholderError> {
        let missing = PLACEHOLDER_RE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str())
            .find(|name| self.value(name).is_none());
        if let Some(placeholder) = missing {
            return Err(PlaceholderError {
                placeholder: placeholder.to_string(),
                available_columns: self.headers.to_vec(),
                line,
            });
        }
        let replaced = PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
            caps.get(1)
                .and_then(|name| self.value(name.as_str()))
                .unwrap_or_default()
                .to_string()
        });
        Ok(replaced.into_owned())
    }

    fn step(&self, step: &Step) -> Result<Step, PlaceholderError> {
        let line = step.line();
        let docs = step
            .docs
            .iter()
            .map(|doc| -> Result<DocString, PlaceholderError> {
                Ok(DocString {
                    content: self.substitute(&doc.content, doc.line)?,
                    ..doc.clone()
                })
            })
            .collect::<Result<_, _>>()?;
        let rows = step
            .rows
            .iter()
            .map(|row| -> Result<Row, PlaceholderError> {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| self.substitute(cell, row.line()))
                    .collect::<Result<_, _>>()?;
                Ok(Row::new(row.meta.clone(), cells))
            })
            .collect::<Result<_, _>>()?;
        Ok(Step {
            name: self.substitute(&step.name, line)?,
            docs,
            rows,
            ..step.clone()
        })
    }
}

impl StepContainer {
    /// Expand an outline into one scenario per Examples data row.
    ///
    /// Backgrounds and plain scenarios expand to nothing. Examples groups
    /// without a header row contribute nothing either.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError`] when a placeholder names a column that the
    /// applicable Examples group lacks.
    pub fn expand(&self) -> Result<Vec<ExpandedScenario<'_>>, PlaceholderError> {
        let mut expanded = Vec::new();
        for examples in self.examples() {
            let Some(header) = examples.header() else {
                continue;
            };
            for row in examples.data_rows() {
                let columns = Columns {
                    headers: header.cells(),
                    values: row.cells(),
                };
                let steps = self
                    .steps
                    .iter()
                    .map(|step| columns.step(step))
                    .collect::<Result<_, _>>()?;
                expanded.push(ExpandedScenario {
                    outline: self,
                    examples,
                    row,
                    name: columns.substitute(&self.name, self.line())?,
                    steps,
                });
            }
        }
        Ok(expanded)
    }
}
