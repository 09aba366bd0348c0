//! Step containers: backgrounds, scenarios, and outlines.

use super::{Node, NodeMeta, Row, Step};
use crate::keyword::StepKeyword;

/// Which kind of step container a [`StepContainer`] is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ContainerKind {
    /// Steps shared as a prefix by every scenario of the feature.
    Background,
    /// A concrete scenario.
    Scenario,
    /// A template expanded once per Examples data row.
    Outline {
        /// Examples groups in document order.
        examples: Vec<Examples>,
    },
}

/// A Background, Scenario, or Scenario Outline.
///
/// The shared fields live on this record; the variant-specific part is the
/// [`ContainerKind`].
///
/// # Examples
/// ```
/// use zuchini_parser::{ContainerKind, parse_feature};
///
/// let src = "Feature: F\n  Scenario: S\n    Given x\n";
/// let feature = parse_feature("f.feature", src).unwrap();
/// let scenario = &feature.scenarios()[0];
/// assert!(matches!(scenario.kind(), ContainerKind::Scenario));
/// assert_eq!(scenario.steps().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepContainer {
    pub(crate) meta: NodeMeta,
    pub(crate) kind: ContainerKind,
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) steps: Vec<Step>,
}

impl StepContainer {
    pub(crate) fn new(meta: NodeMeta, kind: ContainerKind, keyword: &str, name: &str) -> Self {
        Self {
            meta,
            kind,
            keyword: keyword.to_string(),
            name: name.to_string(),
            description: String::new(),
            steps: Vec::new(),
        }
    }

    /// The container variant.
    #[must_use]
    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    /// The keyword as written, e.g. `Scenario Outline`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Text following the keyword on its line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form lines between the keyword line and the first step.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Steps in document order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns `true` for a Background.
    #[must_use]
    pub fn is_background(&self) -> bool {
        matches!(self.kind, ContainerKind::Background)
    }

    /// Returns `true` for a Scenario Outline.
    #[must_use]
    pub fn is_outline(&self) -> bool {
        matches!(self.kind, ContainerKind::Outline { .. })
    }

    /// Examples groups of an outline; empty for other containers.
    #[must_use]
    pub fn examples(&self) -> &[Examples] {
        match &self.kind {
            ContainerKind::Outline { examples } => examples,
            ContainerKind::Background | ContainerKind::Scenario => &[],
        }
    }

    /// Every examples row, header rows included, flattened in document order.
    pub fn example_rows(&self) -> impl Iterator<Item = &Row> {
        self.examples().iter().flat_map(|group| group.rows.iter())
    }

    /// Step keywords with `And`/`But`/`*` resolved to the preceding
    /// `Given`/`When`/`Then`.
    #[must_use]
    pub fn resolved_step_kinds(&self) -> Vec<StepKeyword> {
        let mut prev = None;
        self.steps
            .iter()
            .map(|step| step.kind.resolve(&mut prev))
            .collect()
    }
}

impl Node for StepContainer {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}

/// One `Examples:` section of an outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Examples {
    pub(crate) meta: NodeMeta,
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) rows: Vec<Row>,
}

impl Examples {
    pub(crate) fn new(meta: NodeMeta, keyword: &str, name: &str) -> Self {
        Self {
            meta,
            keyword: keyword.to_string(),
            name: name.to_string(),
            description: String::new(),
            rows: Vec::new(),
        }
    }

    /// The keyword as written, e.g. `Examples`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Text following the keyword on its line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form lines between the keyword line and the table.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row naming the columns.
    #[must_use]
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header.
    #[must_use]
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }
}

impl Node for Examples {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}
