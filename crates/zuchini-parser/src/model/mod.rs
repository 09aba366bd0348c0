//! Document model produced by the parser.
//!
//! Every node records the URI of its document, the 1-based line of the
//! construct that introduced it, and the comments and tags written directly
//! above it. Tags are never inherited from enclosing nodes; combining them is
//! left to consumers.
//!
//! Nodes are created during a single parse and are read-only afterwards.

use std::sync::Arc;

mod container;
mod step;

pub use container::{ContainerKind, Examples, StepContainer};
pub use step::{DocString, Row, Step};

/// Location and annotations shared by every node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeMeta {
    pub(crate) uri: Arc<str>,
    pub(crate) line: usize,
    pub(crate) comments: Vec<String>,
    pub(crate) tags: Vec<String>,
}

impl NodeMeta {
    pub(crate) fn new(uri: Arc<str>, line: usize) -> Self {
        Self {
            uri,
            line,
            comments: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Identifier of the source document.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// 1-based line of the construct.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Comments written above the construct, without the `#` marker.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Tags written above the construct, without the `@` marker.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Read access to the metadata every node carries.
///
/// # Examples
/// ```
/// use zuchini_parser::{Node, parse_feature};
///
/// let feature = parse_feature("cart.feature", "@shop\nFeature: Cart\n").unwrap();
/// assert_eq!(feature.uri(), "cart.feature");
/// assert_eq!(feature.line(), 2);
/// assert!(feature.has_tag("shop"));
/// ```
pub trait Node {
    /// Shared location and annotation record.
    fn meta(&self) -> &NodeMeta;

    /// Identifier of the source document.
    fn uri(&self) -> &str {
        self.meta().uri()
    }

    /// 1-based line of the construct.
    fn line(&self) -> usize {
        self.meta().line()
    }

    /// Comments attached to the construct.
    fn comments(&self) -> &[String] {
        self.meta().comments()
    }

    /// Tags attached to the construct.
    fn tags(&self) -> &[String] {
        self.meta().tags()
    }

    /// Returns `true` when the construct carries `tag` (with or without `@`).
    fn has_tag(&self, tag: &str) -> bool {
        let tag = crate::trim::trim_tag(tag);
        self.tags().iter().any(|candidate| candidate == tag)
    }
}

/// Root of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    pub(crate) meta: NodeMeta,
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) backgrounds: Vec<StepContainer>,
    pub(crate) scenarios: Vec<StepContainer>,
    pub(crate) trailing_comments: Vec<String>,
}

impl Feature {
    pub(crate) fn new(meta: NodeMeta, keyword: &str, name: &str) -> Self {
        Self {
            meta,
            keyword: keyword.to_string(),
            name: name.to_string(),
            description: String::new(),
            backgrounds: Vec::new(),
            scenarios: Vec::new(),
            trailing_comments: Vec::new(),
        }
    }

    /// The keyword as written, e.g. `Feature`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Text following the keyword on its line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form lines following the keyword line, joined by `\n`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Background sections; at most one for a successfully parsed document.
    #[must_use]
    pub fn backgrounds(&self) -> &[StepContainer] {
        &self.backgrounds
    }

    /// The background section, if present.
    #[must_use]
    pub fn background(&self) -> Option<&StepContainer> {
        self.backgrounds.first()
    }

    /// Scenarios and outlines in document order.
    #[must_use]
    pub fn scenarios(&self) -> &[StepContainer] {
        &self.scenarios
    }

    /// Only the outlines among [`scenarios`](Self::scenarios).
    pub fn outlines(&self) -> impl Iterator<Item = &StepContainer> {
        self.scenarios.iter().filter(|container| container.is_outline())
    }

    /// Background followed by every scenario, in document order.
    pub fn containers(&self) -> impl Iterator<Item = &StepContainer> {
        self.backgrounds.iter().chain(&self.scenarios)
    }

    /// Comments that followed the last construct of the document.
    #[must_use]
    pub fn trailing_comments(&self) -> &[String] {
        &self.trailing_comments
    }
}

impl Node for Feature {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }
}
