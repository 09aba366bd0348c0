//! Parser configuration.
//!
//! A [`ParserConfig`] is immutable once handed to a [`Parser`](crate::Parser)
//! and can be cloned cheaply; the keyword table is shared behind an [`Arc`].

use std::sync::Arc;

use crate::keyword::KeywordTable;

/// What happens to comments that follow the last construct of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingComments {
    /// Keep them on [`Feature::trailing_comments`](crate::Feature::trailing_comments).
    #[default]
    Attach,
    /// Drop them.
    Discard,
}

/// Configuration for a [`Parser`](crate::Parser).
///
/// # Examples
/// ```
/// use zuchini_parser::{KeywordRole, KeywordTable, ParserConfig, TrailingComments};
///
/// let config = ParserConfig::default()
///     .with_keywords(KeywordTable::english().with_keyword("Fonctionnalité", KeywordRole::Feature))
///     .with_trailing_comments(TrailingComments::Discard);
/// assert_eq!(config.trailing_comments(), TrailingComments::Discard);
/// assert_eq!(
///     config.keywords().role_of("Fonctionnalité"),
///     Some(KeywordRole::Feature)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    keywords: Arc<KeywordTable>,
    trailing_comments: TrailingComments,
}

impl ParserConfig {
    /// Keyword table used to recognise keyword lines.
    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Shared handle to the keyword table.
    #[must_use]
    pub fn shared_keywords(&self) -> Arc<KeywordTable> {
        Arc::clone(&self.keywords)
    }

    /// Policy for comments after the last construct.
    #[must_use]
    pub fn trailing_comments(&self) -> TrailingComments {
        self.trailing_comments
    }

    /// Create a new configuration with the specified keyword table.
    #[must_use]
    pub fn with_keywords(self, keywords: KeywordTable) -> Self {
        self.with_shared_keywords(Arc::new(keywords))
    }

    /// Create a new configuration sharing an existing keyword table.
    #[must_use]
    pub fn with_shared_keywords(mut self, keywords: Arc<KeywordTable>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Create a new configuration with the specified trailing-comment policy.
    #[must_use]
    pub fn with_trailing_comments(mut self, policy: TrailingComments) -> Self {
        self.trailing_comments = policy;
        self
    }
}
