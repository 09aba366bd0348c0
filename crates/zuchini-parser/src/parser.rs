//! Entry points tying the tokenizer to the document builder.

use std::sync::Arc;

use crate::builder::DocumentBuilder;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::model::Feature;
use crate::tokenizer::Tokenizer;

/// Reusable parser holding an immutable [`ParserConfig`].
///
/// A `Parser` is `Send + Sync`; concurrent calls to [`Parser::parse`] share
/// the keyword table and nothing else.
///
/// # Examples
/// ```
/// use zuchini_parser::{KeywordRole, KeywordTable, Parser, ParserConfig, StepKeyword};
///
/// let keywords = KeywordTable::new([
///     ("Funktionalität", KeywordRole::Feature),
///     ("Szenario", KeywordRole::Scenario),
///     ("Angenommen", KeywordRole::Step(StepKeyword::Given)),
/// ]);
/// let parser = Parser::new(ParserConfig::default().with_keywords(keywords));
/// let feature = parser
///     .parse("de.feature", "Funktionalität: F\n  Szenario: S\n    Angenommen x\n")
///     .unwrap();
/// assert_eq!(feature.scenarios()[0].steps()[0].keyword(), "Angenommen");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one document into a [`Feature`].
    ///
    /// `uri` identifies the document in the model and in diagnostics; it is
    /// never read from.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. No partial tree is
    /// produced.
    pub fn parse(&self, uri: impl Into<Arc<str>>, text: &str) -> Result<Feature, ParseError> {
        let uri: Arc<str> = uri.into();
        log::debug!("{uri}: parsing {} bytes", text.len());
        let mut builder = DocumentBuilder::new(Arc::clone(&uri), &self.config);
        for token in Tokenizer::new(text, self.config.keywords()) {
            builder.feed(token?).inspect_err(|err| {
                log::debug!("{}", err.located(&uri));
            })?;
        }
        builder.finish()
    }
}

/// Parse `text` with the default English configuration.
///
/// # Errors
///
/// See [`Parser::parse`].
///
/// # Examples
/// ```
/// use zuchini_parser::{Node, parse_feature};
///
/// let feature = parse_feature("login.feature", "Feature: Login\n  Scenario: ok\n").unwrap();
/// assert_eq!(feature.name(), "Login");
/// assert_eq!(feature.scenarios()[0].line(), 2);
/// ```
pub fn parse_feature(uri: impl Into<Arc<str>>, text: &str) -> Result<Feature, ParseError> {
    Parser::default().parse(uri, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrailingComments;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn parser_is_shareable_across_threads() {
        assert_send_sync::<Parser>();
        assert_send_sync::<ParserConfig>();
        assert_send_sync::<Feature>();
    }

    #[test]
    fn parse_applies_the_configuration() {
        let parser = Parser::new(
            ParserConfig::default().with_trailing_comments(TrailingComments::Discard),
        );
        let feature = parser
            .parse("x.feature", "Feature: F\n# gone\n")
            .unwrap_or_else(|err| panic!("{err}"));
        assert!(feature.trailing_comments().is_empty());
        assert_eq!(parser.config().trailing_comments(), TrailingComments::Discard);
    }

    #[test]
    fn tokenizer_errors_surface_unchanged() {
        let err = match parse_feature("x.feature", "Feature: F\n  Scenario: S\n    Given x\n      \"\"\"\n") {
            Ok(_) => panic!("expected an error"),
            Err(err) => err,
        };
        assert_eq!(
            err.located("x.feature").to_string(),
            "x.feature:4: doc string opened at line 4 is never closed"
        );
    }
}
