//! Single-pass document builder driven by [`LineToken`]s.
//!
//! The builder is a small state machine. Open constructs (the feature, the
//! current container, step, examples group, table, and doc string) live in
//! `Option` slots and are appended to their parent when closed. Comment and
//! tag lines are buffered until the next construct that can own them.
//!
//! ```text
//! AwaitingFeature --Feature:--> FeatureBody --Background:/Scenario:--> ContainerBody
//! ContainerBody --Examples:--> ExamplesBody --Scenario:--> ContainerBody
//! ```

use std::mem;
use std::sync::Arc;

use crate::config::{ParserConfig, TrailingComments};
use crate::docstring::{DocMarker, DocStringBuilder};
use crate::error::{ParseError, ParseErrorKind, parse_error};
use crate::keyword::{KeywordMatch, KeywordRole, StepKeyword};
use crate::model::{ContainerKind, Examples, Feature, NodeMeta, Row, Step, StepContainer};
use crate::table::{TableBuilder, parse_row};
use crate::tokenizer::{LineToken, TokenKind};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingFeature,
    FeatureBody,
    ContainerBody,
    ExamplesBody,
}

/// Comments and tags waiting for the construct they precede.
#[derive(Debug, Default)]
struct Pending {
    comments: Vec<String>,
    tags: Vec<String>,
}

/// Incrementally builds a [`Feature`] from a stream of tokens.
///
/// [`Parser`](crate::Parser) drives the builder from a
/// [`Tokenizer`](crate::Tokenizer); callers with their own token source can
/// feed tokens directly.
///
/// # Examples
/// ```
/// use zuchini_parser::{DocumentBuilder, ParserConfig, Tokenizer};
///
/// let config = ParserConfig::default();
/// let mut builder = DocumentBuilder::new("mem.feature", &config);
/// for token in Tokenizer::new("Feature: F\n  Scenario: S\n", config.keywords()) {
///     builder.feed(token.unwrap()).unwrap();
/// }
/// let feature = builder.finish().unwrap();
/// assert_eq!(feature.scenarios().len(), 1);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    uri: Arc<str>,
    trailing_comments: TrailingComments,
    state: State,
    pending: Pending,
    last_line: usize,
    feature: Option<Feature>,
    container: Option<StepContainer>,
    step: Option<Step>,
    step_table: Option<TableBuilder>,
    examples: Option<(Examples, TableBuilder)>,
    doc: Option<DocStringBuilder>,
}

impl DocumentBuilder {
    /// Start building a document identified by `uri`.
    pub fn new(uri: impl Into<Arc<str>>, config: &ParserConfig) -> Self {
        Self {
            uri: uri.into(),
            trailing_comments: config.trailing_comments(),
            state: State::AwaitingFeature,
            pending: Pending::default(),
            last_line: 0,
            feature: None,
            container: None,
            step: None,
            step_table: None,
            examples: None,
            doc: None,
        }
    }

    /// Consume one token.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the token cannot appear at the current
    /// position. The builder should be discarded after an error.
    pub fn feed(&mut self, token: LineToken<'_>) -> Result<(), ParseError> {
        let line = token.line;
        self.last_line = line;
        if self.doc.is_some() {
            return self.feed_doc(line, &token.kind);
        }
        match token.kind {
            TokenKind::Blank => Ok(()),
            TokenKind::Comment(text) => {
                self.pending.comments.push(text.to_string());
                Ok(())
            }
            TokenKind::Tags(tags) => {
                self.pending
                    .tags
                    .extend(tags.into_iter().map(str::to_string));
                Ok(())
            }
            TokenKind::Keyword(hit) => self.keyword(line, hit),
            TokenKind::Text(text) => self.text(line, text),
            TokenKind::TableRow(raw) => self.table_row(line, raw),
            TokenKind::DocDelimiter(marker) => self.open_doc(line, marker),
            TokenKind::DocContent(_) if self.state == State::AwaitingFeature => Ok(()),
            TokenKind::DocContent(_) => Err(unexpected(
                line,
                "doc string content",
                "outside a doc string",
            )),
        }
    }

    /// Close every open construct and return the finished feature.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::UnexpectedEndOfInput`] when a doc string is
    /// still open and [`ParseErrorKind::MissingFeatureKeyword`] when no
    /// feature was found.
    pub fn finish(mut self) -> Result<Feature, ParseError> {
        let end = self.last_line.max(1);
        if self.doc.is_some() {
            return Err(parse_error(
                end,
                ParseErrorKind::UnexpectedEndOfInput {
                    context: "a doc string",
                },
            ));
        }
        self.close_container();
        let Some(mut feature) = self.feature.take() else {
            return Err(parse_error(end, ParseErrorKind::MissingFeatureKeyword));
        };

        let Pending { comments, tags } = mem::take(&mut self.pending);
        if !tags.is_empty() {
            log::warn!(
                "{}: discarding tags {tags:?} that precede the end of the document",
                self.uri
            );
        }
        match self.trailing_comments {
            TrailingComments::Attach => feature.trailing_comments = comments,
            TrailingComments::Discard if !comments.is_empty() => {
                log::debug!("{}: discarding {} trailing comments", self.uri, comments.len());
            }
            TrailingComments::Discard => {}
        }

        log::debug!(
            "{}: parsed feature `{}` with {} scenarios",
            self.uri,
            feature.name,
            feature.scenarios.len()
        );
        Ok(feature)
    }

    fn meta(&mut self, line: usize) -> NodeMeta {
        let Pending { comments, tags } = mem::take(&mut self.pending);
        NodeMeta {
            comments,
            tags,
            ..NodeMeta::new(Arc::clone(&self.uri), line)
        }
    }

    fn keyword(&mut self, line: usize, hit: KeywordMatch<'_>) -> Result<(), ParseError> {
        match (self.state, hit.role) {
            (State::AwaitingFeature, KeywordRole::Feature) => {
                let meta = self.meta(line);
                self.feature = Some(Feature::new(meta, hit.keyword, hit.text));
                self.state = State::FeatureBody;
                Ok(())
            }
            (State::AwaitingFeature, _) => {
                Err(parse_error(line, ParseErrorKind::MissingFeatureKeyword))
            }
            (_, KeywordRole::Feature) => Err(misplaced(line, &hit, "more than once per document")),
            (State::FeatureBody, KeywordRole::Background) => {
                self.open_container(line, &hit, ContainerKind::Background);
                Ok(())
            }
            (_, KeywordRole::Background) => {
                Err(misplaced(line, &hit, "after a Background or Scenario"))
            }
            (_, KeywordRole::Scenario) => {
                self.open_container(line, &hit, ContainerKind::Scenario);
                Ok(())
            }
            (_, KeywordRole::Outline) => {
                let kind = ContainerKind::Outline {
                    examples: Vec::new(),
                };
                self.open_container(line, &hit, kind);
                Ok(())
            }
            (State::FeatureBody, KeywordRole::Examples | KeywordRole::Step(_)) => Err(misplaced(
                line,
                &hit,
                "before a Background or Scenario",
            )),
            (State::ContainerBody | State::ExamplesBody, KeywordRole::Examples) => {
                self.open_examples(line, &hit)
            }
            (State::ContainerBody, KeywordRole::Step(kind)) => {
                self.open_step(line, &hit, kind);
                Ok(())
            }
            (State::ExamplesBody, KeywordRole::Step(_)) => {
                Err(misplaced(line, &hit, "after an Examples table"))
            }
        }
    }

    fn open_container(&mut self, line: usize, hit: &KeywordMatch<'_>, kind: ContainerKind) {
        self.close_container();
        log::trace!("{}:{line}: opening {} `{}`", self.uri, hit.keyword, hit.text);
        let meta = self.meta(line);
        self.container = Some(StepContainer::new(meta, kind, hit.keyword, hit.text));
        self.state = State::ContainerBody;
    }

    fn open_step(&mut self, line: usize, hit: &KeywordMatch<'_>, kind: StepKeyword) {
        self.close_step();
        log::trace!("{}:{line}: step `{} {}`", self.uri, hit.keyword, hit.text);
        let meta = self.meta(line);
        self.step = Some(Step::new(meta, hit.keyword, kind, hit.text));
    }

    fn open_examples(&mut self, line: usize, hit: &KeywordMatch<'_>) -> Result<(), ParseError> {
        if !self.container.as_ref().is_some_and(StepContainer::is_outline) {
            return Err(misplaced(line, hit, "outside a Scenario Outline"));
        }
        self.close_step();
        self.close_examples();
        let meta = self.meta(line);
        self.examples = Some((
            Examples::new(meta, hit.keyword, hit.text),
            TableBuilder::default(),
        ));
        self.state = State::ExamplesBody;
        Ok(())
    }

    fn text(&mut self, line: usize, text: &str) -> Result<(), ParseError> {
        match self.state {
            State::AwaitingFeature => Err(parse_error(line, ParseErrorKind::MissingFeatureKeyword)),
            State::FeatureBody => {
                if let Some(feature) = self.feature.as_mut() {
                    push_description(&mut feature.description, text);
                }
                Ok(())
            }
            State::ContainerBody => {
                let container = self
                    .container
                    .as_mut()
                    .filter(|container| container.steps.is_empty() && self.step.is_none())
                    .ok_or_else(|| unexpected(line, "text", "after a step"))?;
                push_description(&mut container.description, text);
                Ok(())
            }
            State::ExamplesBody => {
                let (group, _) = self
                    .examples
                    .as_mut()
                    .filter(|(_, table)| table.is_empty())
                    .ok_or_else(|| unexpected(line, "text", "inside an Examples table"))?;
                push_description(&mut group.description, text);
                Ok(())
            }
        }
    }

    fn table_row(&mut self, line: usize, raw: &str) -> Result<(), ParseError> {
        let in_examples = match self.state {
            State::AwaitingFeature => return Ok(()),
            State::ExamplesBody if self.examples.is_some() => true,
            State::ContainerBody if self.step.is_some() => false,
            State::FeatureBody | State::ContainerBody | State::ExamplesBody => {
                return Err(unexpected(line, "table row", "without a preceding step"));
            }
        };
        let cells = parse_row(raw, line)?;
        let row = Row::new(self.meta(line), cells);
        if in_examples {
            self.examples
                .as_mut()
                .map_or(Ok(()), |(_, table)| table.push(row))
        } else {
            self.step_table
                .get_or_insert_with(TableBuilder::default)
                .push(row)
        }
    }

    fn open_doc(&mut self, line: usize, marker: DocMarker<'_>) -> Result<(), ParseError> {
        if self.state == State::AwaitingFeature {
            return Ok(());
        }
        if self.state != State::ContainerBody || self.step.is_none() {
            return Err(unexpected(line, "doc string", "without a preceding step"));
        }
        self.flush_step_table();
        self.doc = Some(DocStringBuilder::open(line, marker));
        Ok(())
    }

    fn feed_doc(&mut self, line: usize, kind: &TokenKind<'_>) -> Result<(), ParseError> {
        match kind {
            TokenKind::DocContent(text) => {
                if let Some(doc) = self.doc.as_mut() {
                    doc.push_line(text);
                }
                Ok(())
            }
            TokenKind::DocDelimiter(marker) => {
                let Some(doc) = self.doc.take() else {
                    return Ok(());
                };
                if marker.fence != doc.fence() {
                    return Err(parse_error(
                        line,
                        ParseErrorKind::UnterminatedDocString {
                            opened_at: doc.line(),
                        },
                    ));
                }
                if let Some(step) = self.step.as_mut() {
                    step.docs.push(doc.finish());
                }
                Ok(())
            }
            _ => Err(unexpected(line, "line", "inside a doc string")),
        }
    }

    fn flush_step_table(&mut self) {
        let Some(table) = self.step_table.take() else {
            return;
        };
        if let Some(step) = self.step.as_mut() {
            step.rows.extend(table.finish());
        }
    }

    fn close_step(&mut self) {
        self.flush_step_table();
        let Some(step) = self.step.take() else {
            return;
        };
        if let Some(container) = self.container.as_mut() {
            container.steps.push(step);
        }
    }

    fn close_examples(&mut self) {
        let Some((mut group, table)) = self.examples.take() else {
            return;
        };
        group.rows = table.finish();
        if let Some(StepContainer {
            kind: ContainerKind::Outline { examples },
            ..
        }) = self.container.as_mut()
        {
            examples.push(group);
        }
    }

    fn close_container(&mut self) {
        self.close_step();
        self.close_examples();
        let Some(container) = self.container.take() else {
            return;
        };
        let Some(feature) = self.feature.as_mut() else {
            return;
        };
        if container.is_background() {
            feature.backgrounds.push(container);
        } else {
            feature.scenarios.push(container);
        }
    }
}

fn push_description(description: &mut String, text: &str) {
    if !description.is_empty() {
        description.push('\n');
    }
    description.push_str(text);
}

fn misplaced(line: usize, hit: &KeywordMatch<'_>, context: &'static str) -> ParseError {
    parse_error(
        line,
        ParseErrorKind::UnknownKeywordAtContext {
            keyword: hit.keyword.to_string(),
            context,
        },
    )
}

fn unexpected(line: usize, found: &'static str, context: &'static str) -> ParseError {
    parse_error(line, ParseErrorKind::UnexpectedContent { found, context })
}
