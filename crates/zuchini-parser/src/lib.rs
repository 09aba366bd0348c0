//! Line-addressable parser for Gherkin feature documents.
//!
//! The crate turns the text of one `.feature` document into a typed tree
//! rooted at [`Feature`]. Every node records the document URI and the 1-based
//! line it starts on, together with the comments and tags written above it.
//! Keywords are looked up in an injectable [`KeywordTable`], so a localised
//! table can replace the English default without touching the grammar.
//!
//! Parsing is a pure function of its input: [`parse_feature`] (or a
//! configured [`Parser`]) either returns the fully built tree or the first
//! [`ParseError`], located by line.
//!
//! ```
//! use zuchini_parser::{Node, parse_feature};
//!
//! let src = "\
//! Feature: Login
//!   Scenario: Successful login
//!     Given a registered user
//!     When they submit valid credentials
//!     Then they see the dashboard
//! ";
//! let feature = parse_feature("login.feature", src).unwrap();
//! let steps = feature.scenarios()[0].steps();
//! assert_eq!(steps.iter().map(Node::line).collect::<Vec<_>>(), [3, 4, 5]);
//! assert_eq!(steps[0].text(), "Given a registered user");
//! ```

mod builder;
mod config;
mod docstring;
mod error;
mod keyword;
mod model;
mod outline;
mod parser;
mod table;
mod tokenizer;
pub mod trim;

pub use builder::DocumentBuilder;
pub use config::{ParserConfig, TrailingComments};
pub use docstring::{DocFence, DocMarker};
pub use error::{Located, ParseError, ParseErrorKind};
pub use keyword::{KeywordMatch, KeywordRole, KeywordTable, StepKeyword};
pub use model::{
    ContainerKind, DocString, Examples, Feature, Node, NodeMeta, Row, Step, StepContainer,
};
pub use outline::{ExpandedScenario, PlaceholderError};
pub use parser::{Parser, parse_feature};
pub use tokenizer::{LineToken, TokenKind, Tokenizer};
