//! Shared helpers for the parser integration tests.

use std::path::PathBuf;

use zuchini_parser::{Feature, ParseError, Parser};

/// Path of a fixture under `tests/features`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("features")
        .join(name)
}

/// Read a fixture document.
#[expect(clippy::expect_used, reason = "fixtures are part of the test suite")]
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

/// Parse a fixture with `parser`, using its file name as the URI.
pub fn parse_fixture_with(parser: &Parser, name: &str) -> Result<Feature, ParseError> {
    parser.parse(name, &read_fixture(name))
}

/// Parse a fixture with the default configuration.
#[expect(clippy::expect_used, reason = "fixtures are expected to parse")]
pub fn parse_fixture(name: &str) -> Feature {
    parse_fixture_with(&Parser::default(), name).expect("fixture should parse")
}
