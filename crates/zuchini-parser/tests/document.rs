//! End-to-end parsing of feature documents.

mod common;

use common::parse_fixture;
use rstest::rstest;
use zuchini_parser::{
    ContainerKind, DocFence, Node, ParseErrorKind, StepKeyword, parse_feature,
};

#[test]
fn login_steps_keep_their_physical_lines() {
    let feature = parse_fixture("login.feature");
    assert_eq!(feature.uri(), "login.feature");
    assert_eq!(feature.name(), "Login");
    let [scenario] = feature.scenarios() else {
        panic!("expected one scenario");
    };
    assert_eq!(scenario.name(), "Successful login");
    let steps: Vec<_> = scenario
        .steps()
        .iter()
        .map(|step| (step.line(), step.kind()))
        .collect();
    assert_eq!(
        steps,
        vec![
            (3, StepKeyword::Given),
            (4, StepKeyword::When),
            (5, StepKeyword::Then),
        ]
    );
}

#[test]
fn keyword_and_name_reconstruct_step_lines() {
    let text = common::read_fixture("annotated.feature");
    let feature = parse_feature("annotated.feature", text.as_str())
        .unwrap_or_else(|err| panic!("{}", err.located("annotated.feature")));
    let source: Vec<&str> = text.lines().collect();
    for step in feature.containers().flat_map(|c| c.steps()) {
        let original = source
            .get(step.line() - 1)
            .map(|line| line.trim())
            .unwrap_or_default();
        assert_eq!(step.text(), original, "step at line {}", step.line());
    }
}

#[test]
fn annotated_feature_attaches_metadata() {
    let feature = parse_fixture("annotated.feature");
    assert_eq!(feature.line(), 3);
    assert_eq!(feature.comments(), ["language: en"]);
    assert_eq!(feature.tags(), ["accounts"]);
    assert_eq!(
        feature.description(),
        "Registered users manage their own accounts.\nAdministrators manage everybody else's."
    );
    assert_eq!(feature.trailing_comments(), ["trailing remark"]);

    let Some(background) = feature.background() else {
        panic!("expected a background");
    };
    assert_eq!(background.line(), 7);
    assert!(background.comments().is_empty());

    let [rename, close] = feature.scenarios() else {
        panic!("expected two scenarios");
    };
    assert_eq!(rename.line(), 13);
    assert_eq!(rename.comments(), ["covers the happy path"]);
    assert_eq!(rename.tags(), ["smoke", "fast"]);
    assert!(matches!(close.kind(), ContainerKind::Scenario));
    assert_eq!(close.keyword(), "Example");
    assert!(close.tags().is_empty());
}

#[test]
fn annotated_feature_collects_tables_and_doc_strings() {
    let feature = parse_fixture("annotated.feature");
    let steps = feature
        .scenarios()
        .first()
        .map(|s| s.steps())
        .unwrap_or_default();

    let Some(given) = steps.first() else {
        panic!("expected steps");
    };
    assert_eq!(
        given.table(),
        vec![
            vec!["field", "value"],
            vec!["name", "ann"],
            vec!["email", "a|b"],
        ]
    );
    let rows: Vec<_> = given.rows().iter().map(Node::line).collect();
    assert_eq!(rows, vec![15, 16, 18]);
    assert_eq!(
        given.rows().get(2).map(Node::comments),
        Some(&["middle comment".to_string()][..])
    );

    let Some(doc) = steps.get(1).and_then(|step| step.doc_string()) else {
        panic!("expected a doc string");
    };
    assert_eq!(doc.line(), 20);
    assert_eq!(doc.fence(), DocFence::Quotes);
    assert_eq!(doc.content_type(), Some("text"));
    assert_eq!(
        doc.content(),
        "Dear anne,\n  your account was renamed.\n\"\"\""
    );

    let star = steps.get(4);
    assert_eq!(star.map(|s| s.keyword()), Some("*"));
    assert_eq!(star.map(|s| s.kind()), Some(StepKeyword::And));
    assert_eq!(
        feature.scenarios().first().map(|s| s.resolved_step_kinds()),
        Some(vec![
            StepKeyword::Given,
            StepKeyword::When,
            StepKeyword::Then,
            StepKeyword::Then,
            StepKeyword::Then,
        ])
    );
}

#[test]
fn two_column_table_is_parsed_into_rows() {
    let feature = parse_feature(
        "table.feature",
        "Feature: T\n  Scenario: S\n    Given values\n      | a | b |\n      | 1 | 2 |\n",
    )
    .unwrap_or_else(|err| panic!("{err}"));
    let table = feature
        .scenarios()
        .first()
        .and_then(|s| s.steps().first())
        .map(|step| step.table());
    assert_eq!(table, Some(vec![vec!["a".to_string(), "b".to_string()], vec!["1".to_string(), "2".to_string()]]));
}

#[test]
fn table_width_mismatch_names_both_lines() {
    let text = "Feature: T\n  Scenario: S\n    Given values\n      | a | b |\n      | 1 | 2 | 3 |\n";
    let err = match parse_feature("table.feature", text) {
        Ok(_) => panic!("expected a width error"),
        Err(err) => err,
    };
    assert_eq!(err.line(), 5);
    assert_eq!(
        err.kind(),
        &ParseErrorKind::InconsistentTableWidth {
            expected: 2,
            found: 3,
            first_line: 4,
        }
    );
    assert_eq!(
        err.located("table.feature").to_string(),
        "table.feature:5: table row has 3 cells but the row at line 4 has 2"
    );
}

#[test]
fn comment_and_blank_line_attach_to_following_scenario() {
    let feature = parse_feature(
        "c.feature",
        "Feature: C\n\n# explains the scenario\n\nScenario: S\n",
    )
    .unwrap_or_else(|err| panic!("{err}"));
    assert!(feature.comments().is_empty());
    assert_eq!(
        feature.scenarios().first().map(Node::comments),
        Some(&["explains the scenario".to_string()][..])
    );
}

#[rstest]
#[case::unterminated("Feature: F\n  Scenario: S\n    Given x\n      ```\n", 4)]
#[case::no_feature("Scenario: S\n", 1)]
#[case::malformed_row("Feature: F\n  Scenario: S\n    Given x\n      | a | b\n", 4)]
fn errors_carry_line_numbers(#[case] text: &str, #[case] line: usize) {
    let err = match parse_feature("bad.feature", text) {
        Ok(_) => panic!("expected an error"),
        Err(err) => err,
    };
    assert_eq!(err.line(), line);
    assert!(err.to_string().starts_with(&format!("line {line}: ")));
}
