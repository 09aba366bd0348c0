//! JSON view of the model behind the `serde` feature.

mod common;

use common::parse_fixture;
use serde_json::{Value, json};

#[test]
fn serializes_login_feature() {
    let feature = parse_fixture("login.feature");
    let value = serde_json::to_value(&feature).unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(value.pointer("/meta/uri"), Some(&json!("login.feature")));
    assert_eq!(value.pointer("/name"), Some(&json!("Login")));
    assert_eq!(
        value.pointer("/scenarios/0/kind"),
        Some(&json!("Scenario"))
    );
    let steps = value
        .pointer("/scenarios/0/steps")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let summary: Vec<_> = steps
        .iter()
        .map(|step| (step.pointer("/meta/line").cloned(), step.pointer("/kind").cloned()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some(json!(3)), Some(json!("Given"))),
            (Some(json!(4)), Some(json!("When"))),
            (Some(json!(5)), Some(json!("Then"))),
        ]
    );
}

#[test]
fn serializes_outline_examples() {
    let feature = parse_fixture("outline.feature");
    let value = serde_json::to_value(&feature).unwrap_or_else(|err| panic!("{err}"));
    let header = value.pointer("/scenarios/0/kind/Outline/examples/0/rows/0/cells");
    assert_eq!(header, Some(&json!(["start", "eat", "left"])));
}
