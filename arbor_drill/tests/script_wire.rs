// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_drill::{Operation, Script, Step};
use serde_json::json;

#[test]
fn script_is_a_plain_step_array() {
    let script = Script::new(vec![Step::insert(5), Step::in_order()]);
    assert_eq!(
        serde_json::to_value(&script).unwrap(),
        json!([
            { "operation": "insert", "value": 5 },
            { "operation": "inorder" }
        ])
    );
}

#[test]
fn custom_script_loads() {
    let script: Script = serde_json::from_value(json!([
        { "operation": "insert", "value": 8 },
        { "operation": "search", "value": 8 },
        { "operation": "delete", "value": 8 }
    ]))
    .unwrap();
    assert_eq!(script.len(), 3);
    assert_eq!(script.get(1).map(|s| s.operation), Some(Operation::Search));
}

#[test]
fn unknown_operation_is_rejected() {
    let parsed = serde_json::from_value::<Script>(json!([{ "operation": "rotate" }]));
    assert!(parsed.is_err());
}

#[test]
fn keyed_steps_need_a_value() {
    for op in ["insert", "search", "delete"] {
        let err = serde_json::from_value::<Script>(json!([{ "operation": op }])).unwrap_err();
        assert!(err.to_string().contains("needs a key"), "{op}: {err}");
    }
    let script: Script = serde_json::from_value(json!([{ "operation": "inorder" }])).unwrap();
    assert_eq!(script.get(0), Some(&Step::in_order()));
}
