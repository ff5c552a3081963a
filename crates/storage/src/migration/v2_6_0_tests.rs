// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn active_environment_is_renamed() {
    let mut data = RecordSet::new();
    data.insert(
        EntityKind::Collection,
        "col",
        json!({ "uid": "col", "x-scalar-environment": "staging" }),
    );

    let data = migrate(data).unwrap();
    let col = &data.records(EntityKind::Collection)["col"];
    assert_eq!(col["x-scalar-active-environment"], "staging");
    assert!(col.get("x-scalar-environment").is_none());
}

#[test]
fn environment_variables_collapse_to_strings() {
    let mut data = RecordSet::new();
    data.insert(
        EntityKind::Collection,
        "col",
        json!({
            "uid": "col",
            "x-scalar-environments": {
                "dev": {
                    "color": "#000",
                    "variables": {
                        "baseUrl": { "default": "http://localhost", "description": "local" },
                        "token": "abc",
                        "port": { "default": 3000 },
                    },
                },
            },
        }),
    );

    let data = migrate(data).unwrap();
    assert_eq!(
        data.records(EntityKind::Collection)["col"]["x-scalar-environments"]["dev"],
        json!({
            "color": "#000",
            "variables": { "baseUrl": "http://localhost", "token": "abc", "port": "3000" },
        })
    );
}

#[test]
fn empty_tables_pass_through() {
    let data = migrate(RecordSet::new()).unwrap();
    assert!(data.is_empty());
}
