// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn declared(value: Value) -> Vec<RequestParameter> {
    serde_json::from_value(value).unwrap()
}

fn example(key: &str, value: &str, enabled: bool) -> ExampleParameter {
    ExampleParameter {
        key: key.into(),
        value: value.into(),
        enabled,
    }
}

#[test]
fn declared_path_parameters_are_required() {
    let params = Parameters::declared(&declared(json!([
        { "name": "id", "in": "path" },
        { "name": "limit", "in": "query", "schema": { "type": "integer" }, "description": "Page size" },
        { "name": "X-Trace", "in": "header", "required": true },
    ])));
    assert_eq!(
        params.into_value(),
        json!([
            { "name": "id", "in": "path", "required": true },
            {
                "name": "limit",
                "in": "query",
                "required": false,
                "schema": { "type": "integer" },
                "description": "Page size",
            },
            { "name": "X-Trace", "in": "header", "required": true },
        ])
    );
}

#[test]
fn example_values_merge_into_declared_parameter() {
    let mut params = Parameters::declared(&declared(json!([{ "name": "limit", "in": "query" }])));
    params.add_example(ParameterLocation::Query, &example("limit", "10", true), "First");
    params.add_example(ParameterLocation::Query, &example("limit", "20", false), "Second");

    assert_eq!(
        params.into_value(),
        json!([{
            "name": "limit",
            "in": "query",
            "required": false,
            "examples": {
                "First": { "value": "10", "x-disabled": false },
                "Second": { "value": "20", "x-disabled": true },
            },
        }])
    );
}

#[test]
fn undeclared_parameters_are_created() {
    let mut params = Parameters::default();
    assert!(params.is_empty());
    params.add_example(ParameterLocation::Query, &example("limit", "10", true), "Example");
    params.add_example(ParameterLocation::Path, &example("id", "7", true), "Example");

    assert_eq!(
        params.into_value(),
        json!([
            { "name": "limit", "in": "query", "examples": { "Example": { "value": "10", "x-disabled": false } } },
            {
                "name": "id",
                "in": "path",
                "required": true,
                "examples": { "Example": { "value": "7", "x-disabled": false } },
            },
        ])
    );
}

#[test]
fn header_names_match_case_insensitively() {
    let mut params = Parameters::declared(&declared(json!([{ "name": "X-Api-Version", "in": "header" }])));
    params.add_example(ParameterLocation::Header, &example("x-api-version", "2", true), "Example");
    params.add_example(ParameterLocation::Query, &example("X-Api-Version", "3", true), "Example");

    let value = params.into_value();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["examples"]["Example"]["value"], "2");
    assert_eq!(value[1]["in"], "query");
}
