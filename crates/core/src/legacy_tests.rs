// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::record::RecordSet;
use serde_json::json;

fn arrays(records: Vec<(EntityKind, serde_json::Value)>) -> RecordArrays {
    let mut set = RecordSet::new();
    for (kind, record) in records {
        let uid = record["uid"].as_str().unwrap().to_string();
        set.insert(kind, uid, record);
    }
    set.into_arrays()
}

#[test]
fn minimal_records_take_defaults() {
    let data = LegacyData::from_arrays(arrays(vec![
        (EntityKind::Workspace, json!({ "uid": "ws" })),
        (EntityKind::Collection, json!({ "uid": "col" })),
        (EntityKind::Request, json!({ "uid": "req" })),
    ]))
    .unwrap();

    let workspace = &data.workspaces[0];
    assert_eq!(workspace.name, "");
    assert!(workspace.collections.is_empty());
    assert!(workspace.environments.is_empty());

    let collection = &data.collections[0];
    assert!(collection.info.is_none());
    assert!(!collection.use_collection_security);
    assert_eq!(collection.title(), None);

    let request = &data.requests[0];
    assert_eq!(request.method, "get");
    assert!(request.parameters.is_empty());
    assert!(!data.is_empty());
}

#[test]
fn nulls_are_treated_as_defaults() {
    let data = LegacyData::from_arrays(arrays(vec![(
        EntityKind::Collection,
        json!({ "uid": "col", "servers": null, "children": null, "info": { "title": "" } }),
    )]))
    .unwrap();
    assert!(data.collections[0].servers.is_empty());
    assert_eq!(data.collections[0].title(), None);
}

#[test]
fn method_is_lowercased() {
    let data = LegacyData::from_arrays(arrays(vec![(
        EntityKind::Request,
        json!({ "uid": "req", "method": "POST" }),
    )]))
    .unwrap();
    assert_eq!(data.requests[0].method, "post");
}

#[test]
fn example_parameters_accept_singular_bucket_names() {
    let data = LegacyData::from_arrays(arrays(vec![(
        EntityKind::RequestExample,
        json!({
            "uid": "ex",
            "name": "Example",
            "parameters": {
                "header": [{ "key": "X-Id", "value": 5 }],
                "cookies": [{ "key": "session", "value": "abc", "enabled": false }],
            },
            "body": { "activeBody": "formData", "formData": { "encoding": "urlencoded", "value": [] } },
        }),
    )]))
    .unwrap();

    let example = &data.request_examples[0];
    assert_eq!(
        example.parameters.headers,
        vec![ExampleParameter {
            key: "X-Id".into(),
            value: "5".into(),
            enabled: true,
        }]
    );
    assert!(!example.parameters.cookies[0].enabled);
    assert_eq!(example.body.active_body, ActiveBody::FormData);
    assert_eq!(
        example.body.form_data.as_ref().map(|f| f.encoding),
        Some(FormEncoding::UrlEncoded)
    );
}

#[test]
fn security_requirements_accept_single_and_combined() {
    let data = LegacyData::from_arrays(arrays(vec![(
        EntityKind::Request,
        json!({ "uid": "req", "selectedSecuritySchemeUids": ["a", ["b", "c"]] }),
    )]))
    .unwrap();
    assert_eq!(
        data.requests[0].selected_security_scheme_uids,
        vec![
            SecurityRequirementUids::Single("a".into()),
            SecurityRequirementUids::All(vec!["b".into(), "c".into()]),
        ]
    );
}

#[test]
fn security_scheme_kinds() {
    let data = LegacyData::from_arrays(arrays(vec![
        (
            EntityKind::SecurityScheme,
            json!({ "uid": "k", "type": "apiKey", "nameKey": "key", "in": "header", "value": "v" }),
        ),
        (
            EntityKind::SecurityScheme,
            json!({ "uid": "h", "type": "http", "scheme": "Bearer", "token": "t" }),
        ),
        (
            EntityKind::SecurityScheme,
            json!({
                "uid": "o",
                "type": "oauth2",
                "flows": { "implicit": { "token": "tok", "x-scalar-client-id": "cid" } },
            }),
        ),
    ]))
    .unwrap();

    let schemes = &data.security_schemes;
    assert_eq!(schemes[0].name(), "key");
    assert_eq!(schemes[0].kind(), SchemeKind::ApiKey { value: "v".into() });
    assert!(!schemes[0].fields.contains_key("uid"));
    assert_eq!(schemes[1].name(), "h");
    assert_eq!(
        schemes[1].kind(),
        SchemeKind::Http {
            scheme: "bearer".into(),
            username: String::new(),
            password: String::new(),
            token: "t".into(),
        }
    );
    let SchemeKind::OAuth2 { flows } = schemes[2].kind() else {
        panic!("expected oauth2");
    };
    assert_eq!(flows["implicit"].token, "tok");
    assert_eq!(flows["implicit"].client_id, "cid");
}

#[test]
fn request_body_is_a_schema_graph() {
    let data = LegacyData::from_arrays(arrays(vec![(
        EntityKind::Request,
        json!({ "uid": "req", "requestBody": { "content": {} } }),
    )]))
    .unwrap();
    let body = data.requests[0].request_body.as_ref().unwrap();
    assert_eq!(body.to_value_acyclic(), Some(json!({ "content": {} })));
}

#[test]
fn invalid_record_reports_kind_and_uid() {
    let err = LegacyData::from_arrays(arrays(vec![(
        EntityKind::Request,
        json!({ "uid": "req-9", "parameters": [{ "name": "x", "in": "body" }] }),
    )]))
    .unwrap_err();
    let LegacyError::Invalid { kind, uid, .. } = &err;
    assert_eq!(*kind, EntityKind::Request);
    assert_eq!(uid, "req-9");
    assert!(err.to_string().starts_with("invalid request record req-9"));
}
