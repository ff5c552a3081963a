// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latest-schema legacy data written out as workspaces.

use crate::prelude::*;
use serde_json::json;
use wm_migrate::MigrationOutcome;

fn pet_store(state: &State) {
    state.seed(&[
        (VERSION_KEY, json!("2.5.0")),
        ("colorMode", json!("dark")),
        (
            "workspace",
            json!({
                "w1": {
                    "uid": "w1",
                    "name": "Pets Team",
                    "collections": ["c1", "ghost"],
                    "environments": { "token": "abc" },
                    "themeId": "moon",
                    "selectedHttpClient": { "targetKey": "node", "clientKey": "fetch" },
                },
            }),
        ),
        (
            "collection",
            json!({
                "c1": {
                    "uid": "c1",
                    "info": { "title": "Pet Store", "version": "1.0.0" },
                    "requests": ["r1", "r2"],
                    "servers": ["s1"],
                    "selectedServerUid": "s1",
                    "securitySchemes": ["bearer"],
                    "children": ["t1"],
                },
            }),
        ),
        (
            "request",
            json!({
                "r1": { "uid": "r1", "method": "get", "path": "/pets", "examples": ["e1"], "tags": ["pets"] },
                "r2": { "uid": "r2", "method": "post", "path": "https://upload.example.com/pets/{id}/photo" },
            }),
        ),
        (
            "requestExample",
            json!({
                "e1": {
                    "uid": "e1",
                    "name": "List pets",
                    "requestUid": "r1",
                    "parameters": {
                        "query": [{ "key": "limit", "value": "10", "enabled": true }],
                        "headers": [{ "key": "Accept", "value": "*/*", "enabled": true }],
                    },
                },
            }),
        ),
        ("server", json!({ "s1": { "uid": "s1", "url": "https://petstore.example.com/v1" } })),
        ("tag", json!({ "t1": { "uid": "t1", "name": "pets", "children": ["r1"] } })),
        (
            "securityScheme",
            json!({
                "bearer": {
                    "uid": "bearer",
                    "nameKey": "bearerAuth",
                    "type": "http",
                    "scheme": "bearer",
                    "token": "s3cret",
                },
            }),
        ),
    ]);
}

#[test]
fn pet_store_becomes_one_document() {
    let state = State::new();
    pet_store(&state);

    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 1 });

    let workspace = state.workspace("w1");
    assert_eq!(workspace.name, "Pets Team");
    let document = &workspace.documents["pet-store"];

    similar_asserts::assert_eq!(
        document["paths"]["/pets"]["get"].clone(),
        json!({
            "tags": ["pets"],
            "parameters": [{
                "name": "limit",
                "in": "query",
                "examples": { "List pets": { "value": "10", "x-disabled": false } },
            }],
        })
    );
    assert!(document["paths"]["/pets/{id}/photo"]["post"].is_object());
    assert_eq!(
        document["servers"],
        json!([{ "url": "https://petstore.example.com/v1" }, { "url": "https://upload.example.com" }])
    );
    assert_eq!(document["x-scalar-selected-server"], "https://petstore.example.com/v1");
    assert_eq!(document["tags"], json!([{ "name": "pets" }]));
    assert_eq!(
        document["components"]["securitySchemes"]["bearerAuth"],
        json!({ "type": "http", "scheme": "bearer" })
    );
}

#[test]
fn secrets_and_meta_are_written_alongside() {
    let state = State::new();
    pet_store(&state);
    state.migrate();

    let workspace = state.workspace("w1");
    let secret = serde_json::to_value(&workspace.auth["pet-store"].secrets["bearerAuth"]).unwrap();
    assert_eq!(
        secret,
        json!({
            "type": "http",
            "x-scalar-secret-username": "",
            "x-scalar-secret-password": "",
            "x-scalar-secret-token": "s3cret",
        })
    );

    assert_eq!(workspace.meta["x-scalar-active-document"], "pet-store");
    assert_eq!(workspace.meta["x-scalar-theme"], "moon");
    assert_eq!(workspace.meta["x-scalar-color-mode"], "dark");
    assert_eq!(
        workspace.meta["x-scalar-environments"]["default"]["variables"],
        json!([{ "name": "token", "value": "abc" }])
    );
    assert_eq!(
        workspace.extensions["x-scalar-selected-http-client"],
        json!({ "targetKey": "node", "clientKey": "fetch" })
    );
}

#[test]
fn workspace_files_are_complete_json() {
    let state = State::new();
    pet_store(&state);
    state.migrate();

    let raw = std::fs::read_to_string(state.paths.workspaces_path.join("w1.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "w1");
    assert!(value["documents"]["pet-store"]["openapi"].is_string());
    assert!(!state.paths.workspaces_path.join("w1.tmp").exists());
}
