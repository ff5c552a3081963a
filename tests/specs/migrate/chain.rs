// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data written before the first versioned schema runs the whole chain.

use crate::prelude::*;
use serde_json::json;
use wm_migrate::MigrationOutcome;

/// Records as the earliest releases stored them: no version marker,
/// folders instead of tags and the document nested under `spec`.
fn seed_unversioned(state: &State) {
    state.seed(&[
        (
            "workspace",
            json!({
                "ws": {
                    "uid": "ws",
                    "name": "Legacy",
                    "collectionUids": ["col"],
                    "environmentUids": ["env"],
                    "cookieUids": [],
                    "themeId": "fastify",
                },
            }),
        ),
        (
            "collection",
            json!({
                "col": {
                    "uid": "col",
                    "spec": {
                        "openapi": "3.0.0",
                        "info": { "title": "Animals", "version": "0.9" },
                        "serverUids": ["srv"],
                    },
                    "childUids": ["folder", "req"],
                },
            }),
        ),
        (
            "folder",
            json!({ "folder": { "uid": "folder", "name": "Dogs", "childUids": ["req-dog"] } }),
        ),
        (
            "request",
            json!({
                "req": { "uid": "req", "method": "GET", "path": "/animals", "childUids": ["ex"] },
                "req-dog": { "uid": "req-dog", "method": "DELETE", "path": "/dogs/{id}" },
            }),
        ),
        (
            "requestExample",
            json!({
                "ex": {
                    "uid": "ex",
                    "name": "All",
                    "requestUid": "req",
                    "parameters": { "query": [{ "key": "kind", "value": "cat", "enabled": true }], "headers": [] },
                },
            }),
        ),
        ("server", json!({ "srv": { "uid": "srv", "url": "https://zoo.example.com" } })),
        ("environment", json!({ "env": { "uid": "env", "raw": "{\"region\":\"eu\"}" } })),
    ]);
}

#[test]
fn unversioned_data_migrates_through_every_schema() {
    let state = State::new();
    seed_unversioned(&state);

    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 1 });

    let workspace = state.workspace("ws");
    assert_eq!(workspace.name, "Legacy");
    let document = &workspace.documents["animals"];

    assert_eq!(document["openapi"], "3.0.0");
    assert_eq!(document["info"], json!({ "title": "Animals", "version": "0.9" }));
    assert_eq!(document["servers"], json!([{ "url": "https://zoo.example.com" }]));
    assert_eq!(document["x-scalar-selected-server"], "https://zoo.example.com");
    assert_eq!(document["tags"], json!([{ "name": "Dogs" }]));

    // The inserted wildcard Accept header never reaches the document.
    assert_eq!(
        document["paths"]["/animals"]["get"]["parameters"],
        json!([{
            "name": "kind",
            "in": "query",
            "examples": { "All": { "value": "cat", "x-disabled": false } },
        }])
    );
    assert!(document["paths"]["/dogs/{id}"]["delete"].is_object());

    assert_eq!(workspace.meta["x-scalar-theme"], "default");
    assert_eq!(
        workspace.meta["x-scalar-environments"]["default"]["variables"],
        json!([{ "name": "region", "value": "eu" }])
    );
    assert_eq!(
        workspace.extensions["x-scalar-selected-http-client"],
        json!({ "targetKey": "shell", "clientKey": "curl" })
    );
}

#[test]
fn version_marker_skips_older_migrations() {
    let state = State::new();
    // Already at 2.6.0: records are read exactly as stored.
    state.seed(&[
        (VERSION_KEY, json!("\"2.6.0\"")),
        ("collection", json!([{ "uid": "c", "info": { "title": "Stored", "version": "1" } }])),
    ]);

    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 1 });
    let workspace = state.workspace("default");
    assert_eq!(workspace.name, "Default Workspace");
    assert!(workspace.documents.contains_key("stored"));
}
