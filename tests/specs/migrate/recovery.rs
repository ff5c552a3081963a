// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unreadable input degrades instead of failing, and failures can be retried.

use crate::prelude::*;
use serde_json::json;
use wm_migrate::{MigrateError, MigrationGate, MigrationOutcome, StorageKeys};
use wm_storage::{KeyValueStore, WorkspaceStore};

#[test]
fn malformed_tables_are_treated_as_empty() {
    let state = State::new();
    state.seed(&[
        (VERSION_KEY, json!("2.5.0")),
        ("workspace", json!({ "w": { "uid": "w", "collections": ["c"] } })),
        ("collection", json!({ "c": { "uid": "c", "requests": ["r"] } })),
        ("request", json!("{not json")),
        ("tag", json!(42)),
    ]);

    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 1 });
    let document = &state.workspace("w").documents["c"];
    assert_eq!(document["paths"], json!({}));
}

#[test]
fn failed_migration_is_retried_from_scratch() {
    let state = State::new();
    state.seed(&[
        (VERSION_KEY, json!("2.5.0")),
        ("workspace", json!({ "w": { "uid": "w", "collections": "not-a-list" } })),
    ]);

    let err = state.try_migrate().unwrap_err();
    assert!(matches!(err, MigrateError::Legacy(_)));
    assert!(state.flag().is_none());
    assert_eq!(state.destination().count().unwrap(), 0);

    state.seed(&[("workspace", json!({ "w": { "uid": "w", "name": "Fixed" } }))]);
    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 0 });
    assert_eq!(state.workspace("w").name, "Fixed");
}

#[test]
fn corrupt_legacy_file_is_moved_aside() {
    let state = State::new();
    std::fs::create_dir_all(&state.paths.state_dir).unwrap();
    std::fs::write(&state.paths.legacy_path, "{ truncated").unwrap();

    assert_eq!(state.migrate(), MigrationOutcome::Skipped);
    assert!(state.paths.state_dir.join("legacy.bak").exists());
}

#[test]
fn legacy_cleanup_is_explicit() {
    let state = State::new();
    state.seed(&[
        (VERSION_KEY, json!("2.5.0")),
        ("workspace", json!({ "w": { "uid": "w" } })),
        ("colorMode", json!("dark")),
    ]);
    state.migrate();
    assert!(state.legacy().get("workspace").unwrap().is_some());

    let legacy = state.legacy();
    let destination = state.destination();
    let keys = StorageKeys::default();
    MigrationGate::new(&legacy, &destination, &keys).clear_legacy_data().unwrap();

    let reopened = state.legacy();
    assert!(reopened.get("workspace").unwrap().is_none());
    assert!(reopened.get(VERSION_KEY).unwrap().is_none());
    assert_eq!(reopened.get(FLAG_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(reopened.get("colorMode").unwrap().as_deref(), Some("dark"));
}
