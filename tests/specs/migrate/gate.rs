// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The migration runs at most once per legacy store.

use crate::prelude::*;
use serde_json::json;
use wm_migrate::MigrationOutcome;
use wm_storage::{KeyValueStore, WorkspaceStore};

fn seed_minimal(state: &State) {
    state.seed(&[
        (VERSION_KEY, json!("2.5.0")),
        ("workspace", json!({ "w": { "uid": "w", "collections": ["c"] } })),
        ("collection", json!({ "c": { "uid": "c" } })),
    ]);
}

#[test]
fn second_run_is_skipped() {
    let state = State::new();
    seed_minimal(&state);

    assert!(matches!(state.migrate(), MigrationOutcome::Migrated { .. }));
    assert_eq!(state.flag().as_deref(), Some("true"));
    assert_eq!(state.migrate(), MigrationOutcome::Skipped);
}

#[test]
fn flag_survives_reopening_and_destination_wipe() {
    let state = State::new();
    seed_minimal(&state);
    state.migrate();

    state.destination().clear().unwrap();
    assert_eq!(state.destination().count().unwrap(), 0);
    assert_eq!(state.migrate(), MigrationOutcome::Skipped);
}

#[test]
fn wiped_destination_without_flag_migrates_again() {
    let state = State::new();
    seed_minimal(&state);
    state.migrate();

    state.destination().clear().unwrap();
    state.legacy().remove(FLAG_KEY).unwrap();

    assert_eq!(state.migrate(), MigrationOutcome::Migrated { workspaces: 1, documents: 1 });
    assert_eq!(state.workspace("w").name, "Workspace");
}

#[test]
fn populated_destination_is_left_alone() {
    let state = State::new();
    seed_minimal(&state);
    state.migrate();
    state.legacy().remove(FLAG_KEY).unwrap();

    assert_eq!(state.migrate(), MigrationOutcome::Skipped);
    assert!(state.flag().is_none());
}

#[test]
fn no_legacy_data_means_no_migration() {
    let state = State::new();
    state.seed(&[("colorMode", json!("light"))]);
    assert_eq!(state.migrate(), MigrationOutcome::Skipped);
    assert_eq!(state.destination().count().unwrap(), 0);
}
