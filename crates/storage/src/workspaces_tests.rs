// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use tempfile::tempdir;

fn workspace(id: &str, name: &str) -> MigratedWorkspace {
    let mut entry = WorkspaceEntry {
        name: name.to_string(),
        ..WorkspaceEntry::default()
    };
    entry
        .documents
        .insert("api".to_string(), json!({ "openapi": "3.1.0" }));
    MigratedWorkspace {
        id: id.to_string(),
        entry,
    }
}

#[test]
fn memory_store_put_get_clear() {
    let store = MemoryWorkspaceStore::new();
    assert_eq!(store.count().unwrap(), 0);

    store.put(&workspace("ws-1", "One")).unwrap();
    store.put(&workspace("ws-2", "Two")).unwrap();
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.ids(), vec!["ws-1", "ws-2"]);
    assert_eq!(store.get("ws-2").unwrap().unwrap().name, "Two");

    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn dir_store_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path().join("workspaces"));
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.get("ws-1").unwrap().is_none());
}

#[test]
fn dir_store_round_trips_entries() {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path().join("workspaces"));

    let ws = workspace("ws-1", "One");
    store.put(&ws).unwrap();

    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get("ws-1").unwrap(), Some(ws.entry));
    assert!(!store.dir().join("ws-1.tmp").exists());
}

#[test]
fn dir_store_encodes_ids_without_confusing_them() {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path());

    store.put(&workspace("a/b", "Slash")).unwrap();
    assert!(dir.path().join("a_2Fb.json").exists());
    assert_eq!(store.get("a/b").unwrap().unwrap().name, "Slash");
    assert!(store.get("a_b").unwrap().is_none());
}

#[yare::parameterized(
    dot_and_underscore = { "team.a", "team_a" },
    escape_lookalike   = { "a_2Fb", "a/b" },
    unicode            = { "café", "cafe" },
)]
fn dir_store_keeps_similar_ids_apart(first: &str, second: &str) {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path());
    store.put(&workspace(first, "First")).unwrap();
    store.put(&workspace(second, "Second")).unwrap();

    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.get(first).unwrap().unwrap().name, "First");
    assert_eq!(store.get(second).unwrap().unwrap().name, "Second");
}

#[test]
fn remove_deletes_one_workspace() {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path());
    store.put(&workspace("ws-1", "One")).unwrap();
    store.put(&workspace("ws-2", "Two")).unwrap();

    store.remove("ws-1").unwrap();
    store.remove("never-written").unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert!(store.get("ws-1").unwrap().is_none());

    let memory = MemoryWorkspaceStore::new();
    memory.put(&workspace("ws-1", "One")).unwrap();
    memory.remove("ws-1").unwrap();
    assert_eq!(memory.count().unwrap(), 0);
}

#[test]
fn dir_store_clear_removes_workspace_files() {
    let dir = tempdir().unwrap();
    let store = DirWorkspaceStore::new(dir.path());
    store.put(&workspace("ws-1", "One")).unwrap();
    store.put(&workspace("ws-2", "Two")).unwrap();

    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}
