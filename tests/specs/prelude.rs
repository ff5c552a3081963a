// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the end-to-end migration tests.
//!
//! Provides a temporary state directory with the legacy key/value file and
//! the destination workspace directory laid out as in production.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use serde_json::Value;
use tempfile::TempDir;
use wm_core::WorkspaceEntry;
use wm_migrate::{migrate, MigrateError, MigrationConfig, MigrationOutcome, StatePaths};
use wm_storage::{DirWorkspaceStore, FileStore, KeyValueStore, WorkspaceStore};

pub const VERSION_KEY: &str = "scalar_data_version";
pub const FLAG_KEY: &str = "scalar_indexdb_migration_complete";

/// A fresh state directory.
pub struct State {
    _dir: TempDir,
    pub paths: StatePaths,
}

impl State {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = StatePaths::under(dir.path());
        Self { _dir: dir, paths }
    }

    /// Open the legacy store. Each call re-reads the file.
    pub fn legacy(&self) -> FileStore {
        FileStore::open(&self.paths.legacy_path).unwrap()
    }

    pub fn destination(&self) -> DirWorkspaceStore {
        DirWorkspaceStore::new(&self.paths.workspaces_path)
    }

    /// Write legacy keys. Strings are stored as-is, anything else as JSON.
    pub fn seed(&self, entries: &[(&str, Value)]) -> &Self {
        let legacy = self.legacy();
        for (key, value) in entries {
            let raw = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            legacy.set(key, &raw).unwrap();
        }
        self
    }

    pub fn try_migrate(&self) -> Result<MigrationOutcome, MigrateError> {
        migrate(&self.legacy(), &self.destination(), &MigrationConfig::default())
    }

    pub fn migrate(&self) -> MigrationOutcome {
        self.try_migrate().unwrap()
    }

    pub fn workspace(&self, id: &str) -> WorkspaceEntry {
        self.destination()
            .get(id)
            .unwrap()
            .unwrap_or_else(|| panic!("workspace {id} was not written"))
    }

    pub fn flag(&self) -> Option<String> {
        self.legacy().get(FLAG_KEY).unwrap()
    }
}
