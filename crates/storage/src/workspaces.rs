// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destination stores for migrated workspaces.

use crate::atomic;
use crate::StoreError;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wm_core::{MigratedWorkspace, WorkspaceEntry};

/// Workspace-keyed store read by the rest of the application.
///
/// `put` is all-or-nothing per workspace: a reader never observes a
/// partially written entry.
pub trait WorkspaceStore {
    fn count(&self) -> Result<usize, StoreError>;
    fn get(&self, id: &str) -> Result<Option<WorkspaceEntry>, StoreError>;
    fn put(&self, workspace: &MigratedWorkspace) -> Result<(), StoreError>;
    fn remove(&self, id: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory destination. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspaceStore {
    inner: Arc<Mutex<IndexMap<String, WorkspaceEntry>>>,
}

impl MemoryWorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> Vec<String> {
        self.inner.lock().keys().cloned().collect()
    }
}

impl WorkspaceStore for MemoryWorkspaceStore {
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.lock().len())
    }

    fn get(&self, id: &str) -> Result<Option<WorkspaceEntry>, StoreError> {
        Ok(self.inner.lock().get(id).cloned())
    }

    fn put(&self, workspace: &MigratedWorkspace) -> Result<(), StoreError> {
        self.inner
            .lock()
            .insert(workspace.id.clone(), workspace.entry.clone());
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().shift_remove(id);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.inner.lock().clear();
        Ok(())
    }
}

/// One `<id>.json` file per workspace under a directory.
#[derive(Debug, Clone)]
pub struct DirWorkspaceStore {
    dir: PathBuf,
}

impl DirWorkspaceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(id)))
    }

    fn entries(&self) -> Result<Vec<PathBuf>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Map a workspace id onto a file stem, one-to-one.
///
/// ASCII alphanumerics and `-` pass through; every other byte, `_`
/// included, becomes `_XX` in uppercase hex.
fn file_stem(id: &str) -> String {
    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    stem
}

impl WorkspaceStore for DirWorkspaceStore {
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries()?.len())
    }

    fn get(&self, id: &str) -> Result<Option<WorkspaceEntry>, StoreError> {
        let stored: Option<MigratedWorkspace> = atomic::read_json(&self.path_for(id))?;
        Ok(stored.filter(|w| w.id == id).map(|w| w.entry))
    }

    fn put(&self, workspace: &MigratedWorkspace) -> Result<(), StoreError> {
        atomic::write_json(&self.path_for(&workspace.id), workspace)
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(id)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        for path in self.entries()? {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "workspaces_tests.rs"]
mod tests;
