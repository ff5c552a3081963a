// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decides whether the one-time migration runs, and records that it did.
//!
//! The completion flag lives in the legacy store, not the destination, so
//! wiping the destination alone does not re-trigger a migration that
//! already completed.

use crate::config::StorageKeys;
use tracing::info;
use wm_storage::{KeyValueStore, StoreError, WorkspaceStore};

/// Legacy table keys. `folder` held tags before they were renamed.
pub const LEGACY_KEYS: [&str; 10] = [
    "collection",
    "cookie",
    "environment",
    "requestExample",
    "request",
    "securityScheme",
    "server",
    "tag",
    "workspace",
    "folder",
];

const FLAG_SET: &str = "true";

pub struct MigrationGate<'a, L: ?Sized, D: ?Sized> {
    legacy: &'a L,
    destination: &'a D,
    keys: &'a StorageKeys,
}

impl<'a, L, D> MigrationGate<'a, L, D>
where
    L: KeyValueStore + ?Sized,
    D: WorkspaceStore + ?Sized,
{
    pub fn new(legacy: &'a L, destination: &'a D, keys: &'a StorageKeys) -> Self {
        Self {
            legacy,
            destination,
            keys,
        }
    }

    /// True iff the flag is unset, some legacy table exists and the
    /// destination holds no workspaces.
    pub fn should_migrate(&self) -> Result<bool, StoreError> {
        if self.is_complete()? {
            return Ok(false);
        }
        if !self.has_legacy_data()? {
            return Ok(false);
        }
        Ok(self.destination.count()? == 0)
    }

    pub fn is_complete(&self) -> Result<bool, StoreError> {
        Ok(self
            .legacy
            .get(&self.keys.completion_flag)?
            .is_some_and(|flag| flag.trim() == FLAG_SET))
    }

    pub fn has_legacy_data(&self) -> Result<bool, StoreError> {
        for key in LEGACY_KEYS {
            if self.legacy.contains(key)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn mark_complete(&self) -> Result<(), StoreError> {
        self.legacy.set(&self.keys.completion_flag, FLAG_SET)?;
        info!(key = %self.keys.completion_flag, "marked legacy migration complete");
        Ok(())
    }

    /// Remove every legacy table and the version marker. Irreversible.
    ///
    /// Never called by [`crate::migrate`]; the completion flag is kept.
    pub fn clear_legacy_data(&self) -> Result<(), StoreError> {
        for key in LEGACY_KEYS {
            self.legacy.remove(key)?;
        }
        self.legacy.remove(&self.keys.version)?;
        info!("cleared legacy data");
        Ok(())
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
