// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level migration entry point.

use crate::config::MigrationConfig;
use crate::gate::MigrationGate;
use thiserror::Error;
use tracing::{error, info, warn};
use wm_core::{LegacyData, LegacyError};
use wm_storage::{run_migrations, KeyValueStore, MigrationError, StoreError, WorkspaceStore};
use wm_transform::{transform_legacy_data, TransformOptions};

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Could not determine state directory")]
    NoStateDir,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),

    #[error("Legacy data error: {0}")]
    Legacy(#[from] LegacyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The gate declined: already migrated, nothing to migrate, or the
    /// destination is already populated
    Skipped,
    Migrated { workspaces: usize, documents: usize },
}

/// Migrate the legacy store into `destination` if the gate allows it.
///
/// On success every workspace is persisted and the completion flag set.
/// On failure the flag stays unset and workspaces written by this run are
/// removed, so the next run starts over. Legacy data is never removed.
pub fn migrate<L, D>(legacy: &L, destination: &D, config: &MigrationConfig) -> Result<MigrationOutcome, MigrateError>
where
    L: KeyValueStore + ?Sized,
    D: WorkspaceStore + ?Sized,
{
    let gate = MigrationGate::new(legacy, destination, &config.keys);
    if !gate.should_migrate()? {
        info!("no legacy migration needed or already completed");
        return Ok(MigrationOutcome::Skipped);
    }

    info!(target_version = %config.target_version, "starting legacy data migration");
    match migrate_inner(&gate, legacy, destination, config) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            error!(error = %e, "legacy data migration failed");
            Err(e)
        }
    }
}

fn migrate_inner<L, D>(
    gate: &MigrationGate<'_, L, D>,
    legacy: &L,
    destination: &D,
    config: &MigrationConfig,
) -> Result<MigrationOutcome, MigrateError>
where
    L: KeyValueStore + ?Sized,
    D: WorkspaceStore + ?Sized,
{
    let arrays = run_migrations(legacy, &config.keys.version, config.target_version)?;
    let data = LegacyData::from_arrays(arrays)?;
    info!(
        workspaces = data.workspaces.len(),
        collections = data.collections.len(),
        "found legacy data"
    );

    let options = TransformOptions {
        color_mode: legacy
            .get(&config.keys.color_mode)?
            .map(|mode| mode.trim().trim_matches('"').to_string()),
    };
    let workspaces = transform_legacy_data(&data, &options);
    info!(workspaces = workspaces.len(), "transformed legacy data");

    let mut written: Vec<&str> = Vec::with_capacity(workspaces.len());
    let persisted = workspaces.iter().try_for_each(|workspace| {
        info!(id = %workspace.id, name = %workspace.entry.name, "saving workspace");
        destination.put(workspace)?;
        written.push(&workspace.id);
        Ok::<_, StoreError>(())
    });
    if let Err(e) = persisted.and_then(|()| gate.mark_complete()) {
        roll_back(destination, &written);
        return Err(e.into());
    }

    let documents: usize = workspaces.iter().map(|w| w.entry.document_count()).sum();
    info!(workspaces = workspaces.len(), documents, "legacy data migration complete");
    Ok(MigrationOutcome::Migrated {
        workspaces: workspaces.len(),
        documents,
    })
}

/// Remove the workspaces written by a failed run so the gate opens again.
fn roll_back<D: WorkspaceStore + ?Sized>(destination: &D, written: &[&str]) {
    for id in written {
        match destination.remove(id) {
            Ok(()) => info!(id = %id, "rolled back workspace"),
            Err(e) => warn!(id = %id, error = %e, "failed to roll back workspace"),
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
