// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Versioned migrations for the legacy record tables.
//!
//! Each migration rewrites a whole [`RecordSet`] from the previous schema
//! version to its target version. The registry applies, in ascending
//! order, every migration whose target is newer than the stored version.

mod v2_1_0;
mod v2_2_0;
mod v2_3_0;
mod v2_4_0;
mod v2_5_0;
mod v2_6_0;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;
use wm_core::{EntityKind, RecordSet, Version};

use crate::StoreError;

/// Errors that can occur during migration
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration to v{version} failed: {reason}")]
    Failed { version: Version, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One schema version boundary.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub target: Version,
    pub name: &'static str,
    pub apply: fn(RecordSet) -> Result<RecordSet, MigrationError>,
}

/// Ordered chain of all known migrations.
#[derive(Debug, Clone)]
pub struct MigrationRegistry {
    migrations: Vec<Migration>,
}

impl MigrationRegistry {
    /// Create a new registry with all known migrations.
    pub fn new() -> Self {
        Self {
            migrations: vec![
                v2_1_0::MIGRATION,
                v2_2_0::MIGRATION,
                v2_3_0::MIGRATION,
                v2_4_0::MIGRATION,
                v2_5_0::MIGRATION,
                v2_6_0::MIGRATION,
            ],
        }
    }

    /// Version produced by the last migration.
    pub fn latest(&self) -> Version {
        self.migrations
            .last()
            .map(|m| m.target)
            .unwrap_or(Version::EARLIEST)
    }

    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    /// Migrations that apply when moving from `stored` up to `target`.
    pub fn pending(&self, stored: Version, target: Version) -> impl Iterator<Item = &Migration> {
        self.migrations
            .iter()
            .filter(move |m| stored < m.target && m.target <= target)
    }

    /// Fold every pending migration over `data`.
    pub fn migrate_to(
        &self,
        data: RecordSet,
        stored: Version,
        target: Version,
    ) -> Result<RecordSet, MigrationError> {
        self.pending(stored, target).try_fold(data, |data, migration| {
            info!(version = %migration.target, name = migration.name, "applying data migration");
            (migration.apply)(data)
        })
    }
}

impl Default for MigrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `f` over every record of `kind`, failing on non-object records.
fn for_each_record(
    data: &mut RecordSet,
    kind: EntityKind,
    version: Version,
    mut f: impl FnMut(&mut Map<String, Value>),
) -> Result<(), MigrationError> {
    for (uid, record) in data.records_mut(kind).iter_mut() {
        let Some(record) = record.as_object_mut() else {
            return Err(not_an_object(kind, uid, version));
        };
        f(record);
    }
    Ok(())
}

fn not_an_object(kind: EntityKind, uid: &str, version: Version) -> MigrationError {
    MigrationError::Failed {
        version,
        reason: format!("{kind} record {uid} is not an object"),
    }
}

/// Non-empty string at `key`.
fn non_empty<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// String entries of the array at `key`; anything else is skipped.
fn string_list(record: &Map<String, Value>, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// JS-style truthiness for optional legacy fields.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Insert `value` at `key` unless a non-null value is already there.
fn set_default(record: &mut Map<String, Value>, key: &str, value: Value) {
    match record.get(key) {
        None | Some(Value::Null) => {
            record.insert(key.to_string(), value);
        }
        Some(_) => {}
    }
}

#[cfg(test)]
#[path = "../migration_tests.rs"]
mod tests;
