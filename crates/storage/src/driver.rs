// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reads the legacy tables and runs every pending migration over them.
//!
//! The driver never writes to the store. Marking the migration complete is
//! the caller's job.

use crate::kv::KeyValueStore;
use crate::migration::{MigrationError, MigrationRegistry};
use serde_json::Value;
use tracing::{debug, info, warn};
use wm_core::record::Records;
use wm_core::{EntityKind, RecordArrays, RecordSet, Version};

/// Folders were renamed to tags in this version.
const TAGS_INTRODUCED: Version = Version::new(2, 1, 0);

/// Migrate the persisted legacy tables up to `target`.
pub fn run_migrations<S: KeyValueStore + ?Sized>(
    store: &S,
    version_key: &str,
    target: Version,
) -> Result<RecordArrays, MigrationError> {
    let stored = read_version(store, version_key)?;
    let data = load_records(store, stored)?;
    info!(stored = %stored, target = %target, "running legacy data migrations");

    let migrated = MigrationRegistry::new().migrate_to(data, stored, target)?;
    Ok(migrated.into_arrays())
}

/// Stored schema version, or [`Version::EARLIEST`] when unset.
pub fn read_version<S: KeyValueStore + ?Sized>(
    store: &S,
    version_key: &str,
) -> Result<Version, MigrationError> {
    Ok(store
        .get(version_key)?
        .map(|raw| Version::parse(raw.trim().trim_matches('"')))
        .unwrap_or(Version::EARLIEST))
}

/// Storage key holding `kind` for data written at schema version `stored`.
pub fn storage_key(kind: EntityKind, stored: Version) -> &'static str {
    if kind == EntityKind::Tag && stored < TAGS_INTRODUCED {
        "folder"
    } else {
        kind.storage_key()
    }
}

/// Load every table keyed by uid. Missing or unreadable keys load empty.
pub fn load_records<S: KeyValueStore + ?Sized>(
    store: &S,
    stored: Version,
) -> Result<RecordSet, MigrationError> {
    let mut data = RecordSet::new();
    for kind in EntityKind::ALL {
        let key = storage_key(kind, stored);
        let Some(raw) = store.get(key)? else {
            continue;
        };
        data.set_records(kind, parse_table(key, &raw));
    }
    Ok(data)
}

/// Accepts `{ uid: record }` or `[record, …]`.
fn parse_table(key: &str, raw: &str) -> Records {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        Ok(Value::Array(items)) => {
            let mut records = Records::new();
            for item in items {
                match item.get("uid").and_then(Value::as_str) {
                    Some(uid) => {
                        records.insert(uid.to_string(), item.clone());
                    }
                    None => debug!(key, "skipping legacy record without uid"),
                }
            }
            records
        }
        Ok(Value::Null) => Records::new(),
        Ok(_) => {
            warn!(key, "legacy key is not a record map, treating as empty");
            Records::new()
        }
        Err(e) => {
            warn!(key, error = %e, "legacy key is not valid JSON, treating as empty");
            Records::new()
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
