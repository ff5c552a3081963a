// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 2.3.0 → 2.4.0: typed UID references and collection-level security.
//!
//! UID values are unchanged. Entries that cannot be a UID are dropped from
//! reference lists, and empty selected-server references are removed.

use super::{for_each_record, set_default, Migration, MigrationError};
use serde_json::{json, Map, Value};
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 4, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "typed-uids",
    apply: migrate,
};

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    for_each_record(&mut data, EntityKind::Collection, TARGET, |collection| {
        set_default(collection, "useCollectionSecurity", json!(false));
        retain_uids(
            collection,
            &["servers", "requests", "tags", "children", "securitySchemes"],
        );
        retain_requirements(collection);
        drop_empty_server(collection);
    })?;

    for_each_record(&mut data, EntityKind::Request, TARGET, |request| {
        retain_uids(request, &["servers", "examples"]);
        retain_requirements(request);
        drop_empty_server(request);
    })?;

    for_each_record(&mut data, EntityKind::Tag, TARGET, |tag| {
        retain_uids(tag, &["children"]);
    })?;

    for_each_record(&mut data, EntityKind::Workspace, TARGET, |workspace| {
        retain_uids(workspace, &["collections", "cookies"]);
    })?;

    Ok(data)
}

fn retain_uids(record: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        if let Some(Value::Array(items)) = record.get_mut(*key) {
            items.retain(Value::is_string);
        }
    }
}

/// Requirements are a UID or a list of UIDs combined with AND.
fn retain_requirements(record: &mut Map<String, Value>) {
    if let Some(Value::Array(items)) = record.get_mut("selectedSecuritySchemeUids") {
        items.retain(|item| match item {
            Value::String(_) => true,
            Value::Array(all) => all.iter().all(Value::is_string),
            _ => false,
        });
    }
}

fn drop_empty_server(record: &mut Map<String, Value>) {
    let empty = match record.get("selectedServerUid") {
        Some(Value::String(uid)) => uid.is_empty(),
        Some(Value::Null) => true,
        _ => false,
    };
    if empty {
        record.remove("selectedServerUid");
    }
}

#[cfg(test)]
#[path = "v2_4_0_tests.rs"]
mod tests;
