// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 2.5.0 → 2.6.0: collection environment extensions take their final shape.

use super::{for_each_record, Migration, MigrationError};
use serde_json::{json, Value};
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 6, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "collection-environments",
    apply: migrate,
};

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    for_each_record(&mut data, EntityKind::Collection, TARGET, |collection| {
        if let Some(active) = collection.remove("x-scalar-environment") {
            if !collection.contains_key("x-scalar-active-environment") && !active.is_null() {
                collection.insert("x-scalar-active-environment".into(), active);
            }
        }

        let Some(Value::Object(environments)) = collection.get_mut("x-scalar-environments") else {
            return;
        };
        for environment in environments.values_mut() {
            let Some(Value::Object(variables)) = environment.get_mut("variables") else {
                continue;
            };
            for value in variables.values_mut() {
                *value = json!(variable_value(value));
            }
        }
    })?;

    Ok(data)
}

/// `{ default, description }` collapses to its default.
fn variable_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("default") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "v2_6_0_tests.rs"]
mod tests;
