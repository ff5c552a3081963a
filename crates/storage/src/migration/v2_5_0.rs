// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 2.4.0 → 2.5.0: default Accept header and selected example.

use super::{for_each_record, non_empty, set_default, string_list, Migration, MigrationError};
use serde_json::{json, Value};
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 5, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "accept-header",
    apply: migrate,
};

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    for_each_record(&mut data, EntityKind::RequestExample, TARGET, |example| {
        set_default(example, "parameters", json!({}));
        let Some(Value::Object(parameters)) = example.get_mut("parameters") else {
            return;
        };
        set_default(parameters, "headers", json!([]));
        let Some(Value::Array(headers)) = parameters.get_mut("headers") else {
            return;
        };
        if !headers.iter().any(is_accept) {
            headers.insert(0, json!({ "key": "Accept", "value": "*/*", "enabled": true }));
        }
    })?;

    for_each_record(&mut data, EntityKind::Request, TARGET, |request| {
        if non_empty(request, "selectedExampleUid").is_some() {
            return;
        }
        if let Some(first) = string_list(request, "examples").into_iter().next() {
            request.insert("selectedExampleUid".into(), json!(first));
        }
    })?;

    Ok(data)
}

fn is_accept(header: &Value) -> bool {
    header
        .get("key")
        .and_then(Value::as_str)
        .is_some_and(|key| key.eq_ignore_ascii_case("accept"))
}

#[cfg(test)]
#[path = "v2_5_0_tests.rs"]
mod tests;
