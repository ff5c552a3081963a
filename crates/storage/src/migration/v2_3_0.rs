// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 2.2.0 → 2.3.0: workspace environments become a variable map.

use super::{for_each_record, set_default, Migration, MigrationError};
use serde_json::{json, Map, Value};
use tracing::debug;
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 3, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "workspace-environments",
    apply: migrate,
};

const RETIRED_THEMES: [&str; 2] = ["elysiajs", "fastify"];

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    let environments = data.records(EntityKind::Environment).clone();

    for_each_record(&mut data, EntityKind::Workspace, TARGET, |workspace| {
        if let Some(Value::Array(uids)) = workspace.get("environments") {
            let mut variables = Map::new();
            for uid in uids.iter().filter_map(Value::as_str) {
                let Some(env) = environments.get(uid) else {
                    continue;
                };
                variables.extend(parse_variables(uid, env));
            }
            workspace.insert("environments".into(), Value::Object(variables));
        } else {
            set_default(workspace, "environments", json!({}));
        }

        set_default(
            workspace,
            "selectedHttpClient",
            json!({ "targetKey": "shell", "clientKey": "curl" }),
        );

        let retired = workspace
            .get("themeId")
            .and_then(Value::as_str)
            .is_some_and(|theme| RETIRED_THEMES.contains(&theme));
        if retired {
            workspace.insert("themeId".into(), json!("default"));
        }
    })?;

    Ok(data)
}

/// String entries of an environment's JSON-encoded `value`.
fn parse_variables(uid: &str, env: &Value) -> Map<String, Value> {
    let raw = env.get("value").and_then(Value::as_str).unwrap_or_default();
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter(|(_, value)| value.is_string())
            .collect(),
        _ => {
            debug!(environment = uid, "environment value is not a JSON object, skipping");
            Map::new()
        }
    }
}

#[cfg(test)]
#[path = "v2_3_0_tests.rs"]
mod tests;
