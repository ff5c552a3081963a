// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 2.1.0 → 2.2.0: secrets move from collections onto their schemes.

use super::{for_each_record, set_default, Migration, MigrationError};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 2, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "security-consolidation",
    apply: migrate,
};

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    // Last collection wins when two share a scheme
    let mut secrets: IndexMap<String, Map<String, Value>> = IndexMap::new();
    for_each_record(&mut data, EntityKind::Collection, TARGET, |collection| {
        if let Some(Value::Object(auth)) = collection.remove("auth") {
            for (uid, secret) in auth {
                if let Value::Object(secret) = secret {
                    secrets.insert(uid, secret);
                }
            }
        }
        collection.remove("liveSync");
        set_default(collection, "selectedSecuritySchemeUids", json!([]));
        set_default(collection, "watchMode", json!(false));
        set_default(collection, "watchModeStatus", json!("IDLE"));
    })?;

    for_each_record(&mut data, EntityKind::SecurityScheme, TARGET, |scheme| {
        let uid = scheme
            .get("uid")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let secret = secrets.get(&uid);
        match scheme.get("type").and_then(Value::as_str) {
            Some("apiKey") => {
                copy_secret(scheme, secret, &["value"]);
            }
            Some("http") => {
                copy_secret(scheme, secret, &["username", "password", "token"]);
            }
            Some("oauth2") => migrate_oauth2(scheme, secret),
            _ => {}
        }
    })?;

    for_each_record(&mut data, EntityKind::Server, TARGET, |server| {
        if let Some(Value::Object(variables)) = server.get_mut("variables") {
            for variable in variables.values_mut() {
                if let Value::Object(variable) = variable {
                    normalize_variable(variable);
                }
            }
        } else {
            server.insert("variables".into(), json!({}));
        }
    })?;

    for_each_record(&mut data, EntityKind::Request, TARGET, |request| {
        set_default(request, "selectedSecuritySchemeUids", json!([]));
    })?;

    for_each_record(&mut data, EntityKind::Workspace, TARGET, |workspace| {
        set_default(workspace, "activeEnvironmentId", json!("default"));
    })?;

    Ok(data)
}

/// Copy string `keys` from the collection secret, defaulting to "".
fn copy_secret(target: &mut Map<String, Value>, secret: Option<&Map<String, Value>>, keys: &[&str]) {
    for key in keys {
        let value = secret
            .and_then(|s| s.get(*key))
            .and_then(Value::as_str)
            .map(str::to_string);
        match value {
            Some(value) => {
                target.insert((*key).to_string(), json!(value));
            }
            None => set_default(target, key, json!("")),
        }
    }
}

/// `flow` becomes `flows: { <type>: flow }` and takes the client id.
fn migrate_oauth2(scheme: &mut Map<String, Value>, secret: Option<&Map<String, Value>>) {
    let client_id = scheme
        .remove("x-scalar-client-id")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    let Some(Value::Object(mut flow)) = scheme.remove("flow") else {
        set_default(scheme, "flows", json!({}));
        return;
    };

    let flow_type = flow
        .get("type")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or("implicit")
        .to_string();
    flow.insert("type".into(), json!(flow_type));
    set_default(&mut flow, "x-scalar-client-id", json!(client_id));

    let keys: &[&str] = match flow_type.as_str() {
        "password" => &["token", "username", "password", "clientSecret"],
        "clientCredentials" | "authorizationCode" => &["token", "clientSecret"],
        _ => &["token"],
    };
    copy_secret(&mut flow, secret, keys);

    let mut flows = Map::new();
    flows.insert(flow_type, Value::Object(flow));
    scheme.insert("flows".into(), Value::Object(flows));
}

/// `default` as a string, `enum` a non-empty string list or absent.
fn normalize_variable(variable: &mut Map<String, Value>) {
    let default = variable.get("default").map(scalar_string).unwrap_or_default();
    variable.insert("default".into(), json!(default));

    let enumeration: Vec<String> = variable
        .get("enum")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|v| !v.is_null())
                .map(scalar_string)
                .collect()
        })
        .unwrap_or_default();
    if enumeration.is_empty() {
        variable.remove("enum");
    } else {
        variable.insert("enum".into(), json!(enumeration));
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "v2_2_0_tests.rs"]
mod tests;
