// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! 0.0.0 → 2.1.0: folders become tags and collections lose their `spec`
//! wrapper.
//!
//! The tag table holds the pre-2.1.0 folder records on input (the driver
//! loads it from the `folder` key).

use super::{non_empty, not_an_object, string_list, truthy, Migration, MigrationError};
use indexmap::{IndexMap, IndexSet};
use serde_json::{json, Map, Value};
use wm_core::record::Records;
use wm_core::{EntityKind, RecordSet, Version};

const TARGET: Version = Version::new(2, 1, 0);

pub(super) const MIGRATION: Migration = Migration {
    target: TARGET,
    name: "folders-to-tags",
    apply: migrate,
};

fn migrate(mut data: RecordSet) -> Result<RecordSet, MigrationError> {
    let collections = objects(&mut data, EntityKind::Collection)?;
    let requests = objects(&mut data, EntityKind::Request)?;
    let folders = objects(&mut data, EntityKind::Tag)?;
    let schemes = objects(&mut data, EntityKind::SecurityScheme)?;
    let servers = objects(&mut data, EntityKind::Server)?;
    let environments = objects(&mut data, EntityKind::Environment)?;
    let examples = objects(&mut data, EntityKind::RequestExample)?;
    let workspaces = objects(&mut data, EntityKind::Workspace)?;

    let tree = Tree {
        requests: &requests,
        folders: &folders,
    };

    // Requests only keep selected schemes their collection can reach
    let mut request_security: IndexMap<String, Vec<String>> = IndexMap::new();

    let mut migrated = Records::new();
    for (key, collection) in &collections {
        let child_uids = string_list(collection, "childUids");
        let mut found = Flattened::default();
        tree.flatten(&child_uids, &mut found, &mut IndexSet::new());

        let mut security_schemes = found.auth_uids.clone();
        if let Some(dict) = collection.get("securitySchemeDict").and_then(Value::as_object) {
            security_schemes.extend(dict.values().filter_map(Value::as_str).map(str::to_string));
        }
        let security_schemes: Vec<String> = security_schemes.into_iter().collect();

        for request_uid in &found.request_uids {
            request_security.insert(request_uid.clone(), security_schemes.clone());
        }

        let auth: Map<String, Value> = security_schemes
            .iter()
            .filter_map(|uid| {
                let scheme = schemes.get(uid)?;
                truthy(scheme.get("uid")).then(|| (uid.clone(), migrate_auth(scheme)))
            })
            .collect();

        let spec = collection
            .get("spec")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let server_uids = string_list(&spec, "serverUids");
        let selected_server = non_empty(collection, "selectedServerUid")
            .map(str::to_string)
            .or_else(|| server_uids.first().cloned())
            .unwrap_or_default();

        let mut next = Map::new();
        next.insert("type".into(), json!("collection"));
        next.insert(
            "openapi".into(),
            json!(non_empty(&spec, "openapi").unwrap_or("3.1.0")),
        );
        next.insert(
            "info".into(),
            truthy_or(spec.get("info"), json!({ "title": "OpenAPI Spec", "version": "0.0.1" })),
        );
        next.insert("security".into(), truthy_or(spec.get("security"), json!([])));
        if let Some(docs) = spec.get("externalDocs").filter(|v| !v.is_null()) {
            next.insert("externalDocs".into(), docs.clone());
        }
        next.insert("uid".into(), collection.get("uid").cloned().unwrap_or(json!(key)));
        next.insert("securitySchemes".into(), json!(security_schemes));
        next.insert("selectedServerUid".into(), json!(selected_server));
        next.insert("servers".into(), json!(server_uids));
        next.insert("requests".into(), json!(found.request_uids));
        next.insert("tags".into(), json!(found.tag_uids));
        next.insert("auth".into(), Value::Object(auth));
        next.insert("children".into(), json!(child_uids));
        next.insert("x-scalar-icon".into(), json!("interface-content-folder"));
        next.insert("liveSync".into(), json!(false));
        migrated.insert(key.clone(), Value::Object(next));
    }
    data.set_records(EntityKind::Collection, migrated);

    data.set_records(
        EntityKind::Environment,
        map_records(environments, |mut env| {
            let raw = env.get("raw").and_then(Value::as_str).unwrap_or_default().to_string();
            env.insert("value".into(), json!(raw));
            env
        }),
    );

    data.set_records(
        EntityKind::Request,
        map_records(requests, |mut request| {
            let uid = request
                .get("uid")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let allowed = request_security.get(&uid).map(Vec::as_slice).unwrap_or(&[]);
            let selected: Vec<String> = string_list(&request, "selectedSecuritySchemeUids")
                .into_iter()
                .filter(|s| allowed.contains(s))
                .collect();
            let method = non_empty(&request, "method")
                .map(str::to_lowercase)
                .unwrap_or_else(|| "get".to_string());
            let examples = string_list(&request, "childUids");
            let parameters = flatten_parameters(request.get("parameters"));

            request.remove("childUids");
            request.insert("parameters".into(), Value::Array(parameters));
            request.insert("type".into(), json!("request"));
            request.insert("method".into(), json!(method));
            request.insert("examples".into(), json!(examples));
            request.insert("selectedSecuritySchemeUids".into(), json!(selected));
            request.insert("selectedServerUid".into(), json!(""));
            request.insert("servers".into(), json!([]));
            request
        }),
    );

    data.set_records(
        EntityKind::RequestExample,
        map_records(examples, |mut example| {
            example.insert("type".into(), json!("requestExample"));
            example
        }),
    );

    data.set_records(
        EntityKind::SecurityScheme,
        map_records(schemes, |mut scheme| {
            scheme.insert("nameKey".into(), json!(name_key(&scheme)));
            if scheme.get("type").and_then(Value::as_str) == Some("oauth2") {
                let client_id = non_empty(&scheme, "clientId").unwrap_or_default().to_string();
                scheme.insert("x-scalar-client-id".into(), json!(client_id));
                let flow = scheme
                    .get("flow")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default();
                scheme.insert("flow".into(), Value::Object(migrate_flow(flow)));
            }
            scheme
        }),
    );

    data.set_records(
        EntityKind::Server,
        map_records(servers, |mut server| {
            super::set_default(&mut server, "variables", json!({}));
            server
        }),
    );

    data.set_records(
        EntityKind::Tag,
        map_records(folders, |folder| {
            let name = non_empty(&folder, "name").unwrap_or("unknownTag");
            let mut tag = Map::new();
            tag.insert("type".into(), json!("tag"));
            tag.insert("uid".into(), folder.get("uid").cloned().unwrap_or(Value::Null));
            tag.insert("name".into(), json!(name));
            if let Some(description) = folder.get("description").filter(|v| !v.is_null()) {
                tag.insert("description".into(), description.clone());
            }
            tag.insert("children".into(), json!(string_list(&folder, "childUids")));
            tag.insert("x-scalar-children".into(), json!([]));
            tag
        }),
    );

    data.set_records(
        EntityKind::Workspace,
        map_records(workspaces, |mut workspace| {
            super::set_default(&mut workspace, "description", json!("Basic Scalar Workspace"));
            for (old, new) in [
                ("cookieUids", "cookies"),
                ("collectionUids", "collections"),
                ("environmentUids", "environments"),
            ] {
                let uids = string_list(&workspace, old);
                workspace.remove(old);
                workspace.insert(new.into(), json!(uids));
            }
            workspace
        }),
    );

    Ok(data)
}

type Objects = IndexMap<String, Map<String, Value>>;

/// Take a table as JSON objects.
fn objects(data: &mut RecordSet, kind: EntityKind) -> Result<Objects, MigrationError> {
    data.take_records(kind)
        .into_iter()
        .map(|(uid, record)| match record {
            Value::Object(map) => Ok((uid, map)),
            _ => Err(not_an_object(kind, &uid, TARGET)),
        })
        .collect()
}

fn map_records(
    records: Objects,
    mut f: impl FnMut(Map<String, Value>) -> Map<String, Value>,
) -> Records {
    records
        .into_iter()
        .map(|(uid, record)| (uid, Value::Object(f(record))))
        .collect()
}

fn truthy_or(value: Option<&Value>, default: Value) -> Value {
    match value {
        Some(v) if truthy(Some(v)) => v.clone(),
        _ => default,
    }
}

#[derive(Default)]
struct Flattened {
    request_uids: IndexSet<String>,
    tag_uids: IndexSet<String>,
    auth_uids: IndexSet<String>,
}

struct Tree<'a> {
    requests: &'a Objects,
    folders: &'a Objects,
}

impl Tree<'_> {
    /// Collect requests, folders and their schemes reachable from `children`.
    fn flatten(&self, children: &[String], found: &mut Flattened, visiting: &mut IndexSet<String>) {
        for uid in children {
            if let Some(request) = self.requests.get(uid) {
                found.request_uids.insert(uid.clone());
                found
                    .auth_uids
                    .extend(string_list(request, "securitySchemeUids"));
            } else if let Some(folder) = self.folders.get(uid) {
                // Folder loops are cut at the first repeat
                if !visiting.insert(uid.clone()) {
                    continue;
                }
                let nested = string_list(folder, "childUids");
                found.tag_uids.insert(uid.clone());
                self.flatten(&nested, found, visiting);
                visiting.shift_remove(uid);
            }
        }
    }
}

/// Parameter dicts keyed by bucket become one list.
fn flatten_parameters(parameters: Option<&Value>) -> Vec<Value> {
    match parameters {
        Some(Value::Array(items)) => items.iter().filter(|p| truthy(Some(p))).cloned().collect(),
        Some(Value::Object(buckets)) => {
            let mut out = Vec::new();
            for (bucket, location) in [
                ("path", "path"),
                ("query", "query"),
                ("headers", "header"),
                ("cookies", "cookie"),
            ] {
                let Some(entries) = buckets.get(bucket).and_then(Value::as_object) else {
                    continue;
                };
                for (name, parameter) in entries {
                    let Value::Object(parameter) = parameter else {
                        continue;
                    };
                    let mut parameter = parameter.clone();
                    super::set_default(&mut parameter, "name", json!(name));
                    super::set_default(&mut parameter, "in", json!(location));
                    out.push(Value::Object(parameter));
                }
            }
            out
        }
        _ => Vec::new(),
    }
}

/// Client-side secrets for one scheme, stored on the collection.
fn migrate_auth(scheme: &Map<String, Value>) -> Value {
    let text = |record: &Map<String, Value>, key: &str| {
        record.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
    };
    let flow = scheme
        .get("flow")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    match scheme.get("type").and_then(Value::as_str) {
        Some("apiKey") => json!({
            "type": "apiKey",
            "name": text(scheme, "name"),
            "value": text(scheme, "value"),
        }),
        Some("http") => json!({
            "type": "http",
            "username": text(scheme, "value"),
            "password": text(scheme, "secondValue"),
            "token": text(scheme, "value"),
        }),
        Some("oauth2") => match flow.get("type").and_then(Value::as_str) {
            Some("implicit") => json!({
                "type": "oauth-implicit",
                "token": text(&flow, "token"),
            }),
            Some("password") => json!({
                "type": "oauth-password",
                "token": text(&flow, "token"),
                "username": text(&flow, "value"),
                "password": text(&flow, "secondValue"),
                "clientSecret": text(&flow, "clientSecret"),
            }),
            Some(flow_type @ ("clientCredentials" | "authorizationCode")) => json!({
                "type": format!("oauth-{flow_type}"),
                "token": text(&flow, "token"),
                "clientSecret": text(&flow, "clientSecret"),
            }),
            _ => empty_auth(),
        },
        _ => empty_auth(),
    }
}

fn empty_auth() -> Value {
    json!({ "type": "apiKey", "name": "", "value": "" })
}

fn migrate_flow(mut flow: Map<String, Value>) -> Map<String, Value> {
    let refresh_url = non_empty(&flow, "refreshUrl").unwrap_or_default().to_string();
    let selected_scopes = truthy_or(flow.get("selectedScopes"), json!([]));
    let scopes = truthy_or(flow.get("scopes"), json!({}));
    let redirect_uri = non_empty(&flow, "redirectUri").unwrap_or_default().to_string();
    let token_url = non_empty(&flow, "tokenUrl").unwrap_or_default().to_string();
    let authorization_url = non_empty(&flow, "authorizationUrl")
        .unwrap_or_default()
        .to_string();

    flow.insert("refreshUrl".into(), json!(refresh_url));
    flow.insert("selectedScopes".into(), selected_scopes);
    flow.insert("scopes".into(), scopes);

    match flow.get("type").and_then(Value::as_str) {
        Some("implicit") => {
            flow.insert("type".into(), json!("implicit"));
            flow.insert("x-scalar-redirect-uri".into(), json!(redirect_uri));
        }
        Some("password" | "clientCredentials") => {
            flow.insert("tokenUrl".into(), json!(token_url));
        }
        _ => {
            flow.insert("x-scalar-redirect-uri".into(), json!(redirect_uri));
            flow.insert("authorizationUrl".into(), json!(authorization_url));
            flow.insert("tokenUrl".into(), json!(token_url));
        }
    }
    flow
}

/// Display key linking requirements to a scheme.
fn name_key(scheme: &Map<String, Value>) -> String {
    let field = |key: &str| scheme.get(key).and_then(Value::as_str).unwrap_or_default();
    match field("type") {
        "apiKey" => capitalize(field("in")),
        "http" => format!("{} Authentication", capitalize(field("scheme"))),
        "oauth2" => camel_to_title_words(
            scheme
                .get("flow")
                .and_then(|flow| flow.get("type"))
                .and_then(Value::as_str)
                .unwrap_or_default(),
        ),
        "openIdConnect" => "Open ID Connect".to_string(),
        _ => "None".to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `authorizationCode` → `Authorization Code`
fn camel_to_title_words(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for c in s.chars() {
        match words.last_mut() {
            Some(word) if !c.is_uppercase() => word.push(c),
            _ => words.push(c.to_string()),
        }
    }
    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "v2_1_0_tests.rs"]
mod tests;
