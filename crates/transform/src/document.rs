// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build one OpenAPI document, and its secrets, from a legacy collection.

use crate::circular::CircularHoister;
use crate::examples::with_object;
use crate::operation;
use crate::resolve::Lookup;
use crate::security;
use crate::servers::{document_servers, effective_path};
use crate::tags;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::warn;
use wm_core::legacy::Collection;
use wm_core::{slugify, AuthStore, NodeRef, SlugSet};

const DEFAULT_OPENAPI: &str = "3.1.0";
const DEFAULT_ICON: &str = "interface-content-folder";
const DEFAULT_ENVIRONMENT_COLOR: &str = "#FFFFFF";

/// A document and the secrets split off its security schemes.
#[derive(Debug)]
pub(crate) struct BuiltDocument {
    pub document: Value,
    pub auth: AuthStore,
}

/// Claim a workspace-unique document name for `collection`.
///
/// The name is the slug of `info.title`, else of the collection uid, else
/// `document`.
pub(crate) fn claim_name(collection: &Collection, names: &mut SlugSet) -> String {
    let base = [collection.title().unwrap_or_default(), collection.uid.as_str()]
        .into_iter()
        .map(slugify)
        .find(|slug| !slug.is_empty())
        .unwrap_or_else(|| "document".to_string());
    names.claim(&base)
}

pub(crate) fn build(collection: &Collection, name: &str, lookup: &Lookup<'_>) -> BuiltDocument {
    let requests = lookup.requests.resolve_many(&collection.requests);

    let roots: Vec<&NodeRef> = collection
        .components
        .iter()
        .chain(requests.iter().filter_map(|request| request.request_body.as_ref()))
        .collect();
    let mut hoister = CircularHoister::new(roots);
    if let Some(components) = &collection.components {
        hoister.reserve_schema_names(components);
    }

    let mut components = match collection.components.as_ref().map(|node| hoister.to_value(node)) {
        Some(Value::Object(components)) => components,
        _ => Map::new(),
    };

    let mut paths: IndexMap<String, Map<String, Value>> = IndexMap::new();
    let mut origins: Vec<String> = Vec::new();
    for request in &requests {
        let (path, _) = effective_path(request.path.as_deref());
        if paths.get(&path).is_some_and(|methods| methods.contains_key(&request.method)) {
            warn!(path = %path, method = %request.method, request = %request.uid, "duplicate operation, keeping the first");
            continue;
        }
        let op = operation::build(request, lookup, &mut hoister);
        paths.entry(op.path).or_default().insert(op.method, op.value);
        if let Some(origin) = op.origin {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
    }
    hoister.finish(&mut components);

    let mut auth = AuthStore::default();
    let mut definitions = Map::new();
    for scheme in lookup.schemes.resolve_many(&collection.security_schemes) {
        let key = scheme.name().to_string();
        definitions.insert(key.clone(), security::definition(scheme));
        if let Some(secret) = security::secret(scheme) {
            auth.secrets.insert(key, secret);
        }
    }
    if !definitions.is_empty() {
        with_object(&mut components, "securitySchemes", |schemes| schemes.extend(definitions));
    }

    let explicit = lookup.servers.resolve_many(&collection.servers);
    let layout = tags::layout(collection, name, lookup);

    let mut doc = Map::new();
    doc.insert(
        "openapi".into(),
        json!(collection.openapi.as_deref().filter(|v| !v.is_empty()).unwrap_or(DEFAULT_OPENAPI)),
    );
    doc.insert(
        "info".into(),
        match &collection.info {
            Some(info) => Value::Object(info.clone()),
            None => json!({ "title": "API", "version": "1.0" }),
        },
    );
    doc.insert("servers".into(), Value::Array(document_servers(&explicit, &origins)));
    doc.insert(
        "paths".into(),
        Value::Object(paths.into_iter().map(|(path, ops)| (path, Value::Object(ops))).collect()),
    );
    doc.insert("components".into(), Value::Object(components));
    doc.insert("security".into(), collection.security.clone().unwrap_or_else(|| json!([])));
    doc.insert("tags".into(), Value::Array(layout.tags));
    if !layout.groups.is_empty() {
        doc.insert("x-tagGroups".into(), Value::Array(layout.groups));
    }
    insert_some(&mut doc, "webhooks", collection.webhooks.clone());
    insert_some(&mut doc, "externalDocs", collection.external_docs.clone());

    doc.insert(
        "x-scalar-icon".into(),
        json!(collection.icon.as_deref().filter(|icon| !icon.is_empty()).unwrap_or(DEFAULT_ICON)),
    );
    insert_some(&mut doc, "x-scalar-environments", environments(collection));
    insert_some(&mut doc, "x-scalar-secrets", collection.secrets.clone());
    insert_some(
        &mut doc,
        "x-scalar-client-config-active-environment",
        collection.active_environment.as_ref().map(|env| json!(env)),
    );
    doc.insert(
        "x-scalar-set-operation-security".into(),
        json!(collection.use_collection_security),
    );
    insert_some(&mut doc, "x-scalar-selected-server", selected_server(collection, lookup));
    insert_some(
        &mut doc,
        "x-scalar-original-source-url",
        collection.document_url.as_ref().filter(|url| !url.is_empty()).map(|url| json!(url)),
    );

    BuiltDocument {
        document: Value::Object(doc),
        auth,
    }
}

/// The placeholder document of a workspace that had no collections.
pub(crate) fn minimal() -> Value {
    json!({
        "openapi": DEFAULT_OPENAPI,
        "info": { "title": "API", "version": "1.0" },
        "paths": {},
    })
}

fn insert_some(doc: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        doc.insert(key.to_string(), value);
    }
}

fn selected_server(collection: &Collection, lookup: &Lookup<'_>) -> Option<Value> {
    let uid = collection.selected_server_uid.as_ref()?;
    let server = lookup.servers.get(uid.as_str())?;
    Some(json!(server.url))
}

/// Collection environments with their variable maps as `{name, value}` lists.
fn environments(collection: &Collection) -> Option<Value> {
    let environments = collection.environments.as_ref()?;
    let out: Map<String, Value> = environments
        .iter()
        .map(|(name, env)| {
            let mut entry = Map::new();
            if let Some(description) = &env.description {
                entry.insert("description".into(), json!(description));
            }
            entry.insert(
                "color".into(),
                json!(env.color.as_deref().unwrap_or(DEFAULT_ENVIRONMENT_COLOR)),
            );
            entry.insert("variables".into(), variable_list(&env.variables));
            (name.clone(), Value::Object(entry))
        })
        .collect();
    Some(Value::Object(out))
}

/// `{name: value}` as `[{name, value}, ...]`.
pub(crate) fn variable_list(variables: &IndexMap<String, String>) -> Value {
    Value::Array(
        variables
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect(),
    )
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
