// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuild one OpenAPI operation from a legacy request and its examples.

use crate::circular::CircularHoister;
use crate::examples;
use crate::parameters::Parameters;
use crate::resolve::Lookup;
use crate::servers::{effective_path, inline_server};
use serde_json::{json, Map, Value};
use wm_core::legacy::Request;

/// An operation placed under `paths[path][method]`.
#[derive(Debug)]
pub(crate) struct Operation {
    pub path: String,
    pub method: String,
    /// Origin split off an absolute request path
    pub origin: Option<String>,
    pub value: Value,
}

pub(crate) fn build(request: &Request, lookup: &Lookup<'_>, hoister: &mut CircularHoister) -> Operation {
    let (path, origin) = effective_path(request.path.as_deref());
    let mut op = Map::new();

    copy(&mut op, "summary", request.summary.as_ref().map(|s| json!(s)));
    copy(&mut op, "description", request.description.as_ref().map(|s| json!(s)));
    copy(&mut op, "operationId", request.operation_id.as_ref().map(|s| json!(s)));
    copy(&mut op, "tags", request.tags.as_ref().map(|tags| json!(tags)));
    copy(&mut op, "deprecated", request.deprecated.map(Value::Bool));
    copy(&mut op, "security", request.security.clone());

    let mut params = Parameters::declared(&request.parameters);
    let mut body = request.request_body.as_ref().map(|node| hoister.to_value(node));
    let examples = lookup.examples.resolve_many(&request.examples);
    examples::merge(&examples, &mut params, &mut body);

    if !params.is_empty() {
        op.insert("parameters".into(), params.into_value());
    }
    copy(&mut op, "requestBody", body);
    copy(&mut op, "responses", request.responses.clone());
    copy(&mut op, "callbacks", request.callbacks.clone());

    let servers: Vec<Value> = lookup
        .servers
        .resolve_many(&request.servers)
        .into_iter()
        .map(inline_server)
        .collect();
    if !servers.is_empty() {
        op.insert("servers".into(), Value::Array(servers));
    }

    copy(&mut op, "x-scalar-stability", request.stability.clone());
    copy(&mut op, "x-internal", request.internal.clone());

    Operation {
        path,
        method: request.method.clone(),
        origin,
        value: Value::Object(op),
    }
}

fn copy(op: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        op.insert(key.to_string(), value);
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
