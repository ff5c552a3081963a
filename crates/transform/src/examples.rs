// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merge saved request examples into an operation's parameters and body.

use crate::parameters::Parameters;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use tracing::debug;
use wm_core::legacy::{ActiveBody, ExampleBody, ExampleParameter, FormEncoding, ParameterLocation, RequestExample};

/// Key of the request body field selecting a content type per example
const SELECTED_CONTENT_TYPE: &str = "x-scalar-selected-content-type";

/// Content type key used for binary example bodies
const BINARY: &str = "binary";

/// Hands out unique example names within one request.
#[derive(Debug, Default)]
pub(crate) struct ExampleNames {
    used: HashSet<String>,
}

impl ExampleNames {
    /// `name`, or `name #2`, `name #3`, ... when already taken.
    pub(crate) fn claim(&mut self, name: &str) -> String {
        let base = if name.is_empty() { "Example" } else { name };
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base} #{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Content type for a raw body encoding tag.
pub(crate) fn mime_for_encoding(encoding: &str) -> String {
    match encoding {
        "" | "json" => "application/json".to_string(),
        "xml" => "application/xml".to_string(),
        "yaml" => "application/yaml".to_string(),
        "edn" => "application/edn".to_string(),
        other => other.to_string(),
    }
}

fn is_wildcard_accept(location: ParameterLocation, param: &ExampleParameter) -> bool {
    location == ParameterLocation::Header
        && param.key.eq_ignore_ascii_case("accept")
        && param.value.trim() == "*/*"
}

/// The active body of an example as `(content type, example object)`.
///
/// Empty raw values and form bodies without named fields contribute nothing.
pub(crate) fn body_example(body: &ExampleBody) -> Option<(String, Value)> {
    match body.active_body {
        ActiveBody::Raw => {
            let raw = body.raw.as_ref().filter(|raw| !raw.value.is_empty())?;
            Some((mime_for_encoding(&raw.encoding), json!({ "value": raw.value })))
        }
        ActiveBody::FormData => {
            let form = body.form_data.as_ref()?;
            let fields: Vec<Value> = form
                .value
                .iter()
                .filter(|field| !field.key.is_empty())
                .map(|field| json!({ "name": field.key, "value": field.value }))
                .collect();
            if fields.is_empty() {
                return None;
            }
            let content_type = match form.encoding {
                FormEncoding::FormData => "multipart/form-data",
                FormEncoding::UrlEncoded => "application/x-www-form-urlencoded",
            };
            Some((content_type.to_string(), json!({ "value": fields })))
        }
        ActiveBody::Binary => {
            body.binary.as_ref().filter(|binary| !binary.is_null())?;
            Some((BINARY.to_string(), json!({})))
        }
    }
}

/// Merge `examples` (already resolved, in request order) into `params` and
/// the operation's request body.
pub(crate) fn merge(examples: &[&RequestExample], params: &mut Parameters, body: &mut Option<Value>) {
    let mut names = ExampleNames::default();
    let mut bodies: IndexMap<String, (String, Value)> = IndexMap::new();

    for example in examples {
        let name = names.claim(&example.name);
        for (location, entries) in example.parameters.buckets() {
            for param in entries {
                if param.key.is_empty() || is_wildcard_accept(location, param) {
                    continue;
                }
                params.add_example(location, param, &name);
            }
        }
        if let Some(entry) = body_example(&example.body) {
            bodies.insert(name, entry);
        }
    }

    if !bodies.is_empty() {
        attach_bodies(body.get_or_insert_with(|| Value::Object(Map::new())), bodies);
    }
}

fn attach_bodies(body: &mut Value, bodies: IndexMap<String, (String, Value)>) {
    let body = match body {
        Value::Object(body) if !body.contains_key("$ref") => body,
        _ => {
            debug!("request body is a reference, skipping body examples");
            return;
        }
    };

    let distinct: HashSet<&str> = bodies.values().map(|(content_type, _)| content_type.as_str()).collect();
    let selected: Option<Map<String, Value>> = (distinct.len() > 1).then(|| {
        bodies
            .iter()
            .map(|(name, (content_type, _))| (name.clone(), json!(content_type)))
            .collect()
    });

    with_object(body, "content", |content| {
        for (name, (content_type, example)) in bodies {
            with_object(content, &content_type, |media| {
                with_object(media, "examples", |examples| {
                    examples.insert(name, example);
                });
            });
        }
    });
    if let Some(selected) = selected {
        body.insert(SELECTED_CONTENT_TYPE.into(), Value::Object(selected));
    }
}

/// Edit the object under `key` in place, replacing any non-object value.
pub(crate) fn with_object(map: &mut Map<String, Value>, key: &str, f: impl FnOnce(&mut Map<String, Value>)) {
    let slot = map.entry(key).or_insert(Value::Null);
    let mut inner = match std::mem::take(slot) {
        Value::Object(inner) => inner,
        _ => Map::new(),
    };
    f(&mut inner);
    *slot = Value::Object(inner);
}

#[cfg(test)]
#[path = "examples_tests.rs"]
mod tests;
