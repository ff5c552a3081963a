// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation parameters: declared ones first, then any introduced by
//! example values.

use serde_json::{json, Map, Value};
use wm_core::legacy::{ExampleParameter, ParameterLocation, RequestParameter};

#[derive(Debug, Default)]
pub(crate) struct Parameters {
    entries: Vec<(ParameterLocation, Map<String, Value>)>,
}

impl Parameters {
    /// Parameters declared on the request. Path parameters are always required.
    pub(crate) fn declared(declared: &[RequestParameter]) -> Self {
        let mut params = Self::default();
        for param in declared {
            let required = param.location == ParameterLocation::Path || param.required.unwrap_or(false);
            let mut entry = Map::new();
            entry.insert("name".into(), json!(param.name));
            entry.insert("in".into(), json!(param.location.as_str()));
            entry.insert("required".into(), json!(required));
            if let Some(schema) = &param.schema {
                entry.insert("schema".into(), schema.clone());
            }
            if let Some(description) = &param.description {
                entry.insert("description".into(), json!(description));
            }
            params.entries.push((param.location, entry));
        }
        params
    }

    /// Record one example value on the matching parameter, creating it
    /// when the request never declared it.
    pub(crate) fn add_example(&mut self, location: ParameterLocation, param: &ExampleParameter, example: &str) {
        let entry = self.entry(location, &param.key);
        if location == ParameterLocation::Path {
            entry.insert("required".into(), json!(true));
        }
        let examples = entry
            .entry("examples")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(examples) = examples {
            examples.insert(
                example.to_string(),
                json!({ "value": param.value, "x-disabled": !param.enabled }),
            );
        }
    }

    fn entry(&mut self, location: ParameterLocation, name: &str) -> &mut Map<String, Value> {
        let position = self
            .entries
            .iter()
            .position(|(loc, entry)| *loc == location && matches_name(location, entry, name));
        let index = match position {
            Some(index) => index,
            None => {
                let mut entry = Map::new();
                entry.insert("name".into(), json!(name));
                entry.insert("in".into(), json!(location.as_str()));
                if location == ParameterLocation::Path {
                    entry.insert("required".into(), json!(true));
                }
                self.entries.push((location, entry));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Array(self.entries.into_iter().map(|(_, entry)| Value::Object(entry)).collect())
    }
}

/// Header names compare case-insensitively, everything else exactly.
fn matches_name(location: ParameterLocation, entry: &Map<String, Value>, name: &str) -> bool {
    let Some(existing) = entry.get("name").and_then(Value::as_str) else {
        return false;
    };
    match location {
        ParameterLocation::Header => existing.eq_ignore_ascii_case(name),
        _ => existing == name,
    }
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
