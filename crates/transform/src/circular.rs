// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrite cyclic schema graphs into named components.
//!
//! A node that is reached again while it is still on the DFS path is
//! cyclic. Every occurrence of a cyclic node, its first one and the
//! self-referencing edge alike, serializes as a `$ref` to a
//! `CircularSchemaN` component holding its body. Names already used by
//! the document's own `components.schemas` are skipped.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use tracing::debug;
use wm_core::{Node, NodeRef};

/// Component name prefix for hoisted schemas
const PREFIX: &str = "CircularSchema";

/// Serializer for one document. Numbering restarts per document.
#[derive(Default)]
pub(crate) struct CircularHoister {
    /// Node ids that close a cycle
    cyclic: HashSet<usize>,
    /// Node id → component name, in hoisting order
    names: IndexMap<usize, String>,
    /// Component name → hoisted body
    hoisted: IndexMap<String, Value>,
    /// Schema names the document already defines
    taken: HashSet<String>,
    next: usize,
}

impl CircularHoister {
    /// Find the cyclic nodes reachable from `roots`.
    pub(crate) fn new<'a>(roots: impl IntoIterator<Item = &'a NodeRef>) -> Self {
        let mut hoister = Self::default();
        let mut path = HashSet::new();
        let mut done = HashSet::new();
        for root in roots {
            find_cycles(root, &mut path, &mut done, &mut hoister.cyclic);
        }
        hoister
    }

    /// Keep hoisted names clear of the schemas under `components`.
    pub(crate) fn reserve_schema_names(&mut self, components: &NodeRef) {
        let Some(schemas) = components.get("schemas") else {
            return;
        };
        if let Node::Object(map) = &*schemas.borrow() {
            self.taken.extend(map.keys().cloned());
        };
    }

    fn next_name(&mut self) -> String {
        loop {
            self.next += 1;
            let name = format!("{PREFIX}{}", self.next);
            if !self.taken.contains(&name) {
                return name;
            }
        }
    }

    /// Serialize `node`, substituting references for cyclic nodes.
    pub(crate) fn to_value(&mut self, node: &NodeRef) -> Value {
        let id = node.id();
        if !self.cyclic.contains(&id) {
            return self.body(node);
        }

        if let Some(name) = self.names.get(&id) {
            return reference(name);
        }
        let name = self.next_name();
        self.names.insert(id, name.clone());
        debug!(component = %name, "hoisting circular schema");
        let body = self.body(node);
        self.hoisted.insert(name.clone(), body);
        reference(&name)
    }

    fn body(&mut self, node: &NodeRef) -> Value {
        match &*node.borrow() {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => Value::Array(items.iter().map(|item| self.to_value(item)).collect()),
            Node::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, child)| (key.clone(), self.to_value(child)))
                    .collect(),
            ),
        }
    }

    /// Move the hoisted schemas into `components.schemas`.
    pub(crate) fn finish(self, components: &mut Map<String, Value>) {
        if self.hoisted.is_empty() {
            return;
        }
        let schemas = components
            .entry("schemas")
            .or_insert_with(|| Value::Object(Map::new()));
        if !schemas.is_object() {
            *schemas = Value::Object(Map::new());
        }
        if let Value::Object(schemas) = schemas {
            for (name, body) in self.hoisted {
                schemas.entry(name).or_insert(body);
            }
        }
    }
}

fn reference(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn find_cycles(
    node: &NodeRef,
    path: &mut HashSet<usize>,
    done: &mut HashSet<usize>,
    cyclic: &mut HashSet<usize>,
) {
    let id = node.id();
    if done.contains(&id) {
        return;
    }
    if !path.insert(id) {
        cyclic.insert(id);
        return;
    }
    let children: Vec<NodeRef> = match &*node.borrow() {
        Node::Array(items) => items.clone(),
        Node::Object(map) => map.values().cloned().collect(),
        _ => Vec::new(),
    };
    for child in &children {
        find_cycles(child, path, done, cyclic);
    }
    path.remove(&id);
    done.insert(id);
}

#[cfg(test)]
#[path = "circular_tests.rs"]
mod tests;
