// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared, possibly cyclic JSON graphs for schema-bearing legacy fields.
//!
//! The legacy in-memory model resolved internal references by pointing at
//! the same schema object, so a request body may reach itself again. A
//! plain `serde_json::Value` cannot express that; `NodeRef` can. Identity
//! is the allocation address, stable for as long as any handle is alive.
//!
//! Graphs deserialized from JSON are always trees. Sharing and cycles only
//! appear when callers link nodes with [`NodeRef::set`] or [`NodeRef::push`].

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// One JSON node whose children are shared handles.
#[derive(Clone)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<NodeRef>),
    Object(IndexMap<String, NodeRef>),
}

/// Shared handle to a [`Node`]. Cloning shares the node.
#[derive(Clone)]
pub struct NodeRef(Rc<RefCell<Node>>);

impl NodeRef {
    pub fn new(node: Node) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// An empty object node.
    pub fn object() -> Self {
        Self::new(Node::Object(IndexMap::new()))
    }

    /// Build a fresh tree from a JSON value.
    pub fn from_value(value: &Value) -> Self {
        let node = match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(n.clone()),
            Value::String(s) => Node::String(s.clone()),
            Value::Array(items) => Node::Array(items.iter().map(Self::from_value).collect()),
            Value::Object(map) => Node::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_value(v)))
                    .collect(),
            ),
        };
        Self::new(node)
    }

    /// Identity of the underlying allocation.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn borrow(&self) -> Ref<'_, Node> {
        self.0.borrow()
    }

    /// Set `key` on an object node. Non-object nodes become objects.
    pub fn set(&self, key: impl Into<String>, child: NodeRef) {
        let mut node = self.0.borrow_mut();
        match &mut *node {
            Node::Object(map) => {
                map.insert(key.into(), child);
            }
            other => {
                let mut map = IndexMap::new();
                map.insert(key.into(), child);
                *other = Node::Object(map);
            }
        }
    }

    /// Append to an array node. Non-array nodes become arrays.
    pub fn push(&self, child: NodeRef) {
        let mut node = self.0.borrow_mut();
        match &mut *node {
            Node::Array(items) => items.push(child),
            other => *other = Node::Array(vec![child]),
        }
    }

    /// Child under `key`, if this is an object holding it.
    pub fn get(&self, key: &str) -> Option<NodeRef> {
        match &*self.0.borrow() {
            Node::Object(map) => map.get(key).cloned(),
            _ => None,
        }
    }

    /// Convert to a JSON value, or `None` if the graph contains a cycle.
    ///
    /// Shared but acyclic subtrees are duplicated.
    pub fn to_value_acyclic(&self) -> Option<Value> {
        let mut path = HashSet::new();
        self.to_value_inner(&mut path)
    }

    fn to_value_inner(&self, path: &mut HashSet<usize>) -> Option<Value> {
        if !path.insert(self.id()) {
            return None;
        }
        let value = match &*self.borrow() {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_value_inner(path)?);
                }
                Value::Array(out)
            }
            Node::Object(map) => {
                let mut out = Map::new();
                for (k, v) in map {
                    out.insert(k.clone(), v.to_value_inner(path)?);
                }
                Value::Object(out)
            }
        };
        path.remove(&self.id());
        Some(value)
    }
}

impl From<Value> for NodeRef {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl<'de> Deserialize<'de> for NodeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

// Debug must not recurse: the graph may be cyclic.
impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &*self.borrow() {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        };
        write!(f, "NodeRef({kind}@{:#x})", self.id())
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
