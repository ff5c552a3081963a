// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tags and tag groups from a collection's top-level children.

use crate::resolve::Lookup;
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use wm_core::legacy::{Collection, Tag};
use wm_core::slugify;

/// Document `tags` and `x-tagGroups`, in collection child order.
#[derive(Debug, Default)]
pub(crate) struct TagLayout {
    pub tags: Vec<Value>,
    pub groups: Vec<Value>,
}

/// Lay out the tags of one collection.
///
/// A tag with resolvable child tags becomes a group and its children are
/// listed as flat tags in its place. Every other tag is listed flat.
pub(crate) fn layout(collection: &Collection, document: &str, lookup: &Lookup<'_>) -> TagLayout {
    let mut out = TagLayout::default();
    let mut seen = HashSet::new();

    for tag in lookup.tags.resolve_many(&collection.children) {
        let children = lookup.tags.resolve_many(&tag.children);
        if children.is_empty() {
            push_flat(&mut out.tags, &mut seen, tag, lookup);
            continue;
        }

        let names: Vec<&str> = children.iter().map(|child| child.name.as_str()).collect();
        let order: Vec<String> = names
            .iter()
            .map(|name| format!("{document}/tag/{}", slugify(name)))
            .collect();
        out.groups.push(json!({
            "name": tag.name,
            "tags": names,
            "x-scalar-order": order,
        }));
        for child in children {
            push_flat(&mut out.tags, &mut seen, child, lookup);
        }
    }
    out
}

fn push_flat<'a>(tags: &mut Vec<Value>, seen: &mut HashSet<&'a str>, tag: &'a Tag, lookup: &Lookup<'_>) {
    if !seen.insert(tag.name.as_str()) {
        return;
    }

    let mut entry = Map::new();
    entry.insert("name".into(), json!(tag.name));
    if let Some(description) = &tag.description {
        entry.insert("description".into(), json!(description));
    }
    if let Some(docs) = &tag.external_docs {
        entry.insert("externalDocs".into(), docs.clone());
    }
    if tag.description.is_none() && !has_children(tag, lookup) {
        entry.insert("x-scalar-order".into(), json!([]));
    }
    tags.push(Value::Object(entry));
}

/// Whether any child of `tag` resolves to a tag or a request.
fn has_children(tag: &Tag, lookup: &Lookup<'_>) -> bool {
    tag.children
        .iter()
        .any(|uid| lookup.tags.get(uid).is_some() || lookup.requests.get(uid).is_some())
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
