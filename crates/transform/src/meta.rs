// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level meta and extensions.

use crate::document::variable_list;
use crate::resolve::Lookup;
use serde_json::{json, Map, Value};
use wm_core::legacy::{Cookie, Workspace};

const DEFAULT_ENVIRONMENT_COLOR: &str = "#FFFFFF";

/// Inputs for one workspace's meta block.
pub(crate) struct MetaInput<'a> {
    pub workspace: Option<&'a Workspace>,
    pub cookies: Vec<&'a Cookie>,
    pub active_document: Option<&'a str>,
    pub color_mode: Option<&'a str>,
}

pub(crate) fn meta(input: &MetaInput<'_>) -> Map<String, Value> {
    let mut meta = Map::new();
    if let Some(document) = input.active_document {
        meta.insert("x-scalar-active-document".into(), json!(document));
    }

    if let Some(workspace) = input.workspace {
        if !workspace.environments.is_empty() {
            meta.insert(
                "x-scalar-environments".into(),
                json!({
                    "default": {
                        "color": DEFAULT_ENVIRONMENT_COLOR,
                        "variables": variable_list(&workspace.environments),
                    },
                }),
            );
        }
        if let Some(active) = non_empty(workspace.active_environment_id.as_deref()) {
            meta.insert("x-scalar-active-environment".into(), json!(active));
        }
    }

    if !input.cookies.is_empty() {
        let cookies: Vec<Value> = input
            .cookies
            .iter()
            .map(|cookie| Value::Object(cookie.fields.clone()))
            .collect();
        meta.insert("x-scalar-cookies".into(), Value::Array(cookies));
    }

    if let Some(workspace) = input.workspace {
        if let Some(proxy) = non_empty(workspace.proxy_url.as_deref()) {
            meta.insert("x-scalar-active-proxy".into(), json!(proxy));
        }
        if let Some(theme) = non_empty(workspace.theme_id.as_deref()) {
            meta.insert("x-scalar-theme".into(), json!(theme));
        }
    }
    if let Some(mode) = non_empty(input.color_mode) {
        meta.insert("x-scalar-color-mode".into(), json!(mode));
    }
    meta
}

/// Cookies referenced by `workspace`, or every cookie for a synthesised one.
pub(crate) fn cookies<'a>(workspace: Option<&Workspace>, lookup: &Lookup<'a>, all: &'a [Cookie]) -> Vec<&'a Cookie> {
    match workspace {
        Some(workspace) => lookup.cookies.resolve_many(&workspace.cookies),
        None => all.iter().collect(),
    }
}

pub(crate) fn extensions(workspace: Option<&Workspace>) -> Map<String, Value> {
    let mut extensions = Map::new();
    if let Some(client) = workspace.and_then(|w| w.selected_http_client.as_ref()) {
        extensions.insert("x-scalar-selected-http-client".into(), json!(client));
    }
    extensions
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
