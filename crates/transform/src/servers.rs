// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server objects and servers implied by absolute request paths.

use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::LazyLock;
use wm_core::legacy::Server;

/// `scheme://host[:port]` followed by a path starting with `/`
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ABSOLUTE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://[^/?#\s]+)(/.*)$").expect("constant regex pattern is valid")
});

/// Inline a server record as an OpenAPI server object.
pub(crate) fn inline_server(server: &Server) -> Value {
    let mut out = Map::new();
    out.insert("url".into(), json!(server.url));
    if let Some(description) = &server.description {
        out.insert("description".into(), json!(description));
    }
    if !server.variables.is_empty() {
        out.insert("variables".into(), json!(server.variables));
    }
    Value::Object(out)
}

/// Split an absolute request path into its origin and path.
///
/// Returns `None` for relative paths and for URLs with nothing after the
/// host, which are used as-is.
pub(crate) fn split_origin(path: &str) -> Option<(&str, &str)> {
    let captures = ABSOLUTE_PATH.captures(path)?;
    let origin = captures.get(1)?.as_str();
    let rest = captures.get(2)?.as_str();
    Some((origin, rest))
}

/// Effective operation path and the origin server it implies, if any.
pub(crate) fn effective_path(path: Option<&str>) -> (String, Option<String>) {
    let path = path.unwrap_or_default();
    if path.is_empty() {
        return ("/".to_string(), None);
    }
    match split_origin(path) {
        Some((origin, rest)) => (rest.to_string(), Some(origin.to_string())),
        None => (path.to_string(), None),
    }
}

/// Document servers: explicit ones first, then extracted origins not
/// already listed.
pub(crate) fn document_servers(explicit: &[&Server], origins: &[String]) -> Vec<Value> {
    let mut servers: Vec<Value> = explicit.iter().map(|s| inline_server(s)).collect();
    let mut urls: Vec<&str> = explicit.iter().map(|s| s.url.as_str()).collect();
    for origin in origins {
        if urls.contains(&origin.as_str()) {
            continue;
        }
        urls.push(origin);
        servers.push(json!({ "url": origin }));
    }
    servers
}

#[cfg(test)]
#[path = "servers_tests.rs"]
mod tests;
