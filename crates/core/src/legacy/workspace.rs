// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy workspace, cookie, and environment records

use super::null_default;
use crate::id::{CollectionUid, CookieUid, EnvironmentUid, WorkspaceUid};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level grouping of collections and client preferences
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub uid: WorkspaceUid,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub collections: Vec<CollectionUid>,
    /// Variable name → value for the workspace's default environment
    #[serde(default, deserialize_with = "null_default")]
    pub environments: IndexMap<String, String>,
    #[serde(default, deserialize_with = "null_default")]
    pub cookies: Vec<CookieUid>,
    #[serde(default)]
    pub proxy_url: Option<String>,
    #[serde(default)]
    pub theme_id: Option<String>,
    #[serde(default)]
    pub active_environment_id: Option<String>,
    #[serde(default)]
    pub hot_key_config: Option<Value>,
    #[serde(default)]
    pub selected_http_client: Option<HttpClient>,
}

/// Snippet generator selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpClient {
    pub target_key: String,
    pub client_key: String,
}

/// Stored cookie. Everything except the UID is passed through as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct Cookie {
    pub uid: CookieUid,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub uid: EnvironmentUid,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub color: String,
    /// JSON-encoded variable map
    #[serde(default, deserialize_with = "null_default")]
    pub value: String,
    #[serde(default)]
    pub is_default: bool,
}
