// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy collection, server, and tag records

use super::null_default;
use super::request::SecurityRequirementUids;
use crate::id::{CollectionUid, RequestUid, SecuritySchemeUid, ServerUid, TagUid};
use crate::schema::NodeRef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A collection is the legacy form of one OpenAPI document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub uid: CollectionUid,
    #[serde(default)]
    pub openapi: Option<String>,
    #[serde(default)]
    pub info: Option<Map<String, Value>>,
    #[serde(default)]
    pub components: Option<NodeRef>,
    #[serde(default)]
    pub security: Option<Value>,
    #[serde(default)]
    pub webhooks: Option<Value>,
    #[serde(default)]
    pub external_docs: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub servers: Vec<ServerUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub requests: Vec<RequestUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<TagUid>,
    /// Top-level ordering: a mix of tag and request UIDs
    #[serde(default, deserialize_with = "null_default")]
    pub children: Vec<String>,
    #[serde(default)]
    pub selected_server_uid: Option<ServerUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub security_schemes: Vec<SecuritySchemeUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub selected_security_scheme_uids: Vec<SecurityRequirementUids>,
    #[serde(default)]
    pub use_collection_security: bool,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default, rename = "x-scalar-icon")]
    pub icon: Option<String>,
    #[serde(default, rename = "x-scalar-environments")]
    pub environments: Option<IndexMap<String, CollectionEnvironment>>,
    #[serde(default, rename = "x-scalar-active-environment")]
    pub active_environment: Option<String>,
    #[serde(default, rename = "x-scalar-secrets")]
    pub secrets: Option<Value>,
}

impl Collection {
    /// `info.title` when present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
    }
}

/// A document-scoped environment
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEnvironment {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub uid: ServerUid,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub variables: IndexMap<String, ServerVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(default, deserialize_with = "super::coerce_string")]
    pub default: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Legacy tag. Nesting tags under a tag encodes a tag group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub uid: TagUid,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_docs: Option<Value>,
    /// Child tag and request UIDs, in sidebar order
    #[serde(default, deserialize_with = "null_default")]
    pub children: Vec<String>,
}
