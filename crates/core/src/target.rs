// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destination workspace model written by the migration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One migrated workspace, keyed by its legacy workspace uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigratedWorkspace {
    pub id: String,
    #[serde(flatten)]
    pub entry: WorkspaceEntry,
}

/// Stored form of a workspace in the destination store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub name: String,
    /// OpenAPI documents keyed by document name
    pub documents: IndexMap<String, Value>,
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub extensions: Map<String, Value>,
    /// Client secrets keyed by document name
    #[serde(default)]
    pub auth: IndexMap<String, AuthStore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthStore {
    pub secrets: IndexMap<String, SecretPayload>,
}

/// Secret half of a security scheme, keyed by scheme name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecretPayload {
    #[serde(rename = "apiKey")]
    ApiKey {
        #[serde(rename = "x-scalar-secret-token")]
        token: String,
    },
    #[serde(rename = "http")]
    Http {
        #[serde(rename = "x-scalar-secret-username")]
        username: String,
        #[serde(rename = "x-scalar-secret-password")]
        password: String,
        #[serde(rename = "x-scalar-secret-token")]
        token: String,
    },
    #[serde(rename = "oauth2")]
    OAuth2 {
        #[serde(flatten)]
        flows: IndexMap<String, OAuthFlowSecrets>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthFlowSecrets {
    #[serde(rename = "x-scalar-secret-client-id")]
    pub client_id: String,
    #[serde(rename = "x-scalar-secret-client-secret")]
    pub client_secret: String,
    #[serde(rename = "x-scalar-secret-token")]
    pub token: String,
    #[serde(rename = "x-scalar-secret-redirect-uri")]
    pub redirect_uri: String,
}

impl WorkspaceEntry {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
