// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed legacy entities at the latest schema version.
//!
//! Records reference each other by UID. Any reference may dangle; consumers
//! resolve through lookup tables and skip misses.

mod collection;
mod request;
mod security;
mod workspace;

pub use collection::{Collection, CollectionEnvironment, Server, ServerVariable, Tag};
pub use request::{
    ActiveBody, ExampleBody, ExampleParameter, ExampleParameters, FormDataBody, FormEncoding,
    ParameterLocation, RawBody, Request, RequestExample, RequestParameter,
    SecurityRequirementUids,
};
pub use security::{OAuthFlow, SchemeKind, SecurityScheme};
pub use workspace::{Cookie, Environment, HttpClient, Workspace};

use crate::record::{EntityKind, RecordArrays};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading migrated records into the typed model
#[derive(Debug, Error)]
pub enum LegacyError {
    #[error("invalid {kind} record {uid}: {source}")]
    Invalid {
        kind: EntityKind,
        uid: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Every legacy table as flat arrays, in persisted order.
#[derive(Debug, Clone, Default)]
pub struct LegacyData {
    pub workspaces: Vec<Workspace>,
    pub collections: Vec<Collection>,
    pub requests: Vec<Request>,
    pub request_examples: Vec<RequestExample>,
    pub servers: Vec<Server>,
    pub tags: Vec<Tag>,
    pub security_schemes: Vec<SecurityScheme>,
    pub cookies: Vec<Cookie>,
    pub environments: Vec<Environment>,
}

impl LegacyData {
    /// Parse the latest-version record arrays produced by the migration driver.
    pub fn from_arrays(mut arrays: RecordArrays) -> Result<Self, LegacyError> {
        Ok(Self {
            workspaces: parse_table(EntityKind::Workspace, &mut arrays)?,
            collections: parse_table(EntityKind::Collection, &mut arrays)?,
            requests: parse_table(EntityKind::Request, &mut arrays)?,
            request_examples: parse_table(EntityKind::RequestExample, &mut arrays)?,
            servers: parse_table(EntityKind::Server, &mut arrays)?,
            tags: parse_table(EntityKind::Tag, &mut arrays)?,
            security_schemes: parse_table(EntityKind::SecurityScheme, &mut arrays)?,
            cookies: parse_table(EntityKind::Cookie, &mut arrays)?,
            environments: parse_table(EntityKind::Environment, &mut arrays)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty() && self.collections.is_empty() && self.requests.is_empty()
    }
}

fn parse_table<T: DeserializeOwned>(
    kind: EntityKind,
    arrays: &mut RecordArrays,
) -> Result<Vec<T>, LegacyError> {
    arrays
        .take(kind)
        .into_iter()
        .map(|record| {
            let uid = record
                .get("uid")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            serde_json::from_value(record).map_err(|source| LegacyError::Invalid {
                kind,
                uid,
                source,
            })
        })
        .collect()
}

/// Accept any scalar where the legacy schema coerced to string.
pub(crate) fn coerce_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    })
}

/// Treat `null` as the type's default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "../legacy_tests.rs"]
mod tests;
